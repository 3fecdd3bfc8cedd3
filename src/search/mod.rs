//! Local search over set cover solutions.
//!
//! A single trajectory loop ([`SearchRunner`]) parameterized by a mutation
//! operator, an [`Acceptance`] rule, and an optional
//! [`StrengthAdaptation`]. Hill climbing, exponential-schedule annealing and
//! self-adaptive annealing are all configurations of this one loop; see
//! [`crate::solver::StrategyKind`] for the named combinations.
//!
//! Runs always execute exactly `steps` iterations. All randomness comes
//! from the caller's `Rng`, so a seeded generator reproduces a trajectory.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Rechenberg (1973), "Evolutionsstrategie" (success-based step adaptation)

mod acceptance;
mod adaptive;
mod config;
mod runner;
mod types;

pub use acceptance::{annealing_temperature, Acceptance, MIN_TEMPERATURE};
pub use adaptive::{AdaptiveStrength, StrengthAdaptation};
pub use config::{InitialSelection, SearchConfig};
pub use runner::SearchRunner;
pub use types::{SearchObserver, SearchResult, StepRecord};
