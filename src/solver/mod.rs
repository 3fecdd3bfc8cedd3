//! Strategy dispatch.
//!
//! [`Solver::solve`] maps a [`StrategyKind`] to its [`StrategyPlan`] (initial
//! solution, mutation, acceptance, step budget), picks the initial selection
//! density from the instance size, and runs the search loop.
//!
//! | Strategy | Initial | Mutation | Acceptance | Budget |
//! |---|---|---|---|---|
//! | `HillClimb` | sampled | single bit | strict | clamped |
//! | `MultiBitHillClimb` | sampled | single bit | strict | clamped |
//! | `ExponentialAnnealing` | sampled | Bernoulli 1% | exponential | 10 000 |
//! | `SelfAdaptiveAnnealing` | full | adaptive strength | strict | clamped |

mod config;
mod runner;
mod strategy;

pub use config::SolverConfig;
pub use runner::{SolveOutcome, Solver};
pub use strategy::{InitialPolicy, StepBudget, StrategyKind, StrategyPlan};
