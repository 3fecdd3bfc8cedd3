//! Randomized local search for weighted set cover.
//!
//! Finds low-cost covers of a finite universe by a weighted collection of
//! candidate sets using metaheuristics rather than exact optimization:
//!
//! - **Hill climbing**: strict-improvement search with single-bit moves.
//! - **Exponential-schedule annealing**: Bernoulli bit-flip moves accepted
//!   with a Metropolis-style probability whose temperature follows the
//!   incumbent's coverage.
//! - **Self-adaptive annealing**: strict acceptance with a mutation strength
//!   tuned by a sliding window of recent successes.
//!
//! # Modules
//!
//! - [`cover`]: instances, solutions, and the lexicographic fitness
//! - [`mutation`]: bit-flip operators
//! - [`search`]: the search loop, acceptance rules, observer hook
//! - [`solver`]: strategy table and dispatch
//! - [`generator`]: random instances satisfying the coverage invariant
//! - [`compare`]: strategy sweeps over generated instances
//!
//! # Reproducibility
//!
//! Every random draw comes from a caller-supplied `rand::Rng`. Seed a
//! `rand::rngs::StdRng` once and the whole trajectory is reproducible.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_setcover::generator::{GeneratorConfig, InstanceGenerator};
//! use u_setcover::solver::{Solver, StrategyKind};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let problem = InstanceGenerator::new(GeneratorConfig::default())
//!     .unwrap()
//!     .generate(&mut rng)
//!     .unwrap();
//!
//! let outcome = Solver::default().solve(&problem, StrategyKind::SelfAdaptiveAnnealing, &mut rng);
//! assert_eq!(outcome.final_fitness.coverage, problem.universe_size());
//! ```

pub mod compare;
pub mod cover;
pub mod error;
pub mod generator;
pub mod mutation;
pub mod search;
pub mod solver;

pub use error::CoverError;
