//! Set cover model: instances, solutions, and fitness.
//!
//! A [`Problem`] is an immutable universe plus weighted candidate sets. A
//! [`Solution`] selects a subset of those sets, and [`evaluate`] scores it
//! with a lexicographic [`Fitness`] (coverage first, then cost).

mod fitness;
mod problem;
mod solution;

pub use fitness::{evaluate, Fitness};
pub use problem::{size_cost, Problem, COST_EXPONENT};
pub use solution::Solution;
