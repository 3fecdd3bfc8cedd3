//! Error type for instance construction and configuration.
//!
//! Search itself is total: once a [`Problem`](crate::cover::Problem) and a
//! configuration validate, every run completes its step budget. Only the
//! boundaries (building an instance, validating parameters) can fail.

use thiserror::Error;

/// Errors raised while building instances or validating configurations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoverError {
    /// The universe has no elements.
    #[error("universe must contain at least one element")]
    EmptyUniverse,

    /// There are no candidate sets.
    #[error("at least one candidate set is required")]
    NoSets,

    /// A membership row does not match the universe size.
    #[error("membership row {row} has {found} entries, expected {expected}")]
    RaggedMembership {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The cost vector does not have one entry per set.
    #[error("cost vector has {found} entries, expected {expected}")]
    CostLengthMismatch { expected: usize, found: usize },

    /// A set cost is negative or not finite.
    #[error("cost of set {set} must be finite and non-negative, got {value}")]
    InvalidCost { set: usize, value: f64 },

    /// A set lists an element outside the universe.
    #[error("set {set} contains element {element}, universe size is {universe_size}")]
    ElementOutOfRange {
        set: usize,
        element: usize,
        universe_size: usize,
    },

    /// A probability-like parameter lies outside `[0, 1]`.
    #[error("{name} must be in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Any other configuration constraint.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Checks that `value` lies in `[0, 1]`.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), CoverError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoverError::InvalidProbability { name, value })
    }
}
