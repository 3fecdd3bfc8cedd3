//! Bit-flip mutation operators for set cover solutions.
//!
//! Every operator takes the incumbent by reference and returns a fresh
//! candidate; the incumbent is never modified.
//!
//! # Operators
//!
//! - [`single_bit_flip`]: flip one uniformly chosen bit (O(1) after clone)
//! - [`bernoulli_flip`]: flip each bit independently with a fixed rate (O(n))
//! - [`bernoulli_flip_with_strength`]: like [`bernoulli_flip`], but at least
//!   one bit always flips (O(n))

use rand::Rng;

use crate::cover::Solution;
use crate::error::{check_probability, CoverError};

/// Default per-bit flip rate of [`bernoulli_flip`] (about 1% of bits).
pub const DEFAULT_FLIP_RATE: f64 = 0.01;

// ============================================================================
// Operators
// ============================================================================

/// Flips exactly one bit chosen uniformly in `[0, num_sets)`.
///
/// # Panics
/// Panics if the solution spans zero sets.
pub fn single_bit_flip<R: Rng>(solution: &Solution, rng: &mut R) -> Solution {
    let mut candidate = solution.clone();
    let index = rng.random_range(0..candidate.len());
    candidate.flip(index);
    candidate
}

/// Flips each bit independently iff its uniform draw is below `rate`.
///
/// May return a copy of the input when no draw falls below `rate`.
pub fn bernoulli_flip<R: Rng>(solution: &Solution, rate: f64, rng: &mut R) -> Solution {
    let mut candidate = solution.clone();
    flip_each(&mut candidate, rate, rng);
    candidate
}

/// Flips each bit independently with probability `strength`; if none
/// flipped, flips one uniformly chosen bit instead.
///
/// The result always differs from the input.
///
/// # Panics
/// Panics if the solution spans zero sets.
pub fn bernoulli_flip_with_strength<R: Rng>(
    solution: &Solution,
    strength: f64,
    rng: &mut R,
) -> Solution {
    let mut candidate = solution.clone();
    if flip_each(&mut candidate, strength, rng) == 0 {
        let index = rng.random_range(0..candidate.len());
        candidate.flip(index);
    }
    candidate
}

/// Returns the number of bits flipped.
fn flip_each<R: Rng>(solution: &mut Solution, rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for index in 0..solution.len() {
        if rng.random::<f64>() < rate {
            solution.flip(index);
            flipped += 1;
        }
    }
    flipped
}

// ============================================================================
// Operator selection
// ============================================================================

/// Mutation operator used by a search run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// [`single_bit_flip`].
    #[default]
    SingleBit,
    /// [`bernoulli_flip`] with a fixed per-bit rate.
    Bernoulli {
        /// Per-bit flip probability in `[0, 1]`.
        rate: f64,
    },
    /// [`bernoulli_flip_with_strength`], with the strength supplied by the
    /// search state at each step.
    AdaptiveStrength,
}

impl Mutation {
    /// Produces a candidate from `solution`.
    ///
    /// `strength` is only read by [`Mutation::AdaptiveStrength`].
    pub fn apply<R: Rng>(&self, solution: &Solution, strength: f64, rng: &mut R) -> Solution {
        match *self {
            Mutation::SingleBit => single_bit_flip(solution, rng),
            Mutation::Bernoulli { rate } => bernoulli_flip(solution, rate, rng),
            Mutation::AdaptiveStrength => bernoulli_flip_with_strength(solution, strength, rng),
        }
    }

    pub fn validate(&self) -> Result<(), CoverError> {
        match *self {
            Mutation::Bernoulli { rate } => check_probability("flip rate", rate),
            Mutation::SingleBit | Mutation::AdaptiveStrength => Ok(()),
        }
    }
}
