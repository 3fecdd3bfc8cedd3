//! Bit-vector solution over candidate sets.

use rand::Rng;

/// A choice of candidate sets, one bit per set.
///
/// A solution is never rejected for under-covering the universe; that shows
/// up in its [`Fitness`](super::Fitness) instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    selected: Vec<bool>,
}

impl Solution {
    /// Wraps an explicit bit vector.
    pub fn from_bits(selected: Vec<bool>) -> Self {
        Self { selected }
    }

    /// No set selected.
    pub fn empty(num_sets: usize) -> Self {
        Self {
            selected: vec![false; num_sets],
        }
    }

    /// Every set selected.
    pub fn full(num_sets: usize) -> Self {
        Self {
            selected: vec![true; num_sets],
        }
    }

    /// Samples a solution where each bit is set iff a uniform draw in
    /// `[0, 1)` falls below `density`.
    ///
    /// One draw is consumed per bit regardless of `density`.
    pub fn sample<R: Rng>(num_sets: usize, density: f64, rng: &mut R) -> Self {
        let selected = (0..num_sets)
            .map(|_| rng.random::<f64>() < density)
            .collect();
        Self { selected }
    }

    /// Number of candidate sets this solution spans.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether the solution spans zero sets.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, set: usize) -> bool {
        self.selected[set]
    }

    /// Toggles the selection of `set`.
    pub fn flip(&mut self, set: usize) {
        self.selected[set] = !self.selected[set];
    }

    pub fn bits(&self) -> &[bool] {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&b| b).count()
    }

    /// Indices of the selected sets, ascending.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    /// Number of positions where `self` and `other` differ.
    pub fn hamming_distance(&self, other: &Solution) -> usize {
        self.selected
            .iter()
            .zip(&other.selected)
            .filter(|(a, b)| a != b)
            .count()
    }
}
