//! Set cover instance.

use super::solution::Solution;
use crate::error::CoverError;

/// Exponent applied to set sizes when costs are derived from membership.
pub const COST_EXPONENT: f64 = 1.1;

const WORD_BITS: usize = u64::BITS as usize;

/// Immutable description of a weighted set cover instance.
///
/// Each candidate set is stored as a packed bit row over the universe, so
/// the union of selected sets reduces one `u64` word at a time.
///
/// # Examples
///
/// ```
/// use u_setcover::cover::{Problem, Solution};
///
/// let problem = Problem::from_sets(4, &[vec![0, 1], vec![2, 3]]).unwrap();
/// assert_eq!(problem.num_sets(), 2);
/// assert_eq!(problem.coverage(&Solution::full(2)), 4);
/// ```
///
/// With the `serde` feature an instance serializes as its universe size,
/// element lists and costs; deserialization runs the same checks as
/// [`Problem::new`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "ProblemData", into = "ProblemData")
)]
pub struct Problem {
    universe_size: usize,
    words_per_row: usize,
    rows: Vec<Vec<u64>>,
    set_sizes: Vec<usize>,
    costs: Vec<f64>,
}

impl Problem {
    /// Builds an instance from a `num_sets × universe_size` membership matrix
    /// and explicit per-set costs.
    pub fn new(membership: &[Vec<bool>], costs: Vec<f64>) -> Result<Self, CoverError> {
        if membership.is_empty() {
            return Err(CoverError::NoSets);
        }
        let universe_size = membership[0].len();
        if universe_size == 0 {
            return Err(CoverError::EmptyUniverse);
        }
        if costs.len() != membership.len() {
            return Err(CoverError::CostLengthMismatch {
                expected: membership.len(),
                found: costs.len(),
            });
        }
        if let Some((set, &value)) = costs
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite() || **c < 0.0)
        {
            return Err(CoverError::InvalidCost { set, value });
        }

        let words_per_row = universe_size.div_ceil(WORD_BITS);
        let mut rows = Vec::with_capacity(membership.len());
        let mut set_sizes = Vec::with_capacity(membership.len());

        for (row, bits) in membership.iter().enumerate() {
            if bits.len() != universe_size {
                return Err(CoverError::RaggedMembership {
                    row,
                    expected: universe_size,
                    found: bits.len(),
                });
            }
            let mut words = vec![0u64; words_per_row];
            for (element, _) in bits.iter().enumerate().filter(|&(_, &b)| b) {
                words[element / WORD_BITS] |= 1u64 << (element % WORD_BITS);
            }
            set_sizes.push(bits.iter().filter(|&&b| b).count());
            rows.push(words);
        }

        Ok(Self {
            universe_size,
            words_per_row,
            rows,
            set_sizes,
            costs,
        })
    }

    /// Builds an instance whose costs are `|set|^1.1`.
    pub fn from_membership(membership: &[Vec<bool>]) -> Result<Self, CoverError> {
        let costs = membership
            .iter()
            .map(|row| size_cost(row.iter().filter(|&&b| b).count()))
            .collect();
        Self::new(membership, costs)
    }

    /// Builds an instance from element lists, with costs `|set|^1.1`.
    ///
    /// Duplicate elements within a set are counted once.
    pub fn from_sets(universe_size: usize, sets: &[Vec<usize>]) -> Result<Self, CoverError> {
        Self::from_membership(&membership_from_sets(universe_size, sets)?)
    }

    /// Builds an instance from element lists and explicit per-set costs.
    pub fn from_sets_with_costs(
        universe_size: usize,
        sets: &[Vec<usize>],
        costs: Vec<f64>,
    ) -> Result<Self, CoverError> {
        Self::new(&membership_from_sets(universe_size, sets)?, costs)
    }

    /// Elements of set `set`, in increasing order.
    pub fn elements(&self, set: usize) -> Vec<usize> {
        (0..self.universe_size)
            .filter(|&e| self.contains(set, e))
            .collect()
    }

    /// Number of elements in the universe.
    pub fn universe_size(&self) -> usize {
        self.universe_size
    }

    /// Number of candidate sets.
    pub fn num_sets(&self) -> usize {
        self.rows.len()
    }

    /// Per-set costs.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Number of elements in set `set`.
    pub fn set_size(&self, set: usize) -> usize {
        self.set_sizes[set]
    }

    /// Whether set `set` contains universe element `element`.
    pub fn contains(&self, set: usize, element: usize) -> bool {
        self.rows[set][element / WORD_BITS] & (1u64 << (element % WORD_BITS)) != 0
    }

    /// Number of universe elements covered by the selected sets.
    ///
    /// # Complexity
    /// O(selected × universe_size / 64)
    pub fn coverage(&self, solution: &Solution) -> usize {
        debug_assert_eq!(solution.len(), self.num_sets());
        let mut union = vec![0u64; self.words_per_row];
        for set in solution.selected_indices() {
            for (acc, word) in union.iter_mut().zip(&self.rows[set]) {
                *acc |= word;
            }
        }
        union.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Total cost of the selected sets.
    pub fn cost(&self, solution: &Solution) -> f64 {
        debug_assert_eq!(solution.len(), self.num_sets());
        solution.selected_indices().map(|set| self.costs[set]).sum()
    }

    /// Whether `coverage` equals the whole universe.
    pub fn is_full_coverage(&self, coverage: usize) -> bool {
        coverage == self.universe_size
    }

    /// Universe elements contained in no candidate set.
    ///
    /// Empty for well-formed instances; the solver does not check this.
    pub fn uncovered_elements(&self) -> Vec<usize> {
        let mut union = vec![0u64; self.words_per_row];
        for row in &self.rows {
            for (acc, word) in union.iter_mut().zip(row) {
                *acc |= word;
            }
        }
        (0..self.universe_size)
            .filter(|&e| union[e / WORD_BITS] & (1u64 << (e % WORD_BITS)) == 0)
            .collect()
    }
}

fn membership_from_sets(
    universe_size: usize,
    sets: &[Vec<usize>],
) -> Result<Vec<Vec<bool>>, CoverError> {
    if universe_size == 0 {
        return Err(CoverError::EmptyUniverse);
    }
    let mut membership = Vec::with_capacity(sets.len());
    for (set, elements) in sets.iter().enumerate() {
        let mut row = vec![false; universe_size];
        for &element in elements {
            if element >= universe_size {
                return Err(CoverError::ElementOutOfRange {
                    set,
                    element,
                    universe_size,
                });
            }
            row[element] = true;
        }
        membership.push(row);
    }
    Ok(membership)
}

/// Serialized form of a [`Problem`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ProblemData {
    universe_size: usize,
    sets: Vec<Vec<usize>>,
    costs: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<ProblemData> for Problem {
    type Error = CoverError;

    fn try_from(data: ProblemData) -> Result<Self, Self::Error> {
        Problem::from_sets_with_costs(data.universe_size, &data.sets, data.costs)
    }
}

#[cfg(feature = "serde")]
impl From<Problem> for ProblemData {
    fn from(problem: Problem) -> Self {
        Self {
            universe_size: problem.universe_size,
            sets: (0..problem.num_sets()).map(|s| problem.elements(s)).collect(),
            costs: problem.costs,
        }
    }
}

/// Cost of a set with `size` elements.
pub fn size_cost(size: usize) -> f64 {
    (size as f64).powf(COST_EXPONENT)
}
