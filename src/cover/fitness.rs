//! Lexicographic fitness: coverage first, then cost.

use std::cmp::Ordering;
use std::fmt;

use super::problem::Problem;
use super::solution::Solution;

/// Fitness of a solution: `(coverage, negated_cost)`.
///
/// Higher is better. Comparison is lexicographic: more covered elements
/// always wins; at equal coverage the lower total cost (higher
/// `negated_cost`) wins. The order is total (`f64::total_cmp` on the cost).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fitness {
    /// Universe elements covered, in `[0, universe_size]`.
    pub coverage: usize,
    /// Minus the total cost of the selected sets; `<= 0`.
    pub negated_cost: f64,
}

impl Fitness {
    pub fn new(coverage: usize, negated_cost: f64) -> Self {
        Self {
            coverage,
            negated_cost,
        }
    }

    /// The positive total cost.
    pub fn cost(&self) -> f64 {
        -self.negated_cost
    }
}

impl Ord for Fitness {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coverage
            .cmp(&other.coverage)
            .then_with(|| self.negated_cost.total_cmp(&other.negated_cost))
    }
}

impl PartialOrd for Fitness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Fitness {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fitness {}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:.4})", self.coverage, self.negated_cost)
    }
}

/// Evaluates `solution` against `problem`.
///
/// An all-false solution scores `(0, 0.0)`; the cost is subtracted from a
/// positive zero so that it never becomes `-0.0`, which `total_cmp` would
/// rank below `0.0`.
pub fn evaluate(problem: &Problem, solution: &Solution) -> Fitness {
    let coverage = problem.coverage(solution);
    let negated_cost = 0.0 - problem.cost(solution);
    Fitness::new(coverage, negated_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_coverage_dominates_cost() {
        let cheap_partial = Fitness::new(3, -1.0);
        let costly_full = Fitness::new(4, -100.0);
        assert!(costly_full > cheap_partial);
    }

    #[test]
    fn test_lower_cost_wins_at_equal_coverage() {
        assert!(Fitness::new(4, -2.0) > Fitness::new(4, -3.0));
        assert_eq!(Fitness::new(4, -2.0), Fitness::new(4, -2.0));
    }

    #[test]
    fn test_empty_solution_scores_positive_zero() {
        let p = Problem::from_sets(4, &[vec![0, 1], vec![2, 3]]).unwrap();
        let f = evaluate(&p, &Solution::empty(2));
        assert_eq!(f.coverage, 0);
        assert!(f.negated_cost.is_sign_positive());
        assert_eq!(f, Fitness::new(0, 0.0));
    }

    #[test]
    fn test_full_solution_optimum() {
        let p = Problem::from_sets(4, &[vec![0, 1], vec![2, 3]]).unwrap();
        let f = evaluate(&p, &Solution::full(2));
        assert_eq!(f.coverage, 4);
        assert!((f.negated_cost + 2.0 * 2f64.powf(1.1)).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_order_is_lexicographic(
            c1 in 0usize..20, c2 in 0usize..20,
            k1 in -100.0f64..0.0, k2 in -100.0f64..0.0,
        ) {
            let a = Fitness::new(c1, k1);
            let b = Fitness::new(c2, k2);
            let expected = c1 > c2 || (c1 == c2 && k1 > k2);
            prop_assert_eq!(a > b, expected);
            // exactly one of <, ==, > holds
            let relations = [a < b, a == b, a > b].iter().filter(|&&r| r).count();
            prop_assert_eq!(relations, 1);
        }

        #[test]
        fn prop_coverage_within_universe(
            universe in 1usize..80,
            bits in proptest::collection::vec(any::<bool>(), 1..12),
            seed_sets in proptest::collection::vec(proptest::collection::vec(0usize..1000, 0..20), 12),
        ) {
            let sets: Vec<Vec<usize>> = seed_sets
                .iter()
                .take(bits.len())
                .map(|s| s.iter().map(|e| e % universe).collect())
                .collect();
            let p = Problem::from_sets(universe, &sets).unwrap();
            let f = evaluate(&p, &Solution::from_bits(bits.clone()));
            prop_assert!(f.coverage <= universe);
            prop_assert!(f.negated_cost <= 0.0);
            let full = evaluate(&p, &Solution::full(bits.len()));
            prop_assert!(full.coverage >= f.coverage);
            prop_assert_eq!(full.coverage, universe - p.uncovered_elements().len());
        }
    }
}
