//! Named search strategies and their lookup table.

use std::fmt;
use std::str::FromStr;

use crate::cover::Problem;
use crate::error::CoverError;
use crate::mutation::{Mutation, DEFAULT_FLIP_RATE};
use crate::search::{Acceptance, InitialSelection, SearchConfig, StrengthAdaptation};

/// The four search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    /// Greedy hill climbing with single-bit mutation.
    HillClimb,
    /// Greedy hill climbing, nominally with multi-bit mutation.
    ///
    /// Its default plan uses [`Mutation::SingleBit`], the same operator as
    /// [`StrategyKind::HillClimb`]. Override the plan with
    /// [`SolverConfig::with_plan`](super::SolverConfig::with_plan) to use
    /// [`Mutation::Bernoulli`] instead.
    MultiBitHillClimb,
    /// Simulated annealing with the exponential acceptance schedule and a
    /// fixed step budget.
    ExponentialAnnealing,
    /// Strict acceptance with a self-adaptive mutation strength, starting
    /// from the full selection.
    SelfAdaptiveAnnealing,
}

impl StrategyKind {
    /// All strategies, in table order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::HillClimb,
        StrategyKind::MultiBitHillClimb,
        StrategyKind::ExponentialAnnealing,
        StrategyKind::SelfAdaptiveAnnealing,
    ];

    /// Stable identifier.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::HillClimb => "hill_climb",
            StrategyKind::MultiBitHillClimb => "multi_bit_hill_climb",
            StrategyKind::ExponentialAnnealing => "exponential_annealing",
            StrategyKind::SelfAdaptiveAnnealing => "self_adaptive_annealing",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Default plan of this strategy.
    pub fn plan(&self) -> StrategyPlan {
        match self {
            StrategyKind::HillClimb | StrategyKind::MultiBitHillClimb => StrategyPlan {
                initial: InitialPolicy::Sample,
                mutation: Mutation::SingleBit,
                acceptance: Acceptance::Strict,
                adaptation: None,
                budget: StepBudget::default(),
            },
            StrategyKind::ExponentialAnnealing => StrategyPlan {
                initial: InitialPolicy::Sample,
                mutation: Mutation::Bernoulli {
                    rate: DEFAULT_FLIP_RATE,
                },
                acceptance: Acceptance::Exponential,
                adaptation: None,
                budget: StepBudget::Fixed(10_000),
            },
            StrategyKind::SelfAdaptiveAnnealing => StrategyPlan {
                initial: InitialPolicy::Full,
                mutation: Mutation::AdaptiveStrength,
                acceptance: Acceptance::Strict,
                adaptation: Some(StrengthAdaptation::default()),
                budget: StepBudget::default(),
            },
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = CoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CoverError::InvalidConfig(format!("unknown strategy '{s}'")))
    }
}

/// Step budget policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepBudget {
    /// `clamp(num_sets · universe_size / divisor, min, max)`.
    Clamped {
        divisor: usize,
        min: usize,
        max: usize,
    },
    /// Fixed number of steps, independent of the instance.
    Fixed(usize),
}

impl Default for StepBudget {
    fn default() -> Self {
        StepBudget::Clamped {
            divisor: 50,
            min: 100,
            max: 10_000,
        }
    }
}

impl StepBudget {
    /// Steps to run on `problem`.
    pub fn steps_for(&self, problem: &Problem) -> usize {
        match *self {
            StepBudget::Clamped { divisor, min, max } => {
                (problem.num_sets() * problem.universe_size() / divisor).clamp(min, max)
            }
            StepBudget::Fixed(steps) => steps,
        }
    }

    pub fn validate(&self) -> Result<(), CoverError> {
        match *self {
            StepBudget::Clamped { divisor, min, max } => {
                if divisor == 0 {
                    return Err(CoverError::InvalidConfig(
                        "budget divisor must be positive".into(),
                    ));
                }
                if min > max {
                    return Err(CoverError::InvalidConfig(format!(
                        "budget min {min} exceeds max {max}"
                    )));
                }
                Ok(())
            }
            StepBudget::Fixed(_) => Ok(()),
        }
    }
}

/// Initial solution policy of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialPolicy {
    /// Sample with the solver's size-dependent density.
    Sample,
    /// Select every set.
    Full,
}

/// Everything that distinguishes one strategy from another.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyPlan {
    pub initial: InitialPolicy,
    pub mutation: Mutation,
    pub acceptance: Acceptance,
    pub adaptation: Option<StrengthAdaptation>,
    pub budget: StepBudget,
}

impl StrategyPlan {
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    pub fn with_budget(mut self, budget: StepBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Search configuration for `problem`, sampling initial solutions with
    /// `density` when the policy asks for sampling.
    pub fn search_config(&self, problem: &Problem, density: f64) -> SearchConfig {
        let initial = match self.initial {
            InitialPolicy::Sample => InitialSelection::Sample { density },
            InitialPolicy::Full => InitialSelection::Full,
        };
        SearchConfig {
            steps: self.budget.steps_for(problem),
            initial,
            mutation: self.mutation,
            acceptance: self.acceptance,
            adaptation: self.adaptation,
        }
    }

    pub fn validate(&self) -> Result<(), CoverError> {
        self.budget.validate()?;
        // initial density is owned and checked by the solver config
        SearchConfig {
            steps: 0,
            initial: InitialSelection::Full,
            mutation: self.mutation,
            acceptance: self.acceptance,
            adaptation: self.adaptation,
        }
        .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(universe: usize, sets: usize) -> Problem {
        Problem::from_membership(&vec![vec![true; universe]; sets]).unwrap()
    }

    #[test]
    fn test_clamped_budget() {
        let budget = StepBudget::default();
        assert_eq!(budget.steps_for(&problem(4, 2)), 100);
        assert_eq!(budget.steps_for(&problem(100, 100)), 200);
        assert_eq!(budget.steps_for(&problem(1000, 1000)), 10_000);
    }

    #[test]
    fn test_annealing_budget_is_fixed() {
        let plan = StrategyKind::ExponentialAnnealing.plan();
        assert_eq!(plan.budget.steps_for(&problem(4, 2)), 10_000);
        assert_eq!(plan.budget.steps_for(&problem(1000, 1000)), 10_000);
    }

    #[test]
    fn test_multi_bit_hill_climb_uses_single_bit_operator() {
        assert_eq!(
            StrategyKind::MultiBitHillClimb.plan(),
            StrategyKind::HillClimb.plan()
        );
        assert_eq!(
            StrategyKind::MultiBitHillClimb.plan().mutation,
            Mutation::SingleBit
        );
    }

    #[test]
    fn test_self_adaptive_plan() {
        let plan = StrategyKind::SelfAdaptiveAnnealing.plan();
        assert_eq!(plan.initial, InitialPolicy::Full);
        assert_eq!(plan.mutation, Mutation::AdaptiveStrength);
        assert_eq!(plan.acceptance, Acceptance::Strict);
        assert!(plan.adaptation.is_some());
    }

    #[test]
    fn test_all_plans_validate() {
        for kind in StrategyKind::ALL {
            assert!(kind.plan().validate().is_ok(), "{kind}");
        }
    }

    #[test]
    fn test_names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
        }
        assert!("tabu".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_budget_validate() {
        let bad = StepBudget::Clamped {
            divisor: 0,
            min: 1,
            max: 2,
        };
        assert!(bad.validate().is_err());
        let inverted = StepBudget::Clamped {
            divisor: 1,
            min: 5,
            max: 2,
        };
        assert!(inverted.validate().is_err());
    }
}
