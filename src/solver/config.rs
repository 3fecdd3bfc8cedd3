//! Solver configuration.

use super::strategy::{StrategyKind, StrategyPlan};
use crate::cover::Problem;
use crate::error::{check_probability, CoverError};

/// Configuration of the [`Solver`](super::Solver) dispatch layer.
///
/// Holds the size-dependent initial density and one [`StrategyPlan`] per
/// [`StrategyKind`]. The plans default to [`StrategyKind::plan`]; override
/// them to tune a strategy without touching the others.
///
/// # Examples
///
/// ```
/// use u_setcover::mutation::Mutation;
/// use u_setcover::solver::{SolverConfig, StepBudget, StrategyKind};
///
/// // normalize the annealer's budget and give the multi-bit climber a
/// // genuinely multi-bit operator
/// let config = SolverConfig::default()
///     .with_plan(
///         StrategyKind::ExponentialAnnealing,
///         StrategyKind::ExponentialAnnealing.plan().with_budget(StepBudget::default()),
///     )
///     .with_plan(
///         StrategyKind::MultiBitHillClimb,
///         StrategyKind::MultiBitHillClimb
///             .plan()
///             .with_mutation(Mutation::Bernoulli { rate: 0.05 }),
///     );
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Initial selection density for instances below the threshold.
    pub small_instance_density: f64,

    /// Initial selection density for instances at or above the threshold.
    pub large_instance_density: f64,

    /// Number of sets from which an instance counts as large.
    pub large_instance_threshold: usize,

    plans: [StrategyPlan; 4],
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            small_instance_density: 0.95,
            large_instance_density: 1.0,
            large_instance_threshold: 1000,
            plans: StrategyKind::ALL.map(|kind| kind.plan()),
        }
    }
}

impl SolverConfig {
    pub fn with_small_instance_density(mut self, density: f64) -> Self {
        self.small_instance_density = density;
        self
    }

    pub fn with_large_instance_density(mut self, density: f64) -> Self {
        self.large_instance_density = density;
        self
    }

    pub fn with_large_instance_threshold(mut self, threshold: usize) -> Self {
        self.large_instance_threshold = threshold;
        self
    }

    /// Replaces the plan used for `kind`.
    pub fn with_plan(mut self, kind: StrategyKind, plan: StrategyPlan) -> Self {
        self.plans[kind.index()] = plan;
        self
    }

    /// Plan used for `kind`.
    pub fn plan(&self, kind: StrategyKind) -> &StrategyPlan {
        &self.plans[kind.index()]
    }

    /// Initial selection probability for `problem`.
    pub fn initial_density(&self, problem: &Problem) -> f64 {
        if problem.num_sets() < self.large_instance_threshold {
            self.small_instance_density
        } else {
            self.large_instance_density
        }
    }

    /// Validates densities and every plan.
    pub fn validate(&self) -> Result<(), CoverError> {
        check_probability("small instance density", self.small_instance_density)?;
        check_probability("large instance density", self.large_instance_density)?;
        for plan in &self.plans {
            plan.validate()?;
        }
        Ok(())
    }
}
