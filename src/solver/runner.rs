//! Strategy dispatch.

use log::debug;
use rand::Rng;

use super::config::SolverConfig;
use super::strategy::StrategyKind;
use crate::cover::{Fitness, Problem, Solution};
use crate::error::CoverError;
use crate::search::{SearchObserver, SearchResult, SearchRunner};

/// Outcome of [`Solver::solve`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOutcome {
    /// Strategy that produced this outcome.
    pub strategy: StrategyKind,

    /// Best fully covering fitness seen, or the final incumbent's when no
    /// full cover was reached.
    pub final_fitness: Fitness,

    /// Full search record.
    pub search: SearchResult,
}

impl SolveOutcome {
    /// Solution matching [`final_fitness`](Self::final_fitness).
    pub fn solution(&self) -> &Solution {
        self.search.final_solution()
    }

    /// Initial fitness followed by one candidate fitness per step.
    pub fn history(&self) -> &[Fitness] {
        &self.search.history
    }

    /// Negated-cost component of the history.
    pub fn cost_history(&self) -> Vec<f64> {
        self.search.cost_history()
    }

    /// Steps executed.
    pub fn steps(&self) -> usize {
        self.search.iterations
    }
}

/// Maps a [`StrategyKind`] to its plan and runs it.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_setcover::cover::Problem;
/// use u_setcover::solver::{Solver, StrategyKind};
///
/// let problem = Problem::from_sets(4, &[vec![0, 1], vec![2, 3]]).unwrap();
/// let solver = Solver::default();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let outcome = solver.solve(&problem, StrategyKind::HillClimb, &mut rng);
/// assert_eq!(outcome.final_fitness.coverage, 4);
/// assert_eq!(outcome.history().len(), outcome.steps() + 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver after validating `config`.
    pub fn new(config: SolverConfig) -> Result<Self, CoverError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs `kind` on `problem`.
    pub fn solve<R: Rng>(
        &self,
        problem: &Problem,
        kind: StrategyKind,
        rng: &mut R,
    ) -> SolveOutcome {
        self.solve_with_observer(problem, kind, rng, &mut ())
    }

    /// Runs `kind` on `problem`, reporting every step to `observer`.
    pub fn solve_with_observer<R: Rng, O: SearchObserver + ?Sized>(
        &self,
        problem: &Problem,
        kind: StrategyKind,
        rng: &mut R,
        observer: &mut O,
    ) -> SolveOutcome {
        let plan = self.config.plan(kind);
        let density = self.config.initial_density(problem);
        let search_config = plan.search_config(problem, density);

        debug!(
            "solve {kind}: sets={}, universe={}, steps={}, density={density}",
            problem.num_sets(),
            problem.universe_size(),
            search_config.steps
        );

        let initial = search_config.initial.build(problem.num_sets(), rng);
        let search = SearchRunner::execute(problem, &search_config, initial, rng, observer);
        let final_fitness = search.final_fitness();

        debug!("solve {kind}: final fitness {final_fitness}");

        SolveOutcome {
            strategy: kind,
            final_fitness,
            search,
        }
    }
}
