//! Strategy comparison across generated instances.
//!
//! Every (instance, strategy) pair is an independent run with its own
//! `StdRng`, seeded from the base seed and the pair's position. Results are
//! therefore the same whether runs execute sequentially or, with the
//! `parallel` feature, on rayon's thread pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cover::{Fitness, Problem};
use crate::error::CoverError;
use crate::generator::{GeneratorConfig, InstanceGenerator};
use crate::solver::{Solver, SolverConfig, StrategyKind};

/// Configuration of a comparison sweep.
///
/// # Examples
///
/// ```
/// use u_setcover::compare::{Comparison, ComparisonConfig};
/// use u_setcover::generator::GeneratorConfig;
/// use u_setcover::solver::StrategyKind;
///
/// let config = ComparisonConfig::default()
///     .with_instances(vec![GeneratorConfig::default().with_universe_size(40).with_num_sets(20)])
///     .with_strategies(vec![StrategyKind::HillClimb, StrategyKind::SelfAdaptiveAnnealing])
///     .with_seed(7);
/// let rows = Comparison::run(&config).unwrap();
/// assert_eq!(rows.len(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonConfig {
    /// One generated instance per entry.
    pub instances: Vec<GeneratorConfig>,
    /// Strategies run on every instance.
    pub strategies: Vec<StrategyKind>,
    /// Base seed for instances and runs.
    pub seed: u64,
    /// Run pairs on rayon's thread pool (requires the `parallel` feature;
    /// ignored otherwise).
    pub parallel: bool,
    /// Solver configuration shared by all runs.
    pub solver: SolverConfig,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            instances: vec![
                GeneratorConfig::default(),
                GeneratorConfig::default()
                    .with_universe_size(300)
                    .with_num_sets(150),
            ],
            strategies: StrategyKind::ALL.to_vec(),
            seed: 42,
            parallel: true,
            solver: SolverConfig::default(),
        }
    }
}

impl ComparisonConfig {
    pub fn with_instances(mut self, instances: Vec<GeneratorConfig>) -> Self {
        self.instances = instances;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<StrategyKind>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }
}

/// Result of one (instance, strategy) run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonRow {
    /// Index into [`ComparisonConfig::instances`].
    pub instance: usize,
    pub strategy: StrategyKind,
    pub final_fitness: Fitness,
    pub steps: usize,
    /// Whether `final_fitness` covers the whole universe.
    pub full_coverage: bool,
    /// Negated cost of the initial solution and of every candidate.
    pub cost_history: Vec<f64>,
}

/// Runs comparison sweeps.
pub struct Comparison;

impl Comparison {
    /// Generates every instance and runs every strategy on it.
    ///
    /// Rows are ordered by instance, then by strategy as listed.
    pub fn run(config: &ComparisonConfig) -> Result<Vec<ComparisonRow>, CoverError> {
        let solver = Solver::new(config.solver.clone())?;

        let problems = config
            .instances
            .iter()
            .enumerate()
            .map(|(i, instance)| {
                let mut rng = StdRng::seed_from_u64(derive_seed(config.seed, i, 0));
                InstanceGenerator::new(instance.clone())?.generate(&mut rng)
            })
            .collect::<Result<Vec<Problem>, CoverError>>()?;

        let jobs: Vec<(usize, usize)> = (0..problems.len())
            .flat_map(|i| (0..config.strategies.len()).map(move |j| (i, j)))
            .collect();

        info!(
            "comparison: {} instances x {} strategies",
            problems.len(),
            config.strategies.len()
        );

        let run_job = |&(i, j): &(usize, usize)| {
            let kind = config.strategies[j];
            let mut rng = StdRng::seed_from_u64(derive_seed(config.seed, i, j + 1));
            let outcome = solver.solve(&problems[i], kind, &mut rng);
            debug!("instance {i} {kind}: {}", outcome.final_fitness);
            ComparisonRow {
                instance: i,
                strategy: kind,
                final_fitness: outcome.final_fitness,
                steps: outcome.steps(),
                full_coverage: problems[i].is_full_coverage(outcome.final_fitness.coverage),
                cost_history: outcome.cost_history(),
            }
        };

        #[cfg(feature = "parallel")]
        if config.parallel {
            return Ok(jobs.par_iter().map(run_job).collect());
        }

        Ok(jobs.iter().map(run_job).collect())
    }
}

/// Mixes the base seed with a run position (SplitMix64 finalizer).
fn derive_seed(seed: u64, instance: usize, slot: usize) -> u64 {
    let mut z = seed
        ^ (instance as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (slot as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ComparisonConfig {
        ComparisonConfig::default()
            .with_instances(vec![
                GeneratorConfig::default()
                    .with_universe_size(30)
                    .with_num_sets(12)
                    .with_density(0.15),
                GeneratorConfig::default()
                    .with_universe_size(50)
                    .with_num_sets(20)
                    .with_density(0.1),
            ])
            .with_seed(3)
            .with_parallel(false)
    }

    #[test]
    fn test_rows_cover_every_pair_in_order() {
        let rows = Comparison::run(&small_config()).unwrap();
        assert_eq!(rows.len(), 8);
        for (k, row) in rows.iter().enumerate() {
            assert_eq!(row.instance, k / 4);
            assert_eq!(row.strategy, StrategyKind::ALL[k % 4]);
            assert_eq!(row.cost_history.len(), row.steps + 1);
        }
    }

    #[test]
    fn test_self_adaptive_always_full_cover() {
        let rows = Comparison::run(&small_config()).unwrap();
        for row in rows
            .iter()
            .filter(|r| r.strategy == StrategyKind::SelfAdaptiveAnnealing)
        {
            assert!(row.full_coverage);
        }
    }

    #[test]
    fn test_reproducible() {
        let a = Comparison::run(&small_config()).unwrap();
        let b = Comparison::run(&small_config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = Comparison::run(&small_config()).unwrap();
        let parallel = Comparison::run(&small_config().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_invalid_instance_is_reported() {
        let config = small_config().with_instances(vec![GeneratorConfig::default().with_num_sets(0)]);
        assert_eq!(Comparison::run(&config).unwrap_err(), CoverError::NoSets);
    }

    #[test]
    fn test_derive_seed_distinguishes_positions() {
        let a = derive_seed(1, 0, 0);
        assert_ne!(a, derive_seed(1, 0, 1));
        assert_ne!(a, derive_seed(1, 1, 0));
        assert_ne!(a, derive_seed(2, 0, 0));
    }
}
