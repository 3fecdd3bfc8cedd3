//! Local search execution loop.
//!
//! # Algorithm
//!
//! 1. Build the initial solution and evaluate it
//! 2. For exactly `steps` iterations:
//!    a. Mutate the incumbent into a candidate
//!    b. Evaluate the candidate
//!    c. Apply the acceptance test
//!    d. Record the candidate fitness, update the best full cover, adapt
//!    the mutation strength, notify the observer
//! 3. Return the incumbent, the best full cover, and the history

use log::{debug, trace};
use rand::Rng;

use super::adaptive::AdaptiveStrength;
use super::config::SearchConfig;
use super::types::{SearchObserver, SearchResult, StepRecord};
use crate::cover::{evaluate, Problem, Solution};
use crate::error::CoverError;

/// Executes a local search run.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs a search from an initial solution built per `config.initial`.
    pub fn run<R: Rng>(
        problem: &Problem,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult, CoverError> {
        Self::run_with_observer(problem, config, rng, &mut ())
    }

    /// Runs a search, reporting every step to `observer`.
    pub fn run_with_observer<R: Rng, O: SearchObserver + ?Sized>(
        problem: &Problem,
        config: &SearchConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<SearchResult, CoverError> {
        config.validate()?;
        let initial = config.initial.build(problem.num_sets(), rng);
        Ok(Self::execute(problem, config, initial, rng, observer))
    }

    /// Runs a search from an explicit initial solution; `config.initial` is
    /// ignored.
    pub fn run_from<R: Rng, O: SearchObserver + ?Sized>(
        problem: &Problem,
        config: &SearchConfig,
        initial: Solution,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<SearchResult, CoverError> {
        config.validate()?;
        if initial.len() != problem.num_sets() {
            return Err(CoverError::InvalidConfig(format!(
                "initial solution spans {} sets, problem has {}",
                initial.len(),
                problem.num_sets()
            )));
        }
        Ok(Self::execute(problem, config, initial, rng, observer))
    }

    /// The loop proper. `config` must already be validated.
    pub(crate) fn execute<R: Rng, O: SearchObserver + ?Sized>(
        problem: &Problem,
        config: &SearchConfig,
        initial: Solution,
        rng: &mut R,
        observer: &mut O,
    ) -> SearchResult {
        let universe_size = problem.universe_size();

        let mut incumbent = initial;
        let mut incumbent_fitness = evaluate(problem, &incumbent);
        let mut best_cover = problem
            .is_full_coverage(incumbent_fitness.coverage)
            .then(|| (incumbent.clone(), incumbent_fitness));

        let mut strength = config.adaptation.map(AdaptiveStrength::new);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut history = Vec::with_capacity(config.steps + 1);
        history.push(incumbent_fitness);

        debug!(
            "search start: sets={}, universe={}, steps={}, mutation={:?}, acceptance={:?}, initial={}",
            problem.num_sets(),
            universe_size,
            config.steps,
            config.mutation,
            config.acceptance,
            incumbent_fitness
        );

        for step in 1..=config.steps {
            let current_strength = strength.as_ref().map_or(0.0, AdaptiveStrength::strength);
            let candidate = config.mutation.apply(&incumbent, current_strength, rng);
            let candidate_fitness = evaluate(problem, &candidate);

            let improving = candidate_fitness > incumbent_fitness;
            let accepted = config.acceptance.accepts(
                &candidate_fitness,
                &incumbent_fitness,
                universe_size,
                rng,
            );

            if problem.is_full_coverage(candidate_fitness.coverage)
                && best_cover
                    .as_ref()
                    .is_none_or(|(_, best)| candidate_fitness > *best)
            {
                trace!("step {step}: new best cover {candidate_fitness}");
                best_cover = Some((candidate.clone(), candidate_fitness));
            }

            if accepted {
                accepted_moves += 1;
                if improving {
                    improving_moves += 1;
                }
                incumbent = candidate;
                incumbent_fitness = candidate_fitness;
            }

            if let Some(adaptive) = strength.as_mut() {
                adaptive.record(accepted);
            }

            history.push(candidate_fitness);
            observer.on_step(&StepRecord {
                step,
                candidate: candidate_fitness,
                incumbent: incumbent_fitness,
                accepted,
            });
        }

        let final_strength = strength.as_ref().map(AdaptiveStrength::strength);
        debug!(
            "search done: incumbent={}, best_cover={:?}, accepted={}, improving={}, strength={:?}",
            incumbent_fitness,
            best_cover.as_ref().map(|(_, f)| *f),
            accepted_moves,
            improving_moves,
            final_strength
        );

        SearchResult {
            incumbent,
            incumbent_fitness,
            best_cover,
            iterations: config.steps,
            accepted_moves,
            improving_moves,
            final_strength,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::Fitness;
    use crate::mutation::Mutation;
    use crate::search::{Acceptance, InitialSelection, StrengthAdaptation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_halves() -> Problem {
        Problem::from_sets(4, &[vec![0, 1], vec![2, 3]]).unwrap()
    }

    fn optimum() -> Fitness {
        Fitness::new(4, -2.0 * 2f64.powf(1.1))
    }

    fn layered(universe: usize, sets: usize) -> Problem {
        // every element sits in the first set, plus a band of smaller sets
        let mut lists = vec![(0..universe).collect::<Vec<_>>()];
        for i in 1..sets {
            lists.push(((i * 3) % universe..universe).step_by(sets).collect());
        }
        Problem::from_sets(universe, &lists).unwrap()
    }

    #[test]
    fn test_hill_climb_from_empty_reaches_optimum() {
        let problem = two_halves();
        let config = SearchConfig::default().with_steps(100);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result =
                SearchRunner::run_from(&problem, &config, Solution::empty(2), &mut rng, &mut ())
                    .unwrap();
            assert_eq!(result.incumbent_fitness, optimum());
            assert_eq!(result.incumbent, Solution::full(2));
        }
    }

    #[test]
    fn test_hill_climb_from_full_stays_optimal() {
        let problem = two_halves();
        let config = SearchConfig::default().with_steps(100);
        let mut rng = StdRng::seed_from_u64(9);
        let result =
            SearchRunner::run_from(&problem, &config, Solution::full(2), &mut rng, &mut ()).unwrap();
        assert_eq!(result.incumbent_fitness, optimum());
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.final_fitness(), optimum());
    }

    #[test]
    fn test_history_length_and_first_entry() {
        let problem = layered(40, 12);
        let config = SearchConfig::default().with_steps(250);
        let mut rng = StdRng::seed_from_u64(42);
        let result = SearchRunner::run(&problem, &config, &mut rng).unwrap();
        assert_eq!(result.history.len(), 251);
        assert_eq!(result.iterations, 250);
        assert_eq!(result.cost_history().len(), 251);
    }

    #[test]
    fn test_strict_incumbent_dominates_accepted_candidates() {
        let problem = layered(60, 20);
        let config = SearchConfig::default().with_steps(400);
        let mut rng = StdRng::seed_from_u64(5);
        let mut accepted = Vec::new();
        let mut previous: Option<Fitness> = None;
        let mut observer = |record: &StepRecord| {
            if record.accepted {
                accepted.push(record.candidate);
            }
            if let Some(prev) = previous {
                assert!(record.incumbent >= prev, "incumbent regressed");
            }
            previous = Some(record.incumbent);
        };
        let result =
            SearchRunner::run_with_observer(&problem, &config, &mut rng, &mut observer).unwrap();
        assert_eq!(accepted.len(), result.accepted_moves);
        assert_eq!(result.accepted_moves, result.improving_moves);
        for fitness in accepted {
            assert!(result.incumbent_fitness >= fitness);
        }
    }

    #[test]
    fn test_observer_called_once_per_step() {
        let problem = two_halves();
        let config = SearchConfig::default().with_steps(37);
        let mut rng = StdRng::seed_from_u64(1);
        let mut steps = Vec::new();
        SearchRunner::run_with_observer(&problem, &config, &mut rng, &mut |r: &StepRecord| {
            steps.push(r.step)
        })
        .unwrap();
        assert_eq!(steps, (1..=37).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let problem = layered(50, 15);
        let config = SearchConfig::default()
            .with_steps(300)
            .with_mutation(Mutation::Bernoulli { rate: 0.1 })
            .with_acceptance(Acceptance::Exponential);
        let a = SearchRunner::run(&problem, &config, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = SearchRunner::run(&problem, &config, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a.history, b.history);
        assert_eq!(a.incumbent, b.incumbent);
    }

    #[test]
    fn test_best_cover_is_full_and_never_worse_than_seen_covers() {
        let problem = layered(50, 15);
        let config = SearchConfig::default()
            .with_steps(2000)
            .with_mutation(Mutation::Bernoulli { rate: 0.1 })
            .with_acceptance(Acceptance::Exponential);
        let mut rng = StdRng::seed_from_u64(3);
        let result =
            SearchRunner::run_from(&problem, &config, Solution::full(15), &mut rng, &mut ())
                .unwrap();
        let (solution, fitness) = result.best_cover.clone().expect("initial solution covers");
        assert_eq!(fitness.coverage, 50);
        assert_eq!(evaluate(&problem, &solution), fitness);
        for seen in result.history.iter().filter(|f| f.coverage == 50) {
            assert!(fitness >= *seen);
        }
    }

    #[test]
    fn test_self_adaptive_strength_moves() {
        let problem = layered(40, 30);
        let config = SearchConfig::default()
            .with_steps(200)
            .with_initial(InitialSelection::Full)
            .with_mutation(Mutation::AdaptiveStrength)
            .with_adaptation(StrengthAdaptation::default());
        let mut rng = StdRng::seed_from_u64(8);
        let mut candidates = Vec::new();
        let mut observer = |r: &StepRecord| candidates.push(r.candidate);
        let result =
            SearchRunner::run_with_observer(&problem, &config, &mut rng, &mut observer).unwrap();
        let strength = result.final_strength.expect("adaptive run reports strength");
        assert!(strength > 0.0 && strength.is_finite());
        assert_eq!(result.history[0].coverage, 40);
        assert_eq!(candidates.len(), 200);
    }

    #[test]
    fn test_run_from_rejects_wrong_length() {
        let problem = two_halves();
        let config = SearchConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let err = SearchRunner::run_from(&problem, &config, Solution::empty(3), &mut rng, &mut ());
        assert!(err.is_err());
    }

    #[test]
    fn test_zero_steps() {
        let problem = two_halves();
        let config = SearchConfig::default().with_steps(0);
        let mut rng = StdRng::seed_from_u64(0);
        let result =
            SearchRunner::run_from(&problem, &config, Solution::empty(2), &mut rng, &mut ()).unwrap();
        assert_eq!(result.history, vec![Fitness::new(0, 0.0)]);
        assert!(result.best_cover.is_none());
    }
}
