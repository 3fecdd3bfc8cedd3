//! Per-step records, the observer hook, and run results.

use crate::cover::{Fitness, Solution};

/// What happened at one search step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    /// Step index, starting at 1 (index 0 is the initial solution).
    pub step: usize,
    /// Fitness of the candidate generated at this step.
    pub candidate: Fitness,
    /// Fitness of the incumbent after the acceptance decision.
    pub incumbent: Fitness,
    /// Whether the candidate replaced the incumbent.
    pub accepted: bool,
}

/// Receives one [`StepRecord`] per iteration of a search run.
///
/// Prefix maxima, plotting and other presentation are left to observers.
/// Closures `FnMut(&StepRecord)` implement this trait, and `()` is a no-op
/// observer.
///
/// # Examples
///
/// ```
/// use u_setcover::search::{SearchObserver, StepRecord};
///
/// let mut accepted = 0usize;
/// let mut observer = |record: &StepRecord| {
///     if record.accepted {
///         accepted += 1;
///     }
/// };
/// # let _ = &mut observer as &mut dyn SearchObserver;
/// ```
pub trait SearchObserver {
    /// Called once per step, after the acceptance decision.
    fn on_step(&mut self, record: &StepRecord);
}

impl SearchObserver for () {
    fn on_step(&mut self, _record: &StepRecord) {}
}

impl<F: FnMut(&StepRecord)> SearchObserver for F {
    fn on_step(&mut self, record: &StepRecord) {
        self(record)
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Incumbent when the step budget ran out.
    pub incumbent: Solution,

    /// Fitness of [`incumbent`](Self::incumbent).
    pub incumbent_fitness: Fitness,

    /// Cheapest fully covering solution seen, if any was seen.
    ///
    /// Updated only when a fully covering candidate strictly improves on it;
    /// seeded by the initial solution if that already covers the universe.
    pub best_cover: Option<(Solution, Fitness)>,

    /// Steps executed (always the configured budget).
    pub iterations: usize,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving candidates.
    pub improving_moves: usize,

    /// Mutation strength after the last step, for self-adaptive runs.
    pub final_strength: Option<f64>,

    /// Initial fitness followed by every candidate's fitness;
    /// `iterations + 1` entries.
    pub history: Vec<Fitness>,
}

impl SearchResult {
    /// Fitness reported for the run: the best fully covering fitness if one
    /// was seen, otherwise the final incumbent's.
    pub fn final_fitness(&self) -> Fitness {
        self.best_cover
            .as_ref()
            .map_or(self.incumbent_fitness, |(_, fitness)| *fitness)
    }

    /// Solution matching [`final_fitness`](Self::final_fitness).
    pub fn final_solution(&self) -> &Solution {
        self.best_cover
            .as_ref()
            .map_or(&self.incumbent, |(solution, _)| solution)
    }

    /// Negated-cost component of [`history`](Self::history).
    pub fn cost_history(&self) -> Vec<f64> {
        self.history.iter().map(|f| f.negated_cost).collect()
    }

    /// Coverage component of [`history`](Self::history).
    pub fn coverage_history(&self) -> Vec<usize> {
        self.history.iter().map(|f| f.coverage).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(best_cover: Option<(Solution, Fitness)>) -> SearchResult {
        SearchResult {
            incumbent: Solution::empty(2),
            incumbent_fitness: Fitness::new(0, 0.0),
            best_cover,
            iterations: 2,
            accepted_moves: 0,
            improving_moves: 0,
            final_strength: None,
            history: vec![
                Fitness::new(0, 0.0),
                Fitness::new(2, -1.0),
                Fitness::new(4, -3.0),
            ],
        }
    }

    #[test]
    fn test_final_fitness_prefers_best_cover() {
        let r = result_with(Some((Solution::full(2), Fitness::new(4, -3.0))));
        assert_eq!(r.final_fitness(), Fitness::new(4, -3.0));
        assert_eq!(r.final_solution(), &Solution::full(2));
    }

    #[test]
    fn test_final_fitness_falls_back_to_incumbent() {
        let r = result_with(None);
        assert_eq!(r.final_fitness(), Fitness::new(0, 0.0));
        assert_eq!(r.final_solution(), &Solution::empty(2));
    }

    #[test]
    fn test_history_projections() {
        let r = result_with(None);
        assert_eq!(r.cost_history(), vec![0.0, -1.0, -3.0]);
        assert_eq!(r.coverage_history(), vec![0, 2, 4]);
    }

    #[test]
    fn test_closure_observer() {
        let mut steps = Vec::new();
        let mut observer = |record: &StepRecord| steps.push(record.step);
        let record = StepRecord {
            step: 3,
            candidate: Fitness::new(1, -1.0),
            incumbent: Fitness::new(1, -1.0),
            accepted: false,
        };
        observer.on_step(&record);
        observer.on_step(&record);
        assert_eq!(steps, vec![3, 3]);
    }
}
