//! Search configuration.

use rand::Rng;

use super::acceptance::Acceptance;
use super::adaptive::StrengthAdaptation;
use crate::cover::Solution;
use crate::error::{check_probability, CoverError};
use crate::mutation::Mutation;

/// How the initial solution of a run is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialSelection {
    /// Each set selected independently with probability `density`.
    Sample {
        /// Selection probability in `[0, 1]`.
        density: f64,
    },
    /// Every set selected.
    Full,
    /// No set selected.
    Empty,
}

impl Default for InitialSelection {
    fn default() -> Self {
        InitialSelection::Sample { density: 0.95 }
    }
}

impl InitialSelection {
    /// Builds an initial solution over `num_sets` sets.
    pub fn build<R: Rng>(&self, num_sets: usize, rng: &mut R) -> Solution {
        match *self {
            InitialSelection::Sample { density } => Solution::sample(num_sets, density, rng),
            InitialSelection::Full => Solution::full(num_sets),
            InitialSelection::Empty => Solution::empty(num_sets),
        }
    }
}

/// Configuration of a single search run.
///
/// # Examples
///
/// ```
/// use u_setcover::search::{Acceptance, SearchConfig};
/// use u_setcover::mutation::Mutation;
///
/// let config = SearchConfig::default()
///     .with_steps(500)
///     .with_mutation(Mutation::Bernoulli { rate: 0.02 })
///     .with_acceptance(Acceptance::Exponential);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Exact number of steps; there is no early termination.
    pub steps: usize,

    /// Initial solution policy.
    pub initial: InitialSelection,

    /// Candidate generator.
    pub mutation: Mutation,

    /// Acceptance test.
    pub acceptance: Acceptance,

    /// Sliding-window strength adaptation. Required by
    /// [`Mutation::AdaptiveStrength`].
    pub adaptation: Option<StrengthAdaptation>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            steps: 1000,
            initial: InitialSelection::default(),
            mutation: Mutation::SingleBit,
            acceptance: Acceptance::Strict,
            adaptation: None,
        }
    }
}

impl SearchConfig {
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_initial(mut self, initial: InitialSelection) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_adaptation(mut self, adaptation: StrengthAdaptation) -> Self {
        self.adaptation = Some(adaptation);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), CoverError> {
        if let InitialSelection::Sample { density } = self.initial {
            check_probability("initial density", density)?;
        }
        self.mutation.validate()?;
        match (&self.mutation, &self.adaptation) {
            (Mutation::AdaptiveStrength, None) => {
                return Err(CoverError::InvalidConfig(
                    "adaptive-strength mutation requires a strength adaptation".into(),
                ));
            }
            (_, Some(adaptation)) => adaptation.validate()?,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.steps, 1000);
        assert_eq!(config.mutation, Mutation::SingleBit);
        assert_eq!(config.acceptance, Acceptance::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_density() {
        let config =
            SearchConfig::default().with_initial(InitialSelection::Sample { density: 1.2 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_initial_selection_build() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(InitialSelection::Full.build(3, &mut rng), Solution::full(3));
        assert_eq!(InitialSelection::Empty.build(3, &mut rng), Solution::empty(3));
        let sampled = InitialSelection::Sample { density: 1.0 }.build(3, &mut rng);
        assert_eq!(sampled, Solution::full(3));
    }

    #[test]
    fn test_validate_bad_rate() {
        let config = SearchConfig::default().with_mutation(Mutation::Bernoulli { rate: -0.1 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_adaptive_mutation_needs_adaptation() {
        let config = SearchConfig::default().with_mutation(Mutation::AdaptiveStrength);
        assert!(config.validate().is_err());
        let config = config.with_adaptation(StrengthAdaptation::default());
        assert!(config.validate().is_ok());
    }
}
