//! Random instance generation.
//!
//! Membership bits are drawn independently; elements left uncovered are
//! then assigned to a random set so that selecting every set always covers
//! the universe.

use log::warn;
use rand::Rng;

use crate::cover::Problem;
use crate::error::{check_probability, CoverError};

/// Parameters of a generated instance.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_setcover::generator::{GeneratorConfig, InstanceGenerator};
///
/// let config = GeneratorConfig::default()
///     .with_universe_size(200)
///     .with_num_sets(80)
///     .with_density(0.05);
/// let problem = InstanceGenerator::new(config)
///     .unwrap()
///     .generate(&mut StdRng::seed_from_u64(1))
///     .unwrap();
/// assert!(problem.uncovered_elements().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Number of universe elements.
    pub universe_size: usize,
    /// Number of candidate sets.
    pub num_sets: usize,
    /// Probability that a set contains a given element.
    pub density: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            universe_size: 100,
            num_sets: 50,
            density: 0.05,
        }
    }
}

impl GeneratorConfig {
    pub fn with_universe_size(mut self, n: usize) -> Self {
        self.universe_size = n;
        self
    }

    pub fn with_num_sets(mut self, n: usize) -> Self {
        self.num_sets = n;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn validate(&self) -> Result<(), CoverError> {
        if self.universe_size == 0 {
            return Err(CoverError::EmptyUniverse);
        }
        if self.num_sets == 0 {
            return Err(CoverError::NoSets);
        }
        check_probability("membership density", self.density)
    }
}

/// Produces random instances satisfying the coverage invariant.
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    config: GeneratorConfig,
}

impl InstanceGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, CoverError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Membership matrix (`num_sets × universe_size`) with every element in
    /// at least one set.
    pub fn membership<R: Rng>(&self, rng: &mut R) -> Vec<Vec<bool>> {
        let GeneratorConfig {
            universe_size,
            num_sets,
            density,
        } = self.config;

        let mut membership: Vec<Vec<bool>> = (0..num_sets)
            .map(|_| {
                (0..universe_size)
                    .map(|_| rng.random::<f64>() < density)
                    .collect()
            })
            .collect();

        let mut repaired = 0usize;
        for element in 0..universe_size {
            if !membership.iter().any(|row| row[element]) {
                let set = rng.random_range(0..num_sets);
                membership[set][element] = true;
                repaired += 1;
            }
        }
        if repaired > 0 {
            warn!(
                "generator: assigned {repaired} of {universe_size} uncovered elements to random sets"
            );
        }

        membership
    }

    /// A fresh instance with costs `|set|^1.1`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Problem, CoverError> {
        Problem::from_membership(&self.membership(rng))
    }
}
