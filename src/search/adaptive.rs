//! Self-adaptive mutation strength driven by recent acceptance outcomes.

use std::collections::VecDeque;

use crate::error::{check_probability, CoverError};

/// Parameters of the sliding-window strength rule.
///
/// After every step the outcome (accepted or not) enters a window of the
/// last `window` outcomes. If the window holds more than `grow_above`
/// successes the strength is multiplied by `factor`; if it holds none the
/// strength is divided by `factor`; otherwise it is left alone.
///
/// The strength is unbounded unless `max_strength` is set. Values of 1 or
/// more flip every bit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrengthAdaptation {
    /// Strength at step 0.
    pub initial_strength: f64,
    /// Multiplicative update factor, `> 1`.
    pub factor: f64,
    /// Number of recent outcomes remembered.
    pub window: usize,
    /// Success count the window must exceed for the strength to grow.
    pub grow_above: usize,
    /// Optional upper bound on the strength.
    pub max_strength: Option<f64>,
}

impl Default for StrengthAdaptation {
    fn default() -> Self {
        Self {
            initial_strength: 0.5,
            factor: 1.2,
            window: 5,
            grow_above: 1,
            max_strength: None,
        }
    }
}

impl StrengthAdaptation {
    pub fn with_initial_strength(mut self, strength: f64) -> Self {
        self.initial_strength = strength;
        self
    }

    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_grow_above(mut self, successes: usize) -> Self {
        self.grow_above = successes;
        self
    }

    pub fn with_max_strength(mut self, max_strength: f64) -> Self {
        self.max_strength = Some(max_strength);
        self
    }

    pub fn validate(&self) -> Result<(), CoverError> {
        check_probability("initial strength", self.initial_strength)?;
        if self.factor <= 1.0 || !self.factor.is_finite() {
            return Err(CoverError::InvalidConfig(format!(
                "strength factor must be finite and > 1, got {}",
                self.factor
            )));
        }
        if self.window == 0 {
            return Err(CoverError::InvalidConfig(
                "strength window must hold at least one outcome".into(),
            ));
        }
        if self.grow_above >= self.window {
            return Err(CoverError::InvalidConfig(format!(
                "grow threshold {} is unreachable with a window of {}",
                self.grow_above, self.window
            )));
        }
        if let Some(max) = self.max_strength {
            if max.is_nan() || max < self.initial_strength {
                return Err(CoverError::InvalidConfig(format!(
                    "max strength {} is below initial strength {}",
                    max, self.initial_strength
                )));
            }
        }
        Ok(())
    }
}

/// Running strength state for one search run.
#[derive(Debug, Clone)]
pub struct AdaptiveStrength {
    params: StrengthAdaptation,
    strength: f64,
    outcomes: VecDeque<bool>,
}

impl AdaptiveStrength {
    pub fn new(params: StrengthAdaptation) -> Self {
        Self {
            strength: params.initial_strength,
            outcomes: VecDeque::with_capacity(params.window + 1),
            params,
        }
    }

    /// Current per-bit flip probability.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Successes among the remembered outcomes.
    pub fn successes(&self) -> usize {
        self.outcomes.iter().filter(|&&s| s).count()
    }

    /// Records one step's outcome and updates the strength. Returns the new
    /// strength.
    pub fn record(&mut self, success: bool) -> f64 {
        self.outcomes.push_back(success);
        if self.outcomes.len() > self.params.window {
            self.outcomes.pop_front();
        }

        let successes = self.successes();
        if successes > self.params.grow_above {
            self.strength *= self.params.factor;
            if let Some(max) = self.params.max_strength {
                self.strength = self.strength.min(max);
            }
        } else if successes == 0 {
            self.strength /= self.params.factor;
        }
        self.strength
    }
}
