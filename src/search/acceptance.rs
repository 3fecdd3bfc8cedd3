//! Acceptance rules deciding whether a candidate replaces the incumbent.

use rand::Rng;

use crate::cover::Fitness;

/// Floor of the annealing temperature.
pub const MIN_TEMPERATURE: f64 = 1.0;

/// Acceptance test applied once per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// Accept iff the candidate is strictly better.
    #[default]
    Strict,

    /// Accept strictly better candidates; accept any other candidate with
    /// probability `exp(Δ / T)`, where Δ is the change in negated cost and
    /// `T = max(1, 10 · coverage / universe_size + 0.01)` is computed from
    /// the incumbent.
    ///
    /// Coverage only enters through the temperature: a candidate that loses
    /// coverage but is cheaper has Δ > 0 and is always accepted.
    Exponential,
}

impl Acceptance {
    /// Decides whether `candidate` replaces `incumbent`.
    ///
    /// Only [`Acceptance::Exponential`] draws from `rng`, and only for
    /// non-improving candidates.
    pub fn accepts<R: Rng>(
        &self,
        candidate: &Fitness,
        incumbent: &Fitness,
        universe_size: usize,
        rng: &mut R,
    ) -> bool {
        if candidate > incumbent {
            return true;
        }
        match self {
            Acceptance::Strict => false,
            Acceptance::Exponential => {
                let temperature = annealing_temperature(incumbent.coverage, universe_size);
                let logp = (candidate.negated_cost - incumbent.negated_cost) / temperature;
                rng.random::<f64>() < logp.exp()
            }
        }
    }
}

/// Temperature of the exponential schedule for an incumbent with the given
/// coverage.
///
/// Rises with coverage so that nearly complete covers explore more freely in
/// cost; floored at [`MIN_TEMPERATURE`].
pub fn annealing_temperature(coverage: usize, universe_size: usize) -> f64 {
    let t = 10.0 * coverage as f64 / universe_size as f64 + 0.01;
    t.max(MIN_TEMPERATURE)
}
