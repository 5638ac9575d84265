//! Noise transforms applied to raw readings before they reach a gauge.
//!
//! Each noisy variant owns its own seeded `SmallRng`, so two gauges never
//! share randomness and a run replays identically from its seed.  Keeping
//! the transform responsible for its own output means the gauge itself never
//! has to reason about NaN or out-of-range noise — it just clamps.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// A noise transform applied to every incoming raw reading.
pub enum NoiseFn {
    /// Pass readings through unchanged.
    None,

    /// Additive noise uniformly distributed in `[-bound, bound]`.
    Uniform { bound: f64, rng: SmallRng },

    /// Additive zero-mean Gaussian noise with standard deviation `std`.
    Gaussian { std: f64, rng: SmallRng },
}

impl NoiseFn {
    pub fn none() -> Self {
        NoiseFn::None
    }

    pub fn uniform(bound: f64, seed: u64) -> Self {
        NoiseFn::Uniform {
            bound,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn gaussian(std: f64, seed: u64) -> Self {
        NoiseFn::Gaussian {
            std,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Apply the transform to one raw reading.
    pub fn apply(&mut self, raw: f64) -> f64 {
        match self {
            NoiseFn::None => raw,
            NoiseFn::Uniform { bound, rng } => {
                if *bound == 0.0 {
                    raw
                } else {
                    raw + rng.gen_range(-*bound..=*bound)
                }
            }
            NoiseFn::Gaussian { std, rng } => {
                let g: f64 = rng.sample(StandardNormal);
                raw + *std * g
            }
        }
    }
}

impl Default for NoiseFn {
    fn default() -> Self {
        NoiseFn::None
    }
}
