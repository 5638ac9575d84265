//! Deterministic per-vehicle and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each vehicle gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (vin * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive VINs uniformly across the seed space.  This
//! means:
//!
//! - Vehicles never share RNG state (no contention, no ordering dependency).
//! - Spawning or retiring vehicles does not disturb the sequences of the
//!   vehicles already on the road — runs are reproducible as traffic varies.
//! - All RNG calls are local to the owning thread; no synchronisation needed.
//!
//! The speed-control law consumes randomness only through the
//! [`GaussianSource`] trait, so tests can substitute a scripted sequence and
//! assert exact decision outcomes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::Vin;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── GaussianSource ────────────────────────────────────────────────────────────

/// A source of standard-normal draws.
///
/// The one seam the control law needs from its RNG.  Production code uses
/// [`VehicleRng`]; tests use [`ScriptedGaussian`] to force a specific branch
/// of the decision table.
pub trait GaussianSource {
    /// The next draw from N(0, 1).
    fn next_gaussian(&mut self) -> f64;
}

/// A deterministic [`GaussianSource`] that replays a fixed sequence.
///
/// Once the sequence is exhausted it keeps returning the final value (or 0.0
/// if constructed empty), so tests never need to count draws exactly.
pub struct ScriptedGaussian {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedGaussian {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl GaussianSource for ScriptedGaussian {
    fn next_gaussian(&mut self) -> f64 {
        let v = match self.values.get(self.cursor) {
            Some(&v) => v,
            None => self.values.last().copied().unwrap_or(0.0),
        };
        if self.cursor < self.values.len() {
            self.cursor += 1;
        }
        v
    }
}

// ── VehicleRng ────────────────────────────────────────────────────────────────

/// Per-vehicle deterministic RNG.
///
/// Created at spawn from the run's global seed and the vehicle's VIN.  The
/// type is `!Sync` to prevent accidental sharing across threads — parallel
/// phases must hand each worker its own instance.
pub struct VehicleRng(SmallRng);

impl VehicleRng {
    /// Seed deterministically from the run's global seed and a VIN.
    pub fn new(global_seed: u64, vin: Vin) -> Self {
        let seed = global_seed ^ (vin.0 as u64).wrapping_mul(MIXING_CONSTANT);
        VehicleRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

impl GaussianSource for VehicleRng {
    #[inline]
    fn next_gaussian(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (spawn draws, noise seeding).
///
/// Used only in single-threaded or explicitly synchronised contexts.  If you
/// need parallel randomness, give each worker its own RNG seeded from this
/// one via [`SimRng::child`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding per-gauge noise sources deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

impl GaussianSource for SimRng {
    #[inline]
    fn next_gaussian(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }
}
