//! Top-level run configuration and setup-time validation.
//!
//! Configuration errors are the only failures that propagate upward out of
//! this core; everything on the hot path resolves to sentinels, rejects, or
//! silent gauge resets.  `validate()` is called once by the simulation
//! builder before any tick runs.

use crate::{CoreError, CoreResult, Tick};

/// Raw traffic demand is expressed in vehicles/hour on the CLI side and maps
/// linearly onto a per-lane spawn level in [0, MAX_TRAFFIC_LEVEL].
pub const MAX_TRAFFIC_LEVEL: f64 = 0.7;

/// Top-level simulation configuration, immutable for a run.
///
/// Typically assembled by the surrounding application from CLI flags and
/// passed to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds per tick.  Default: 0.02.
    pub tick_duration_secs: f64,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Speed limit applied to spawned traffic, m/s.  Must be in (0, 80].
    pub speed_limit: f64,

    /// Per-lane spawn level in [0, [`MAX_TRAFFIC_LEVEL`]] — the probability
    /// weight of a spawn per second of simulated time.
    pub traffic_level: f64,

    /// Worker thread count for the parallel sensor phase.  `None` uses all
    /// logical cores.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs: 0.02,
            total_ticks: 3_000,
            seed: 0,
            speed_limit: 25.0,
            traffic_level: 0.28,
            num_threads: None,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> crate::SimClock {
        crate::SimClock::new(self.tick_duration_secs)
    }

    /// Check every parameter against its documented bounds.
    ///
    /// Returns a descriptive [`CoreError::Config`] naming the offending
    /// field; the first violation wins.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.tick_duration_secs > 0.0) {
            return Err(CoreError::Config(format!(
                "tick duration must be positive, got {}",
                self.tick_duration_secs
            )));
        }
        if !(self.speed_limit > 0.0 && self.speed_limit <= 80.0) {
            return Err(CoreError::Config(format!(
                "speed limit may not be lower than or equal to 0 or greater than 80.0, got {}",
                self.speed_limit
            )));
        }
        if !(0.0..=MAX_TRAFFIC_LEVEL).contains(&self.traffic_level) {
            return Err(CoreError::Config(format!(
                "traffic level must be between 0 and {MAX_TRAFFIC_LEVEL}, got {}",
                self.traffic_level
            )));
        }
        Ok(())
    }
}
