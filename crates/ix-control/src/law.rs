//! The sensor-response law: front-field avoidance plus cone hysteresis.

use ix_core::GaussianSource;
use ix_vehicle::{ConeId, VehicleGauges};

use crate::SpeedControl;

/// Default cooldown between non-critical responses, ticks.
pub const DEFAULT_RESPONSE_WAIT: u32 = 1;

// Front-field thresholds, metres.
const EMERGENCY_GAP: f64 = 3.0;
const FOLLOW_GAP: f64 = 10.0;

// Cone thresholds, metres.  The critical band demands a response now; the
// advisory band nudges early while there is still room.
const CRITICAL_45: f64 = 100.0;
const CRITICAL_30: f64 = 60.0;
const CRITICAL_60: f64 = 45.0;
const ADVISORY_45: f64 = 200.0;
const ADVISORY_30: f64 = 120.0;
const ADVISORY_60: f64 = 90.0;

/// Per-vehicle response state: the configured curve plus the cooldown
/// counter.
///
/// The counter decrements once per call and may go negative; only the
/// `<= 0` comparison matters.  Front-field branches bypass it entirely —
/// unrestricted lateral correction is what oscillates and deadlocks, so only
/// the cone-driven nudges are rate-limited.
#[derive(Clone, Debug)]
pub struct SensorResponder {
    control: SpeedControl,
    response_wait: u32,
    response_counter: i64,
}

impl SensorResponder {
    pub fn new(control: SpeedControl) -> Self {
        Self {
            control,
            response_wait: DEFAULT_RESPONSE_WAIT,
            response_counter: 0,
        }
    }

    /// Override the cooldown length, in ticks.
    pub fn with_response_wait(mut self, wait: u32) -> Self {
        self.response_wait = wait;
        self
    }

    #[inline]
    pub fn control(&self) -> &SpeedControl {
        &self.control
    }

    /// Ticks remaining before the next non-critical response is permitted.
    #[inline]
    pub fn response_counter(&self) -> i64 {
        self.response_counter
    }

    /// Evaluate one tick of sensor input.
    ///
    /// Returns the target-velocity command to apply, or `None` when the
    /// cooldown suppresses a non-critical response this tick.
    pub fn respond(
        &mut self,
        gauges: &VehicleGauges,
        velocity: f64,
        lane_limit: f64,
        rng: &mut dyn GaussianSource,
    ) -> Option<f64> {
        self.response_counter -= 1;

        // ── Front field: applies immediately, regardless of cooldown ──────
        let front_gap = gauges.front_distance.read();
        let front_speed = gauges.front_speed.read();
        if front_gap < EMERGENCY_GAP {
            return Some((front_speed - 2.0).max(1.0));
        }
        if front_gap < FOLLOW_GAP {
            return Some(front_speed);
        }

        // ── Cone table ────────────────────────────────────────────────────
        let adjust = self.clamp_adjustment(self.control.mean + self.control.std * rng.next_gaussian());
        let base = if self.control.speed_relative { velocity } else { lane_limit };
        let candidate = base + adjust;

        let l30 = gauges.cone(ConeId::Left30).read();
        let r30 = gauges.cone(ConeId::Right30).read();
        let l45 = gauges.cone(ConeId::Left45).read();
        let r45 = gauges.cone(ConeId::Right45).read();
        let l60 = gauges.cone(ConeId::Left60).read();
        let r60 = gauges.cone(ConeId::Right60).read();

        let target = if l45 < CRITICAL_45 && r45 < CRITICAL_45 {
            candidate
        } else if l45 < CRITICAL_45 {
            candidate + self.control.accel_shift
        } else if r45 < CRITICAL_45 {
            candidate + self.control.decel_shift
        } else if l30 < CRITICAL_30 || r30 < CRITICAL_30 {
            candidate + self.control.decel_shift
        } else if l60 < CRITICAL_60 || r60 < CRITICAL_60 {
            candidate + self.control.accel_shift
        } else if l45 < ADVISORY_45 && r45 < ADVISORY_45 {
            candidate
        } else if l45 < ADVISORY_45 {
            candidate + self.control.accel_shift
        } else if r45 < ADVISORY_45 {
            candidate + self.control.decel_shift
        } else if l30 < ADVISORY_30 || r30 < ADVISORY_30 {
            candidate + self.control.decel_shift
        } else if l60 < ADVISORY_60 || r60 < ADVISORY_60 {
            candidate + self.control.accel_shift
        } else {
            lane_limit
        };

        // ── Cooldown gate and speed window ────────────────────────────────
        if self.response_counter > 0 {
            return None;
        }
        self.response_counter = self.response_wait as i64;

        let lo = (lane_limit - self.control.max_red)
            .max(self.control.speed_min)
            .max(1.0);
        let hi = (lane_limit + self.control.max_inc)
            .min(self.control.speed_max)
            .max(lo);
        Some(target.clamp(lo, hi))
    }

    /// Clamp a drawn adjustment's magnitude into the configured window,
    /// preserving its sign.
    fn clamp_adjustment(&self, a: f64) -> f64 {
        if a > 0.0 {
            a.clamp(self.control.min_inc, self.control.max_inc)
        } else if a < 0.0 {
            -(-a).clamp(self.control.min_red, self.control.max_red)
        } else {
            0.0
        }
    }
}
