//! Driver models: the per-vehicle strategies the simulation dispatches.

use ix_core::GaussianSource;
use ix_vehicle::Vehicle;

use crate::{SensorResponder, SpeedControl};

/// What one driver sees when it acts: its own vehicle and the current lane's
/// speed limit.  Assembled fresh each tick by the simulation loop.
pub struct DriverContext<'a> {
    pub vehicle: &'a Vehicle,
    pub lane_limit: f64,
}

/// A per-vehicle control strategy.
///
/// Called once per vehicle per tick, after the sensor engine has updated the
/// vehicle's gauges.  Returns the target-velocity command to send to the
/// actuator, or `None` to leave the current target untouched.
pub trait DriverModel: Send {
    fn act(&mut self, ctx: &DriverContext<'_>, rng: &mut dyn GaussianSource) -> Option<f64>;
}

// ── SensorDriver ─────────────────────────────────────────────────────────────

/// The sensor-responding driver: wraps a [`SensorResponder`].
#[derive(Clone)]
pub struct SensorDriver {
    responder: SensorResponder,
}

impl SensorDriver {
    pub fn new(control: SpeedControl) -> Self {
        Self { responder: SensorResponder::new(control) }
    }

    pub fn with_response_wait(mut self, wait: u32) -> Self {
        self.responder = self.responder.with_response_wait(wait);
        self
    }

    #[inline]
    pub fn responder(&self) -> &SensorResponder {
        &self.responder
    }
}

impl DriverModel for SensorDriver {
    fn act(&mut self, ctx: &DriverContext<'_>, rng: &mut dyn GaussianSource) -> Option<f64> {
        let v = ctx.vehicle;
        self.responder.respond(&v.gauges, v.velocity(), ctx.lane_limit, rng)
    }
}

// ── CruiseDriver ─────────────────────────────────────────────────────────────

/// A passive driver that simply holds the lane speed limit.
///
/// Useful as the baseline population in tests and for intersections under
/// purely centralized control, where sensor-based avoidance is switched off.
#[derive(Clone)]
pub struct CruiseDriver;

impl DriverModel for CruiseDriver {
    fn act(&mut self, ctx: &DriverContext<'_>, _rng: &mut dyn GaussianSource) -> Option<f64> {
        Some(ctx.lane_limit)
    }
}
