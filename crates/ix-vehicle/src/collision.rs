//! One-shot collision latching per vehicle.

use ix_core::Vin;
use tracing::debug;

/// Records that a vehicle has been part of a collision.
///
/// The latch is monotonic: a vehicle transitions into the collided state at
/// most once, and the pair recorded is the first collision's.  Impact time
/// and the speeds at impact are not yet captured — the fields stay `None`
/// until impact kinematics are wired in.
#[derive(Debug, Default)]
pub struct CollisionTracker {
    had_collision: bool,
    own_vin: Vin,
    other_vin: Vin,
    /// Simulated time of impact.  Not yet populated.
    pub impact_time: Option<f64>,
    /// Own speed at impact.  Not yet populated.
    pub own_speed: Option<f64>,
    /// Other vehicle's speed at impact.  Not yet populated.
    pub other_speed: Option<f64>,
}

impl CollisionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that `own` collided with `other`.
    ///
    /// Returns `true` only on the transition into the collided state; later
    /// calls are no-ops and leave the recorded pair unchanged.
    pub fn notify(&mut self, own: Vin, other: Vin) -> bool {
        if self.had_collision {
            return false;
        }
        self.had_collision = true;
        self.own_vin = own;
        self.other_vin = other;
        debug!(%own, %other, "collision");
        true
    }

    #[inline]
    pub fn had_collision(&self) -> bool {
        self.had_collision
    }

    /// The latched `(own, other)` pair, if a collision has occurred.
    pub fn pair(&self) -> Option<(Vin, Vin)> {
        self.had_collision.then_some((self.own_vin, self.other_vin))
    }
}
