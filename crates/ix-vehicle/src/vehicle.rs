//! The `Vehicle` type — pose, velocities, body rectangle, and sensors.

use ix_core::{LaneId, Point2, Rect, Vin};

use crate::{CollisionTracker, VehicleGauges, VehicleSpec};

/// One vehicle in the simulated area.
///
/// Owned by the simulation loop; the sensor engine and control law only ever
/// borrow it.  The reference point for the pose is the **middle of the front
/// bumper** — sensor rays originate there and lane-relative distances are
/// measured to it.
pub struct Vehicle {
    vin: Vin,
    pub spec: VehicleSpec,
    pos: Point2,
    heading: f64,
    velocity: f64,
    target_velocity: f64,
    /// Target lane used for front/rear tracking.
    pub lane: LaneId,
    pub gauges: VehicleGauges,
    pub collision: CollisionTracker,
    /// Whether the sensor engine scans for this vehicle.
    pub tracking: bool,
}

impl Vehicle {
    pub fn new(
        vin: Vin,
        spec: VehicleSpec,
        pos: Point2,
        heading: f64,
        velocity: f64,
        lane: LaneId,
    ) -> Self {
        Self {
            vin,
            spec,
            pos,
            heading,
            velocity,
            target_velocity: velocity,
            lane,
            gauges: VehicleGauges::new(),
            collision: CollisionTracker::new(),
            tracking: true,
        }
    }

    // ── Read-only pose and state ──────────────────────────────────────────

    #[inline]
    pub fn vin(&self) -> Vin {
        self.vin
    }

    /// Middle of the front bumper.
    #[inline]
    pub fn pos(&self) -> Point2 {
        self.pos
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn target_velocity(&self) -> f64 {
        self.target_velocity
    }

    /// Axis-aligned bounding box of the oriented body rectangle.
    ///
    /// The body extends `spec.length` behind the front bumper and
    /// `spec.width / 2` to each side of the centerline.
    pub fn bounds(&self) -> Rect {
        let rear = self.pos.project(self.heading, -self.spec.length);
        let half = self.spec.width * 0.5;
        let (sin, cos) = self.heading.sin_cos();
        let side = Point2::new(-sin * half, cos * half);
        Rect::bounding(&[
            Point2::new(self.pos.x + side.x, self.pos.y + side.y),
            Point2::new(self.pos.x - side.x, self.pos.y - side.y),
            Point2::new(rear.x + side.x, rear.y + side.y),
            Point2::new(rear.x - side.x, rear.y - side.y),
        ])
    }

    // ── Mutators used by the kinematics provider ──────────────────────────

    #[inline]
    pub fn set_pos(&mut self, pos: Point2) {
        self.pos = pos;
    }

    #[inline]
    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    /// Set the current velocity, clamped to `[0, spec.max_velocity]`.
    #[inline]
    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity.clamp(0.0, self.spec.max_velocity);
    }

    // ── Actuator command ──────────────────────────────────────────────────

    /// Command the vehicle to work toward `velocity` at its maximum
    /// acceleration.  The integration toward the target happens in the
    /// external kinematics provider.
    #[inline]
    pub fn set_target_velocity(&mut self, velocity: f64) {
        self.target_velocity = velocity.clamp(0.0, self.spec.max_velocity);
    }
}
