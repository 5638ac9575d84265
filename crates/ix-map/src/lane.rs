//! The `Lane` contract and the straight-segment implementation.

use ix_core::{LaneId, Point2};

/// What the decision core needs from one lane of road.
///
/// Implementations must keep `distance_along` and `point_at` mutually
/// consistent: `point_at(distance_along(p) / length())` should land on the
/// lane's centerline abreast of `p`.
pub trait Lane {
    fn id(&self) -> LaneId;

    /// Posted speed limit, m/s.
    fn speed_limit(&self) -> f64;

    /// Total lane length, metres.
    fn length(&self) -> f64;

    /// Longitudinal distance of `p`'s projection onto the lane, metres from
    /// the lane's entry end.  Positions off the lane project onto the
    /// centerline's infinite extension, so ordering stays total.
    fn distance_along(&self, p: Point2) -> f64;

    /// The centerline point at `fraction` of the lane's length, `fraction`
    /// in [0, 1].
    fn point_at(&self, fraction: f64) -> Point2;

    /// Direction of travel, radians.
    fn heading(&self) -> f64;
}

// ── StraightLane ─────────────────────────────────────────────────────────────

/// A straight lane segment from `start` to `end`.
///
/// The reference lane shape for tests and demos; grid layouts are built from
/// these by the surrounding application.
#[derive(Clone, Debug)]
pub struct StraightLane {
    id: LaneId,
    start: Point2,
    end: Point2,
    speed_limit: f64,
}

impl StraightLane {
    pub fn new(id: LaneId, start: Point2, end: Point2, speed_limit: f64) -> Self {
        Self { id, start, end, speed_limit }
    }
}

impl Lane for StraightLane {
    fn id(&self) -> LaneId {
        self.id
    }

    fn speed_limit(&self) -> f64 {
        self.speed_limit
    }

    fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    fn distance_along(&self, p: Point2) -> f64 {
        let len = self.length();
        if len == 0.0 {
            return 0.0;
        }
        let dx = (self.end.x - self.start.x) / len;
        let dy = (self.end.y - self.start.y) / len;
        (p.x - self.start.x) * dx + (p.y - self.start.y) * dy
    }

    fn point_at(&self, fraction: f64) -> Point2 {
        let f = fraction.clamp(0.0, 1.0);
        Point2::new(
            self.start.x + (self.end.x - self.start.x) * f,
            self.start.y + (self.end.y - self.start.y) * f,
        )
    }

    fn heading(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }
}
