//! Planar geometry for sensing and collision tests.
//!
//! The simulated world is a flat plane measured in metres, so coordinates are
//! plain `f64` x/y pairs — no projection involved.  Headings are radians,
//! measured from the +x axis with positive angles sweeping toward +y (the
//! map frame's y axis points "down" the screen, so a positive heading offset
//! is to the vehicle's right).

/// A point (or vector) in the planar map frame, metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, metres.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// The point `dist` metres from `self` along `heading`.
    #[inline]
    pub fn project(self, heading: f64, dist: f64) -> Point2 {
        Point2 {
            x: self.x + heading.cos() * dist,
            y: self.y + heading.sin() * dist,
        }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Rect ─────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle, stored as its min/max corners.
///
/// Used for vehicle bounding boxes and the mapped-area boundary.  Oriented
/// vehicle bodies are conservatively boxed before ray tests, matching the
/// sensor model's tolerance for near-field overestimates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Point2,
    pub max: Point2,
}

impl Rect {
    #[inline]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// The tightest rectangle containing every point in `points`.
    ///
    /// Returns a degenerate rect at the origin for an empty slice.
    pub fn bounding(points: &[Point2]) -> Rect {
        let mut min = Point2::new(f64::MAX, f64::MAX);
        let mut max = Point2::new(f64::MIN, f64::MIN);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        if points.is_empty() {
            return Rect::new(Point2::default(), Point2::default());
        }
        Rect { min, max }
    }

    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// `true` if the two rectangles overlap (closed edges count).
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

// ── Ray ──────────────────────────────────────────────────────────────────────

/// A finite-range sensing ray: origin, heading, and maximum range.
///
/// Rays are derived per tick from a vehicle's pose and a fixed angular
/// offset; they are never persisted between ticks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point2,
    pub heading: f64,
    pub range: f64,
}

impl Ray {
    #[inline]
    pub fn new(origin: Point2, heading: f64, range: f64) -> Self {
        Self { origin, heading, range }
    }

    /// The far endpoint of the ray.
    #[inline]
    pub fn end(&self) -> Point2 {
        self.origin.project(self.heading, self.range)
    }

    /// Liang–Barsky clip test: does the ray's segment touch `rect`?
    ///
    /// Treats the rectangle as closed, so grazing an edge counts as a hit.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let end = self.end();
        let dx = end.x - self.origin.x;
        let dy = end.y - self.origin.y;

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;

        let edges = [
            (-dx, self.origin.x - rect.min.x),
            (dx, rect.max.x - self.origin.x),
            (-dy, self.origin.y - rect.min.y),
            (dy, rect.max.y - self.origin.y),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                // Segment parallel to this slab; outside means no hit at all.
                if q < 0.0 {
                    return false;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return false;
                    }
                    if r > t0 {
                        t0 = r;
                    }
                } else {
                    if r < t0 {
                        return false;
                    }
                    if r < t1 {
                        t1 = r;
                    }
                }
            }
        }
        true
    }
}
