//! The fixed set of named gauges every tracked vehicle carries.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

use ix_core::SimRng;
use ix_gauge::{Gauge, NoiseFn, DEFAULT_DELTA};

/// Sentinel distance/speed meaning "nothing detected", treated as +∞ by
/// every consumer.
pub const NO_DETECTION: f64 = f64::MAX;

// ── ConeId ───────────────────────────────────────────────────────────────────

/// Which side of the vehicle an angular cone sweeps.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

/// One of the six fixed angular detection cones.
///
/// Positive offsets sweep to the vehicle's right in the map frame, negative
/// to its left.  Iteration order within a side is narrowest-first, which is
/// what gives the 30° cone priority when an obstacle sits in an overlap.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ConeId {
    Right30,
    Right45,
    Right60,
    Left30,
    Left45,
    Left60,
}

impl ConeId {
    /// All cones, right side first, narrowest angle first within each side.
    pub const ALL: [ConeId; 6] = [
        ConeId::Right30,
        ConeId::Right45,
        ConeId::Right60,
        ConeId::Left30,
        ConeId::Left45,
        ConeId::Left60,
    ];

    /// The cones of one side, narrowest first.
    pub fn side_order(side: Side) -> [ConeId; 3] {
        match side {
            Side::Right => [ConeId::Right30, ConeId::Right45, ConeId::Right60],
            Side::Left => [ConeId::Left30, ConeId::Left45, ConeId::Left60],
        }
    }

    /// Angular offset from the vehicle's heading, radians.
    pub fn angle_offset(self) -> f64 {
        match self {
            ConeId::Right30 => FRAC_PI_6,
            ConeId::Right45 => FRAC_PI_4,
            ConeId::Right60 => FRAC_PI_3,
            ConeId::Left30 => -FRAC_PI_6,
            ConeId::Left45 => -FRAC_PI_4,
            ConeId::Left60 => -FRAC_PI_3,
        }
    }

    pub fn side(self) -> Side {
        match self {
            ConeId::Right30 | ConeId::Right45 | ConeId::Right60 => Side::Right,
            ConeId::Left30 | ConeId::Left45 | ConeId::Left60 => Side::Left,
        }
    }

    /// Position in [`ConeId::ALL`], usable as an array index.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ConeId::Right30 => 0,
            ConeId::Right45 => 1,
            ConeId::Right60 => 2,
            ConeId::Left30 => 3,
            ConeId::Left45 => 4,
            ConeId::Left60 => 5,
        }
    }
}

// ── VehicleGauges ────────────────────────────────────────────────────────────

/// The sensor bank of one vehicle.
///
/// Front/rear distance and speed are plain pass-through gauges; the six
/// angular cones are smoothed, so a cone that stops receiving hits keeps its
/// stale reading until the gauge's own delta/reset rules replace it.  All
/// gauges start at [`NO_DETECTION`].
pub struct VehicleGauges {
    pub front_distance: Gauge,
    pub front_speed: Gauge,
    pub rear_distance: Gauge,
    pub rear_speed: Gauge,
    cones: [Gauge; 6],
}

impl VehicleGauges {
    /// Noiseless gauges with the default cone delta.
    pub fn new() -> Self {
        Self::build(DEFAULT_DELTA, || NoiseFn::none())
    }

    /// Gauges whose every reading carries Gaussian noise of `std`, each
    /// sensor independently seeded from `rng`.
    pub fn with_gaussian_noise(std: f64, rng: &mut SimRng) -> Self {
        Self::build(DEFAULT_DELTA, || {
            NoiseFn::gaussian(std, rng.gen_range(0..=u64::MAX))
        })
    }

    fn build(cone_delta: f64, mut noise: impl FnMut() -> NoiseFn) -> Self {
        let plain =
            |noise: NoiseFn| Gauge::plain_with_noise(NO_DETECTION, 0.0, f64::MAX, noise);
        Self {
            front_distance: plain(noise()),
            front_speed: plain(noise()),
            rear_distance: plain(noise()),
            rear_speed: plain(noise()),
            cones: std::array::from_fn(|_| {
                Gauge::smoothed_with_noise(NO_DETECTION, 0.0, f64::MAX, cone_delta, noise())
            }),
        }
    }

    #[inline]
    pub fn cone(&self, id: ConeId) -> &Gauge {
        &self.cones[id.index()]
    }

    #[inline]
    pub fn cone_mut(&mut self, id: ConeId) -> &mut Gauge {
        &mut self.cones[id.index()]
    }
}

impl Default for VehicleGauges {
    fn default() -> Self {
        Self::new()
    }
}
