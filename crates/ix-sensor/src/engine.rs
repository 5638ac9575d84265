//! The sensor engine: observe (pure) and apply (gauge writes).

use ix_core::{Point2, Ray, Vin};
use ix_map::{Lane, RoadMap};
use ix_vehicle::{ConeId, Side, Vehicle, NO_DETECTION};

use crate::{DebugSink, LaneIndex};

/// Maximum range of the angular detection cones, metres.
pub const SENSOR_RANGE: f64 = 400.0;

// ── ScanWorld ────────────────────────────────────────────────────────────────

/// The immutable world snapshot one tick's observations run against.
///
/// Positions are final for the tick; the lane index is built once and shared
/// by every vehicle's observation.
pub struct ScanWorld<'a, L: Lane> {
    pub vehicles: Vec<&'a Vehicle>,
    pub index: LaneIndex,
    pub map: &'a RoadMap<L>,
}

impl<'a, L: Lane> ScanWorld<'a, L> {
    pub fn new(vehicles: Vec<&'a Vehicle>, map: &'a RoadMap<L>) -> Self {
        let index = LaneIndex::build(&vehicles, map);
        Self { vehicles, index, map }
    }
}

// ── SensorFrame ──────────────────────────────────────────────────────────────

/// The raw readings produced for one vehicle in one tick.
///
/// Front/rear values use [`NO_DETECTION`] when no neighbor exists — those
/// sentinels *are* recorded.  A cone entry of `None` means "no hit this
/// tick" and must leave the cone's gauge untouched, so a stale detection
/// decays only through the gauge's own smoothing rules.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorFrame {
    pub vin: Vin,
    pub front_gap: f64,
    pub front_speed: f64,
    pub rear_gap: f64,
    pub rear_speed: f64,
    pub cones: [Option<f64>; 6],
    /// Following-gap segment endpoints for the debug sink (watched vehicle
    /// only).
    pub gap_segment: Option<(Point2, Point2)>,
}

// ── SensorEngine ─────────────────────────────────────────────────────────────

/// Casts the per-vehicle sensor queries.  Stateless apart from configuration.
pub struct SensorEngine {
    pub range: f64,
    /// Vehicle whose following gap is reported to the [`DebugSink`].
    pub watched: Option<Vin>,
}

impl SensorEngine {
    pub fn new() -> Self {
        Self { range: SENSOR_RANGE, watched: None }
    }

    pub fn watch(mut self, vin: Vin) -> Self {
        self.watched = Some(vin);
        self
    }

    /// Compute one vehicle's sensor readings against the world snapshot.
    ///
    /// Pure: reads only pre-tick state, writes nothing.  Safe to call for
    /// many vehicles concurrently.
    pub fn observe<L: Lane>(&self, vehicle: &Vehicle, world: &ScanWorld<'_, L>) -> SensorFrame {
        let pos = vehicle.pos();

        // ── Lane-relative front/rear tracking ─────────────────────────────
        let mut front_gap = NO_DETECTION;
        let mut front_speed = NO_DETECTION;
        let mut rear_gap = NO_DETECTION;
        let mut rear_speed = NO_DETECTION;
        let mut gap_segment = None;

        if let Some(lane) = world.map.lane(vehicle.lane) {
            let dist = lane.distance_along(pos);
            let (ahead, behind) = world.index.neighbors(vehicle.lane, dist, vehicle.vin());
            if let Some(front) = ahead {
                front_gap = (front.dist - dist) - front.length;
                front_speed = front.velocity;
            }
            if let Some(rear) = behind {
                rear_gap = dist - rear.dist;
                rear_speed = rear.velocity;
            }

            if self.watched == Some(vehicle.vin()) {
                let len = lane.length();
                let p1 = lane.point_at(((dist - rear_gap) / len).max(0.0));
                let p2 = lane.point_at(((front_gap + dist) / len).min(1.0));
                gap_segment = Some((p1, p2));
            }
        }

        // ── Angular cones ─────────────────────────────────────────────────
        //
        // Per candidate, only the narrowest intersecting cone on each side
        // registers; per cone, the closest candidate wins.
        let rays: [Ray; 6] = std::array::from_fn(|i| {
            let cone = ConeId::ALL[i];
            Ray::new(pos, vehicle.heading() + cone.angle_offset(), self.range)
        });

        let mut cones: [Option<f64>; 6] = [None; 6];
        for other in &world.vehicles {
            if other.vin() == vehicle.vin() {
                continue;
            }
            let bounds = other.bounds();
            let dist = pos.distance(other.pos());
            for side in [Side::Right, Side::Left] {
                for cone in ConeId::side_order(side) {
                    if rays[cone.index()].intersects_rect(&bounds) {
                        let slot = &mut cones[cone.index()];
                        if slot.is_none_or(|best| dist < best) {
                            *slot = Some(dist);
                        }
                        break;
                    }
                }
            }
        }
        for slot in &mut cones {
            if slot.is_some_and(|d| d > self.range) {
                *slot = None;
            }
        }

        SensorFrame {
            vin: vehicle.vin(),
            front_gap,
            front_speed,
            rear_gap,
            rear_speed,
            cones,
            gap_segment,
        }
    }

    /// Write one frame into its vehicle's gauges.
    ///
    /// Front/rear gauges always record (sentinels included); cone gauges
    /// record only on a hit.
    pub fn apply(frame: &SensorFrame, vehicle: &mut Vehicle) {
        vehicle.gauges.front_distance.record(frame.front_gap);
        vehicle.gauges.front_speed.record(frame.front_speed);
        vehicle.gauges.rear_distance.record(frame.rear_gap);
        vehicle.gauges.rear_speed.record(frame.rear_speed);
        for cone in ConeId::ALL {
            if let Some(d) = frame.cones[cone.index()] {
                vehicle.gauges.cone_mut(cone).record(d);
            }
        }
    }

    /// Report a frame's debug geometry to `sink` if it carries any.
    pub fn emit_debug(frame: &SensorFrame, sink: &mut dyn DebugSink) {
        if let Some((rear, front)) = frame.gap_segment {
            sink.following_gap(frame.vin, rear, front);
        }
    }
}

impl Default for SensorEngine {
    fn default() -> Self {
        Self::new()
    }
}
