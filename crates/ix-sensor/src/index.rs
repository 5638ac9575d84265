//! Per-tick lane occupancy index.
//!
//! Built once per tick from the immutable vehicle set, then shared read-only
//! by every vehicle's observation.  An O(N) scan plus per-lane sort replaces
//! repeated per-vehicle searches over the whole population.

use ix_core::{LaneId, Vin};
use ix_map::{Lane, RoadMap};
use ix_vehicle::Vehicle;
use rustc_hash::FxHashMap;

/// One vehicle's footprint on its target lane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaneEntry {
    /// Distance of the front bumper along the lane, metres.
    pub dist: f64,
    pub vin: Vin,
    /// Body length, needed for gap-to-rear-bumper arithmetic.
    pub length: f64,
    /// Current velocity, reported to followers' speed gauges.
    pub velocity: f64,
}

/// Vehicles grouped by target lane, sorted by distance along the lane.
#[derive(Default)]
pub struct LaneIndex {
    by_lane: FxHashMap<LaneId, Vec<LaneEntry>>,
}

impl LaneIndex {
    /// Index every vehicle whose target lane exists on `map`.
    pub fn build<L: Lane>(vehicles: &[&Vehicle], map: &RoadMap<L>) -> Self {
        let mut by_lane: FxHashMap<LaneId, Vec<LaneEntry>> = FxHashMap::default();
        for v in vehicles {
            let Some(lane) = map.lane(v.lane) else { continue };
            by_lane.entry(v.lane).or_default().push(LaneEntry {
                dist: lane.distance_along(v.pos()),
                vin: v.vin(),
                length: v.spec.length,
                velocity: v.velocity(),
            });
        }
        for entries in by_lane.values_mut() {
            entries.sort_by(|a, b| a.dist.total_cmp(&b.dist));
        }
        Self { by_lane }
    }

    /// The nearest entries strictly ahead of and strictly behind `dist` on
    /// `lane`, excluding `exclude` itself.
    ///
    /// A vehicle abreast at exactly `dist` is neither ahead nor behind.
    pub fn neighbors(
        &self,
        lane: LaneId,
        dist: f64,
        exclude: Vin,
    ) -> (Option<&LaneEntry>, Option<&LaneEntry>) {
        let Some(entries) = self.by_lane.get(&lane) else {
            return (None, None);
        };
        let ahead = entries
            .iter()
            .find(|e| e.dist > dist && e.vin != exclude);
        let behind = entries
            .iter()
            .rev()
            .find(|e| e.dist < dist && e.vin != exclude);
        (ahead, behind)
    }

    /// Number of indexed vehicles on `lane`.
    pub fn lane_count(&self, lane: LaneId) -> usize {
        self.by_lane.get(&lane).map_or(0, Vec::len)
    }
}
