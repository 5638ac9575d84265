//! `RoadMap` — everything the simulation owns about the road layout.

use ix_core::{LaneId, Rect};

use crate::{Lane, MapError, MapResult, SpawnPoint};

/// The lanes, spawn points, and boundary of one simulated area.
///
/// Lanes are stored in `LaneId` order — `lane(id)` indexes directly, so lane
/// ids must be dense from zero.  The map is immutable once built; per-tick
/// components borrow it read-only.
pub struct RoadMap<L: Lane> {
    lanes: Vec<L>,
    spawn_points: Vec<SpawnPoint>,
    /// Vehicles whose position leaves this rectangle are retired.
    area: Rect,
}

impl<L: Lane> RoadMap<L> {
    /// Build a map, checking that lane ids match their positions.
    pub fn new(lanes: Vec<L>, spawn_points: Vec<SpawnPoint>, area: Rect) -> MapResult<Self> {
        for (i, lane) in lanes.iter().enumerate() {
            if lane.id().index() != i {
                return Err(MapError::LaneIdOutOfOrder {
                    expected: i,
                    got: lane.id(),
                });
            }
        }
        for sp in &spawn_points {
            if sp.lane.index() >= lanes.len() {
                return Err(MapError::UnknownSpawnLane(sp.lane));
            }
        }
        Ok(Self { lanes, spawn_points, area })
    }

    #[inline]
    pub fn lane(&self, id: LaneId) -> Option<&L> {
        self.lanes.get(id.index())
    }

    #[inline]
    pub fn lanes(&self) -> &[L] {
        &self.lanes
    }

    #[inline]
    pub fn spawn_points(&self) -> &[SpawnPoint] {
        &self.spawn_points
    }

    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }
}
