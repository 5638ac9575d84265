//! Spawn points: where and how new traffic enters the mapped area.

use ix_core::{LaneId, Point2, SimRng};

/// One vehicle the spawn point wants created this tick.
///
/// Body dimensions travel with the spec so heterogeneous traffic is possible
/// without the spawn point knowing anything about the vehicle type system.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnSpec {
    /// Lane the vehicle enters on (also its initial target lane).
    pub lane: LaneId,
    /// Initial and target velocity, m/s.
    pub velocity: f64,
    /// Body length, metres.
    pub length: f64,
    /// Body width, metres.
    pub width: f64,
}

// ── SpawnPoint ───────────────────────────────────────────────────────────────

/// A lane entry that stochastically emits spawn specifications.
///
/// Each tick, `act` draws once against `traffic_level * dt` — the uniform
/// per-second spawn probability — and yields at most one spec.  Whether the
/// spec actually becomes a vehicle is the simulation's call (it must first
/// check the no-vehicle zone around `pos`).
#[derive(Clone, Debug)]
pub struct SpawnPoint {
    pub lane: LaneId,
    /// Front-bumper position a spawned vehicle starts at.
    pub pos: Point2,
    /// Heading a spawned vehicle starts with, radians.
    pub heading: f64,
    /// Spawn probability weight per simulated second.
    pub traffic_level: f64,
    /// Velocity assigned to spawned traffic (normally the lane limit).
    pub spawn_velocity: f64,
    /// Radius around `pos` that must be clear of other vehicles, metres.
    pub no_vehicle_zone: f64,
    /// Body dimensions for spawned traffic.
    pub vehicle_length: f64,
    pub vehicle_width: f64,
}

impl SpawnPoint {
    /// Let the spawn point act for one time step of `dt` seconds.
    ///
    /// Returns the specs to spawn this tick, possibly empty.
    pub fn act(&self, dt: f64, rng: &mut SimRng) -> Vec<SpawnSpec> {
        if rng.gen_bool(self.traffic_level * dt) {
            vec![SpawnSpec {
                lane: self.lane,
                velocity: self.spawn_velocity,
                length: self.vehicle_length,
                width: self.vehicle_width,
            }]
        } else {
            vec![]
        }
    }
}
