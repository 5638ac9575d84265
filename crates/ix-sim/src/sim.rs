//! The `Sim` struct and its tick loop.

use std::collections::BTreeMap;

use ix_admission::{Request, RequestHandler, ReservationLedger, Resolution};
use ix_control::{DriverContext, DriverModel};
use ix_core::{SimClock, SimConfig, SimRng, Tick, VehicleRng, Vin};
use ix_map::{Lane, RoadMap, SpawnPoint};
use ix_sensor::{DebugSink, ScanWorld, SensorEngine, SensorFrame};
use ix_vehicle::{Kinematics, Vehicle, VehicleSpec};
use tracing::trace;

use crate::observer::SimObserver;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ── StepResult ───────────────────────────────────────────────────────────────

/// What one simulation step produced.
#[derive(Debug, Default)]
pub struct StepResult {
    /// Vehicles retired this tick (left the mapped area).
    pub completed: Vec<Vin>,
    /// Crossing requests resolved this tick, in arrival order.
    pub resolutions: Vec<Resolution>,
}

// ── Sim ──────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<D, H, G, L>` owns all per-run state — the vehicle table, per-vehicle
/// drivers and RNGs, the sensor engine, the admission handler and ledger —
/// and drives the seven-phase tick loop documented at the crate root.
///
/// Vehicles live in a `BTreeMap` keyed by VIN so every per-tick iteration
/// runs in ascending VIN order; combined with per-vehicle seeded RNGs this
/// makes whole runs reproducible from `config.seed`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D, H, G, L>
where
    D: DriverModel + Clone,
    H: RequestHandler,
    G: ReservationLedger,
    L: Lane + Sync,
{
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// The road layout, immutable for the run.
    pub map: RoadMap<L>,

    /// All vehicles currently in the mapped area, keyed by VIN.
    pub vehicles: BTreeMap<Vin, Vehicle>,

    /// The sensor engine configuration (range, watched VIN).
    pub engine: SensorEngine,

    /// The admission policy for crossing requests.
    pub handler: H,

    /// The reservation ledger the handler grants against.
    pub ledger: G,

    pub(crate) drivers: BTreeMap<Vin, D>,
    pub(crate) rngs: BTreeMap<Vin, VehicleRng>,
    pub(crate) driver_proto: D,
    pub(crate) kinematics: Box<dyn Kinematics>,
    pub(crate) debug_sink: Box<dyn DebugSink>,
    pub(crate) rng: SimRng,
    pub(crate) next_vin: u32,
    pub(crate) inbox: Vec<Request>,
}

impl<D, H, G, L> Sim<D, H, G, L>
where
    D: DriverModel + Clone,
    H: RequestHandler,
    G: ReservationLedger,
    L: Lane + Sync,
{
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Queue a crossing request for resolution during the next step.
    ///
    /// Requests resolve strictly in submission order — granting one proposal
    /// can invalidate another vehicle's overlapping proposal, so the order
    /// is part of the contract.
    pub fn submit_request(&mut self, request: Request) {
        self.inbox.push(request);
    }

    /// Spawn a vehicle directly at `pos`, bypassing the spawn points.
    ///
    /// Returns the assigned VIN.  Intended for tests and scripted scenarios.
    pub fn spawn_vehicle_at(
        &mut self,
        spec: VehicleSpec,
        pos: ix_core::Point2,
        heading: f64,
        velocity: f64,
        lane: ix_core::LaneId,
    ) -> Vin {
        let vin = self.allocate_vin();
        let vehicle = Vehicle::new(vin, spec, pos, heading, velocity, lane);
        self.insert_vehicle(vehicle);
        vin
    }

    // ── One tick ──────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> StepResult {
        let now = self.clock.current_tick;
        let dt = self.clock.tick_duration_secs;
        observer.on_tick_start(now);

        // ── Phase 1: spawn ────────────────────────────────────────────────
        self.spawn_vehicles(dt, now, observer);

        // ── Phase 2: sense ────────────────────────────────────────────────
        //
        // Observation is pure over pre-tick positions; frames are applied
        // sequentially so every gauge write is ordered.
        let frames = self.observe_all();
        for frame in &frames {
            SensorEngine::emit_debug(frame, self.debug_sink.as_mut());
            if let Some(vehicle) = self.vehicles.get_mut(&frame.vin) {
                SensorEngine::apply(frame, vehicle);
            }
        }

        // ── Phase 3: drive ────────────────────────────────────────────────
        //
        // Each driver reads only its own vehicle's gauges and mutates only
        // its own target velocity.
        for (vin, vehicle) in self.vehicles.iter_mut() {
            let Some(driver) = self.drivers.get_mut(vin) else { continue };
            let Some(rng) = self.rngs.get_mut(vin) else { continue };
            let lane_limit = self
                .map
                .lane(vehicle.lane)
                .map_or(self.config.speed_limit, Lane::speed_limit);
            let command = {
                let ctx = DriverContext { vehicle: &*vehicle, lane_limit };
                driver.act(&ctx, rng)
            };
            if let Some(velocity) = command {
                vehicle.set_target_velocity(velocity);
            }
        }

        // ── Phase 4: admit ────────────────────────────────────────────────
        self.ledger.advance_to(self.clock.current_time());
        self.handler.act(dt);
        let mut resolutions = Vec::new();
        for request in std::mem::take(&mut self.inbox) {
            let resolution = self.handler.process_request(&request, &mut self.ledger);
            observer.on_admission(&resolution);
            resolutions.push(resolution);
        }

        // ── Phase 5: move ─────────────────────────────────────────────────
        for vehicle in self.vehicles.values_mut() {
            self.kinematics.advance(vehicle, dt);
        }

        // ── Phase 6: collide ──────────────────────────────────────────────
        self.latch_collisions(now, observer);

        // ── Phase 7: retire ───────────────────────────────────────────────
        let area = self.map.area();
        let completed: Vec<Vin> = self
            .vehicles
            .iter()
            .filter(|(_, v)| !area.contains(v.pos()))
            .map(|(vin, _)| *vin)
            .collect();
        for vin in &completed {
            self.vehicles.remove(vin);
            self.drivers.remove(vin);
            self.rngs.remove(vin);
            trace!(%vin, "vehicle retired");
            observer.on_exit(*vin, now);
        }

        observer.on_tick_end(now, self.vehicles.len());
        self.clock.advance();
        StepResult { completed, resolutions }
    }

    // ── Phase helpers ─────────────────────────────────────────────────────

    fn spawn_vehicles<O: SimObserver>(&mut self, dt: f64, now: Tick, observer: &mut O) {
        struct Pending {
            spec: ix_map::SpawnSpec,
            pos: ix_core::Point2,
            heading: f64,
        }

        let mut pending = Vec::new();
        for sp in self.map.spawn_points() {
            for spec in sp.act(dt, &mut self.rng) {
                if Self::zone_clear(&self.vehicles, sp) {
                    pending.push(Pending { spec, pos: sp.pos, heading: sp.heading });
                }
                // Only the first spec per spawn point per tick.
                break;
            }
        }

        for p in pending {
            let vin = self.allocate_vin();
            let vehicle = Vehicle::new(
                vin,
                VehicleSpec::with_body(p.spec.length, p.spec.width),
                p.pos,
                p.heading,
                p.spec.velocity,
                p.spec.lane,
            );
            self.insert_vehicle(vehicle);
            trace!(%vin, "vehicle spawned");
            observer.on_spawn(vin, now);
        }
    }

    fn zone_clear(vehicles: &BTreeMap<Vin, Vehicle>, sp: &SpawnPoint) -> bool {
        vehicles
            .values()
            .all(|v| v.pos().distance(sp.pos) > sp.no_vehicle_zone)
    }

    /// Observe every tracked vehicle against the immutable snapshot.
    fn observe_all(&self) -> Vec<SensorFrame> {
        let world = ScanWorld::new(self.vehicles.values().collect(), &self.map);
        let tracked: Vec<&Vehicle> =
            self.vehicles.values().filter(|v| v.tracking).collect();

        #[cfg(feature = "parallel")]
        {
            tracked
                .par_iter()
                .map(|v| self.engine.observe(v, &world))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            tracked
                .iter()
                .map(|v| self.engine.observe(v, &world))
                .collect()
        }
    }

    fn latch_collisions<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let boxes: Vec<(Vin, ix_core::Rect)> = self
            .vehicles
            .iter()
            .map(|(vin, v)| (*vin, v.bounds()))
            .collect();

        for i in 0..boxes.len() {
            let (a, box_a) = boxes[i];
            for &(b, box_b) in &boxes[i + 1..] {
                if !box_a.intersects(&box_b) {
                    continue;
                }
                let mut fresh = false;
                if let Some(v) = self.vehicles.get_mut(&a) {
                    fresh |= v.collision.notify(a, b);
                }
                if let Some(v) = self.vehicles.get_mut(&b) {
                    fresh |= v.collision.notify(b, a);
                }
                if fresh {
                    observer.on_collision(a, b, now);
                }
            }
        }
    }

    // ── Vehicle bookkeeping ───────────────────────────────────────────────

    fn allocate_vin(&mut self) -> Vin {
        let vin = Vin(self.next_vin);
        self.next_vin += 1;
        vin
    }

    fn insert_vehicle(&mut self, vehicle: Vehicle) {
        let vin = vehicle.vin();
        self.rngs.insert(vin, VehicleRng::new(self.config.seed, vin));
        self.drivers.insert(vin, self.driver_proto.clone());
        self.vehicles.insert(vin, vehicle);
    }
}
