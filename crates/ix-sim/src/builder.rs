//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use ix_admission::{RequestHandler, ReservationLedger};
use ix_control::DriverModel;
use ix_core::{SimConfig, SimRng};
use ix_map::{Lane, RoadMap};
use ix_sensor::{DebugSink, NoopDebugSink, SensorEngine};
use ix_vehicle::{Kinematics, SimpleKinematics};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<D, H, G, L>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick duration, …
/// - [`RoadMap`] — lanes, spawn points, mapped area
/// - `D: DriverModel + Clone` — the prototype cloned for each spawned vehicle
/// - `H: RequestHandler` — the admission policy
/// - `G: ReservationLedger` — the reservation ledger
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                    |
/// |------------------|----------------------------|
/// | `.engine(e)`     | `SensorEngine::new()`      |
/// | `.kinematics(k)` | `SimpleKinematics`         |
/// | `.debug_sink(s)` | `NoopDebugSink`            |
///
/// # Example
///
/// ```rust,ignore
/// let driver = SensorDriver::new(SpeedControl::default());
/// let mut sim = SimBuilder::new(config, map, driver, NoStopHandler, ledger)
///     .engine(SensorEngine::new().watch(Vin(3)))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<D, H, G, L>
where
    D: DriverModel + Clone,
    H: RequestHandler,
    G: ReservationLedger,
    L: Lane + Sync,
{
    config: SimConfig,
    map: RoadMap<L>,
    driver_proto: D,
    handler: H,
    ledger: G,
    engine: Option<SensorEngine>,
    kinematics: Option<Box<dyn Kinematics>>,
    debug_sink: Option<Box<dyn DebugSink>>,
}

impl<D, H, G, L> SimBuilder<D, H, G, L>
where
    D: DriverModel + Clone,
    H: RequestHandler,
    G: ReservationLedger,
    L: Lane + Sync,
{
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, map: RoadMap<L>, driver_proto: D, handler: H, ledger: G) -> Self {
        Self {
            config,
            map,
            driver_proto,
            handler,
            ledger,
            engine: None,
            kinematics: None,
            debug_sink: None,
        }
    }

    /// Supply a configured sensor engine (range, watched VIN).
    pub fn engine(mut self, engine: SensorEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Supply the kinematics provider that integrates actuator commands.
    pub fn kinematics(mut self, kinematics: Box<dyn Kinematics>) -> Self {
        self.kinematics = Some(kinematics);
        self
    }

    /// Supply the sink that receives watched-vehicle debug geometry.
    pub fn debug_sink(mut self, sink: Box<dyn DebugSink>) -> Self {
        self.debug_sink = Some(sink);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<D, H, G, L>> {
        self.config.validate()?;

        let clock = self.config.make_clock();
        let rng = SimRng::new(self.config.seed);

        Ok(Sim {
            config: self.config,
            clock,
            map: self.map,
            vehicles: BTreeMap::new(),
            engine: self.engine.unwrap_or_default(),
            handler: self.handler,
            ledger: self.ledger,
            drivers: BTreeMap::new(),
            rngs: BTreeMap::new(),
            driver_proto: self.driver_proto,
            kinematics: self.kinematics.unwrap_or_else(|| Box::new(SimpleKinematics)),
            debug_sink: self.debug_sink.unwrap_or_else(|| Box::new(NoopDebugSink)),
            rng,
            next_vin: 0,
            inbox: Vec::new(),
        })
    }
}
