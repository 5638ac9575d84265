//! `ix-sim` — the per-tick composition of the decision core.
//!
//! # Tick phases
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Spawn      — spawn points draw; clear-zone check; at most one
//!                  vehicle per point per tick.
//!   ② Sense      — observe every tracked vehicle against the immutable
//!                  snapshot (parallel with the `parallel` feature), then
//!                  apply frames to gauges sequentially.
//!   ③ Drive      — each driver reads its own gauges and may command a
//!                  target velocity.
//!   ④ Admit      — queued crossing requests resolve against the ledger
//!                  in arrival order.
//!   ⑤ Move       — the kinematics provider integrates each vehicle.
//!   ⑥ Collide    — overlapping bodies latch their collision trackers.
//!   ⑦ Retire     — vehicles outside the mapped area are removed.
//! ```
//!
//! Phases never interleave: all sensor writes finish before any driver
//! acts, and all drivers act before the tick advances.  Nothing in the loop
//! blocks, suspends, or performs I/O.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs the observation phase on Rayon's pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ix_admission::{NoStopHandler, TimeWindowLedger};
//! use ix_control::{SensorDriver, SpeedControl};
//! use ix_core::SimConfig;
//! use ix_sim::{NoopObserver, SimBuilder};
//!
//! let driver = SensorDriver::new(SpeedControl::default());
//! let mut sim = SimBuilder::new(config, map, driver, NoStopHandler, TimeWindowLedger::new(30.0))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, StepResult};
