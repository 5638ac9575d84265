//! `ix-sensor` — what each vehicle's onboard sensors detect this tick.
//!
//! The engine runs once per tick, after vehicle positions are finalized and
//! before any control law acts.  For every tracked vehicle it computes:
//!
//! - **lane-relative tracking** — the nearest vehicle strictly ahead and
//!   strictly behind on the vehicle's target lane, as bumper gaps plus the
//!   neighbors' speeds;
//! - **angular cones** — six fixed rays (±30°, ±45°, ±60° off heading,
//!   400 m range) tested against every other vehicle's bounding box.
//!
//! # Two-phase scan
//!
//! Observation is pure: [`SensorEngine::observe`] reads the immutable
//! [`ScanWorld`] and returns a [`SensorFrame`] of raw readings.  Applying a
//! frame ([`SensorEngine::apply`]) is the only mutation, writing into that
//! one vehicle's gauges.  The split keeps the observe phase safe to fan out
//! across vehicles — no vehicle's frame depends on another's gauge writes,
//! only on pre-tick state.
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`index`]  | `LaneIndex` — per-lane positions sorted          |
//! | [`engine`] | `SensorEngine`, `ScanWorld`, `SensorFrame`       |
//! | [`debug`]  | `DebugSink`, `NoopDebugSink`                     |

pub mod debug;
pub mod engine;
pub mod index;


pub use debug::{DebugSink, NoopDebugSink};
pub use engine::{ScanWorld, SensorEngine, SensorFrame, SENSOR_RANGE};
pub use index::{LaneEntry, LaneIndex};
