//! `ix-core` — foundational types for the `rust_ix` intersection framework.
//!
//! This crate is a dependency of every other `ix-*` crate.  It intentionally
//! has no `ix-*` dependencies and minimal external ones (only `rand`,
//! `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `Vin`, `LaneId`, `RequestId`                          |
//! | [`geom`]     | `Point2`, `Rect`, `Ray`, segment–rectangle clipping   |
//! | [`time`]     | `Tick`, `SimClock`                                    |
//! | [`rng`]      | `VehicleRng` (per-vehicle), `SimRng` (global),        |
//! |              | `GaussianSource`, `ScriptedGaussian`                  |
//! | [`config`]   | `SimConfig` and setup-time validation                 |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geom::{Point2, Ray, Rect};
pub use ids::{LaneId, RequestId, Vin};
pub use rng::{GaussianSource, ScriptedGaussian, SimRng, VehicleRng};
pub use time::{SimClock, Tick};
