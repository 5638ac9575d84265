//! `ix-vehicle` — per-vehicle state shared by the sensor engine, the control
//! law, and the simulation loop.
//!
//! A [`Vehicle`] is owned by the simulation loop and only ever borrowed by
//! the other components.  Everything the decision core knows about a vehicle
//! lives here: its pose and velocities, its body rectangle, its named
//! [`VehicleGauges`], and its one-shot [`CollisionTracker`].
//!
//! | Module         | Contents                                         |
//! |----------------|--------------------------------------------------|
//! | [`spec_sheet`] | `VehicleSpec` — body dimensions, accel bounds    |
//! | [`vehicle`]    | `Vehicle` — pose, velocities, bounds             |
//! | [`gauges`]     | `ConeId`, `VehicleGauges`, `NO_DETECTION`        |
//! | [`collision`]  | `CollisionTracker`                               |
//! | [`kinematics`] | `Kinematics` trait, `SimpleKinematics`           |

pub mod collision;
pub mod gauges;
pub mod kinematics;
pub mod spec_sheet;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use collision::CollisionTracker;
pub use gauges::{ConeId, Side, VehicleGauges, NO_DETECTION};
pub use kinematics::{Kinematics, SimpleKinematics};
pub use spec_sheet::VehicleSpec;
pub use vehicle::Vehicle;
