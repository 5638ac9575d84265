//! `ix-control` — how a vehicle without centralized control adjusts its
//! speed from its own sensor cones.
//!
//! Every tick the control law reads the vehicle's gauges and emits at most
//! one target-velocity command.  Front-field collision avoidance applies
//! unconditionally; lateral cone responses draw a random adjustment and are
//! rate-limited by a cooldown counter.  The randomness plus the cooldown is
//! the deadlock-breaking mechanism: two vehicles symmetrically blocked will,
//! with high probability, eventually draw divergent adjustments and
//! separate.
//!
//! | Module            | Contents                                     |
//! |-------------------|----------------------------------------------|
//! | [`speed_control`] | `SpeedControl` — adjustment-curve parameters |
//! | [`law`]           | `SensorResponder` — the decision table       |
//! | [`driver`]        | `DriverModel`, `SensorDriver`, `CruiseDriver`|
//! | [`error`]         | `ControlError`, `ControlResult`              |

pub mod driver;
pub mod error;
pub mod law;
pub mod speed_control;

#[cfg(test)]
mod tests;

pub use driver::{CruiseDriver, DriverContext, DriverModel, SensorDriver};
pub use error::{ControlError, ControlResult};
pub use law::{SensorResponder, DEFAULT_RESPONSE_WAIT};
pub use speed_control::SpeedControl;
