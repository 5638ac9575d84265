//! Configuration of the stochastic speed-adjustment curve.

use crate::{ControlError, ControlResult};

/// All of the controls for sensor-based speed adjustment.  Immutable for a
/// run.
///
/// An adjustment is drawn as `mean + std · N(0,1)`, then clamped by sign:
/// increases into `[min_inc, max_inc]`, reductions into `[min_red,
/// max_red]`.  `accel_shift` / `decel_shift` bias the result when a
/// directional cue favors speeding up or slowing down, and `speed_relative`
/// selects whether the adjustment is applied on top of the current speed or
/// the lane speed limit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpeedControl {
    /// Mean of the adjustment curve, m/s.
    pub mean: f64,
    /// Standard deviation of the adjustment curve, m/s.
    pub std: f64,
    /// Minimum speed reduction magnitude, m/s.
    pub min_red: f64,
    /// Maximum speed reduction magnitude, m/s.
    pub max_red: f64,
    /// Minimum speed increase, m/s.
    pub min_inc: f64,
    /// Maximum speed increase, m/s.
    pub max_inc: f64,
    /// Absolute floor a vehicle may be reduced to, m/s.
    pub speed_min: f64,
    /// Absolute ceiling a vehicle may be increased to, m/s.
    pub speed_max: f64,
    /// Apply adjustments relative to the current speed instead of the lane
    /// speed limit.
    pub speed_relative: bool,
    /// Shift added to acceleration-tending responses, m/s.
    pub accel_shift: f64,
    /// Shift added to deceleration-tending responses, m/s (normally
    /// negative).
    pub decel_shift: f64,
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std: 10.0,
            min_red: 0.0,
            max_red: f64::MAX,
            min_inc: 0.0,
            max_inc: f64::MAX,
            speed_min: 0.0,
            speed_max: f64::MAX,
            speed_relative: false,
            accel_shift: 5.0,
            decel_shift: -5.0,
        }
    }
}

impl SpeedControl {
    /// Check every parameter against its documented bounds.
    pub fn validate(&self) -> ControlResult<()> {
        if self.std < 0.0 {
            return Err(ControlError::Config(format!(
                "standard deviation may not be less than 0, got {}",
                self.std
            )));
        }
        if self.min_red < 0.0 || self.min_inc < 0.0 {
            return Err(ControlError::Config(
                "adjustment magnitudes may not be negative".into(),
            ));
        }
        if self.min_red > self.max_red {
            return Err(ControlError::Config(format!(
                "min reduction {} exceeds max reduction {}",
                self.min_red, self.max_red
            )));
        }
        if self.min_inc > self.max_inc {
            return Err(ControlError::Config(format!(
                "min increase {} exceeds max increase {}",
                self.min_inc, self.max_inc
            )));
        }
        if self.speed_min > self.speed_max {
            return Err(ControlError::Config(format!(
                "speed minimum {} exceeds speed maximum {}",
                self.speed_min, self.speed_max
            )));
        }
        Ok(())
    }
}
