//! The kinematics-provider seam.
//!
//! Realistic vehicle dynamics are outside this framework: the decision core
//! only commands a target velocity.  Whatever integrates those commands
//! implements [`Kinematics`]; [`SimpleKinematics`] ships as the reference
//! collaborator so the simulation loop and the tests can run end-to-end.

use crate::Vehicle;

/// Advances a vehicle's velocity and position over one time step.
pub trait Kinematics {
    fn advance(&self, vehicle: &mut Vehicle, dt: f64);
}

/// Straight-line integration under the spec's acceleration limits.
///
/// Velocity slews toward the target at no more than `max_accel` up or
/// `max_decel` down; position advances along the current heading.  No
/// steering model — heading is constant unless something external changes it.
pub struct SimpleKinematics;

impl Kinematics for SimpleKinematics {
    fn advance(&self, vehicle: &mut Vehicle, dt: f64) {
        let dv = vehicle.target_velocity() - vehicle.velocity();
        let step = dv.clamp(
            -vehicle.spec.max_decel * dt,
            vehicle.spec.max_accel * dt,
        );
        vehicle.set_velocity(vehicle.velocity() + step);

        let travel = vehicle.velocity() * dt;
        vehicle.set_pos(vehicle.pos().project(vehicle.heading(), travel));
    }
}
