//! Unit tests for the sensor-response law and driver models.

use ix_core::{LaneId, Point2, ScriptedGaussian, Vin};
use ix_vehicle::{ConeId, Vehicle, VehicleGauges, VehicleSpec};

use crate::{SensorResponder, SpeedControl};

const LIMIT: f64 = 25.0;

/// A curve with σ = 1 so scripted draws map straight onto adjustments.
fn unit_control() -> SpeedControl {
    SpeedControl { std: 1.0, ..Default::default() }
}

fn responder() -> SensorResponder {
    SensorResponder::new(unit_control())
}

fn gauges(front: Option<(f64, f64)>, cones: &[(ConeId, f64)]) -> VehicleGauges {
    let mut g = VehicleGauges::new();
    if let Some((gap, speed)) = front {
        g.front_distance.record(gap);
        g.front_speed.record(speed);
    }
    for &(cone, d) in cones {
        g.cone_mut(cone).record(d);
    }
    g
}

/// One respond call with the adjustment draw forced to `g`.
fn respond_with(r: &mut SensorResponder, gauges: &VehicleGauges, g: f64) -> Option<f64> {
    let mut rng = ScriptedGaussian::new(vec![g]);
    r.respond(gauges, 20.0, LIMIT, &mut rng)
}

#[cfg(test)]
mod front_field {
    use super::*;

    #[test]
    fn emergency_braking_formula() {
        let g = gauges(Some((2.0, 5.0)), &[]);
        assert_eq!(respond_with(&mut responder(), &g, 0.0), Some(3.0));
    }

    #[test]
    fn emergency_floors_at_one() {
        let g = gauges(Some((2.0, 1.0)), &[]);
        assert_eq!(respond_with(&mut responder(), &g, 0.0), Some(1.0));
    }

    #[test]
    fn emergency_ignores_cooldown() {
        let mut r = SensorResponder::new(unit_control()).with_response_wait(10);
        // Arm the cooldown with a non-critical response first.
        let clear = gauges(None, &[]);
        assert!(respond_with(&mut r, &clear, 0.0).is_some());
        assert!(r.response_counter() > 0);

        let danger = gauges(Some((2.0, 5.0)), &[]);
        assert_eq!(respond_with(&mut r, &danger, 0.0), Some(3.0));
    }

    #[test]
    fn emergency_ignores_speed_floor() {
        let control = SpeedControl { speed_min: 10.0, ..unit_control() };
        let mut r = SensorResponder::new(control);
        let g = gauges(Some((2.0, 5.0)), &[]);
        assert_eq!(respond_with(&mut r, &g, 0.0), Some(3.0));
    }

    #[test]
    fn car_following_matches_front_speed() {
        let g = gauges(Some((8.0, 12.0)), &[]);
        assert_eq!(respond_with(&mut responder(), &g, 0.0), Some(12.0));
    }

    #[test]
    fn car_following_ignores_cooldown() {
        let mut r = SensorResponder::new(unit_control()).with_response_wait(10);
        let clear = gauges(None, &[]);
        respond_with(&mut r, &clear, 0.0);
        let g = gauges(Some((8.0, 12.0)), &[]);
        assert_eq!(respond_with(&mut r, &g, 0.0), Some(12.0));
    }

    #[test]
    fn comfortable_gap_falls_through_to_cones() {
        let g = gauges(Some((50.0, 12.0)), &[]);
        // No cone hits either → reset to the lane limit.
        assert_eq!(respond_with(&mut responder(), &g, 0.0), Some(LIMIT));
    }
}

#[cfg(test)]
mod cone_table {
    use super::*;

    // All rows below draw g = 2.0, so the clamped adjustment is +2 and the
    // unbiased candidate is 27.0 against the 25.0 limit.

    #[test]
    fn critical_bilateral_uses_candidate_unbiased() {
        let g = gauges(None, &[(ConeId::Left45, 50.0), (ConeId::Right45, 60.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(27.0));
    }

    #[test]
    fn critical_left_biases_toward_acceleration() {
        let g = gauges(None, &[(ConeId::Left45, 50.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(32.0));
    }

    #[test]
    fn critical_right_biases_toward_deceleration() {
        let g = gauges(None, &[(ConeId::Right45, 50.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(22.0));
    }

    #[test]
    fn near_30_band_decelerates_either_side() {
        let left = gauges(None, &[(ConeId::Left30, 50.0)]);
        assert_eq!(respond_with(&mut responder(), &left, 2.0), Some(22.0));
        let right = gauges(None, &[(ConeId::Right30, 50.0)]);
        assert_eq!(respond_with(&mut responder(), &right, 2.0), Some(22.0));
    }

    #[test]
    fn near_60_band_accelerates_either_side() {
        let g = gauges(None, &[(ConeId::Right60, 40.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(32.0));
    }

    #[test]
    fn advisory_bilateral_uses_candidate_unbiased() {
        let g = gauges(None, &[(ConeId::Left45, 150.0), (ConeId::Right45, 150.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(27.0));
    }

    #[test]
    fn advisory_left_accelerates() {
        let g = gauges(None, &[(ConeId::Left45, 150.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(32.0));
    }

    #[test]
    fn advisory_right_decelerates() {
        let g = gauges(None, &[(ConeId::Right45, 150.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(22.0));
    }

    #[test]
    fn advisory_30_band_decelerates() {
        let g = gauges(None, &[(ConeId::Right30, 100.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(22.0));
    }

    #[test]
    fn advisory_60_band_accelerates() {
        let g = gauges(None, &[(ConeId::Left60, 80.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(32.0));
    }

    #[test]
    fn clear_cones_reset_to_lane_limit() {
        let g = gauges(None, &[]);
        // The candidate draw is irrelevant once every row misses.
        assert_eq!(respond_with(&mut responder(), &g, 3.0), Some(LIMIT));
    }

    #[test]
    fn critical_30_outranks_advisory_45() {
        let g = gauges(None, &[(ConeId::Left30, 50.0), (ConeId::Left45, 150.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(22.0));
    }

    #[test]
    fn critical_left_45_outranks_critical_right_30() {
        let g = gauges(None, &[(ConeId::Left45, 90.0), (ConeId::Right30, 50.0)]);
        assert_eq!(respond_with(&mut responder(), &g, 2.0), Some(32.0));
    }
}

#[cfg(test)]
mod adjustments {
    use super::*;

    #[test]
    fn reduction_magnitude_clamps_into_window() {
        let control = SpeedControl { min_red: 2.0, max_red: 4.0, ..unit_control() };
        let mut r = SensorResponder::new(control);
        // Draw −1 → magnitude below min_red, pulled up to −2.
        let g = gauges(None, &[(ConeId::Left45, 150.0), (ConeId::Right45, 150.0)]);
        assert_eq!(respond_with(&mut r, &g, -1.0), Some(23.0));
    }

    #[test]
    fn increase_clamped_by_max_inc_and_speed_window() {
        let control = SpeedControl { max_inc: 3.0, ..unit_control() };
        let mut r = SensorResponder::new(control);
        let g = gauges(None, &[(ConeId::Left45, 150.0)]);
        // Draw +10 → adjustment capped at +3 → candidate 28, accel bias 33,
        // then the speed window caps at limit + max_inc = 28.
        assert_eq!(respond_with(&mut r, &g, 10.0), Some(28.0));
    }

    #[test]
    fn reduction_floor_from_max_red() {
        let control = SpeedControl { max_red: 4.0, ..unit_control() };
        let mut r = SensorResponder::new(control);
        let g = gauges(None, &[(ConeId::Right45, 150.0)]);
        // Draw −10 → adjustment capped at −4 → candidate 21, decel bias 16,
        // floored at limit − max_red = 21.
        assert_eq!(respond_with(&mut r, &g, -10.0), Some(21.0));
    }

    #[test]
    fn speed_relative_builds_on_current_velocity() {
        let control = SpeedControl { speed_relative: true, ..unit_control() };
        let mut r = SensorResponder::new(control);
        let g = gauges(None, &[(ConeId::Left45, 150.0), (ConeId::Right45, 150.0)]);
        // Current velocity is 20.0 in respond_with; draw 0 → candidate 20.
        assert_eq!(respond_with(&mut r, &g, 0.0), Some(20.0));
    }
}

#[cfg(test)]
mod cooldown {
    use super::*;

    #[test]
    fn non_critical_responses_rate_limited() {
        let mut r = SensorResponder::new(unit_control()).with_response_wait(3);
        let g = gauges(None, &[(ConeId::Left45, 150.0)]);

        assert!(respond_with(&mut r, &g, 0.0).is_some());
        // The next responseWait − 1 ticks stay silent even though the cone
        // keeps reporting the same obstacle.
        assert_eq!(respond_with(&mut r, &g, 0.0), None);
        assert_eq!(respond_with(&mut r, &g, 0.0), None);
        // Then the window reopens.
        assert!(respond_with(&mut r, &g, 0.0).is_some());
    }

    #[test]
    fn counter_decrements_below_zero_while_idle() {
        let mut r = responder();
        let g = gauges(Some((8.0, 12.0)), &[]);
        // Car-following branches never touch the counter.
        for _ in 0..5 {
            respond_with(&mut r, &g, 0.0);
        }
        assert!(r.response_counter() < 0);
    }

    #[test]
    fn default_wait_responds_every_tick() {
        let mut r = responder();
        let g = gauges(None, &[(ConeId::Right45, 150.0)]);
        assert!(respond_with(&mut r, &g, 0.0).is_some());
        assert!(respond_with(&mut r, &g, 0.0).is_some());
    }
}

#[cfg(test)]
mod drivers {
    use super::*;
    use crate::{CruiseDriver, DriverContext, DriverModel, SensorDriver};

    fn vehicle_with(g: VehicleGauges) -> Vehicle {
        let mut v = Vehicle::new(
            Vin(1),
            VehicleSpec::default(),
            Point2::new(0.0, 0.0),
            0.0,
            20.0,
            LaneId(0),
        );
        v.gauges = g;
        v
    }

    #[test]
    fn sensor_driver_applies_the_law() {
        let v = vehicle_with(gauges(Some((2.0, 5.0)), &[]));
        let mut driver = SensorDriver::new(unit_control());
        let ctx = DriverContext { vehicle: &v, lane_limit: LIMIT };
        let mut rng = ScriptedGaussian::new(vec![0.0]);
        assert_eq!(driver.act(&ctx, &mut rng), Some(3.0));
    }

    #[test]
    fn cruise_driver_holds_the_limit() {
        let v = vehicle_with(gauges(None, &[]));
        let mut driver = CruiseDriver;
        let ctx = DriverContext { vehicle: &v, lane_limit: LIMIT };
        let mut rng = ScriptedGaussian::new(vec![5.0]);
        assert_eq!(driver.act(&ctx, &mut rng), Some(LIMIT));
    }

    #[test]
    fn cloned_drivers_have_independent_cooldowns() {
        let proto = SensorDriver::new(unit_control()).with_response_wait(4);
        let mut a = proto.clone();
        let mut b = proto.clone();
        let v = vehicle_with(gauges(None, &[(ConeId::Left45, 150.0)]));
        let ctx = DriverContext { vehicle: &v, lane_limit: LIMIT };

        let mut act = |d: &mut SensorDriver| {
            let mut rng = ScriptedGaussian::new(vec![0.0]);
            d.act(&ctx, &mut rng)
        };
        // Arming one clone leaves the other free.
        assert!(act(&mut a).is_some());
        assert!(act(&mut b).is_some());
        assert_eq!(act(&mut a), None);
    }
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn default_control_is_valid() {
        assert!(SpeedControl::default().validate().is_ok());
    }

    #[test]
    fn negative_std_rejected() {
        let c = SpeedControl { std: -1.0, ..Default::default() };
        let err = c.validate().unwrap_err().to_string();
        assert!(err.contains("standard deviation"), "got: {err}");
    }

    #[test]
    fn inverted_reduction_window_rejected() {
        let c = SpeedControl { min_red: 5.0, max_red: 2.0, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn inverted_speed_window_rejected() {
        let c = SpeedControl { speed_min: 30.0, speed_max: 20.0, ..Default::default() };
        assert!(c.validate().is_err());
    }
}
