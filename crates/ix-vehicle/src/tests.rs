//! Unit tests for vehicle state, gauges, and collision latching.

use ix_core::{LaneId, Point2, Vin};

use crate::{ConeId, Kinematics, Side, SimpleKinematics, Vehicle, VehicleSpec, NO_DETECTION};

fn eastbound_vehicle(vin: u32, x: f64) -> Vehicle {
    Vehicle::new(
        Vin(vin),
        VehicleSpec::default(),
        Point2::new(x, 0.0),
        0.0,
        20.0,
        LaneId(0),
    )
}

#[cfg(test)]
mod cones {
    use super::*;

    #[test]
    fn side_order_is_narrowest_first() {
        assert_eq!(
            ConeId::side_order(Side::Right),
            [ConeId::Right30, ConeId::Right45, ConeId::Right60]
        );
        assert_eq!(
            ConeId::side_order(Side::Left),
            [ConeId::Left30, ConeId::Left45, ConeId::Left60]
        );
    }

    #[test]
    fn offsets_mirror_by_side() {
        for side in [Side::Left, Side::Right] {
            for cone in ConeId::side_order(side) {
                assert_eq!(cone.side(), side);
            }
        }
        assert_eq!(ConeId::Right45.angle_offset(), -ConeId::Left45.angle_offset());
    }

    #[test]
    fn indexes_are_distinct() {
        let mut seen = [false; 6];
        for cone in ConeId::ALL {
            assert!(!seen[cone.index()]);
            seen[cone.index()] = true;
        }
    }
}

#[cfg(test)]
mod gauges {
    use super::*;
    use crate::VehicleGauges;
    use ix_core::SimRng;

    #[test]
    fn all_gauges_start_at_no_detection() {
        let g = VehicleGauges::new();
        assert_eq!(g.front_distance.read(), NO_DETECTION);
        assert_eq!(g.rear_speed.read(), NO_DETECTION);
        for cone in ConeId::ALL {
            assert_eq!(g.cone(cone).read(), NO_DETECTION);
        }
    }

    #[test]
    fn cone_gauges_are_independent() {
        let mut g = VehicleGauges::new();
        g.cone_mut(ConeId::Left45).record(120.0);
        assert_eq!(g.cone(ConeId::Left45).read(), 120.0);
        assert_eq!(g.cone(ConeId::Right45).read(), NO_DETECTION);
    }

    #[test]
    fn noisy_bank_builds_and_stays_bounded() {
        let mut rng = SimRng::new(5);
        let mut g = VehicleGauges::with_gaussian_noise(0.5, &mut rng);
        for _ in 0..50 {
            g.front_distance.record(30.0);
            assert!(g.front_distance.read() >= 0.0);
        }
    }
}

#[cfg(test)]
mod body {
    use super::*;

    #[test]
    fn bounds_extend_behind_front_bumper() {
        let v = eastbound_vehicle(1, 50.0);
        let b = v.bounds();
        // Eastbound: body spans [pos - length, pos] in x.
        assert!((b.min.x - 45.0).abs() < 1e-9);
        assert!((b.max.x - 50.0).abs() < 1e-9);
        assert!((b.max.y - b.min.y - v.spec.width).abs() < 1e-9);
    }

    #[test]
    fn bounds_follow_heading() {
        let mut v = eastbound_vehicle(1, 0.0);
        v.set_heading(std::f64::consts::FRAC_PI_2);
        let b = v.bounds();
        // Southbound in the y-down frame: body spans [pos.y - length, pos.y].
        assert!((b.min.y + 5.0).abs() < 1e-9);
        assert!((b.max.x - b.min.x - v.spec.width).abs() < 1e-9);
    }

    #[test]
    fn target_velocity_clamps_to_spec() {
        let mut v = eastbound_vehicle(1, 0.0);
        v.set_target_velocity(1_000.0);
        assert_eq!(v.target_velocity(), v.spec.max_velocity);
        v.set_target_velocity(-5.0);
        assert_eq!(v.target_velocity(), 0.0);
    }
}

#[cfg(test)]
mod collision {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let mut v = eastbound_vehicle(1, 0.0);
        assert!(!v.collision.had_collision());
        assert!(v.collision.notify(Vin(1), Vin(2)));
        assert!(v.collision.had_collision());
        // Second notification, different partner: no-op on the flag and pair.
        assert!(!v.collision.notify(Vin(1), Vin(3)));
        assert!(v.collision.had_collision());
        assert_eq!(v.collision.pair(), Some((Vin(1), Vin(2))));
    }

    #[test]
    fn impact_details_not_populated() {
        let mut v = eastbound_vehicle(1, 0.0);
        v.collision.notify(Vin(1), Vin(2));
        assert!(v.collision.impact_time.is_none());
        assert!(v.collision.own_speed.is_none());
        assert!(v.collision.other_speed.is_none());
    }
}

#[cfg(test)]
mod kinematics {
    use super::*;

    #[test]
    fn velocity_slews_toward_target() {
        let mut v = eastbound_vehicle(1, 0.0);
        v.set_target_velocity(30.0);
        SimpleKinematics.advance(&mut v, 1.0);
        // One second at max_accel 3.25 from 20 m/s.
        assert!((v.velocity() - 23.25).abs() < 1e-9);
    }

    #[test]
    fn braking_respects_decel_limit() {
        let mut v = eastbound_vehicle(1, 0.0);
        v.set_target_velocity(0.0);
        SimpleKinematics.advance(&mut v, 1.0);
        assert!((v.velocity() - 15.5).abs() < 1e-9);
    }

    #[test]
    fn position_advances_along_heading() {
        let mut v = eastbound_vehicle(1, 10.0);
        v.set_target_velocity(20.0); // already at target
        SimpleKinematics.advance(&mut v, 0.5);
        assert!((v.pos().x - 20.0).abs() < 1e-9);
        assert!(v.pos().y.abs() < 1e-12);
    }
}
