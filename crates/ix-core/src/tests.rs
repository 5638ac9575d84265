//! Unit tests for ix-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LaneId, RequestId, Vin};

    #[test]
    fn index_roundtrip() {
        let vin = Vin(42);
        assert_eq!(vin.index(), 42);
        assert_eq!(Vin::try_from(42usize).unwrap(), vin);
    }

    #[test]
    fn ordering() {
        assert!(Vin(0) < Vin(1));
        assert!(LaneId(100) > LaneId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(Vin::INVALID.0, u32::MAX);
        assert_eq!(LaneId::INVALID.0, u32::MAX);
        assert_eq!(RequestId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Vin(7).to_string(), "Vin(7)");
    }
}

#[cfg(test)]
mod geom {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_6};

    use crate::{Point2, Ray, Rect};

    #[test]
    fn distance_is_euclidean() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn project_along_heading() {
        let p = Point2::new(1.0, 1.0).project(0.0, 5.0);
        assert!((p.x - 6.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);

        let q = Point2::new(0.0, 0.0).project(FRAC_PI_2, 2.0);
        assert!(q.x.abs() < 1e-12);
        assert!((q.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn bounding_covers_all_points() {
        let r = Rect::bounding(&[
            Point2::new(-1.0, 4.0),
            Point2::new(3.0, -2.0),
            Point2::new(0.5, 0.5),
        ]);
        assert_eq!(r.min, Point2::new(-1.0, -2.0));
        assert_eq!(r.max, Point2::new(3.0, 4.0));
    }

    #[test]
    fn rect_overlap() {
        let a = Rect::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let b = Rect::new(Point2::new(1.0, 1.0), Point2::new(3.0, 3.0));
        let c = Rect::new(Point2::new(5.0, 5.0), Point2::new(6.0, 6.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn ray_hits_rect_in_path() {
        let ray = Ray::new(Point2::new(0.0, 0.0), 0.0, 100.0);
        let hit = Rect::new(Point2::new(10.0, -1.0), Point2::new(12.0, 1.0));
        assert!(ray.intersects_rect(&hit));
    }

    #[test]
    fn ray_misses_rect_behind_origin() {
        let ray = Ray::new(Point2::new(0.0, 0.0), 0.0, 100.0);
        let behind = Rect::new(Point2::new(-12.0, -1.0), Point2::new(-10.0, 1.0));
        assert!(!ray.intersects_rect(&behind));
    }

    #[test]
    fn ray_misses_rect_beyond_range() {
        let ray = Ray::new(Point2::new(0.0, 0.0), 0.0, 100.0);
        let far = Rect::new(Point2::new(101.0, -1.0), Point2::new(105.0, 1.0));
        assert!(!ray.intersects_rect(&far));
    }

    #[test]
    fn angled_ray_hits_offset_rect() {
        // 30° below the +x axis reaches y ≈ 5.77 at x = 10.
        let ray = Ray::new(Point2::new(0.0, 0.0), FRAC_PI_6, 100.0);
        let rect = Rect::new(Point2::new(9.0, 5.0), Point2::new(11.0, 7.0));
        assert!(ray.intersects_rect(&rect));
        let off_axis = Rect::new(Point2::new(9.0, -7.0), Point2::new(11.0, -5.0));
        assert!(!ray.intersects_rect(&off_axis));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_advances_in_fractional_seconds() {
        let mut clock = SimClock::new(0.02);
        assert_eq!(clock.current_time(), 0.0);
        for _ in 0..50 {
            clock.advance();
        }
        assert!((clock.current_time() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.02);
        assert_eq!(clock.ticks_for_secs(1.0), 50);
        assert_eq!(clock.ticks_for_secs(0.001), 1);
    }
}

#[cfg(test)]
mod rng {
    use crate::rng::{GaussianSource, ScriptedGaussian, SimRng, VehicleRng};
    use crate::Vin;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = VehicleRng::new(7, Vin(3));
        let mut b = VehicleRng::new(7, Vin(3));
        for _ in 0..10 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn different_vins_diverge() {
        let mut a = VehicleRng::new(7, Vin(3));
        let mut b = VehicleRng::new(7, Vin(4));
        let same = (0..32)
            .filter(|_| a.gen_range(0u32..1000) == b.gen_range(0u32..1000))
            .count();
        assert!(same < 32);
    }

    #[test]
    fn gaussian_draws_are_finite() {
        let mut rng = SimRng::new(99);
        for _ in 0..100 {
            assert!(rng.next_gaussian().is_finite());
        }
    }

    #[test]
    fn scripted_gaussian_replays_then_holds() {
        let mut g = ScriptedGaussian::new(vec![1.5, -2.0]);
        assert_eq!(g.next_gaussian(), 1.5);
        assert_eq!(g.next_gaussian(), -2.0);
        assert_eq!(g.next_gaussian(), -2.0);
        assert_eq!(g.next_gaussian(), -2.0);
    }

    #[test]
    fn empty_script_returns_zero() {
        let mut g = ScriptedGaussian::new(vec![]);
        assert_eq!(g.next_gaussian(), 0.0);
    }

    #[test]
    fn child_rngs_are_independent() {
        let mut root = SimRng::new(1);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let same = (0..32)
            .filter(|_| c1.gen_range(0u32..1000) == c2.gen_range(0u32..1000))
            .count();
        assert!(same < 32);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_speed_limit() {
        let cfg = SimConfig { speed_limit: 0.0, ..Default::default() };
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("speed limit"), "got: {err}");
    }

    #[test]
    fn rejects_excessive_speed_limit() {
        let cfg = SimConfig { speed_limit: 80.5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_traffic_level() {
        let cfg = SimConfig { traffic_level: 0.71, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_tick_duration() {
        let cfg = SimConfig { tick_duration_secs: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
