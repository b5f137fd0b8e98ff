//! Unit tests for wp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::from_index(42), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.2, 0.5);
        let b = Point::new(0.8, 0.1);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let m = a.lerp(b, 0.5);
        assert!((m.x - 0.5).abs() < 1e-12);
        assert!((m.y - 0.3).abs() < 1e-12);
    }

    #[test]
    fn lerp_stays_between_endpoints() {
        let a = Point::new(0.15, 0.8);
        let b = Point::new(0.85, 0.25);
        let eps = 1e-12;
        for i in 0..=1000 {
            let p = a.lerp(b, i as f64 / 1000.0);
            assert!(p.x >= a.x - eps && p.x <= b.x + eps, "x out of range at {i}: {p}");
            assert!(p.y <= a.y + eps && p.y >= b.y - eps, "y out of range at {i}: {p}");
        }
    }

    #[test]
    fn normalized_bounds() {
        assert!(Point::new(0.0, 1.0).is_normalized());
        assert!(!Point::new(-0.01, 0.5).is_normalized());
        assert!(!Point::new(0.5, 1.5).is_normalized());
        assert!(!Point::new(f64::NAN, 0.5).is_normalized());
    }

    #[test]
    fn distance_sq() {
        let d = Point::new(0.0, 0.0).distance_sq(Point::new(0.3, 0.4));
        assert!((d - 0.25).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::{FaultPolicy, SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10).offset(3), Tick(13));
        assert_eq!(Tick::ZERO.offset(1).to_string(), "T1");
    }

    #[test]
    fn clock_elapsed_at_sixty_hz() {
        let mut clock = SimClock::new(60);
        for _ in 0..240 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(240));
        assert!((clock.elapsed_secs() - 4.0).abs() < 1e-12);
        assert_eq!(clock.to_string(), "T240 (4.00s)");
    }

    #[test]
    fn zero_rate_clock_reports_zero_secs() {
        let mut clock = SimClock::new(0);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 0.0);
    }

    #[test]
    fn config_defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.speech_duration_ticks, 240);
        assert!((cfg.speech_chance - 0.0012).abs() < 1e-12);
        assert_eq!(cfg.fault_policy, FaultPolicy::Freeze);
        assert_eq!(cfg.end_tick(), None);
        assert_eq!(cfg.make_clock().frame_rate_hz, 60);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, RandomSource};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, AgentId(3));
        let mut b = AgentRng::new(42, AgentId(3));
        for _ in 0..100 {
            assert_eq!(a.pick_index(9), b.pick_index(9));
        }
    }

    #[test]
    fn agents_get_distinct_streams() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let sa: Vec<usize> = (0..32).map(|_| a.pick_index(1_000)).collect();
        let sb: Vec<usize> = (0..32).map(|_| b.pick_index(1_000)).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn pick_index_in_range() {
        let mut rng = AgentRng::new(7, AgentId(0));
        for len in 1..20 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = AgentRng::new(1, AgentId(0));
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
            // Out-of-range probabilities are clamped rather than panicking.
            assert!(rng.chance(2.0));
            assert!(!rng.chance(-1.0));
            assert!(!rng.chance(f64::NAN));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5u8]), Some(&5));
    }
}
