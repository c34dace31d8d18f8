//! Unit tests for pandemic-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(AgentId(100) > AgentId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Arena, Point2D};

    #[test]
    fn zero_distance() {
        let p = Point2D::new(320.0, 240.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn axis_aligned_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(10.0, 0.0);
        assert_eq!(a.distance(b), 10.0);
    }

    #[test]
    fn arena_display() {
        assert_eq!(Arena::new(640.0, 480.0).to_string(), "640x480");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0, 1);
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 1);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 2);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn clock_unix_mapping() {
        let mut clock = SimClock::new(1_700_000_000, 60);
        clock.advance();
        assert_eq!(clock.current_unix_secs(), 1_700_000_060);
        assert_eq!(clock.unix_secs_at(Tick(10)), 1_700_000_600);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            start_unix_secs: 0,
            tick_duration_secs: 1,
            total_ticks: 500,
            seed: 42,
            output_interval_ticks: 10,
        };
        assert_eq!(cfg.end_tick(), Tick(500));
        assert_eq!(cfg.make_clock().current_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn sim_rng_deterministic() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..10 {
            let x: u64 = a.random();
            let y: u64 = b.random();
            assert_eq!(x, y);
        }
    }
}

#[cfg(test)]
mod status {
    use crate::Status;

    #[test]
    fn legal_edges() {
        assert!(Status::Healthy.may_transition_to(Status::Sick));
        assert!(Status::Sick.may_transition_to(Status::Cured));
        assert!(Status::Sick.may_transition_to(Status::Dead));
    }

    #[test]
    fn illegal_edges() {
        assert!(!Status::Healthy.may_transition_to(Status::Cured));
        assert!(!Status::Healthy.may_transition_to(Status::Dead));
        assert!(!Status::Cured.may_transition_to(Status::Sick));
        assert!(!Status::Dead.may_transition_to(Status::Sick));
        assert!(!Status::Sick.may_transition_to(Status::Healthy));
        assert!(!Status::Healthy.may_transition_to(Status::Healthy));
    }

    #[test]
    fn terminal_states() {
        assert!(Status::Cured.is_terminal());
        assert!(Status::Dead.is_terminal());
        assert!(!Status::Healthy.is_terminal());
        assert!(!Status::Sick.is_terminal());
    }

    #[test]
    fn default_is_healthy() {
        assert_eq!(Status::default(), Status::Healthy);
    }

    #[test]
    fn display() {
        assert_eq!(Status::Healthy.to_string(), "healthy");
        assert_eq!(Status::Dead.to_string(), "dead");
    }

    #[test]
    fn all_in_reporting_order() {
        assert_eq!(
            Status::ALL,
            [Status::Healthy, Status::Sick, Status::Cured, Status::Dead]
        );
    }
}
