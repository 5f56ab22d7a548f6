//! Unit tests for epi-core primitives.

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
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Day;

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.offset(3), Day(13));
        assert_eq!(Day(15) - Day(10), 5u64);
        assert_eq!(Day(15).since(Day(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Day(3).to_string(), "day 3");
    }
}

#[cfg(test)]
mod health {
    use crate::HealthStatus::*;

    #[test]
    fn liveness() {
        assert!(Susceptible.is_alive());
        assert!(Infected.is_alive());
        assert!(Resistant.is_alive());
        assert!(!Dead.is_alive());
    }

    #[test]
    fn infectibility() {
        assert!(Susceptible.is_infectible());
        assert!(Resistant.is_infectible());
        assert!(!Infected.is_infectible());
        assert!(!Dead.is_infectible());
    }

    #[test]
    fn labels() {
        assert_eq!(Susceptible.to_string(), "S");
        assert_eq!(Infected.to_string(), "I");
        assert_eq!(Resistant.to_string(), "R");
        assert_eq!(Dead.to_string(), "D");
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
    fn random_f64_in_unit_interval() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v: f64 = rng.random();
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
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(7);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn sim_rng_reproducible() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        let mut va: Vec<u8> = (0..20).collect();
        let mut vb: Vec<u8> = (0..20).collect();
        a.shuffle(&mut va);
        b.shuffle(&mut vb);
        assert_eq!(va, vb);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_population_rejected() {
        let cfg = SimConfig { population: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_dimensions_rejected() {
        let cfg = SimConfig { width: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { height: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn initial_infected_bounded_by_population() {
        let cfg = SimConfig {
            population: 10,
            initial_infected: 11,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig {
            population: 10,
            initial_infected: 10,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rates_must_be_probabilities() {
        for bad in [-0.1, 1.1, f64::NAN] {
            let cfg = SimConfig { vaccination_rate: bad, ..SimConfig::default() };
            assert!(cfg.validate().is_err(), "vaccination_rate {bad} accepted");
            let cfg = SimConfig { mortality_rate: bad, ..SimConfig::default() };
            assert!(cfg.validate().is_err(), "mortality_rate {bad} accepted");
            let cfg = SimConfig { resistant_factor: bad, ..SimConfig::default() };
            assert!(cfg.validate().is_err(), "resistant_factor {bad} accepted");
        }
    }

    #[test]
    fn zero_recovery_period_rejected() {
        let cfg = SimConfig { recovery_period: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_scalars_rejected() {
        let cfg = SimConfig { transmissibility: -0.01, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { r0_baseline: -1.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
