//! Unit tests for population storage.

#[cfg(test)]
mod store_tests {
    use epi_core::{AgentId, HealthStatus};

    use crate::PopulationBuilder;

    #[test]
    fn builder_allocates_all_arrays() {
        let (pop, rngs) = PopulationBuilder::new(10, 42).build();
        assert_eq!(pop.count, 10);
        assert_eq!(pop.status.len(), 10);
        assert_eq!(pop.pending_status.len(), 10);
        assert_eq!(pop.position.len(), 10);
        assert_eq!(pop.days_infected.len(), 10);
        assert_eq!(pop.secondary_infections.len(), 10);
        assert_eq!(rngs.len(), 10);
    }

    #[test]
    fn agents_start_susceptible_with_matching_pending() {
        let (pop, _) = PopulationBuilder::new(5, 0).build();
        assert!(pop.status.iter().all(|&s| s == HealthStatus::Susceptible));
        assert_eq!(pop.status, pop.pending_status);
        assert_eq!(pop.count_status(HealthStatus::Susceptible), 5);
    }

    #[test]
    fn agent_ids_ascend() {
        let (pop, _) = PopulationBuilder::new(3, 0).build();
        let ids: Vec<_> = pop.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn count_status_tracks_writes() {
        let (mut pop, _) = PopulationBuilder::new(4, 0).build();
        pop.status[0] = HealthStatus::Infected;
        pop.status[1] = HealthStatus::Dead;
        assert_eq!(pop.count_status(HealthStatus::Susceptible), 2);
        assert_eq!(pop.count_status(HealthStatus::Infected), 1);
        assert_eq!(pop.count_status(HealthStatus::Dead), 1);
    }

    #[test]
    fn empty_population() {
        let (pop, rngs) = PopulationBuilder::new(0, 0).build();
        assert!(pop.is_empty());
        assert!(rngs.is_empty());
    }

    #[test]
    fn rng_streams_are_independent_per_agent() {
        let (_, mut rngs) = PopulationBuilder::new(2, 1).build();
        let a: u64 = rngs.get_mut(AgentId(0)).random();
        let b: u64 = rngs.get_mut(AgentId(1)).random();
        assert_ne!(a, b);
    }
}
