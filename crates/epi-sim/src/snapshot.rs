//! Plain data record types emitted to the snapshot sink each step.

use epi_core::{HealthStatus, AgentId};
use epi_grid::Position;
use epi_pop::PopulationStore;

/// Committed head-count per health state.  Always sums to the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub resistant:   usize,
    pub dead:        usize,
}

impl StatusCounts {
    /// Tally the committed statuses of `pop`.
    pub fn tally(pop: &PopulationStore) -> Self {
        let mut counts = Self::default();
        for &status in &pop.status {
            match status {
                HealthStatus::Susceptible => counts.susceptible += 1,
                HealthStatus::Infected    => counts.infected += 1,
                HealthStatus::Resistant   => counts.resistant += 1,
                HealthStatus::Dead        => counts.dead += 1,
            }
        }
        counts
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.resistant + self.dead
    }
}

/// Model-level aggregates for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelRecord {
    pub day:                u64,
    /// Effective reproduction number (baseline R0 × susceptible fraction).
    pub re:                 f64,
    /// Empirical basic reproduction number (secondary cases per finished
    /// episode); 0 while no episode has finished.
    pub r0:                 f64,
    pub susceptible:        usize,
    pub infected:           usize,
    pub resistant:          usize,
    pub dead:               usize,
    /// Infections committed during the most recent executed pass.
    pub new_infected:       u64,
    /// Running sum of `new_infected` across all steps.
    pub new_infected_total: u64,
}

/// One agent's snapshot line: id, committed status, position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRecord {
    pub id:       AgentId,
    pub status:   HealthStatus,
    pub position: Position,
}

/// Iterate the per-agent records of `pop` in ascending id order.
pub fn agent_records(pop: &PopulationStore) -> impl Iterator<Item = AgentRecord> + '_ {
    pop.agent_ids().map(|id| AgentRecord {
        id,
        status:   pop.status[id.index()],
        position: pop.position[id.index()],
    })
}
