//! Fluent builder for constructing `PopulationStore` + `AgentRngs` in one
//! step.
//!
//! # Usage
//!
//! ```rust
//! use epi_pop::PopulationBuilder;
//!
//! let (pop, rngs) = PopulationBuilder::new(1_000, /*seed=*/ 42).build();
//!
//! assert_eq!(pop.count, 1_000);
//! assert_eq!(rngs.len(), 1_000);
//!
//! // All agents start Susceptible at (0, 0); the sim builder writes the
//! // actual initial statuses and placements after building.
//! ```

use crate::{AgentRngs, PopulationStore};

/// Builder for [`PopulationStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at construction time so later writes (from
/// the sim builder's initialization pass) are simple indexed assignments,
/// not pushes.
pub struct PopulationBuilder {
    count: usize,
    seed:  u64,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG
    /// seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    /// Construct `PopulationStore` and `AgentRngs`.
    pub fn build(self) -> (PopulationStore, AgentRngs) {
        let pop = PopulationStore::new(self.count);
        let rngs = AgentRngs::new(self.count, self.seed);
        (pop, rngs)
    }
}
