//! Fluent builder for constructing a [`Sim`].

use epi_core::{AgentId, Day, HealthStatus, SimConfig, SimRng};
use epi_grid::{DensityMap, Grid, Position};
use epi_pop::PopulationBuilder;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — population, grid dimensions, disease constants, seed.
///
/// # Optional inputs
///
/// | Method        | Default                                        |
/// |---------------|------------------------------------------------|
/// | `.density(m)` | uniform class-1 map (coefficient 1.0 everywhere) |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .density(density_map)
///     .build()?;
/// sim.run(120, &mut NoopObserver)?;
/// ```
///
/// Validation happens entirely inside [`build`][Self::build]: a bad
/// configuration or a density map that does not cover the grid returns an
/// error before any model state exists.
pub struct SimBuilder {
    config:  SimConfig,
    density: Option<DensityMap>,
}

impl SimBuilder {
    /// Create a builder from a configuration.
    pub fn new(config: SimConfig) -> Self {
        Self { config, density: None }
    }

    /// Supply the density-class map.  Its dimensions must match the grid
    /// exactly; a mismatch fails `build`.
    pub fn density(mut self, map: DensityMap) -> Self {
        self.density = Some(map);
        self
    }

    /// Validate all inputs, then build the grid, the population, and the
    /// initial placement, and return a ready-to-run [`Sim`] at day 0.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let mut grid = Grid::new(config.width, config.height, config.wrap)?;

        let density = match self.density {
            Some(map) => {
                if !map.matches_grid(&grid) {
                    let (map_width, map_height) = map.dimensions();
                    return Err(SimError::DensityDimensionMismatch {
                        grid_width:  grid.width(),
                        grid_height: grid.height(),
                        map_width,
                        map_height,
                    });
                }
                map
            }
            None => DensityMap::uniform(config.width, config.height, 1)?,
        };

        let (mut agents, rngs) = PopulationBuilder::new(config.population, config.seed).build();
        let mut sim_rng = SimRng::new(config.seed);

        // ── Initial statuses ──────────────────────────────────────────────
        //
        // The lowest ids start Infected; everyone else enters the
        // vaccination lottery.  Pending mirrors committed from the start.
        for i in 0..config.population {
            let status = if i < config.initial_infected {
                HealthStatus::Infected
            } else if sim_rng.random::<f64>() < config.vaccination_rate {
                HealthStatus::Resistant
            } else {
                HealthStatus::Susceptible
            };
            agents.status[i] = status;
            agents.pending_status[i] = status;
        }

        // ── Random placement ──────────────────────────────────────────────
        for i in 0..config.population {
            let pos = Position::new(
                sim_rng.gen_range(0..config.width),
                sim_rng.gen_range(0..config.height),
            );
            grid.place(AgentId(i as u32), pos)?;
            agents.position[i] = pos;
        }

        let order: Vec<AgentId> = agents.agent_ids().collect();

        Ok(Sim {
            config,
            day: Day::ZERO,
            grid,
            density,
            agents,
            rngs,
            sim_rng,
            new_infected:               0,
            new_infected_total:         0,
            total_secondary_infections: 0,
            finished_infections:        0,
            order,
        })
    }
}
