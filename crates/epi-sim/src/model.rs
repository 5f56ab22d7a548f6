//! The `Sim` struct and its step loop.

use epi_core::{AgentId, Day, HealthStatus, SimConfig, SimRng};
use epi_grid::{DensityMap, Grid};
use epi_pop::{AgentRngs, PopulationStore};

use crate::infection;
use crate::metrics;
use crate::snapshot::{ModelRecord, StatusCounts};
use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// Owns the full population, the grid occupancy index, and every aggregation
/// counter — two `Sim` instances in one process share nothing and cannot
/// interfere.  Runs the seven-phase step protocol described in the crate
/// docs; there is no terminal state, the model simply runs for as long as
/// the caller keeps calling [`step`][Sim::step].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (population, grid, disease constants, seed).
    pub config: SimConfig,

    /// The current day — advanced once at the end of each step.
    pub day: Day,

    /// Cell occupancy index.  Mutated only by the step loop.
    pub grid: Grid,

    /// Read-only density classes, one per grid cell.
    pub density: DensityMap,

    /// SoA agent state (committed + pending statuses, positions, clocks).
    pub agents: PopulationStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Model-level RNG: drives the per-step execution-order shuffle.
    pub(crate) sim_rng: SimRng,

    /// Infections committed during the pass currently being (or last)
    /// executed.  Read and folded into the total at the start of the next
    /// step.
    pub(crate) new_infected: u64,

    /// Running sum of committed infections across all steps.
    pub(crate) new_infected_total: u64,

    /// Sum of `secondary_infections` over every finished episode.
    pub(crate) total_secondary_infections: u64,

    /// Number of episodes finished so far (via recovery or death).
    pub(crate) finished_infections: u64,

    /// Scratch permutation of all agent ids, reshuffled each step.
    pub(crate) order: Vec<AgentId>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `days` steps, then fire the observer's end-of-run hook.
    pub fn run<O: SimObserver>(&mut self, days: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..days {
            self.step(observer)?;
        }
        observer.on_sim_end(self.day);
        Ok(())
    }

    /// Execute one simulation step.
    ///
    /// Phase order (see the crate docs for the rationale): counts → tally →
    /// snapshot → reset → shuffled sequential execution → commit barrier →
    /// day advance.  The snapshot therefore describes the state *entering*
    /// the step, paired with the infections committed by the previous one.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_step_start(self.day);

        // ── Phase 1+2: recompute committed counts, fold in the previous
        //    pass's infections ─────────────────────────────────────────────
        let counts = StatusCounts::tally(&self.agents);
        let new_infected = self.new_infected;
        self.new_infected_total += new_infected;

        // ── Phase 3: snapshot ─────────────────────────────────────────────
        let record = self.model_record(&counts, new_infected);
        observer.on_snapshot(self.day, &record, &self.agents);

        // ── Phase 4: reset the step counter for the coming pass ───────────
        self.new_infected = 0;

        // ── Phase 5: randomized sequential execution ──────────────────────
        //
        // Movement is eager (it changes the contact sets agents later in the
        // pass observe) but every health transition lands in pending_status,
        // so no agent infected this pass can transmit before the next one.
        self.sim_rng.shuffle(&mut self.order);
        let order = std::mem::take(&mut self.order);
        for &agent in &order {
            self.step_agent(agent)?;
        }
        self.order = order;

        // ── Phase 6: commit barrier ───────────────────────────────────────
        for i in 0..self.agents.count {
            self.agents.status[i] = self.agents.pending_status[i];
        }

        // ── Phase 7: advance the day ──────────────────────────────────────
        self.day = self.day + 1;
        Ok(())
    }

    /// Fresh committed head-counts (always sums to the population size).
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.agents)
    }

    /// Running sum of committed infections across all steps.
    #[inline]
    pub fn new_infected_total(&self) -> u64 {
        self.new_infected_total
    }

    /// Secondary infections accumulated over finished episodes.
    #[inline]
    pub fn total_secondary_infections(&self) -> u64 {
        self.total_secondary_infections
    }

    /// Episodes finished so far via recovery or death.
    #[inline]
    pub fn finished_infections(&self) -> u64 {
        self.finished_infections
    }

    /// The empirical basic reproduction number so far.
    pub fn basic_reproduction(&self) -> f64 {
        metrics::basic_reproduction(self.total_secondary_infections, self.finished_infections)
    }

    /// The current effective reproduction number.
    pub fn effective_reproduction(&self) -> f64 {
        metrics::effective_reproduction(
            self.config.r0_baseline,
            self.counts().susceptible,
            self.agents.count,
        )
    }

    // ── Per-agent behavior ────────────────────────────────────────────────

    /// One agent's turn within the execution pass.
    ///
    /// Dead agents do nothing.  Living agents move; infected agents then
    /// expose their neighborhood, advance their disease clock, and roll
    /// mortality before the recovery check.
    fn step_agent(&mut self, agent: AgentId) -> SimResult<()> {
        let i = agent.index();
        if self.agents.status[i] == HealthStatus::Dead {
            return Ok(());
        }

        let from = self.agents.position[i];
        let to = self.grid.random_step(agent, from, self.rngs.get_mut(agent))?;
        self.agents.position[i] = to;

        if self.agents.status[i] != HealthStatus::Infected {
            return Ok(());
        }

        self.expose_neighborhood(agent);

        self.agents.days_infected[i] += 1;

        // Mortality is rolled before the recovery threshold: an agent at the
        // end of its infectious period can still die on its last day.
        let dies = self.rngs.get_mut(agent).random::<f64>() < self.config.mortality_rate;
        if dies {
            self.agents.pending_status[i] = HealthStatus::Dead;
            self.finish_episode(agent);
            return Ok(());
        }

        if self.agents.days_infected[i] >= self.config.recovery_period {
            self.agents.pending_status[i] = HealthStatus::Resistant;
            self.finish_episode(agent);
        }
        Ok(())
    }

    /// Attempt infection against every other agent in the contact
    /// neighborhood around `source`'s current cell.
    fn expose_neighborhood(&mut self, source: AgentId) {
        let center = self.agents.position[source.index()];
        let contacts = self.grid.neighbors(center, self.config.include_center);
        for target in contacts {
            if target == source {
                continue;
            }
            infection::attempt(
                &mut self.agents,
                source,
                target,
                &self.density,
                &self.config,
                self.rngs.get_mut(source),
                &mut self.new_infected,
            );
        }
    }

    /// Close the current infectious episode of `agent`: fold its secondary
    /// count into the R0 accumulators and reset its per-episode state.
    ///
    /// This is the only place `total_secondary_infections` and
    /// `finished_infections` are ever mutated.
    fn finish_episode(&mut self, agent: AgentId) {
        let i = agent.index();
        self.total_secondary_infections += u64::from(self.agents.secondary_infections[i]);
        self.finished_infections += 1;
        self.agents.secondary_infections[i] = 0;
        self.agents.days_infected[i] = 0;
    }

    // ── Snapshot assembly ─────────────────────────────────────────────────

    fn model_record(&self, counts: &StatusCounts, new_infected: u64) -> ModelRecord {
        ModelRecord {
            day: self.day.0,
            re:  metrics::effective_reproduction(
                self.config.r0_baseline,
                counts.susceptible,
                self.agents.count,
            ),
            r0:  metrics::basic_reproduction(
                self.total_secondary_infections,
                self.finished_infections,
            ),
            susceptible:        counts.susceptible,
            infected:           counts.infected,
            resistant:          counts.resistant,
            dead:               counts.dead,
            new_infected,
            new_infected_total: self.new_infected_total,
        }
    }
}
