//! Core population storage: `PopulationStore` (SoA data) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The step loop needs `&mut PopulationStore` (writing pending statuses and
//! disease clocks) and `&mut AgentRngs` (drawing from the acting agent's
//! stream) at the same time.  Rust's borrow checker allows this only if the
//! two live in separate fields of the orchestrator, so the RNGs stay out of
//! the store.

use epi_core::{AgentId, AgentRng, HealthStatus};
use epi_grid::Position;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, kept separate from [`PopulationStore`]
/// so both can be mutably borrowed at once in the step loop.
pub struct AgentRngs {
    inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── PopulationStore ───────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let s = pop.status[agent.index()];  // O(1), cache-friendly
/// ```
///
/// `status` is the committed health state; `pending_status` is the state the
/// agent will hold after the next commit barrier.  Outside of a step's
/// execution phase the two arrays are always element-wise equal.
pub struct PopulationStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Committed health state.
    pub status: Vec<HealthStatus>,

    /// Next-step health state; mutated during a step's execution phase and
    /// copied into `status` at the commit barrier.
    pub pending_status: Vec<HealthStatus>,

    /// Current grid cell.  Kept in sync with the grid's occupancy index.
    pub position: Vec<Position>,

    /// Days spent in the current infectious episode.
    pub days_infected: Vec<u32>,

    /// Infections caused during the current (unfinished) episode.
    pub secondary_infections: Vec<u32>,
}

impl PopulationStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Count the agents whose committed status equals `status`.
    pub fn count_status(&self, status: HealthStatus) -> usize {
        self.status.iter().filter(|&&s| s == status).count()
    }

    // ── Package-private constructor used by PopulationBuilder ─────────────

    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            status:               vec![HealthStatus::Susceptible; count],
            pending_status:       vec![HealthStatus::Susceptible; count],
            position:             vec![Position::new(0, 0); count],
            days_infected:        vec![0; count],
            secondary_infections: vec![0; count],
        }
    }
}
