//! Simulation observer trait for progress reporting and snapshot collection.

use epi_core::Day;
use epi_pop::PopulationStore;

use crate::snapshot::ModelRecord;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run] at key points in the step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console progress
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_snapshot(&mut self, day: Day, model: &ModelRecord, _pop: &PopulationStore) {
///         if day.0 % self.interval == 0 {
///             println!("{day}: I={} Re={:.2}", model.infected, model.re);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _day: Day) {}

    /// Called once per step with the model aggregates and read-only access
    /// to the full population, so sinks can record per-agent rows (via
    /// [`agent_records`][crate::snapshot::agent_records]) without the sim
    /// knowing about any specific output format.
    ///
    /// Fires before the step's execution pass: the records describe the
    /// committed state entering the step.
    fn on_snapshot(&mut self, _day: Day, _model: &ModelRecord, _pop: &PopulationStore) {}

    /// Called once by [`Sim::run`][crate::Sim::run] after the final step.
    fn on_sim_end(&mut self, _final_day: Day) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
