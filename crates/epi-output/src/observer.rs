//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use epi_core::Day;
use epi_pop::PopulationStore;
use epi_sim::snapshot::agent_records;
use epi_sim::{ModelRecord, SimObserver};

use crate::OutputError;
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes model and agent snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, day: Day, model: &ModelRecord, pop: &PopulationStore) {
        let result = self.writer.write_model_record(model);
        self.store_err(result);

        let rows: Vec<_> = agent_records(pop).collect();
        if !rows.is_empty() {
            let result = self.writer.write_agent_records(day.0, &rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_day: Day) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
