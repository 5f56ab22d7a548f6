//! `epi-output` — snapshot sinks for the rust_epi framework.
//!
//! The simulation core hands each step's snapshot to a
//! [`SimObserver`][epi_sim::SimObserver]; this crate supplies the writer side
//! of that seam:
//!
//! | Type                 | Role                                            |
//! |----------------------|-------------------------------------------------|
//! | [`OutputWriter`]     | backend trait (CSV today; the seam for others)  |
//! | [`CsvWriter`]        | `model_timeseries.csv` + `agent_snapshots.csv`  |
//! | [`SimOutputObserver`]| bridges `SimObserver` calls to an `OutputWriter`|
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(120, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use writer::OutputWriter;
