//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `model_timeseries.csv` — one row per step (counts + reproduction numbers)
//! - `agent_snapshots.csv`  — one row per agent per step

use std::fs::File;
use std::path::Path;

use csv::Writer;
use epi_sim::{AgentRecord, ModelRecord};

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    model:    Writer<File>,
    agents:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut model = Writer::from_path(dir.join("model_timeseries.csv"))?;
        model.write_record([
            "day",
            "re",
            "r0",
            "susceptible",
            "infected",
            "resistant",
            "dead",
            "new_infected",
            "new_infected_total",
        ])?;

        let mut agents = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        agents.write_record(["day", "agent_id", "status", "x", "y"])?;

        Ok(Self {
            model,
            agents,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_model_record(&mut self, record: &ModelRecord) -> OutputResult<()> {
        self.model.write_record(&[
            record.day.to_string(),
            record.re.to_string(),
            record.r0.to_string(),
            record.susceptible.to_string(),
            record.infected.to_string(),
            record.resistant.to_string(),
            record.dead.to_string(),
            record.new_infected.to_string(),
            record.new_infected_total.to_string(),
        ])?;
        Ok(())
    }

    fn write_agent_records(&mut self, day: u64, records: &[AgentRecord]) -> OutputResult<()> {
        for rec in records {
            self.agents.write_record(&[
                day.to_string(),
                rec.id.0.to_string(),
                rec.status.as_str().to_string(),
                rec.position.x.to_string(),
                rec.position.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.model.flush()?;
        self.agents.flush()?;
        Ok(())
    }
}
