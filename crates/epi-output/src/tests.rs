//! Integration tests for epi-output.

#[cfg(test)]
mod csv_tests {
    use epi_core::{AgentId, HealthStatus};
    use epi_grid::Position;
    use epi_sim::{AgentRecord, ModelRecord};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn model_row(day: u64) -> ModelRecord {
        ModelRecord {
            day,
            re: 7.5,
            r0: 0.0,
            susceptible: 8,
            infected: 1,
            resistant: 1,
            dead: 0,
            new_infected: 0,
            new_infected_total: 0,
        }
    }

    fn agent_row(id: u32) -> AgentRecord {
        AgentRecord {
            id:       AgentId(id),
            status:   HealthStatus::Susceptible,
            position: Position::new(id, 2 * id),
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("model_timeseries.csv").exists());
        assert!(dir.path().join("agent_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("model_timeseries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["day", "re", "r0", "susceptible", "infected", "resistant", "dead",
             "new_infected", "new_infected_total"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["day", "agent_id", "status", "x", "y"]);
    }

    #[test]
    fn csv_model_row_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_model_record(&model_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("model_timeseries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");   // day
        assert_eq!(&rows[0][1], "7.5"); // re
        assert_eq!(&rows[0][3], "8");   // susceptible
    }

    #[test]
    fn csv_agent_rows_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![agent_row(0), agent_row(1), agent_row(2)];
        w.write_agent_records(5, &rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "5"); // day
        assert_eq!(&read_rows[1][1], "1"); // agent_id
        assert_eq!(&read_rows[1][2], "S"); // status
        assert_eq!(&read_rows[2][4], "4"); // y = 2 * id
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }
}

#[cfg(test)]
mod observer_tests {
    use epi_core::SimConfig;
    use epi_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn tiny_sim_writes_one_row_per_step_and_agent() {
        let dir = tmp();
        let cfg = SimConfig {
            population: 4,
            width: 3,
            height: 3,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(cfg).build().unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(6, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut model = csv::Reader::from_path(dir.path().join("model_timeseries.csv")).unwrap();
        assert_eq!(model.records().count(), 6);

        let mut agents = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(agents.records().count(), 6 * 4);
    }

    #[test]
    fn first_model_row_is_day_zero() {
        let dir = tmp();
        let cfg = SimConfig {
            population: 2,
            width: 2,
            height: 2,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(cfg).build().unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(3, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut model = csv::Reader::from_path(dir.path().join("model_timeseries.csv")).unwrap();
        let first = model.records().next().unwrap().unwrap();
        assert_eq!(&first[0], "0");
    }
}
