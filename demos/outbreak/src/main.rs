//! outbreak — smallest runnable scenario for the rust_epi framework.
//!
//! Simulates a measles-like outbreak in a population of 2,000 agents on a
//! 20x20 toroidal grid with a dense urban core, a suburban ring, and rural
//! edges.  Writes the full per-step time series and agent snapshots to
//! `./output/` and prints a short console summary every 10 days.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use epi_core::{Day, SimConfig};
use epi_grid::DensityMap;
use epi_output::{CsvWriter, SimOutputObserver};
use epi_pop::PopulationStore;
use epi_sim::{ModelRecord, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const POPULATION:       usize = 2_000;
const GRID_SIZE:        u32   = 20;
const INITIAL_INFECTED: usize = 3;
const VACCINATION_RATE: f64   = 0.35;
const SIM_DAYS:         u64   = 120;
const SEED:             u64   = 42;
const OUTPUT_DIR:       &str  = "output";

// ── Density map ───────────────────────────────────────────────────────────────

/// Concentric density zones: urban core (class 2), suburban ring (class 1),
/// rural edge (class 0).
fn build_density_map(size: u32) -> Result<DensityMap> {
    let center = (size as i64 - 1) / 2;
    let rows: Vec<Vec<u8>> = (0..size as i64)
        .map(|y| {
            (0..size as i64)
                .map(|x| {
                    let dist = (x - center).abs().max((y - center).abs());
                    match dist {
                        0..=3 => 2,
                        4..=7 => 1,
                        _     => 0,
                    }
                })
                .collect()
        })
        .collect();
    Ok(DensityMap::from_rows(rows)?)
}

// ── Console progress observer ─────────────────────────────────────────────────

struct ProgressPrinter {
    interval: u64,
}

impl SimObserver for ProgressPrinter {
    fn on_snapshot(&mut self, day: Day, model: &ModelRecord, _pop: &PopulationStore) {
        if day.0 % self.interval == 0 {
            println!(
                "{day:>8}: S={:>5} I={:>5} R={:>5} D={:>4}  Re={:.2} R0={:.2}",
                model.susceptible, model.infected, model.resistant, model.dead,
                model.re, model.r0,
            );
        }
    }

    fn on_sim_end(&mut self, final_day: Day) {
        println!("run complete after {final_day}");
    }
}

/// Fan a snapshot out to both the console printer and the CSV writer.
struct Tee<A, B>(A, B);

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_step_start(&mut self, day: Day) {
        self.0.on_step_start(day);
        self.1.on_step_start(day);
    }
    fn on_snapshot(&mut self, day: Day, model: &ModelRecord, pop: &PopulationStore) {
        self.0.on_snapshot(day, model, pop);
        self.1.on_snapshot(day, model, pop);
    }
    fn on_sim_end(&mut self, final_day: Day) {
        self.0.on_sim_end(final_day);
        self.1.on_sim_end(final_day);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir).context("create output directory")?;

    let config = SimConfig {
        population:       POPULATION,
        width:            GRID_SIZE,
        height:           GRID_SIZE,
        initial_infected: INITIAL_INFECTED,
        vaccination_rate: VACCINATION_RATE,
        seed:             SEED,
        ..SimConfig::default()
    };

    let density = build_density_map(GRID_SIZE)?;
    let mut sim = SimBuilder::new(config)
        .density(density)
        .build()
        .context("build simulation")?;

    let writer = CsvWriter::new(out_dir).context("open CSV output")?;
    let mut observer = Tee(ProgressPrinter { interval: 10 }, SimOutputObserver::new(writer));

    sim.run(SIM_DAYS, &mut observer)?;

    if let Some(e) = observer.1.take_error() {
        return Err(e).context("write CSV output");
    }

    let counts = sim.counts();
    println!(
        "final: S={} I={} R={} D={}  attack={:.1}%  empirical R0={:.2}",
        counts.susceptible,
        counts.infected,
        counts.resistant,
        counts.dead,
        100.0 * sim.new_infected_total() as f64 / POPULATION as f64,
        sim.basic_reproduction(),
    );

    Ok(())
}
