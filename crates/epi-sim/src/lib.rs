//! `epi-sim` — step loop orchestrator for the `rust_epi` framework.
//!
//! # Seven-phase step loop
//!
//! ```text
//! for each call to Sim::step(observer):
//!   ① Counts    — recompute S/I/R/D from committed statuses.
//!   ② Tally     — fold the previous pass's new-infection count into the
//!                 running total.
//!   ③ Snapshot  — emit {day, Re, R0, counts, …} + per-agent records to the
//!                 observer.
//!   ④ Reset     — zero the new-infection counter for the coming pass.
//!   ⑤ Execute   — shuffle the population (Fisher–Yates) and run each living
//!                 agent's behavior sequentially: move, expose neighbors,
//!                 advance the disease clock, roll mortality/recovery.
//!                 Health transitions land in pending_status only.
//!   ⑥ Commit    — barrier: status = pending_status for every agent.
//!   ⑦ Advance   — day += 1.
//! ```
//!
//! The pending/commit split is the core correctness mechanism: an agent
//! infected during pass ⑤ stays non-infectious until the next step, no matter
//! where the shuffle placed it, so outcomes cannot depend on execution order
//! in an uncontrolled way.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::SimConfig;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(120, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod infection;
pub mod metrics;
pub mod model;
pub mod observer;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use model::Sim;
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::{AgentRecord, ModelRecord, StatusCounts};
