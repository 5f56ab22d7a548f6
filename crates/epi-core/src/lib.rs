//! `epi-core` — foundational types for the `rust_epi` epidemic simulation
//! framework.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`ids`]    | `AgentId`                                       |
//! | [`time`]   | `Day` counter                                   |
//! | [`health`] | `HealthStatus` (S/I/R/D)                        |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (model-level)  |
//! | [`config`] | `SimConfig` + eager validation                  |
//! | [`error`]  | `EpiError`, `EpiResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{EpiError, EpiResult};
pub use health::HealthStatus;
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Day;
