//! `epi-pop` — Structure-of-Arrays population storage for the `rust_epi`
//! framework.
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`store`]   | `PopulationStore` (SoA arrays), `AgentRngs`         |
//! | [`builder`] | `PopulationBuilder` (allocation + RNG seeding)      |
//!
//! Health statuses and positions start at neutral defaults; the sim builder
//! writes the actual initial state (infection seeds, vaccination lottery,
//! random placement) after building.

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use store::{AgentRngs, PopulationStore};
