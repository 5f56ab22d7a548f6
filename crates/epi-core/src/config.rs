//! Top-level model configuration.
//!
//! All parameters are validated eagerly by [`SimConfig::validate`] before any
//! model state is built — a bad configuration never produces a partially
//! initialized simulation.

use crate::error::{EpiError, EpiResult};

/// Construction-time configuration for one simulation run.
///
/// Every epidemiological constant is a named parameter here; the engine
/// itself contains no calibration literals.  The `Default` impl carries the
/// measles-flavored calibration of the reference model, but nothing depends
/// on those specific values.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of agents created (N).  Must be positive.
    pub population: usize,

    /// Grid width in cells.  Must be positive.
    pub width: u32,

    /// Grid height in cells.  Must be positive.
    pub height: u32,

    /// `true` for a toroidal grid (edges wrap), `false` for hard bounds.
    pub wrap: bool,

    /// Agents starting Infected, assigned the lowest ids.  At most N.
    pub initial_infected: usize,

    /// Probability in [0, 1] that a non-initially-infected agent starts
    /// Resistant (vaccinated).
    pub vaccination_rate: f64,

    /// Daily death probability in [0, 1] for an Infected agent.
    pub mortality_rate: f64,

    /// Days infected after which an agent recovers (I → R).  Must be
    /// positive.
    pub recovery_period: u32,

    /// Scales every infection probability.  Must be non-negative.
    pub transmissibility: f64,

    /// Relative susceptibility in [0, 1] of Resistant agents compared to
    /// Susceptible ones.
    pub resistant_factor: f64,

    /// Configured basic reproduction number used by the Re formula.  Must be
    /// non-negative.
    pub r0_baseline: f64,

    /// Whether an infected agent also exposes agents sharing its own cell,
    /// in addition to the 8 surrounding Moore cells.
    pub include_center: bool,

    /// Whether Resistant agents can be reinfected (at `resistant_factor`
    /// probability).  `false` makes immunity absolute.
    pub resistant_reinfection: bool,

    /// Master RNG seed.  The same seed always produces identical snapshot
    /// sequences.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population:            1_000,
            width:                 20,
            height:                20,
            wrap:                  true,
            initial_infected:      1,
            vaccination_rate:      0.0,
            mortality_rate:        0.01,
            recovery_period:       8,
            transmissibility:      0.075,
            resistant_factor:      0.03,
            r0_baseline:           15.0,
            include_center:        true,
            resistant_reinfection: true,
            seed:                  42,
        }
    }
}

impl SimConfig {
    /// Check every parameter; returns the first violation found.
    ///
    /// Called by the sim builder before any state is allocated.
    pub fn validate(&self) -> EpiResult<()> {
        if self.population == 0 {
            return Err(EpiError::Config("population must be positive".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(EpiError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.initial_infected > self.population {
            return Err(EpiError::Config(format!(
                "initial_infected ({}) exceeds population ({})",
                self.initial_infected, self.population
            )));
        }
        for (name, value) in [
            ("vaccination_rate", self.vaccination_rate),
            ("mortality_rate", self.mortality_rate),
            ("resistant_factor", self.resistant_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EpiError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.recovery_period == 0 {
            return Err(EpiError::Config("recovery_period must be positive".into()));
        }
        if !self.transmissibility.is_finite() || self.transmissibility < 0.0 {
            return Err(EpiError::Config(format!(
                "transmissibility must be non-negative, got {}",
                self.transmissibility
            )));
        }
        if !self.r0_baseline.is_finite() || self.r0_baseline < 0.0 {
            return Err(EpiError::Config(format!(
                "r0_baseline must be non-negative, got {}",
                self.r0_baseline
            )));
        }
        Ok(())
    }
}
