//! The density-weighted infection probability rule.

use epi_core::{AgentId, AgentRng, HealthStatus, SimConfig};
use epi_grid::DensityMap;
use epi_pop::PopulationStore;

/// The infection probability against a target in `target_status` standing on
/// a cell with density multiplier `coefficient`.
///
/// Susceptible targets face the full `transmissibility × coefficient`;
/// Resistant targets the same scaled by `resistant_factor`.  Any other state
/// cannot be infected.
pub fn infection_chance(target_status: HealthStatus, coefficient: f64, config: &SimConfig) -> f64 {
    let base_chance = match target_status {
        HealthStatus::Susceptible => 1.0,
        HealthStatus::Resistant   => config.resistant_factor,
        HealthStatus::Infected | HealthStatus::Dead => return 0.0,
    };
    base_chance * config.transmissibility * coefficient
}

/// One infection attempt from `source` against `target`.
///
/// Eligibility is judged on the target's *committed* status; a success writes
/// the target's `pending_status` only, so the new infection becomes
/// infectious no earlier than the next step.  The uniform draw comes from the
/// source agent's RNG stream.
///
/// Returns `true` on success, having credited `source` with a secondary
/// infection and bumped the step's `new_infected` counter.
///
/// Must never be called with `source == target`.
pub(crate) fn attempt(
    pop:          &mut PopulationStore,
    source:       AgentId,
    target:       AgentId,
    density:      &DensityMap,
    config:       &SimConfig,
    rng:          &mut AgentRng,
    new_infected: &mut u64,
) -> bool {
    debug_assert_ne!(source, target, "an agent cannot infect itself");

    let target_status = pop.status[target.index()];
    if !target_status.is_infectible() {
        return false;
    }
    if target_status == HealthStatus::Resistant && !config.resistant_reinfection {
        return false;
    }

    let coefficient = density.coefficient(pop.position[target.index()]);
    let chance = infection_chance(target_status, coefficient, config);

    if rng.random::<f64>() < chance {
        pop.pending_status[target.index()] = HealthStatus::Infected;
        pop.secondary_infections[source.index()] += 1;
        *new_infected += 1;
        true
    } else {
        false
    }
}
