//! Health states of the SIR(+D) disease model.

/// The health state of one agent.
///
/// `Dead` is terminal: a dead agent never moves, never attempts infections,
/// and never transitions again.  `Resistant` covers both recovered agents and
/// agents vaccinated at initialization — whether a Resistant agent can be
/// reinfected is a model policy, not a property of the state itself.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthStatus {
    /// Never infected (or immunity policy permitting, not currently immune).
    #[default]
    Susceptible,
    /// Currently infectious.
    Infected,
    /// Recovered or vaccinated.
    Resistant,
    /// Terminal state.
    Dead,
}

impl HealthStatus {
    /// `true` for every state except `Dead`.
    #[inline]
    pub fn is_alive(self) -> bool {
        !matches!(self, HealthStatus::Dead)
    }

    /// `true` if an infection attempt against this state can succeed at all
    /// (Susceptible at full probability, Resistant at a reduced one).
    #[inline]
    pub fn is_infectible(self) -> bool {
        matches!(self, HealthStatus::Susceptible | HealthStatus::Resistant)
    }

    /// One-letter label, useful for CSV column values and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Susceptible => "S",
            HealthStatus::Infected    => "I",
            HealthStatus::Resistant   => "R",
            HealthStatus::Dead        => "D",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
