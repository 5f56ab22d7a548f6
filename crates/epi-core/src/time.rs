//! Simulation time model.
//!
//! Time is a monotonically increasing `Day` counter — the model's native
//! resolution is one day per step, and no mapping to wall-clock time exists.
//! Using an integer day as the canonical unit keeps all disease-clock
//! arithmetic exact and comparisons O(1).

use std::fmt;

/// An absolute simulation day counter.
///
/// Stored as `u64`; a run would have to step for longer than the age of the
/// universe to overflow it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u64);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Return the day `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Day {
        Day(self.0 + n)
    }

    /// Days elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Day) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u64) -> Day {
        Day(self.0 + rhs)
    }
}

impl std::ops::Sub for Day {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Day) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}
