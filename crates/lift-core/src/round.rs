//! Simulation time model.
//!
//! Time is a monotonically increasing `Round` counter with no wall-clock
//! mapping: every round is one atomic pass through the arrival → disembark →
//! board → move → age pipeline, and nothing in the model depends on how long
//! a round "really" takes.  Integer rounds keep all schedule arithmetic exact
//! and comparisons O(1).

use std::fmt;

/// An absolute simulation round counter, starting at 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Round {
        Round(self.0 + n)
    }
}

impl std::ops::Add<u64> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u64) -> Round {
        Round(self.0 + rhs)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
