//! Building floor numbers.
//!
//! Floors are 1-based: `Floor(1)` is the ground floor and the lowest floor
//! any entity may occupy.  A building's top floor is `SimConfig::top_floor()`;
//! nothing in this type knows the building height, so range checks against
//! the top floor belong to the caller.

use std::fmt;

/// A 1-based building floor number.
///
/// The inner integer is `pub` for direct arithmetic and for indexing
/// per-floor storage via `floor.index()`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The lowest floor in every building.
    pub const GROUND: Floor = Floor(1);

    /// The floor directly above.
    #[inline]
    pub fn above(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below, saturating at ground.
    #[inline]
    pub fn below(self) -> Floor {
        Floor(self.0.saturating_sub(1).max(Floor::GROUND.0))
    }

    /// Absolute distance in floors between `self` and `other`.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Zero-based index into per-floor storage (`Vec` of length `num_floors`).
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
