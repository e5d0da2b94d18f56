//! Elevator movement directions.

use std::fmt;

use crate::Floor;

/// One elevator's movement decision for a single round.
///
/// Produced by dispatch models and consumed by the simulation loop, which
/// adjusts the elevator's floor by +1 / −1 / 0.  Validity is positional: an
/// elevator at ground must not receive `Down`, one at the top floor must not
/// receive `Up`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Stay,
}

impl Direction {
    /// The direction that moves an elevator at `from` toward `to`.
    ///
    /// `Stay` when the floors are equal.
    #[inline]
    pub fn towards(from: Floor, to: Floor) -> Direction {
        use std::cmp::Ordering::*;
        match to.cmp(&from) {
            Greater => Direction::Up,
            Less    => Direction::Down,
            Equal   => Direction::Stay,
        }
    }

    /// Whether this direction is valid for an elevator at `floor` in a
    /// building whose highest floor is `top`.
    #[inline]
    pub fn is_valid_at(self, floor: Floor, top: Floor) -> bool {
        match self {
            Direction::Up   => floor < top,
            Direction::Down => floor > Floor::GROUND,
            Direction::Stay => true,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Stay => "stay",
        };
        f.write_str(s)
    }
}
