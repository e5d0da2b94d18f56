//! A person riding (or waiting for) an elevator.

use lift_core::Floor;

/// One simulated person.
///
/// # Invariants
///
/// - `start != target`, both at or above `Floor::GROUND` — upheld by the
///   arrival models that construct people.
/// - `wait_time` counts every completed round between arrival and delivery,
///   whether spent on a floor or aboard an elevator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Floor the person arrived on.
    pub start: Floor,
    /// Floor the person wants to reach.
    pub target: Floor,
    /// Rounds waited so far (waiting plus riding).
    pub wait_time: u32,
}

impl Person {
    /// A freshly arrived person who has not waited yet.
    pub fn new(start: Floor, target: Floor) -> Self {
        Person { start, target, wait_time: 0 }
    }

    /// Record one more round of waiting.
    #[inline]
    pub fn age(&mut self) {
        self.wait_time += 1;
    }

    /// Anger tier derived from accumulated wait time.
    ///
    /// | Rounds waited | Level |
    /// |---------------|-------|
    /// | 0–2           | 0     |
    /// | 3–4           | 1     |
    /// | 5–6           | 2     |
    /// | 7–8           | 3     |
    /// | ≥9            | 4     |
    pub fn anger_level(&self) -> u8 {
        match self.wait_time {
            0..=2 => 0,
            3..=4 => 1,
            5..=6 => 2,
            7..=8 => 3,
            _     => 4,
        }
    }
}
