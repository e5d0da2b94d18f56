//! A do-nothing dispatch model — every elevator stays put.

use lift_core::{Direction, Floor, SimRng};
use lift_model::{Elevator, WaitingRegistry};

use crate::DispatchModel;

/// A [`DispatchModel`] that answers `Stay` for every elevator.
///
/// Useful as a placeholder in tests that exercise arrival, boarding, or
/// statistics logic without elevator movement getting in the way.
pub struct Idle;

impl DispatchModel for Idle {
    fn decide(
        &self,
        elevators: &[Elevator],
        _waiting:  &WaitingRegistry,
        _top_floor: Floor,
        _rng:      &mut SimRng,
    ) -> Vec<Direction> {
        vec![Direction::Stay; elevators.len()]
    }
}
