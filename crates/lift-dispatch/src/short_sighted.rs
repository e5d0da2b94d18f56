//! The short-sighted heuristic.

use lift_core::{Direction, Floor, SimRng};
use lift_model::{Elevator, WaitingRegistry};

use crate::DispatchModel;

/// Always heads for the nearest goal, measured in floors.
///
/// - Empty elevator: toward the *closest* floor with anyone waiting; `Stay`
///   if nobody is waiting anywhere.
/// - Loaded elevator: toward the closest passenger target, boarding order
///   ignored.
///
/// Both distance comparisons break ties toward the lower floor.
pub struct ShortSighted;

impl DispatchModel for ShortSighted {
    fn decide(
        &self,
        elevators: &[Elevator],
        waiting:   &WaitingRegistry,
        _top_floor: Floor,
        _rng:      &mut SimRng,
    ) -> Vec<Direction> {
        elevators
            .iter()
            .map(|e| {
                let goal = match e.nearest_target() {
                    Some(target) => Some(target),
                    None         => waiting.nearest_occupied_floor(e.floor),
                };
                match goal {
                    Some(floor) => Direction::towards(e.floor, floor),
                    None        => Direction::Stay,
                }
            })
            .collect()
    }
}
