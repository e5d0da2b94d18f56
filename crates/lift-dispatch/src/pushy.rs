//! The pushy-passenger heuristic.

use lift_core::{Direction, Floor, SimRng};
use lift_model::{Elevator, WaitingRegistry};

use crate::DispatchModel;

/// The first passenger aboard steers the car.
///
/// - Empty elevator: head for the *lowest* floor with anyone waiting; `Stay`
///   if nobody is waiting anywhere.
/// - Loaded elevator: head for the target floor of the earliest boarder,
///   regardless of who else is aboard.
pub struct PushyPassenger;

impl DispatchModel for PushyPassenger {
    fn decide(
        &self,
        elevators: &[Elevator],
        waiting:   &WaitingRegistry,
        _top_floor: Floor,
        _rng:      &mut SimRng,
    ) -> Vec<Direction> {
        let lowest_waiting = waiting.lowest_occupied_floor();

        elevators
            .iter()
            .map(|e| {
                let goal = match e.first_target() {
                    Some(target) => Some(target),
                    None         => lowest_waiting,
                };
                match goal {
                    Some(floor) => Direction::towards(e.floor, floor),
                    None        => Direction::Stay,
                }
            })
            .collect()
    }
}
