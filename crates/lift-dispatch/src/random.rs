//! Uniformly random movement.

use lift_core::{Direction, Floor, SimRng};
use lift_model::{Elevator, WaitingRegistry};

use crate::DispatchModel;

/// Picks a uniformly random *valid* direction for each elevator: two choices
/// at the ground and top floors, three anywhere in between.  A useful
/// baseline for comparing the purposeful heuristics against.
pub struct RandomDispatch;

const ALL: [Direction; 3] = [Direction::Up, Direction::Down, Direction::Stay];

impl DispatchModel for RandomDispatch {
    fn decide(
        &self,
        elevators: &[Elevator],
        _waiting:  &WaitingRegistry,
        top_floor: Floor,
        rng:       &mut SimRng,
    ) -> Vec<Direction> {
        elevators
            .iter()
            .map(|e| {
                let valid: Vec<Direction> = ALL
                    .into_iter()
                    .filter(|d| d.is_valid_at(e.floor, top_floor))
                    .collect();
                // `valid` always contains at least Stay.
                *rng.pick(&valid).unwrap_or(&Direction::Stay)
            })
            .collect()
    }
}
