//! The `DispatchModel` trait — the movement extension point.

use lift_core::{Direction, Floor, SimRng};
use lift_model::{Elevator, WaitingRegistry};

/// Pluggable elevator movement decisions.
///
/// Called once per round by the simulation loop.  The returned `Vec` must
/// hold exactly one [`Direction`] per elevator, in input order.
///
/// # Contract
///
/// - An elevator at `Floor::GROUND` must not be sent `Down`; one at
///   `top_floor` must not be sent `Up`.  The loop clamps violations rather
///   than panicking, but a clamped decision is a model bug.
/// - No people waiting anywhere is a normal situation, not an error — idle
///   heuristics answer `Stay`.
/// - Implementations read the arguments and nothing else; any randomness
///   comes from the injected [`SimRng`].
pub trait DispatchModel: Send + Sync + 'static {
    /// Decide one movement direction per elevator for this round.
    fn decide(
        &self,
        elevators: &[Elevator],
        waiting:   &WaitingRegistry,
        top_floor: Floor,
        rng:       &mut SimRng,
    ) -> Vec<Direction>;
}
