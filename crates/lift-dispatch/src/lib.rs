//! `lift-dispatch` — elevator movement heuristics for the `rust_lift`
//! simulation.
//!
//! # Crate layout
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`model`]        | `DispatchModel` trait                                |
//! | [`random`]       | `RandomDispatch` — uniform choice of valid direction |
//! | [`pushy`]        | `PushyPassenger` — first boarder steers the car      |
//! | [`short_sighted`]| `ShortSighted` — always head for the nearest goal    |
//! | [`idle`]         | `Idle` — never moves; placeholder for tests          |
//!
//! # Design notes
//!
//! A dispatch model is consulted once per round with read-only state and
//! answers with one [`Direction`][lift_core::Direction] per elevator.  Models
//! hold no cross-round memory — every decision is a pure function of the
//! elevators, the waiting registry, and (for `RandomDispatch`) the injected
//! RNG — so variants are freely substitutable and trivially testable.

pub mod idle;
pub mod model;
pub mod pushy;
pub mod random;
pub mod short_sighted;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use idle::Idle;
pub use model::DispatchModel;
pub use pushy::PushyPassenger;
pub use random::RandomDispatch;
pub use short_sighted::ShortSighted;
