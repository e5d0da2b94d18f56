//! `lift-arrivals` — arrival models for the `rust_lift` simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`model`]    | `ArrivalModel` trait, `ArrivalBatch` alias              |
//! | [`random`]   | `RandomArrivals` — N uniformly random people per round  |
//! | [`scripted`] | `ScriptedArrivals` — precomputed round → arrivals table |
//! | [`loader`]   | CSV parsing into the scripted table                     |
//! | [`error`]    | `ArrivalError`, `ArrivalResult<T>`                      |
//!
//! # Design notes
//!
//! An arrival model is a pure function of the round number plus an injected
//! RNG: the simulation loop calls [`ArrivalModel::generate`] once per round
//! and appends the returned people to the waiting registry.  Models hold only
//! their own immutable configuration (the scripted table, the per-round
//! count), never state that outlives a call — the loop must behave
//! identically no matter which variant it was given.

pub mod error;
pub mod loader;
pub mod model;
pub mod random;
pub mod scripted;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ArrivalError, ArrivalResult};
pub use model::{ArrivalBatch, ArrivalModel};
pub use random::RandomArrivals;
pub use scripted::ScriptedArrivals;
