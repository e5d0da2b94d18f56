//! `lift-model` — entity state for the `rust_lift` simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`person`]   | `Person` — start/target floors, wait time, anger banding  |
//! | [`elevator`] | `Elevator` — position, capacity, FIFO passenger list      |
//! | [`registry`] | `WaitingRegistry` — per-floor FIFO queues of waiters      |
//!
//! # Ownership model
//!
//! At any instant every generated person lives in exactly one place: a floor
//! queue in the `WaitingRegistry`, some elevator's passenger list, or nowhere
//! (delivered and counted).  The structs here move `Person` values between
//! those places rather than sharing them, so the exclusivity invariant is
//! enforced by ownership instead of bookkeeping.

pub mod elevator;
pub mod person;
pub mod registry;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use elevator::Elevator;
pub use person::Person;
pub use registry::WaitingRegistry;
