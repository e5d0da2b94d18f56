//! Simulation observer trait for progress reporting and visualization hooks.

use lift_arrivals::ArrivalBatch;
use lift_core::{Direction, Round};
use lift_model::{Elevator, Person, WaitingRegistry};

use crate::RunStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// round loop.
///
/// Notification is strictly one-way: observers read, render, or record, but
/// nothing they do feeds back into the simulation.  All methods have default
/// no-op implementations so implementors only override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_round_end(&mut self, round: Round, elevators: &[Elevator], waiting: &WaitingRegistry) {
///         println!("{round}: {} waiting", waiting.total_waiting());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each round, before any processing.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called after the arrival stage with this round's new people, grouped
    /// by start floor.  May be empty.
    fn on_arrivals(&mut self, _round: Round, _arrivals: &ArrivalBatch) {}

    /// Called for each person delivered during the disembark stage.
    /// `car` is the elevator's index.
    fn on_disembark(&mut self, _round: Round, _car: usize, _person: &Person) {}

    /// Called for each person taken aboard during the boarding stage.
    fn on_board(&mut self, _round: Round, _car: usize, _person: &Person) {}

    /// Called after the move stage with the already-moved elevators and the
    /// directions the dispatch model chose.
    fn on_moves(&mut self, _round: Round, _elevators: &[Elevator], _directions: &[Direction]) {}

    /// Called at the end of each round with read-only world state, so
    /// renderers can draw a frame without the sim knowing about any
    /// particular output.
    fn on_round_end(&mut self, _round: Round, _elevators: &[Elevator], _waiting: &WaitingRegistry) {}

    /// Called once after the final round with the computed statistics.
    fn on_run_end(&mut self, _stats: &RunStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
