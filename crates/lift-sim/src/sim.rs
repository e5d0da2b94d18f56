//! The `Sim` struct and its round loop.

use lift_arrivals::ArrivalModel;
use lift_core::{Direction, Floor, Round, SimConfig, SimRng};
use lift_dispatch::DispatchModel;
use lift_model::{Elevator, WaitingRegistry};

use crate::stats::StatsAccumulator;
use crate::{RunStats, SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<A, D>` owns all world state for one run and drives the five-stage
/// round loop (arrivals → disembark → board → move → age).  Ownership keeps
/// the partition invariant structural: every generated person is either in
/// `waiting`, in some elevator's passenger list, or already delivered and
/// counted — the stages move `Person` values between those places, never
/// copy them.
///
/// [`run`][Self::run] takes the sim by value: a consumed engine cannot be
/// rerun, so "each run starts from a pristine state" is enforced by the
/// compiler.  Build a fresh instance per run via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<A: ArrivalModel, D: DispatchModel> {
    /// Static run parameters (validated by the builder).
    pub config: SimConfig,

    /// The elevator fleet, index = car number.
    pub elevators: Vec<Elevator>,

    /// Per-floor FIFO queues of people not yet aboard.
    pub waiting: WaitingRegistry,

    /// Deterministic RNG handed to both models each round.
    pub(crate) rng: SimRng,

    /// Produces this round's new people.  Consulted once per round.
    pub(crate) arrivals: A,

    /// Decides each elevator's direction.  Consulted once per round.
    pub(crate) dispatch: D,

    /// Running counters, folded into [`RunStats`] at the end.
    pub(crate) stats: StatsAccumulator,
}

impl<A: ArrivalModel, D: DispatchModel> Sim<A, D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run `num_rounds` rounds and return the final statistics.
    ///
    /// Calls observer hooks at every stage boundary; use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// `num_rounds` must be at least 1.
    pub fn run<O: SimObserver>(mut self, num_rounds: u64, observer: &mut O) -> SimResult<RunStats> {
        if num_rounds == 0 {
            return Err(SimError::ZeroRounds);
        }

        for r in 0..num_rounds {
            let round = Round(r);
            observer.on_round_start(round);
            self.process_round(round, observer)?;
            observer.on_round_end(round, &self.elevators, &self.waiting);
        }

        let stats = self.stats.finish(num_rounds);
        observer.on_run_end(&stats);
        Ok(stats)
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn process_round<O: SimObserver>(&mut self, round: Round, observer: &mut O) -> SimResult<()> {
        let top_floor = self.config.top_floor();

        // ── Stage 1: arrivals ─────────────────────────────────────────────
        let batch = self.arrivals.generate(round, &mut self.rng);
        observer.on_arrivals(round, &batch);
        for (floor, people) in batch {
            for person in people {
                self.stats.total_people += 1;
                self.waiting.push(floor, person);
            }
        }

        // ── Stage 2: disembark ────────────────────────────────────────────
        //
        // Drain-and-partition removal, so adjacent same-target passengers
        // are never skipped.
        for (car, elevator) in self.elevators.iter_mut().enumerate() {
            let here = elevator.floor;
            for person in elevator.disembark_at(here) {
                self.stats.record_delivery(person.wait_time);
                observer.on_disembark(round, car, &person);
            }
        }

        // ── Stage 3: board ────────────────────────────────────────────────
        //
        // Earliest waiter first, per floor, until the car fills or the floor
        // empties.  Cars board in index order, so when two cars share a floor
        // the lower-numbered one takes the earlier waiters.
        for (car, elevator) in self.elevators.iter_mut().enumerate() {
            let here = elevator.floor;
            while !elevator.is_full() {
                let Some(person) = self.waiting.pop_front(here) else {
                    break;
                };
                observer.on_board(round, car, &person);
                elevator.board(person);
            }
        }

        // ── Stage 4: move ─────────────────────────────────────────────────
        let directions =
            self.dispatch
                .decide(&self.elevators, &self.waiting, top_floor, &mut self.rng);
        if directions.len() != self.elevators.len() {
            return Err(SimError::DirectionCountMismatch {
                expected: self.elevators.len(),
                got:      directions.len(),
            });
        }
        for (elevator, &direction) in self.elevators.iter_mut().zip(&directions) {
            // A direction off the end of the building is a contract
            // violation by the dispatch model; clamp it to Stay, in every
            // build profile alike, so one bad decision cannot corrupt the
            // floor-range invariant.
            match direction {
                Direction::Up if elevator.floor < top_floor => {
                    elevator.floor = elevator.floor.above();
                }
                Direction::Down if elevator.floor > Floor::GROUND => {
                    elevator.floor = elevator.floor.below();
                }
                _ => {}
            }
        }
        observer.on_moves(round, &self.elevators, &directions);

        // ── Stage 5: age ──────────────────────────────────────────────────
        //
        // Everyone still in play waits one more round.  People delivered in
        // stage 2 already left the world and are not aged.
        self.waiting.age_all();
        for elevator in &mut self.elevators {
            for person in &mut elevator.passengers {
                person.age();
            }
        }

        Ok(())
    }
}
