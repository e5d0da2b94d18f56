//! Elevator state and passenger queries.

use lift_core::Floor;

use crate::Person;

/// One elevator car.
///
/// # Invariants
///
/// - `passengers.len() <= capacity` at all times; `board` is the only way in
///   and it panics (debug) on overfill — the simulation loop checks
///   `is_full` first.
/// - `floor >= Floor::GROUND`; staying within the building's top floor is
///   the simulation loop's responsibility, since only it knows the height.
/// - `passengers` preserves boarding order: index 0 is the earliest boarder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    /// Current position.
    pub floor: Floor,
    /// Maximum passenger count.  Constant for the whole run.
    pub capacity: usize,
    /// People aboard, in boarding order.
    pub passengers: Vec<Person>,
}

impl Elevator {
    /// A new empty elevator at the ground floor.
    pub fn new(capacity: usize) -> Self {
        Elevator {
            floor: Floor::GROUND,
            capacity,
            passengers: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers.len() == self.capacity
    }

    /// Occupancy fraction in `[0.0, 1.0]`.
    #[inline]
    pub fn fullness(&self) -> f64 {
        self.passengers.len() as f64 / self.capacity as f64
    }

    /// Take a passenger aboard, at the back of the boarding order.
    ///
    /// Callers must check `is_full` first.
    pub fn board(&mut self, person: Person) {
        debug_assert!(!self.is_full(), "boarding past capacity");
        self.passengers.push(person);
    }

    /// Remove and return every passenger whose target is `floor`, preserving
    /// the boarding order of those who remain.
    ///
    /// Draining the whole list and partitioning it sidesteps the classic
    /// skipped-entry bug of removing from a list while iterating it.
    pub fn disembark_at(&mut self, floor: Floor) -> Vec<Person> {
        let (off, aboard): (Vec<Person>, Vec<Person>) = std::mem::take(&mut self.passengers)
            .into_iter()
            .partition(|p| p.target == floor);
        self.passengers = aboard;
        off
    }

    /// Target floor of the earliest-boarded passenger, if any.
    #[inline]
    pub fn first_target(&self) -> Option<Floor> {
        self.passengers.first().map(|p| p.target)
    }

    /// Passenger target floor nearest to the elevator's current position.
    ///
    /// Equidistant targets resolve to the lower floor; boarding order is
    /// irrelevant.  `None` when empty.
    pub fn nearest_target(&self) -> Option<Floor> {
        self.passengers
            .iter()
            .map(|p| p.target)
            .min_by_key(|&t| (self.floor.distance_to(t), t))
    }
}
