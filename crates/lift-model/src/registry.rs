//! `WaitingRegistry` — per-floor FIFO queues of people awaiting an elevator.
//!
//! # Why this exists
//!
//! Boarding is strictly first-come-first-served per floor, and dispatch
//! models constantly ask "which floors have anyone waiting?".  Keeping one
//! `VecDeque` per floor gives O(1) FIFO boarding pops and a cheap linear scan
//! over a fixed, small floor count for the occupancy queries — no per-round
//! allocation, no hashing.
//!
//! Every floor in `[GROUND, num_floors]` always has a queue, even when empty,
//! so floor lookups never fail.

use std::collections::VecDeque;

use lift_core::Floor;

use crate::Person;

/// Per-floor ordered queues of waiting people, indexed by `Floor`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitingRegistry {
    /// One queue per floor; index `floor.index()`.
    queues: Vec<VecDeque<Person>>,
    /// Cached total waiter count for O(1) `total_waiting()`.
    total: usize,
}

impl WaitingRegistry {
    /// An empty registry for a building of `num_floors` floors.
    pub fn new(num_floors: u32) -> Self {
        WaitingRegistry {
            queues: vec![VecDeque::new(); num_floors as usize],
            total:  0,
        }
    }

    /// Number of floors covered (queue count).
    #[inline]
    pub fn num_floors(&self) -> u32 {
        self.queues.len() as u32
    }

    /// Append `person` at the back of `floor`'s queue.
    pub fn push(&mut self, floor: Floor, person: Person) {
        self.queues[floor.index()].push_back(person);
        self.total += 1;
    }

    /// Remove and return the earliest waiter on `floor`, if any.
    pub fn pop_front(&mut self, floor: Floor) -> Option<Person> {
        let person = self.queues[floor.index()].pop_front()?;
        self.total -= 1;
        Some(person)
    }

    /// Read-only view of `floor`'s queue, front = earliest waiter.
    #[inline]
    pub fn queue(&self, floor: Floor) -> &VecDeque<Person> {
        &self.queues[floor.index()]
    }

    /// Total number of people waiting across all floors.
    #[inline]
    pub fn total_waiting(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The lowest floor with at least one waiter, or `None` if nobody is
    /// waiting anywhere.
    pub fn lowest_occupied_floor(&self) -> Option<Floor> {
        self.queues
            .iter()
            .position(|q| !q.is_empty())
            .map(|i| Floor(i as u32 + 1))
    }

    /// The occupied floor nearest to `from`, ties resolving to the lower
    /// floor.  `None` if nobody is waiting anywhere.
    pub fn nearest_occupied_floor(&self, from: Floor) -> Option<Floor> {
        self.queues
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.is_empty())
            .map(|(i, _)| Floor(i as u32 + 1))
            .min_by_key(|&f| (from.distance_to(f), f))
    }

    /// Floors with at least one waiter, ascending.
    pub fn occupied_floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.queues
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.is_empty())
            .map(|(i, _)| Floor(i as u32 + 1))
    }

    /// Add one round of wait time to every person in every queue.
    pub fn age_all(&mut self) {
        for queue in &mut self.queues {
            for person in queue.iter_mut() {
                person.age();
            }
        }
    }
}
