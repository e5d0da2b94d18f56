//! Uniformly random arrivals.

use lift_core::{Floor, Round, SimRng};
use lift_model::Person;

use crate::{ArrivalBatch, ArrivalModel};

/// Generates a fixed number of random people every round.
///
/// Each person's `(start, target)` pair is drawn uniformly without
/// replacement from `[GROUND, top_floor]`, so start and target are distinct
/// by construction.  `people_per_round: None` means the model generates
/// nobody at all.
pub struct RandomArrivals {
    /// People to create each round; `None` generates zero.
    pub people_per_round: Option<usize>,
    /// Highest floor a start or target may take.
    pub top_floor: Floor,
}

impl RandomArrivals {
    pub fn new(people_per_round: Option<usize>, top_floor: Floor) -> Self {
        RandomArrivals { people_per_round, top_floor }
    }
}

impl ArrivalModel for RandomArrivals {
    fn generate(&self, _round: Round, rng: &mut SimRng) -> ArrivalBatch {
        let mut batch = ArrivalBatch::new();
        let Some(count) = self.people_per_round else {
            return batch;
        };
        for _ in 0..count {
            let (start, target) = rng.two_distinct_floors(self.top_floor);
            batch.entry(start).or_default().push(Person::new(start, target));
        }
        batch
    }
}
