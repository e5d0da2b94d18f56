//! The `ArrivalModel` trait — where new people come from.

use std::collections::BTreeMap;

use lift_core::{Floor, Round, SimRng};
use lift_model::Person;

/// New arrivals for one round, keyed by starting floor.
///
/// A `BTreeMap` keeps floor iteration order deterministic, so two runs with
/// the same seed append people to the registry identically.
pub type ArrivalBatch = BTreeMap<Floor, Vec<Person>>;

/// Pluggable arrival generation.
///
/// The simulation loop calls [`generate`][Self::generate] exactly once per
/// round and never branches on the concrete variant.  Implementations receive
/// a mutable [`SimRng`] so randomized variants stay deterministic under a
/// fixed seed; deterministic variants simply ignore it.
///
/// A round with no arrivals — including round numbers far beyond anything the
/// model knows about — yields an empty batch, never an error.
pub trait ArrivalModel: Send + Sync + 'static {
    /// Return the people arriving at the given round, grouped by start floor.
    fn generate(&self, round: Round, rng: &mut SimRng) -> ArrivalBatch;
}
