//! Top-level simulation configuration.

use crate::{CoreError, CoreResult, Floor};

/// Static parameters of one simulation run.
///
/// Typically constructed in code or loaded from a TOML/JSON file by the
/// application crate (with the `serde` feature) and passed to the builder in
/// `lift-sim`.  `validate()` is called there, so a hand-built invalid config
/// fails fast at construction time rather than mid-run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Must be at least 2 — with a single
    /// floor no person can have distinct start and target floors.
    pub num_floors: u32,

    /// Number of elevators.  All start empty at the ground floor.
    pub num_elevators: usize,

    /// Passenger capacity of every elevator.  Constant for the whole run.
    pub elevator_capacity: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// The highest floor in the building.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.num_floors)
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_floors < 2 {
            return Err(CoreError::Config(format!(
                "building must have at least 2 floors, got {}",
                self.num_floors
            )));
        }
        if self.num_elevators == 0 {
            return Err(CoreError::Config("at least one elevator is required".into()));
        }
        if self.elevator_capacity == 0 {
            return Err(CoreError::Config("elevator capacity must be positive".into()));
        }
        Ok(())
    }
}
