//! Builder for constructing a [`Sim`].

use lift_arrivals::ArrivalModel;
use lift_core::{SimConfig, SimRng};
use lift_dispatch::DispatchModel;
use lift_model::{Elevator, WaitingRegistry};

use crate::{Sim, SimResult};
use crate::stats::StatsAccumulator;

/// Builder for [`Sim<A, D>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — floor count, elevator fleet, capacity, seed
/// - `A: ArrivalModel` — where new people come from
/// - `D: DispatchModel` — how elevators move
///
/// `build()` validates the configuration up front, so an invalid building
/// (single floor, zero elevators, zero capacity) fails here and never reaches
/// the round loop.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config, ScriptedArrivals::from_csv(path)?, PushyPassenger)
///     .build()?;
/// let stats = sim.run(100, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<A: ArrivalModel, D: DispatchModel> {
    config:   SimConfig,
    arrivals: A,
    dispatch: D,
}

impl<A: ArrivalModel, D: DispatchModel> SimBuilder<A, D> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, arrivals: A, dispatch: D) -> Self {
        Self { config, arrivals, dispatch }
    }

    /// Validate the configuration and return a ready-to-run [`Sim`]:
    /// every elevator empty at the ground floor, every floor queue empty,
    /// all counters zero.
    pub fn build(self) -> SimResult<Sim<A, D>> {
        self.config.validate()?;

        let elevators = (0..self.config.num_elevators)
            .map(|_| Elevator::new(self.config.elevator_capacity))
            .collect();
        let waiting = WaitingRegistry::new(self.config.num_floors);
        let rng = SimRng::new(self.config.seed);

        Ok(Sim {
            elevators,
            waiting,
            rng,
            arrivals: self.arrivals,
            dispatch: self.dispatch,
            stats: StatsAccumulator::default(),
            config: self.config,
        })
    }
}
