//! `lift-sim` — round loop orchestrator for the `rust_lift` simulation.
//!
//! # Five-stage round loop
//!
//! ```text
//! for round in 0..num_rounds:
//!   ① Arrivals   — ask the ArrivalModel for new people; append each to the
//!                  waiting registry at their start floor.
//!   ② Disembark  — every passenger whose target matches their elevator's
//!                  floor leaves; their wait time is recorded.
//!   ③ Board      — each elevator takes waiters from its floor, FIFO,
//!                  until full or the floor empties.
//!   ④ Move       — one DispatchModel::decide call; apply each direction
//!                  (boundary violations clamp to Stay).
//!   ⑤ Age        — +1 wait time for everyone still waiting or aboard.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_arrivals::RandomArrivals;
//! use lift_core::SimConfig;
//! use lift_dispatch::ShortSighted;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig { num_floors: 6, num_elevators: 2, elevator_capacity: 4, seed: 42 };
//! let arrivals = RandomArrivals::new(Some(2), config.top_floor());
//! let sim = SimBuilder::new(config, arrivals, ShortSighted).build()?;
//! let stats = sim.run(100, &mut NoopObserver)?;
//! println!("delivered {} of {}", stats.people_completed, stats.total_people);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::RunStats;
