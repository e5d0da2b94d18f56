//! `lift-core` — foundational types for the `rust_lift` elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                   |
//! |---------------|--------------------------------------------|
//! | [`floor`]     | `Floor` — 1-based building floor number    |
//! | [`round`]     | `Round` — discrete simulation round counter|
//! | [`direction`] | `Direction` enum (`Up`, `Down`, `Stay`)    |
//! | [`config`]    | `SimConfig` and its validation             |
//! | [`rng`]       | `SimRng` — seedable deterministic RNG      |
//! | [`error`]     | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod rng;
pub mod round;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use floor::Floor;
pub use rng::SimRng;
pub use round::Round;
