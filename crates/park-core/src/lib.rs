//! `park-core` — foundational types for the Adventure World park simulation.
//!
//! This crate is a dependency of every other `park-*` crate.  It intentionally
//! has no `park-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RideId`, `PatronId`                                  |
//! | [`geo`]         | `Point`, `Bounds` (axis-aligned boxes)                |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (injected, seedable)                         |
//! | [`config`]      | `ParkConfig`                                          |
//! | [`error`]       | `ParkError`, `ParkResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ParkConfig;
pub use error::{ParkError, ParkResult};
pub use geo::{Bounds, Point};
pub use ids::{PatronId, RideId};
pub use rng::SimRng;
pub use time::Tick;
