//! `park-sim` — the park world and its tick loop.
//!
//! # Tick loop
//!
//! ```text
//! World::step():
//!   ① Clock   — tick += 1.
//!   ② Spawn   — with probability 0.2, and fewer than 30 patrons present,
//!               one patron appears at a random exit.
//!   ③ Rides   — Ride::step for every ride, in placement order.
//!   ④ Patrons — over a snapshot of present ids, in spawn order:
//!                 frozen patrons are skipped;
//!                 BehaviorModel::act, then the returned intent is applied
//!                 at once:
//!                   JoinQueue(ride) → Ride::add_to_queue
//!                   Exit            → World::remove_patron
//!   ⑤ Stats   — append this tick's TickStats to the history.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use park_agents::RoamingBehavior;
//! use park_core::ParkConfig;
//! use park_sim::{NoopObserver, WorldBuilder};
//!
//! let mut world = WorldBuilder::new(ParkConfig::default(), RoamingBehavior)
//!     .rides(park_config::default_rides())
//!     .build()?;
//! let summary = world.run(&mut NoopObserver)?;
//! println!("{summary}");
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod snapshot;
pub mod stats;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WorldObserver};
pub use snapshot::Snapshot;
pub use stats::{RideSummary, Summary, TickStats};
pub use world::{Placement, RejectedRide, World};
