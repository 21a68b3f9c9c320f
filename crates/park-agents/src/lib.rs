//! `park-agents` — rides, patrons, and patron behavior.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`kind`]    | `RideKind` tag, `RideShape` geometry, animation angles          |
//! | [`ride`]    | `RideSpec`, `RideState`, `Ride` state machine                   |
//! | [`patron`]  | `Patron`, `PatronState`, `SteeringTarget`, `Color`              |
//! | [`store`]   | `PatronStore` — present patrons in spawn order                  |
//! | [`context`] | `ParkContext<'a>` — read-only view handed to behaviors          |
//! | [`intent`]  | `Intent` (`JoinQueue`, `Exit`)                                  |
//! | [`model`]   | `BehaviorModel` trait                                           |
//! | [`roaming`] | `RoamingBehavior` — the standard visitor                        |
//! | [`noop`]    | `NoopBehavior` — patrons never act                              |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                                  |
//!
//! # Ownership
//!
//! Rides and patrons never hold references to each other.  A ride's queue and
//! rider list store `PatronId`s; a patron stores the `RideId` it is assigned
//! to.  Ride operations receive the `PatronStore` by `&mut` and are the only
//! code that moves a patron into or out of `Queuing`/`Riding`.

pub mod context;
pub mod error;
pub mod intent;
pub mod kind;
pub mod model;
pub mod noop;
pub mod patron;
pub mod ride;
pub mod roaming;
pub mod store;


pub use context::ParkContext;
pub use error::{AgentError, AgentResult};
pub use intent::Intent;
pub use kind::{RideKind, RideShape};
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use patron::{Color, Patron, PatronState, SteeringTarget};
pub use ride::{Ride, RideSpec, RideState};
pub use roaming::RoamingBehavior;
pub use store::PatronStore;
