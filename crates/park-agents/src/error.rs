use park_core::{PatronId, RideId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("unknown ride kind {0:?}: expected FerrisWheel, PirateShip, BumperCars, or RollerCoaster")]
    UnknownRideKind(String),

    #[error("invalid ride {name:?}: {reason}")]
    InvalidRide { name: String, reason: String },

    #[error("{patron} is already assigned to {ride}")]
    AlreadyAssigned { patron: PatronId, ride: RideId },
}

pub type AgentResult<T> = Result<T, AgentError>;
