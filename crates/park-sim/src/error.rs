use park_agents::AgentError;
use park_core::{ParkError, RideId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("behavior requested unknown {0}")]
    UnknownRide(RideId),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Core(#[from] ParkError),
}

pub type SimResult<T> = Result<T, SimError>;
