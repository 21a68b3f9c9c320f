use std::path::PathBuf;

use park_agents::AgentError;
use park_core::ParkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Line { line: u64, message: String },

    #[error("line {line}: {source}")]
    Ride {
        line:   u64,
        #[source]
        source: AgentError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Core(#[from] ParkError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
