//! Base error type.
//!
//! Raised when a [`ParkConfig`](crate::ParkConfig) fails validation.  Sub-crates
//! wrap it as one variant of their own error enums via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParkError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `park-core`.
pub type ParkResult<T> = Result<T, ParkError>;
