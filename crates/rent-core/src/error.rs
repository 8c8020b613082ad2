//! Error type for the core primitives.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("invalid random draw: {0}")]
    InvalidDraw(String),
}

/// Shorthand result type for `rent-core`.
pub type CoreResult<T> = Result<T, CoreError>;
