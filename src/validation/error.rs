//! Validation error types.

use thiserror::Error;

/// Errors produced when raw command text cannot become a `Command`.
///
/// Each variant carries the offending text so callers can report it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid distance: {0}")]
    InvalidDistance(String),

    #[error("Invalid angle: {0}")]
    InvalidAngle(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
