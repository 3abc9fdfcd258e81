//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring a turtle checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// JSON encoding or decoding failed
    #[error("JSON checkpoint error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed
    #[error("Binary checkpoint error: {0}")]
    Binary(#[from] bincode::Error),

    /// Checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Replaying the recorded history does not reach the recorded state
    #[error("Checkpoint history does not match its state: {0}")]
    HistoryMismatch(String),
}
