//! Checkpoint and resume support for object turtles.
//!
//! A checkpoint captures a turtle's identity, its starting state, its
//! current state and its full history, so a drawing session can be stored
//! and continued later. JSON is provided for readability and bincode for
//! compactness.

use crate::core::{NoLog, TurtleHistory, TurtleState};
use crate::interpreter::run_sequence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Tolerance used when checking a checkpoint's state against its history.
const REPLAY_TOLERANCE: f64 = 1e-6;

/// Serializable snapshot of a turtle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Identifier of the checkpointed turtle
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State the turtle started from
    pub initial_state: TurtleState,

    /// State at the time of the checkpoint
    pub current_state: TurtleState,

    /// Complete command history
    pub history: TurtleHistory,
}

impl TurtleCheckpoint {
    /// Check version and internal consistency.
    ///
    /// Replaying the recorded commands from the initial state must reach
    /// the recorded current state.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let commands = self.history.commands();
        let replayed = run_sequence(&commands, self.initial_state, &NoLog);
        if !replayed.approx_eq(&self.current_state, REPLAY_TOLERANCE) {
            return Err(CheckpointError::HistoryMismatch(format!(
                "history replays to {:?}, checkpoint records {:?}",
                replayed, self.current_state
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a JSON checkpoint and validate it.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a binary checkpoint and validate it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}
