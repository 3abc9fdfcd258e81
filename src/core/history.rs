//! Turtle transition history tracking.
//!
//! Provides immutable tracking of the commands a turtle has executed,
//! the states it passed through and the lines it drew.

use super::command::Command;
use super::state::TurtleState;
use super::transition::LineSegment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied command.
///
/// # Example
///
/// ```rust
/// use trundle::core::{apply, Command, NoLog, TransitionRecord, TurtleState};
/// use chrono::Utc;
///
/// let from = TurtleState::initial();
/// let step = apply(&from, &Command::Turn(90.0), &NoLog);
/// let record = TransitionRecord {
///     from,
///     to: step.state,
///     command: Command::Turn(90.0),
///     drawn: step.drawn,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to.heading, 90.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state before the command
    pub from: TurtleState,
    /// The state after the command
    pub to: TurtleState,
    /// The command that was applied
    pub command: Command,
    /// The line drawn by the command, if any
    pub drawn: Option<LineSegment>,
    /// When the command was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied commands.
///
/// `record` never mutates: it returns a copy with one more entry. Owners
/// that hold the history mutably use `push` instead.
///
/// # Example
///
/// ```rust
/// use trundle::core::{apply, Command, NoLog, TransitionRecord, TurtleHistory, TurtleState};
/// use chrono::Utc;
///
/// let history = TurtleHistory::new();
/// let from = TurtleState::initial();
/// let step = apply(&from, &Command::Move(10.0), &NoLog);
///
/// let history = history.record(TransitionRecord {
///     from,
///     to: step.state,
///     command: Command::Move(10.0),
///     drawn: step.drawn,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurtleHistory {
    transitions: Vec<TransitionRecord>,
}

impl TurtleHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// A copy of this history with `transition` appended.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append in place.
    pub fn push(&mut self, transition: TransitionRecord) {
        self.transitions.push(transition);
    }

    /// Every state visited: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&TurtleState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Commands in the order they were applied.
    pub fn commands(&self) -> Vec<Command> {
        self.transitions.iter().map(|t| t.command).collect()
    }

    /// Every line drawn, in drawing order.
    pub fn lines(&self) -> Vec<LineSegment> {
        self.transitions.iter().filter_map(|t| t.drawn).collect()
    }

    /// Wall-clock time between the first and last command, if any.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
