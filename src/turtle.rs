//! Object-style turtle with a single mutable state.
//!
//! `Turtle` owns one `TurtleState` and replaces it on every command. It
//! goes through the same pure transition functions as every other driver,
//! so a sequence of calls here ends in the same state as folding the
//! equivalent commands with `run_sequence`.

use crate::checkpoint::{CheckpointError, TurtleCheckpoint, CHECKPOINT_VERSION};
use crate::core::{
    apply, Angle, Command, Distance, PenColor, Position, TracingLog, TransitionRecord,
    TurtleHistory, TurtleLog, TurtleState,
};
use chrono::Utc;
use uuid::Uuid;

/// A mutable turtle with an injected log sink.
///
/// # Example
///
/// ```rust
/// use trundle::core::{NoLog, PenColor, Position};
/// use trundle::turtle::Turtle;
///
/// let mut turtle = Turtle::new(NoLog);
/// turtle.pen_down();
/// turtle.set_color(PenColor::Red);
/// turtle.move_by(100.0);
/// turtle.turn(90.0);
///
/// assert!(turtle.position().approx_eq(&Position::new(100.0, 0.0), 1e-9));
/// assert_eq!(turtle.heading(), 90.0);
/// assert_eq!(turtle.history().lines().len(), 1);
/// ```
pub struct Turtle<L: TurtleLog = TracingLog> {
    id: String,
    log: L,
    initial: TurtleState,
    state: TurtleState,
    history: TurtleHistory,
}

impl Default for Turtle<TracingLog> {
    fn default() -> Self {
        Self::new(TracingLog)
    }
}

impl<L: TurtleLog> Turtle<L> {
    /// Create a turtle in the initial state.
    pub fn new(log: L) -> Self {
        Self::starting_at(TurtleState::initial(), log)
    }

    /// Create a turtle that starts from an arbitrary state.
    pub fn starting_at(state: TurtleState, log: L) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            log,
            initial: state,
            state,
            history: TurtleHistory::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn heading(&self) -> Angle {
        self.state.heading
    }

    pub fn color(&self) -> PenColor {
        self.state.color
    }

    pub fn is_pen_down(&self) -> bool {
        self.state.is_pen_down()
    }

    pub fn history(&self) -> &TurtleHistory {
        &self.history
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Apply a command, replacing the current state.
    pub fn exec(&mut self, command: &Command) {
        let step = apply(&self.state, command, &self.log);
        self.history.push(TransitionRecord {
            from: self.state,
            to: step.state,
            command: *command,
            drawn: step.drawn,
            timestamp: Utc::now(),
        });
        self.state = step.state;
    }

    pub fn move_by(&mut self, distance: Distance) {
        self.exec(&Command::Move(distance));
    }

    pub fn turn(&mut self, angle: Angle) {
        self.exec(&Command::Turn(angle));
    }

    pub fn pen_up(&mut self) {
        self.exec(&Command::PenUp);
    }

    pub fn pen_down(&mut self) {
        self.exec(&Command::PenDown);
    }

    pub fn set_color(&mut self, color: PenColor) {
        self.exec(&Command::SetColor(color));
    }

    /// Snapshot this turtle so it can be stored and resumed later.
    pub fn checkpoint(&self) -> TurtleCheckpoint {
        TurtleCheckpoint {
            version: CHECKPOINT_VERSION,
            id: self.id.clone(),
            timestamp: Utc::now(),
            initial_state: self.initial,
            current_state: self.state,
            history: self.history.clone(),
        }
    }

    /// Rebuild a turtle from a checkpoint, keeping its id and history.
    pub fn resume(checkpoint: TurtleCheckpoint, log: L) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        tracing::debug!(
            id = %checkpoint.id,
            commands = checkpoint.history.len(),
            "resuming turtle"
        );
        Ok(Self {
            id: checkpoint.id,
            log,
            initial: checkpoint.initial_state,
            state: checkpoint.current_state,
            history: checkpoint.history,
        })
    }
}
