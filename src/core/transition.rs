//! Pure state transition functions.
//!
//! Every function here takes the current state by reference and returns a
//! new one. None of them can fail: a `Command` is already a valid value, so
//! there is nothing left to reject once one reaches this module.

use super::command::Command;
use super::log::TurtleLog;
use super::position::{calc_new_position, Angle, Distance, Position};
use super::state::{normalize_heading, PenColor, PenState, TurtleState};
use serde::{Deserialize, Serialize};

/// A line left on the canvas by a move made with the pen down.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: Position,
    pub to: Position,
    pub color: PenColor,
}

impl LineSegment {
    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }
}

/// Result of applying one command: the next state, plus the line drawn
/// on the way there, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub state: TurtleState,
    pub drawn: Option<LineSegment>,
}

impl Step {
    /// A step that changed the state without drawing.
    pub fn silent(state: TurtleState) -> Self {
        Self { state, drawn: None }
    }
}

/// Report a line drawn from `from` to `to` to the log sink.
pub(crate) fn log_line(log: &dyn TurtleLog, segment: &LineSegment) {
    log.log(&format!(
        "...Draw line from ({:.1}, {:.1}) to ({:.1}, {:.1}) using {}",
        segment.from.x, segment.from.y, segment.to.x, segment.to.y, segment.color
    ));
}

/// Build the step for a move to `target`, drawing only when the pen is down.
pub(crate) fn move_to(state: &TurtleState, target: Position, log: &dyn TurtleLog) -> Step {
    let drawn = state.is_pen_down().then(|| LineSegment {
        from: state.position,
        to: target,
        color: state.color,
    });
    if let Some(segment) = &drawn {
        log_line(log, segment);
    }
    Step {
        state: state.with_position(target),
        drawn,
    }
}

/// Move forward along the current heading.
///
/// Only the position changes. When the pen is down the returned step
/// carries the segment that was drawn.
///
/// # Example
///
/// ```rust
/// use trundle::core::{apply_move, apply_pen_down, NoLog, Position, TurtleState};
///
/// let up = apply_move(&TurtleState::initial(), 100.0, &NoLog);
/// assert!(up.drawn.is_none());
/// assert!(up.state.position.approx_eq(&Position::new(100.0, 0.0), 1e-9));
///
/// let down = apply_pen_down(&TurtleState::initial(), &NoLog);
/// let step = apply_move(&down, 100.0, &NoLog);
/// assert!(step.drawn.is_some());
/// ```
pub fn apply_move(state: &TurtleState, distance: Distance, log: &dyn TurtleLog) -> Step {
    log.log(&format!("Move {distance:.1}"));
    let target = calc_new_position(distance, state.heading, state.position);
    move_to(state, target, log)
}

/// Turn by `angle` degrees; the heading stays within `[0, 360)`.
pub fn apply_turn(state: &TurtleState, angle: Angle, log: &dyn TurtleLog) -> TurtleState {
    log.log(&format!("Turn {angle:.1}"));
    TurtleState {
        heading: normalize_heading(state.heading + angle),
        ..*state
    }
}

pub fn apply_pen_up(state: &TurtleState, log: &dyn TurtleLog) -> TurtleState {
    log.log("Pen up");
    state.with_pen(PenState::Up)
}

pub fn apply_pen_down(state: &TurtleState, log: &dyn TurtleLog) -> TurtleState {
    log.log("Pen down");
    state.with_pen(PenState::Down)
}

pub fn apply_set_color(state: &TurtleState, color: PenColor, log: &dyn TurtleLog) -> TurtleState {
    log.log(&format!("SetColor {color}"));
    state.with_color(color)
}

/// Apply a single command. This is the one interpreter every way of
/// driving a turtle goes through.
///
/// # Example
///
/// ```rust
/// use trundle::core::{apply, Command, NoLog, TurtleState};
///
/// let step = apply(&TurtleState::initial(), &Command::Turn(120.0), &NoLog);
/// assert_eq!(step.state.heading, 120.0);
/// assert!(step.drawn.is_none());
/// ```
pub fn apply(state: &TurtleState, command: &Command, log: &dyn TurtleLog) -> Step {
    match *command {
        Command::Move(distance) => apply_move(state, distance, log),
        Command::Turn(angle) => Step::silent(apply_turn(state, angle, log)),
        Command::PenUp => Step::silent(apply_pen_up(state, log)),
        Command::PenDown => Step::silent(apply_pen_down(state, log)),
        Command::SetColor(color) => Step::silent(apply_set_color(state, color, log)),
    }
}
