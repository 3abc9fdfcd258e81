//! Turtle capabilities as a record of function values.
//!
//! Instead of a trait object per turtle flavor, a flavor is five function
//! values. A variant is built by wrapping one of them and keeping the rest,
//! so "half size" is nothing more than a move that halves its distance
//! before delegating.

use crate::core::{
    apply_move, apply_pen_down, apply_pen_up, apply_set_color, apply_turn, Angle, Command,
    Distance, PenColor, SharedLog, Step, TracingLog, TurtleState,
};
use std::fmt;
use std::sync::Arc;

pub type MoveFn = Arc<dyn Fn(&TurtleState, Distance) -> Step + Send + Sync>;
pub type TurnFn = Arc<dyn Fn(&TurtleState, Angle) -> TurtleState + Send + Sync>;
pub type PenFn = Arc<dyn Fn(&TurtleState) -> TurtleState + Send + Sync>;
pub type SetColorFn = Arc<dyn Fn(&TurtleState, PenColor) -> TurtleState + Send + Sync>;

/// The five operations a turtle supports.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use trundle::api::TurtleFunctions;
/// use trundle::core::{NoLog, Position, TurtleState};
///
/// let half = TurtleFunctions::normal(Arc::new(NoLog)).half_size();
/// let step = (half.move_fn)(&TurtleState::initial(), 100.0);
/// assert!(step.state.position.approx_eq(&Position::new(50.0, 0.0), 1e-9));
/// ```
#[derive(Clone)]
pub struct TurtleFunctions {
    pub move_fn: MoveFn,
    pub turn_fn: TurnFn,
    pub pen_up_fn: PenFn,
    pub pen_down_fn: PenFn,
    pub set_color_fn: SetColorFn,
}

impl TurtleFunctions {
    /// The standard turtle, backed directly by the transition functions.
    pub fn normal(log: SharedLog) -> Self {
        let move_log = Arc::clone(&log);
        let turn_log = Arc::clone(&log);
        let up_log = Arc::clone(&log);
        let down_log = Arc::clone(&log);
        let color_log = log;

        Self {
            move_fn: Arc::new(move |state: &TurtleState, distance: Distance| {
                apply_move(state, distance, move_log.as_ref())
            }),
            turn_fn: Arc::new(move |state: &TurtleState, angle: Angle| {
                apply_turn(state, angle, turn_log.as_ref())
            }),
            pen_up_fn: Arc::new(move |state: &TurtleState| apply_pen_up(state, up_log.as_ref())),
            pen_down_fn: Arc::new(move |state: &TurtleState| {
                apply_pen_down(state, down_log.as_ref())
            }),
            set_color_fn: Arc::new(move |state: &TurtleState, color: PenColor| {
                apply_set_color(state, color, color_log.as_ref())
            }),
        }
    }

    /// Scale every move by `factor`; all other functions are kept as is.
    pub fn scaled(self, factor: f64) -> Self {
        let inner = Arc::clone(&self.move_fn);
        Self {
            move_fn: Arc::new(move |state: &TurtleState, distance: Distance| {
                inner(state, distance * factor)
            }),
            ..self
        }
    }

    /// A turtle that draws everything at half size.
    pub fn half_size(self) -> Self {
        self.scaled(0.5)
    }

    /// Route a command to the matching function.
    pub fn apply(&self, state: &TurtleState, command: &Command) -> Step {
        match *command {
            Command::Move(distance) => (self.move_fn)(state, distance),
            Command::Turn(angle) => Step::silent((self.turn_fn)(state, angle)),
            Command::PenUp => Step::silent((self.pen_up_fn)(state)),
            Command::PenDown => Step::silent((self.pen_down_fn)(state)),
            Command::SetColor(color) => Step::silent((self.set_color_fn)(state, color)),
        }
    }
}

impl Default for TurtleFunctions {
    fn default() -> Self {
        Self::normal(Arc::new(TracingLog))
    }
}

impl fmt::Debug for TurtleFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurtleFunctions").finish_non_exhaustive()
    }
}
