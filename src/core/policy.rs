//! Named movement and ink policies.
//!
//! The default interpreter lets the turtle wander freely. The bounded
//! policy fences it into a square and reports when a move ran into the
//! fence. Ink supply lets a set-color request be refused. Both outcomes
//! are domain responses, not errors: a valid new state is always produced.

use super::log::TurtleLog;
use super::position::{calc_new_position, Distance, Position};
use super::state::{PenColor, TurtleState};
use super::transition::{move_to, Step};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Lower bound of the default fenced area.
pub const DEFAULT_MIN_COORD: f64 = 0.0;
/// Upper bound of the default fenced area.
pub const DEFAULT_MAX_COORD: f64 = 100.0;

/// Outcome of a move under a movement policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResponse {
    MoveOk,
    HitABarrier,
}

/// Outcome of a set-color request under an ink policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetColorResponse {
    ColorOk,
    OutOfInk,
}

/// How moves treat the edges of the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum MovePolicy {
    /// Positions are never constrained.
    #[default]
    Unbounded,
    /// Both coordinates are clamped into the range spanned by `min` and
    /// `max`. Inverted bounds span the same range; a NaN bound leaves that
    /// side open.
    Bounded { min: f64, max: f64 },
}

impl MovePolicy {
    /// The bounded policy over the default `[0, 100]` square.
    pub fn bounded() -> Self {
        Self::Bounded {
            min: DEFAULT_MIN_COORD,
            max: DEFAULT_MAX_COORD,
        }
    }

    /// Clamp a target position, reporting whether a barrier was hit.
    pub fn constrain(&self, target: Position) -> (Position, MoveResponse) {
        match *self {
            Self::Unbounded => (target, MoveResponse::MoveOk),
            Self::Bounded { min, max } => {
                let min = if min.is_nan() { f64::NEG_INFINITY } else { min };
                let max = if max.is_nan() { f64::INFINITY } else { max };
                let (lo, hi) = (min.min(max), min.max(max));
                // f64::clamp panics on inverted or NaN bounds
                let fence = |v: f64| v.max(lo).min(hi);
                let clamped = Position::new(fence(target.x), fence(target.y));
                if clamped == target {
                    (target, MoveResponse::MoveOk)
                } else {
                    (clamped, MoveResponse::HitABarrier)
                }
            }
        }
    }
}

/// Move under the given policy.
///
/// # Example
///
/// ```rust
/// use trundle::core::{move_with_policy, MovePolicy, MoveResponse, NoLog, Position, TurtleState};
///
/// let state = TurtleState::initial().with_position(Position::new(95.0, 95.0));
/// let (response, step) = move_with_policy(&state, 50.0, &MovePolicy::bounded(), &NoLog);
/// assert_eq!(response, MoveResponse::HitABarrier);
/// assert_eq!(step.state.position, Position::new(100.0, 95.0));
/// ```
pub fn move_with_policy(
    state: &TurtleState,
    distance: Distance,
    policy: &MovePolicy,
    log: &dyn TurtleLog,
) -> (MoveResponse, Step) {
    log.log(&format!("Move {distance:.1}"));
    let target = calc_new_position(distance, state.heading, state.position);
    let (target, response) = policy.constrain(target);
    if response == MoveResponse::HitABarrier {
        log.log(&format!("Hit a barrier at {target}"));
    }
    (response, move_to(state, target, log))
}

/// Which pen colors have run out of ink.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InkSupply {
    exhausted: HashSet<PenColor>,
}

impl InkSupply {
    /// Every color has ink.
    pub fn full() -> Self {
        Self::default()
    }

    /// The given colors are out of ink.
    pub fn without(colors: impl IntoIterator<Item = PenColor>) -> Self {
        Self {
            exhausted: colors.into_iter().collect(),
        }
    }

    pub fn has_ink(&self, color: PenColor) -> bool {
        !self.exhausted.contains(&color)
    }

    pub fn exhaust(&mut self, color: PenColor) {
        self.exhausted.insert(color);
    }
}

/// Change color if there is ink for it. An exhausted color leaves the
/// state untouched and reports `OutOfInk`.
pub fn set_color_with_ink(
    state: &TurtleState,
    color: PenColor,
    ink: &InkSupply,
    log: &dyn TurtleLog,
) -> (SetColorResponse, TurtleState) {
    log.log(&format!("SetColor {color}"));
    if ink.has_ink(color) {
        (SetColorResponse::ColorOk, state.with_color(color))
    } else {
        log.log(&format!("Out of {color} ink"));
        (SetColorResponse::OutOfInk, *state)
    }
}
