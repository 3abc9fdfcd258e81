//! Turtle state: position, heading, pen color and pen state.
//!
//! `TurtleState` is an immutable value. Every command application produces
//! a new state; the caller decides whether to keep or discard the old one.

use super::position::{Angle, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colors the pen can draw with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenColor {
    Black,
    Red,
    Blue,
}

impl PenColor {
    /// All available colors, in declaration order.
    pub const ALL: [PenColor; 3] = [PenColor::Black, PenColor::Red, PenColor::Blue];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Blue => "Blue",
        }
    }
}

impl fmt::Display for PenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether moves leave a line behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenState {
    Up,
    Down,
}

impl PenState {
    pub fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

/// Normalize a heading into `[0, 360)`.
///
/// Negative headings wrap around, so `-90` becomes `270`.
///
/// # Example
///
/// ```rust
/// use trundle::core::normalize_heading;
///
/// assert_eq!(normalize_heading(370.0), 10.0);
/// assert_eq!(normalize_heading(-90.0), 270.0);
/// assert_eq!(normalize_heading(360.0), 0.0);
/// ```
pub fn normalize_heading(degrees: Angle) -> Angle {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Complete state of a turtle at one point in time.
///
/// Fields are public for reading and pattern matching. Build states with
/// [`TurtleState::new`] or the `with_*` builders, which keep the heading
/// normalized; a struct literal bypasses that.
///
/// # Example
///
/// ```rust
/// use trundle::core::{PenColor, PenState, Position, TurtleState};
///
/// let state = TurtleState::initial();
/// assert_eq!(state.position, Position::ORIGIN);
/// assert_eq!(state.heading, 0.0);
/// assert_eq!(state.color, PenColor::Black);
/// assert_eq!(state.pen, PenState::Up);
/// assert!(!state.is_pen_down());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    pub position: Position,
    /// Heading in degrees, always within `[0, 360)`.
    pub heading: Angle,
    pub color: PenColor,
    pub pen: PenState,
}

impl TurtleState {
    /// The state every turtle starts in: at the origin, facing heading 0,
    /// drawing in black, with the pen up.
    pub const fn initial() -> Self {
        Self {
            position: Position::ORIGIN,
            heading: 0.0,
            color: PenColor::Black,
            pen: PenState::Up,
        }
    }

    /// A state with `heading` normalized into `[0, 360)`.
    pub fn new(position: Position, heading: Angle, color: PenColor, pen: PenState) -> Self {
        Self {
            position,
            heading: normalize_heading(heading),
            color,
            pen,
        }
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen.is_down()
    }

    pub fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Replace the heading, normalizing it into `[0, 360)`.
    pub fn with_heading(self, heading: Angle) -> Self {
        Self {
            heading: normalize_heading(heading),
            ..self
        }
    }

    pub fn with_color(self, color: PenColor) -> Self {
        Self { color, ..self }
    }

    pub fn with_pen(self, pen: PenState) -> Self {
        Self { pen, ..self }
    }

    /// Compare two states, allowing floating point drift in position and
    /// heading. Headings are compared on the circle, so 359.9999 matches 0.
    pub fn approx_eq(&self, other: &TurtleState, tolerance: f64) -> bool {
        let delta = (self.heading - other.heading).abs() % 360.0;
        let heading_delta = delta.min(360.0 - delta);
        self.position.approx_eq(&other.position, tolerance)
            && heading_delta <= tolerance
            && self.color == other.color
            && self.pen == other.pen
    }
}

impl Default for TurtleState {
    fn default() -> Self {
        Self::initial()
    }
}
