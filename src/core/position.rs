//! Positions and the geometry of a single move.
//!
//! Positions are immutable values. A move never mutates a position; it
//! computes a new one from the current heading and the distance travelled.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Distance travelled by a single move, in canvas units.
pub type Distance = f64;

/// Angle in degrees.
pub type Angle = f64;

/// An immutable (x, y) coordinate on the implicit canvas.
///
/// # Example
///
/// ```rust
/// use trundle::core::Position;
///
/// let origin = Position::ORIGIN;
/// let moved = Position::new(3.0, 4.0);
/// assert_eq!(origin.distance_to(&moved), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The canvas origin, where every turtle starts.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two positions.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Check whether two positions agree within `tolerance` on both axes.
    pub fn approx_eq(&self, other: &Position, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Convert degrees to radians, 180 degrees being one pi radian.
pub fn to_radians(degrees: Angle) -> f64 {
    degrees * PI / 180.0
}

/// Calculate the position reached by travelling `distance` along `heading`.
///
/// This is a pure function: the current position is read, never modified.
///
/// # Example
///
/// ```rust
/// use trundle::core::{calc_new_position, Position};
///
/// let end = calc_new_position(100.0, 90.0, Position::ORIGIN);
/// assert!(end.approx_eq(&Position::new(0.0, 100.0), 1e-9));
/// ```
pub fn calc_new_position(distance: Distance, heading: Angle, current: Position) -> Position {
    let radians = to_radians(heading);
    Position {
        x: current.x + distance * radians.cos(),
        y: current.y + distance * radians.sin(),
    }
}
