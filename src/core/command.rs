//! The command vocabulary understood by every interpreter.

use super::position::{Angle, Distance};
use super::state::PenColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single requested turtle action.
///
/// Commands are immutable values, built by a client and consumed once by
/// an interpreter. `Display` renders the same text the string API accepts.
///
/// # Example
///
/// ```rust
/// use trundle::core::{Command, PenColor};
///
/// assert_eq!(Command::Move(100.0).to_string(), "Move 100");
/// assert_eq!(Command::Turn(22.5).to_string(), "Turn 22.5");
/// assert_eq!(Command::SetColor(PenColor::Red).to_string(), "SetColor Red");
/// assert_eq!(Command::PenUp.to_string(), "PenUp");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Move(Distance),
    Turn(Angle),
    PenUp,
    PenDown,
    SetColor(PenColor),
}

impl Command {
    /// Keyword used for this command in string form.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Move(_) => "Move",
            Self::Turn(_) => "Turn",
            Self::PenUp => "PenUp",
            Self::PenDown => "PenDown",
            Self::SetColor(_) => "SetColor",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(distance) => write!(f, "Move {distance}"),
            Self::Turn(angle) => write!(f, "Turn {angle}"),
            Self::PenUp | Self::PenDown => f.write_str(self.keyword()),
            Self::SetColor(color) => write!(f, "SetColor {color}"),
        }
    }
}
