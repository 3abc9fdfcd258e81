//! Event vocabulary for event-sourced turtles.

use crate::core::{Angle, Command, Distance, LineSegment, PenColor, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifies one turtle's event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurtleId(Uuid);

impl TurtleId {
    /// A fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TurtleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TurtleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TurtleId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A command addressed to one turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleCommand {
    pub turtle_id: TurtleId,
    pub command: Command,
}

impl TurtleCommand {
    pub fn new(turtle_id: TurtleId, command: Command) -> Self {
        Self {
            turtle_id,
            command,
        }
    }
}

/// A state change that happened. Mirrors `Command` one to one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum StateChangedEvent {
    Moved(Distance),
    Turned(Angle),
    PenWentUp,
    PenWentDown,
    ColorChanged(PenColor),
}

impl StateChangedEvent {
    /// The command that reproduces this change.
    pub fn to_command(self) -> Command {
        match self {
            Self::Moved(distance) => Command::Move(distance),
            Self::Turned(angle) => Command::Turn(angle),
            Self::PenWentUp => Command::PenUp,
            Self::PenWentDown => Command::PenDown,
            Self::ColorChanged(color) => Command::SetColor(color),
        }
    }
}

impl From<Command> for StateChangedEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Move(distance) => Self::Moved(distance),
            Command::Turn(angle) => Self::Turned(angle),
            Command::PenUp => Self::PenWentUp,
            Command::PenDown => Self::PenWentDown,
            Command::SetColor(color) => Self::ColorChanged(color),
        }
    }
}

/// A line was drawn: the pen was down and the position changed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovedEvent {
    pub start: Position,
    pub end: Position,
    pub color: PenColor,
}

impl MovedEvent {
    pub fn line(&self) -> LineSegment {
        LineSegment {
            from: self.start,
            to: self.end,
            color: self.color,
        }
    }
}

/// Anything stored in a turtle's event stream.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleEvent {
    StateChanged(StateChangedEvent),
    Moved(MovedEvent),
}

impl TurtleEvent {
    pub fn as_state_changed(&self) -> Option<StateChangedEvent> {
        match self {
            Self::StateChanged(event) => Some(*event),
            Self::Moved(_) => None,
        }
    }

    pub fn as_moved(&self) -> Option<MovedEvent> {
        match self {
            Self::Moved(event) => Some(*event),
            Self::StateChanged(_) => None,
        }
    }
}
