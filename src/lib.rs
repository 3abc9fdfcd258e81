//! Trundle: a pure functional turtle state machine
//!
//! Trundle is built on Stillwater's "pure core, imperative shell" philosophy.
//! A turtle's state changes only through pure transition functions in
//! [`core`]; every way of driving a turtle (a mutable object, a string
//! API, a mailbox agent, a state-threading computation, a batch
//! interpreter, an event-sourced command handler, an effectful canvas
//! shell) is a thin layer over the same `apply` function, so they all
//! agree on where the turtle ends up.
//!
//! # Core Concepts
//!
//! - **State**: an immutable `TurtleState` (position, heading, color, pen)
//! - **Commands**: `Move`, `Turn`, `PenUp`, `PenDown`, `SetColor`
//! - **Transitions**: `apply(state, command, log)` returns the next state
//!   and the line drawn, if any
//! - **Policies**: optional bounded moves and limited ink, reported as
//!   responses rather than errors
//!
//! # Example
//!
//! ```rust
//! use trundle::core::{Command, NoLog, PenColor, Position, TurtleState};
//! use trundle::interpreter::run_sequence;
//! use trundle::validation::validate;
//!
//! let commands: Vec<Command> = ["PenDown", "SetColor Red", "Move 100", "Turn 90"]
//!     .iter()
//!     .map(|line| validate(line))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! let end = run_sequence(&commands, TurtleState::initial(), &NoLog);
//! assert!(end.position.approx_eq(&Position::new(100.0, 0.0), 1e-9));
//! assert_eq!(end.heading, 90.0);
//! assert_eq!(end.color, PenColor::Red);
//! ```

pub mod agent;
pub mod api;
pub mod checkpoint;
pub mod computation;
pub mod config;
pub mod core;
pub mod effects;
pub mod event_sourcing;
pub mod interpreter;
pub mod turtle;
pub mod validation;

// Re-export commonly used types
pub use checkpoint::{CheckpointError, TurtleCheckpoint};
pub use config::{ConfigError, TurtleConfig};
pub use core::{apply, Command, LineSegment, PenColor, PenState, Position, Step, TurtleState};
pub use interpreter::{run_sequence, Interpreter};
pub use turtle::Turtle;
pub use validation::{validate, ValidationError};
