//! Event-sourced turtles.
//!
//! Clients send a `TurtleCommand` to a `CommandHandler`. The handler turns
//! it into events and appends them to an `EventStore`. Neither the client
//! nor the handler tracks turtle state: the state before each command is
//! rebuilt by replaying the turtle's `StateChangedEvent`s, oldest first,
//! from the initial state. `MovedEvent`s are derived facts for drawing and
//! are never replayed.

mod events;
mod handler;
mod store;

pub use events::{MovedEvent, StateChangedEvent, TurtleCommand, TurtleEvent, TurtleId};
pub use handler::{apply_event, events_from_command, replay, CommandHandler};
pub use store::{EventStore, InMemoryEventStore, StoreError};
