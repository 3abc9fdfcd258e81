//! Event Sourcing
//!
//! This example rebuilds turtle state from stored events.
//!
//! Key concepts:
//! - Commands are turned into events by a stateless handler
//! - State is never stored, only rebuilt from past events
//! - Moved events are emitted only for lines actually drawn
//! - The store is owned by the caller and passed in
//!
//! Run with: RUST_LOG=trundle=debug cargo run --example event_sourcing

use trundle::core::{Command, PenColor};
use trundle::event_sourcing::{
    CommandHandler, EventStore, InMemoryEventStore, TurtleCommand, TurtleEvent, TurtleId,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Event Sourcing Example ===\n");

    let store = InMemoryEventStore::new();
    let handler = CommandHandler::new(&store);
    let turtle = TurtleId::new();
    println!("Turtle {turtle}\n");

    let commands = [
        Command::PenDown,
        Command::SetColor(PenColor::Black),
        Command::Move(100.0),
        Command::PenUp,
        Command::Turn(90.0),
        Command::Move(100.0),
        Command::Turn(90.0),
        Command::PenDown,
        Command::SetColor(PenColor::Red),
        Command::Move(100.0),
        Command::PenUp,
        Command::Turn(90.0),
        Command::Move(100.0),
        Command::Turn(90.0),
        Command::PenDown,
        Command::SetColor(PenColor::Blue),
        Command::Turn(45.0),
        Command::Move(100.0),
    ];

    println!("Handling {} commands", commands.len());
    for command in commands {
        let events = handler.handle(TurtleCommand::new(turtle, command))?;
        println!("  {:<16} -> {} event(s)", command.to_string(), events.len());
    }

    println!("\nStored events (oldest first):");
    for event in store.events(turtle)? {
        match event {
            TurtleEvent::StateChanged(change) => println!("  state changed: {change:?}"),
            TurtleEvent::Moved(moved) => {
                println!("  drew {} line {} -> {}", moved.color, moved.start, moved.end)
            }
        }
    }

    let state = handler.state_of(turtle)?;
    println!(
        "\nRebuilt state: at {}, heading {:.1}, {} pen {:?}",
        state.position, state.heading, state.color, state.pen
    );

    let other = TurtleId::new();
    handler.handle(TurtleCommand::new(other, Command::Turn(180.0)))?;
    println!(
        "A second turtle shares the store but not the state: heading {:.1}",
        handler.state_of(other)?.heading
    );

    println!("\nKey Takeaways:");
    println!("- Neither the client nor the handler keeps turtle state");
    println!("- Replaying state-changed events always reproduces the state");
    println!("- Moved events are derived facts for drawing, never replayed");

    println!("\n=== Example Complete ===");
    Ok(())
}
