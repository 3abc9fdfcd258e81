//! Draw Shapes
//!
//! This example draws the same shapes through several turtle drivers.
//!
//! Key concepts:
//! - Object turtle with an injected log
//! - Validated string commands
//! - A "half size" turtle built by wrapping one function
//! - Mailbox agent processing queued commands
//! - Checkpointing a turtle to JSON and resuming it
//!
//! Run with: RUST_LOG=trundle=debug cargo run --example draw_shapes

use std::sync::Arc;
use trundle::agent::TurtleAgent;
use trundle::api::{TurtleApi, TurtleFunctions};
use trundle::core::{Command, PenColor, TracingLog};
use trundle::interpreter::Interpreter;
use trundle::turtle::Turtle;
use trundle::{TurtleCheckpoint, TurtleState};

fn polygon(sides: usize) -> Vec<Command> {
    let angle = 360.0 / sides as f64;
    let mut commands = vec![Command::PenDown];
    for _ in 0..sides {
        commands.push(Command::Move(100.0));
        commands.push(Command::Turn(angle));
    }
    commands
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Draw Shapes Example ===\n");

    // Scenario 1: object turtle
    println!("Scenario 1: Triangle with an object turtle");
    let mut turtle = Turtle::new(|message: &str| println!("  {message}"));
    turtle.pen_down();
    for _ in 0..3 {
        turtle.move_by(100.0);
        turtle.turn(120.0);
    }
    println!("  ✓ Back at {}\n", turtle.position());

    // Scenario 2: string commands
    println!("Scenario 2: Three lines from command strings");
    let mut api = TurtleApi::new(TurtleFunctions::normal(Arc::new(TracingLog)));
    api.exec_all([
        "PenDown",
        "SetColor Black",
        "Move 100",
        "PenUp",
        "Turn 90",
        "Move 100",
        "Turn 90",
        "PenDown",
        "SetColor Red",
        "Move 100",
    ])?;
    if let Err(error) = api.exec("SetColor Green") {
        println!("  ✗ Rejected: {error}");
    }
    for line in api.lines() {
        println!("  {} line from {} to {}", line.color, line.from, line.to);
    }
    println!();

    // Scenario 3: half size
    println!("Scenario 3: Square with a half-size turtle");
    let mut half = TurtleApi::new(TurtleFunctions::normal(Arc::new(TracingLog)).half_size());
    for command in polygon(4) {
        half.exec_command(&command);
    }
    let longest = half
        .lines()
        .iter()
        .map(|line| line.length())
        .fold(0.0, f64::max);
    println!("  ✓ {} sides, each {longest:.1} long\n", half.lines().len());

    // Scenario 4: mailbox agent
    println!("Scenario 4: Hexagon through a mailbox");
    let mut agent = TurtleAgent::default();
    for command in polygon(6) {
        agent.post(command);
    }
    println!("  {} commands queued", agent.pending());
    let processed = agent.process();
    println!("  ✓ {processed} commands processed, ended at {}\n", agent.state().position);

    // Scenario 5: batch interpreter
    println!("Scenario 5: Batch run");
    let mut commands = polygon(5);
    commands.insert(1, Command::SetColor(PenColor::Blue));
    let outcome = Interpreter::new().run(&commands, TurtleState::initial());
    println!(
        "  ✓ {} lines drawn, final heading {:.1}\n",
        outcome.lines.len(),
        outcome.final_state.heading
    );

    // Scenario 6: checkpoint
    println!("Scenario 6: Checkpoint and resume");
    let json = turtle.checkpoint().to_json()?;
    println!("  Checkpoint is {} bytes of JSON", json.len());
    let mut resumed = Turtle::resume(TurtleCheckpoint::from_json(&json)?, TracingLog)?;
    resumed.set_color(PenColor::Red);
    resumed.move_by(50.0);
    println!(
        "  ✓ Resumed turtle {} now has {} commands in its history\n",
        resumed.id(),
        resumed.history().len()
    );

    println!("Key Takeaways:");
    println!("- Every driver goes through the same pure transition function");
    println!("- Invalid command strings never reach the turtle");
    println!("- Variants are built by wrapping functions, not subclassing");

    println!("\n=== Example Complete ===");
    Ok(())
}
