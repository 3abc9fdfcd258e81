//! Branching on Response
//!
//! This example lets a turtle program react to what happened.
//!
//! Key concepts:
//! - Turtle programs as state-threading computations
//! - Bounded moves report HitABarrier instead of failing
//! - Limited ink reports OutOfInk and keeps the old color
//! - Policies loaded from a TOML configuration
//! - Running the same program through an effectful canvas shell
//!
//! Run with: RUST_LOG=trundle=debug cargo run --example branching_on_response

use std::sync::Arc;
use trundle::computation::{TurtleComputation, TurtleOps};
use trundle::core::{Command, MoveResponse, PenColor, SetColorResponse, TracingLog};
use trundle::effects::{run_program, RecordingCanvas};
use trundle::TurtleConfig;

const CONFIG: &str = r#"
[movement]
policy = "bounded"
min = 0.0
max = 100.0

[ink]
exhausted = ["Red"]
"#;

/// Turn left whenever a move runs into a wall.
fn handle_move_response(
    ops: &TurtleOps,
) -> impl Fn(MoveResponse) -> TurtleComputation<()> + 'static {
    let ops = ops.clone();
    move |response| match response {
        MoveResponse::MoveOk => TurtleComputation::returns(()),
        MoveResponse::HitABarrier => {
            println!("  Oops -- hit a barrier -- turning");
            ops.turn(90.0)
        }
    }
}

/// Fall back to blue when the requested color is out of ink.
fn handle_color_response(
    ops: &TurtleOps,
) -> impl Fn(SetColorResponse) -> TurtleComputation<()> + 'static {
    let ops = ops.clone();
    move |response| match response {
        SetColorResponse::ColorOk => TurtleComputation::returns(()),
        SetColorResponse::OutOfInk => {
            println!("  Out of ink -- switching to blue");
            ops.set_color(PenColor::Blue)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Branching on Response Example ===\n");

    let config = TurtleConfig::from_toml_str(CONFIG)?;
    let ops = TurtleOps::new(config.interpreter(), Arc::new(TracingLog));

    println!("Scenario 1: Moving without responding");
    let blind = ops
        .move_by(60.0)
        .then(ops.move_by(60.0))
        .then(ops.move_by(60.0));
    let end = blind.exec(config.initial_state());
    println!("  Stuck against the wall at {}\n", end.position);

    println!("Scenario 2: Turning on every barrier");
    let step = || ops.move_checked(60.0).bind(handle_move_response(&ops));
    let program = ops
        .pen_down()
        .then(ops.set_color_checked(PenColor::Red))
        .bind(handle_color_response(&ops))
        .then(step())
        .then(step())
        .then(step());
    let end = program.exec(config.initial_state());
    println!(
        "  ✓ Ended at {} heading {:.1} in {}\n",
        end.position, end.heading, end.color
    );

    println!("Scenario 3: Drawing through an effect shell");
    let canvas = RecordingCanvas::new();
    let commands = [
        Command::PenDown,
        Command::Move(60.0),
        Command::Turn(90.0),
        Command::Move(60.0),
    ];
    let end = run_program(&canvas, config.initial_state(), &commands).await?;
    println!(
        "  ✓ {} lines on the canvas, turtle at {}\n",
        canvas.lines().len(),
        end.position
    );

    println!("Key Takeaways:");
    println!("- Responses are data, so a program can branch on them");
    println!("- The state is threaded behind the scenes");
    println!("- Effects only draw; the next state is still computed purely");

    println!("\n=== Example Complete ===");
    Ok(())
}
