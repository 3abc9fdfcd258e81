//! End-to-end drawings run through every way of driving a turtle.
//!
//! Each driver is a different shell around the same transition function,
//! so for the same program they must all finish in exactly the same state
//! and draw the same lines.

use std::sync::Arc;
use trundle::agent::TurtleAgent;
use trundle::api::{exec_with, TurtleApi, TurtleFunctions};
use trundle::computation::{sequence, TurtleOps};
use trundle::core::{Command, LineSegment, NoLog, PenColor, Position, TurtleState};
use trundle::effects::{run_program, run_script, RecordingCanvas};
use trundle::event_sourcing::{
    CommandHandler, EventStore, InMemoryEventStore, TurtleCommand, TurtleEvent, TurtleId,
};
use trundle::interpreter::{run_sequence, Interpreter};
use trundle::turtle::Turtle;

fn polygon(sides: usize) -> Vec<Command> {
    let angle = 360.0 / sides as f64;
    let mut commands = vec![Command::PenDown];
    for _ in 0..sides {
        commands.push(Command::Move(100.0));
        commands.push(Command::Turn(angle));
    }
    commands
}

fn three_lines() -> Vec<Command> {
    vec![
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
    ]
}

type DriverResult = (&'static str, TurtleState, Option<Vec<LineSegment>>);

/// Final state and drawn lines from every driver, labelled by driver.
/// The state-threading computation does not record lines.
fn run_everywhere(commands: &[Command]) -> Vec<DriverResult> {
    let initial = TurtleState::initial();
    let mut results = Vec::new();

    let mut turtle = Turtle::new(NoLog);
    for command in commands {
        turtle.exec(command);
    }
    results.push(("object", *turtle.state(), Some(turtle.history().lines())));

    let outcome = Interpreter::new().run(commands, initial);
    results.push(("batch", outcome.final_state, Some(outcome.lines)));

    let mut api = TurtleApi::new(TurtleFunctions::normal(Arc::new(NoLog)));
    let rendered: Vec<String> = commands.iter().map(ToString::to_string).collect();
    api.exec_all(rendered.iter().map(String::as_str)).unwrap();
    results.push(("string api", *api.state(), Some(api.lines().to_vec())));

    let functions = TurtleFunctions::normal(Arc::new(NoLog));
    let mut state = initial;
    let mut lines = Vec::new();
    for line in &rendered {
        let step = exec_with(&functions, &state, line).unwrap();
        state = step.state;
        lines.extend(step.drawn);
    }
    results.push(("functions", state, Some(lines)));

    let mut agent = TurtleAgent::with_log(Arc::new(NoLog));
    for command in commands {
        agent.post(*command);
    }
    agent.process();
    results.push(("agent", *agent.state(), Some(agent.lines().to_vec())));

    let ops = TurtleOps::silent();
    let program = sequence(commands.iter().map(|c| ops.command(*c)).collect());
    results.push(("computation", program.exec(initial), None));

    let store = InMemoryEventStore::new();
    let handler = CommandHandler::with_log(&store, NoLog);
    let id = TurtleId::new();
    for command in commands {
        handler.handle(TurtleCommand::new(id, *command)).unwrap();
    }
    let drawn = store
        .events(id)
        .unwrap()
        .iter()
        .filter_map(TurtleEvent::as_moved)
        .map(|moved| moved.line())
        .collect();
    results.push(("event sourcing", handler.state_of(id).unwrap(), Some(drawn)));

    let resumed = Turtle::resume(turtle.checkpoint(), NoLog).unwrap();
    results.push(("checkpoint", *resumed.state(), Some(resumed.history().lines())));

    results
}

fn assert_all_agree(commands: &[Command]) -> TurtleState {
    let results = run_everywhere(commands);
    let (_, expected_state, expected_lines) = results[0].clone();
    assert_eq!(
        expected_state,
        run_sequence(commands, TurtleState::initial(), &NoLog)
    );
    for (driver, state, lines) in &results {
        assert_eq!(*state, expected_state, "{driver} final state differs");
        if let Some(lines) = lines {
            assert_eq!(Some(lines), expected_lines.as_ref(), "{driver} lines differ");
        }
    }
    expected_state
}

#[test]
fn triangle_returns_home_everywhere() {
    let end = assert_all_agree(&polygon(3));
    assert!(end.position.approx_eq(&Position::ORIGIN, 1e-3));
    assert!(end.approx_eq(&TurtleState::initial().with_pen(end.pen), 1e-3));
}

#[test]
fn square_returns_home_everywhere() {
    let end = assert_all_agree(&polygon(4));
    assert!(end.position.approx_eq(&Position::ORIGIN, 1e-3));
    assert_eq!(end.heading, TurtleState::initial().heading);
    assert!(end.approx_eq(&TurtleState::initial().with_pen(end.pen), 1e-3));
}

#[test]
fn hexagon_returns_home_everywhere() {
    let end = assert_all_agree(&polygon(6));
    assert!(end.position.approx_eq(&Position::ORIGIN, 1e-3));
    assert!(end.approx_eq(&TurtleState::initial().with_pen(end.pen), 1e-3));
}

#[test]
fn three_lines_agree_everywhere() {
    let commands = three_lines();
    let end = assert_all_agree(&commands);
    assert_eq!(end.color, PenColor::Blue);
    assert!((end.heading - 45.0).abs() < 1e-9);

    let outcome = Interpreter::new().run(&commands, TurtleState::initial());
    let colors: Vec<PenColor> = outcome.lines.iter().map(|l| l.color).collect();
    assert_eq!(colors, vec![PenColor::Black, PenColor::Red, PenColor::Blue]);
}

#[tokio::test]
async fn effect_shell_agrees_with_fold() {
    for commands in [polygon(3), polygon(4), three_lines()] {
        let canvas = RecordingCanvas::new();
        let end = run_program(&canvas, TurtleState::initial(), &commands)
            .await
            .unwrap();
        let outcome = Interpreter::new().run(&commands, TurtleState::initial());
        assert_eq!(end, outcome.final_state);
        assert_eq!(canvas.lines(), outcome.lines);
    }
}

#[tokio::test]
async fn script_shell_draws_three_lines() {
    let rendered: Vec<String> = three_lines().iter().map(ToString::to_string).collect();
    let script: Vec<&str> = rendered.iter().map(String::as_str).collect();

    let canvas = RecordingCanvas::new();
    run_script(&canvas, TurtleState::initial(), &script)
        .await
        .unwrap();
    assert_eq!(canvas.lines().len(), 3);
}
