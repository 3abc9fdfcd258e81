//! Effects that run turtle commands against a canvas.

use super::canvas::{Canvas, CanvasError, HasLog};
use crate::core::{apply, Command, LineSegment, Step, TurtleState};
use crate::validation::{validate, ValidationError};
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Rejected command: {0}")]
    Validation(#[from] ValidationError),

    #[error("Drawing failed: {0}")]
    Canvas(#[from] CanvasError),
}

/// Draw one line on the environment's canvas.
pub fn draw_line<Env>(segment: LineSegment) -> BoxedEffect<(), ShellError, Env>
where
    Env: Canvas + HasLog + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| -> Result<(), ShellError> {
        env.draw_line(&segment)?;
        Ok(())
    })
    .boxed()
}

/// Apply a command, then draw the line it produced, if any.
///
/// The state transition itself is pure; the environment supplies the
/// trace log and the canvas.
pub fn execute<Env>(state: TurtleState, command: Command) -> BoxedEffect<Step, ShellError, Env>
where
    Env: Canvas + HasLog + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| -> Result<Step, ShellError> {
        let step = apply(&state, &command, env.turtle_log());
        if let Some(segment) = &step.drawn {
            env.draw_line(segment)?;
        }
        Ok(step)
    })
    .boxed()
}

/// Validate a raw command line and execute it.
pub fn execute_line<Env>(state: TurtleState, input: &str) -> BoxedEffect<Step, ShellError, Env>
where
    Env: Canvas + HasLog + Clone + Send + Sync + 'static,
{
    match validate(input) {
        Ok(command) => execute(state, command),
        Err(error) => fail(ShellError::from(error)).boxed(),
    }
}

/// Run commands in order, stopping at the first failure.
pub async fn run_program<Env>(
    env: &Env,
    initial: TurtleState,
    commands: &[Command],
) -> Result<TurtleState, ShellError>
where
    Env: Canvas + HasLog + Clone + Send + Sync + 'static,
{
    let mut state = initial;
    for command in commands {
        state = execute(state, *command).run(env).await?.state;
    }
    tracing::debug!(commands = commands.len(), final_state = ?state, "program finished");
    Ok(state)
}

/// Run raw command lines in order, stopping at the first failure.
///
/// Lines before a rejected one have already been drawn.
pub async fn run_script<Env>(
    env: &Env,
    initial: TurtleState,
    lines: &[&str],
) -> Result<TurtleState, ShellError>
where
    Env: Canvas + HasLog + Clone + Send + Sync + 'static,
{
    let mut state = initial;
    for line in lines {
        state = execute_line(state, line).run(env).await?.state;
    }
    Ok(state)
}
