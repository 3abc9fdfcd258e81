//! String-driven turtle API.
//!
//! Callers send raw command text such as `"Move 100"`. Each line goes
//! through the validation boundary first; only a valid `Command` ever
//! reaches the turtle functions, so a rejected line leaves the turtle
//! exactly where it was.

mod functions;

pub use functions::{MoveFn, PenFn, SetColorFn, TurnFn, TurtleFunctions};

use crate::core::{Command, LineSegment, Step, TurtleState};
use crate::validation::{validate, ValidationError};

/// A turtle driven by command strings.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use trundle::api::{TurtleApi, TurtleFunctions};
/// use trundle::core::NoLog;
/// use trundle::validation::ValidationError;
///
/// let mut api = TurtleApi::new(TurtleFunctions::normal(Arc::new(NoLog)));
/// api.exec("PenDown").unwrap();
/// api.exec("Move 100").unwrap();
/// assert_eq!(
///     api.exec("Move lots"),
///     Err(ValidationError::InvalidDistance("lots".to_string()))
/// );
/// assert_eq!(api.lines().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TurtleApi {
    functions: TurtleFunctions,
    state: TurtleState,
    lines: Vec<LineSegment>,
}

impl Default for TurtleApi {
    fn default() -> Self {
        Self::new(TurtleFunctions::default())
    }
}

impl TurtleApi {
    pub fn new(functions: TurtleFunctions) -> Self {
        Self::starting_at(TurtleState::initial(), functions)
    }

    pub fn starting_at(state: TurtleState, functions: TurtleFunctions) -> Self {
        Self {
            functions,
            state,
            lines: Vec::new(),
        }
    }

    /// Validate and execute one line of input.
    pub fn exec(&mut self, input: &str) -> Result<(), ValidationError> {
        let command = validate(input)?;
        self.exec_command(&command);
        Ok(())
    }

    /// Execute every line in order, stopping at the first invalid one.
    ///
    /// Lines before the failing one stay applied.
    pub fn exec_all<'a, I>(&mut self, inputs: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        inputs.into_iter().try_for_each(|input| self.exec(input))
    }

    pub fn exec_command(&mut self, command: &Command) {
        let step = self.functions.apply(&self.state, command);
        self.state = step.state;
        self.lines.extend(step.drawn);
    }

    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    /// Lines drawn so far, in drawing order.
    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    pub fn functions(&self) -> &TurtleFunctions {
        &self.functions
    }
}

/// Validate `input` and apply it with `functions`, without any stored state.
pub fn exec_with(
    functions: &TurtleFunctions,
    state: &TurtleState,
    input: &str,
) -> Result<Step, ValidationError> {
    let command = validate(input)?;
    Ok(functions.apply(state, &command))
}
