//! Batch interpretation of command sequences.
//!
//! A run is a strict left fold of the transition function over the
//! commands, in order, from an initial state. There is no reordering,
//! buffering or hidden input: the same commands and initial state always
//! give the same result.

use crate::core::{
    apply, move_with_policy, set_color_with_ink, Command, InkSupply, LineSegment, MovePolicy,
    MoveResponse, NoLog, SetColorResponse, Step, TurtleLog, TurtleState,
};
use serde::{Deserialize, Serialize};

/// Fold `apply` over `commands`, returning the final state.
///
/// # Example
///
/// ```rust
/// use trundle::core::{Command, NoLog, Position, TurtleState};
/// use trundle::interpreter::run_sequence;
///
/// let triangle = [
///     Command::Move(100.0), Command::Turn(120.0),
///     Command::Move(100.0), Command::Turn(120.0),
///     Command::Move(100.0), Command::Turn(120.0),
/// ];
/// let end = run_sequence(&triangle, TurtleState::initial(), &NoLog);
/// assert!(end.position.approx_eq(&Position::ORIGIN, 1e-3));
/// ```
pub fn run_sequence<'a, I>(commands: I, initial: TurtleState, log: &dyn TurtleLog) -> TurtleState
where
    I: IntoIterator<Item = &'a Command>,
{
    commands
        .into_iter()
        .fold(initial, |state, command| apply(&state, command, log).state)
}

/// Every state visited while running `commands`, starting with `initial`.
///
/// The returned vector has one more entry than there are commands.
pub fn replay_states<'a, I>(commands: I, initial: TurtleState) -> Vec<TurtleState>
where
    I: IntoIterator<Item = &'a Command>,
{
    let mut states = vec![initial];
    let mut current = initial;
    for command in commands {
        current = apply(&current, command, &NoLog).state;
        states.push(current);
    }
    states
}

/// Domain response produced by a single policy-aware step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// The command has no response under any policy.
    Done,
    Move(MoveResponse),
    SetColor(SetColorResponse),
}

/// Result of running a whole batch.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    pub final_state: TurtleState,
    /// Lines drawn, in drawing order
    pub lines: Vec<LineSegment>,
    /// One response per command, in command order
    pub responses: Vec<Response>,
}

impl RunOutcome {
    /// Number of moves that ran into a barrier.
    pub fn barriers_hit(&self) -> usize {
        self.responses
            .iter()
            .filter(|r| matches!(r, Response::Move(MoveResponse::HitABarrier)))
            .count()
    }
}

/// Policy-aware batch interpreter.
///
/// With the default policies (unbounded moves, full ink) a step is exactly
/// `apply`. Other policies change how moves and color changes behave but
/// never make a step fail.
///
/// # Example
///
/// ```rust
/// use trundle::core::{Command, MovePolicy, TurtleState};
/// use trundle::interpreter::Interpreter;
///
/// let interpreter = Interpreter::new().with_move_policy(MovePolicy::bounded());
/// let outcome = interpreter.run(&[Command::Move(500.0)], TurtleState::initial());
/// assert_eq!(outcome.barriers_hit(), 1);
/// assert_eq!(outcome.final_state.position.x, 100.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    move_policy: MovePolicy,
    ink: InkSupply,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_move_policy(mut self, policy: MovePolicy) -> Self {
        self.move_policy = policy;
        self
    }

    pub fn with_ink(mut self, ink: InkSupply) -> Self {
        self.ink = ink;
        self
    }

    pub fn move_policy(&self) -> &MovePolicy {
        &self.move_policy
    }

    pub fn ink(&self) -> &InkSupply {
        &self.ink
    }

    /// Apply one command under this interpreter's policies.
    pub fn step(
        &self,
        state: &TurtleState,
        command: &Command,
        log: &dyn TurtleLog,
    ) -> (Response, Step) {
        match *command {
            Command::Move(distance) => {
                let (response, step) = move_with_policy(state, distance, &self.move_policy, log);
                (Response::Move(response), step)
            }
            Command::SetColor(color) => {
                let (response, next) = set_color_with_ink(state, color, &self.ink, log);
                (Response::SetColor(response), Step::silent(next))
            }
            _ => (Response::Done, apply(state, command, log)),
        }
    }

    /// Run a batch silently.
    pub fn run(&self, commands: &[Command], initial: TurtleState) -> RunOutcome {
        self.run_logged(commands, initial, &NoLog)
    }

    /// Run a batch, reporting each step to `log`.
    pub fn run_logged(
        &self,
        commands: &[Command],
        initial: TurtleState,
        log: &dyn TurtleLog,
    ) -> RunOutcome {
        let mut state = initial;
        let mut lines = Vec::new();
        let mut responses = Vec::with_capacity(commands.len());

        for command in commands {
            let (response, step) = self.step(&state, command, log);
            state = step.state;
            lines.extend(step.drawn);
            responses.push(response);
        }

        tracing::debug!(
            commands = commands.len(),
            lines = lines.len(),
            "batch run complete"
        );

        RunOutcome {
            final_state: state,
            lines,
            responses,
        }
    }
}
