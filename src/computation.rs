//! Turtle programs as state-threading computations.
//!
//! A `TurtleComputation<A>` wraps a function `TurtleState -> (A, TurtleState)`.
//! Programs are built by chaining computations with `bind`, `map` and
//! `then`, and nothing happens until `run` is given an initial state. The
//! state is passed along behind the scenes, so a program can branch on a
//! response (say, turn after hitting a barrier) without ever naming the
//! state it is working on.
//!
//! # Laws
//!
//! - Left identity: `returns(a).bind(f)` behaves as `f(a)`
//! - Right identity: `m.bind(returns)` behaves as `m`
//! - Associativity: `m.bind(f).bind(g)` behaves as `m.bind(|x| f(x).bind(g))`

use crate::core::{
    move_with_policy, set_color_with_ink, Angle, Command, Distance, MoveResponse, NoLog,
    PenColor, SetColorResponse, SharedLog, TracingLog, TurtleState,
};
use crate::interpreter::Interpreter;
use std::rc::Rc;
use std::sync::Arc;

/// A computation that threads a `TurtleState` and produces an `A`.
///
/// # Example
///
/// ```rust
/// use trundle::computation::TurtleOps;
/// use trundle::core::{Position, TurtleState};
///
/// let ops = TurtleOps::silent();
/// let program = ops
///     .pen_down()
///     .then(ops.move_by(100.0))
///     .then(ops.turn(90.0))
///     .then(ops.move_by(50.0));
///
/// let ((), end) = program.run(TurtleState::initial());
/// assert!(end.position.approx_eq(&Position::new(100.0, 50.0), 1e-9));
/// ```
pub struct TurtleComputation<A: 'static> {
    run_function: Rc<dyn Fn(TurtleState) -> (A, TurtleState)>,
}

impl<A: 'static> Clone for TurtleComputation<A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<A: 'static> TurtleComputation<A> {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(TurtleState) -> (A, TurtleState) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// A computation that yields `value` and leaves the state alone.
    pub fn returns(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Run from `initial`, returning the result and the final state.
    pub fn run(&self, initial: TurtleState) -> (A, TurtleState) {
        (self.run_function)(initial)
    }

    pub fn eval(&self, initial: TurtleState) -> A {
        self.run(initial).0
    }

    pub fn exec(&self, initial: TurtleState) -> TurtleState {
        self.run(initial).1
    }

    pub fn map<B, F>(self, function: F) -> TurtleComputation<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let run = self.run_function;
        TurtleComputation::new(move |state| {
            let (value, next) = run(state);
            (function(value), next)
        })
    }

    /// Feed this computation's result into `function` and continue with
    /// the computation it returns.
    pub fn bind<B, F>(self, function: F) -> TurtleComputation<B>
    where
        B: 'static,
        F: Fn(A) -> TurtleComputation<B> + 'static,
    {
        let run = self.run_function;
        TurtleComputation::new(move |state| {
            let (value, next) = run(state);
            function(value).run(next)
        })
    }

    /// Run this, discard its result, then run `next`.
    pub fn then<B: 'static>(self, next: TurtleComputation<B>) -> TurtleComputation<B> {
        self.bind(move |_| next.clone())
    }
}

impl TurtleComputation<TurtleState> {
    /// Expose the current state as the result.
    pub fn get() -> Self {
        Self::new(|state| (state, state))
    }
}

/// Run every computation in order, collecting their results.
pub fn sequence<A: 'static>(computations: Vec<TurtleComputation<A>>) -> TurtleComputation<Vec<A>> {
    TurtleComputation::new(move |initial| {
        let mut results = Vec::with_capacity(computations.len());
        let state = computations.iter().fold(initial, |state, computation| {
            let (value, next) = computation.run(state);
            results.push(value);
            next
        });
        (results, state)
    })
}

/// Lifts the turtle operations into computations.
///
/// Moves and color changes go through the configured policies. The plain
/// variants discard the response; the `_checked` variants return it so a
/// program can branch on it.
#[derive(Clone)]
pub struct TurtleOps {
    interpreter: Rc<Interpreter>,
    log: SharedLog,
}

impl Default for TurtleOps {
    fn default() -> Self {
        Self::new(Interpreter::new(), Arc::new(TracingLog))
    }
}

impl TurtleOps {
    pub fn new(interpreter: Interpreter, log: SharedLog) -> Self {
        Self {
            interpreter: Rc::new(interpreter),
            log,
        }
    }

    /// Default policies, no logging.
    pub fn silent() -> Self {
        Self::new(Interpreter::new(), Arc::new(NoLog))
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Lift an arbitrary command, discarding any response.
    pub fn command(&self, command: Command) -> TurtleComputation<()> {
        let ops = self.clone();
        TurtleComputation::new(move |state| {
            let (_, step) = ops.interpreter.step(&state, &command, ops.log.as_ref());
            ((), step.state)
        })
    }

    pub fn move_checked(&self, distance: Distance) -> TurtleComputation<MoveResponse> {
        let ops = self.clone();
        TurtleComputation::new(move |state| {
            let (response, step) = move_with_policy(
                &state,
                distance,
                ops.interpreter.move_policy(),
                ops.log.as_ref(),
            );
            (response, step.state)
        })
    }

    pub fn set_color_checked(&self, color: PenColor) -> TurtleComputation<SetColorResponse> {
        let ops = self.clone();
        TurtleComputation::new(move |state| {
            set_color_with_ink(&state, color, ops.interpreter.ink(), ops.log.as_ref())
        })
    }

    pub fn move_by(&self, distance: Distance) -> TurtleComputation<()> {
        self.move_checked(distance).map(|_| ())
    }

    pub fn turn(&self, angle: Angle) -> TurtleComputation<()> {
        self.command(Command::Turn(angle))
    }

    pub fn pen_up(&self) -> TurtleComputation<()> {
        self.command(Command::PenUp)
    }

    pub fn pen_down(&self) -> TurtleComputation<()> {
        self.command(Command::PenDown)
    }

    pub fn set_color(&self, color: PenColor) -> TurtleComputation<()> {
        self.set_color_checked(color).map(|_| ())
    }
}
