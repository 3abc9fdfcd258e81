//! Effectful turtle shell using Stillwater 0.11.0.
//!
//! The pure core decides what happens; this module performs it. A
//! command becomes an effect that computes the next state with the pure
//! transition function and then draws the resulting line, if any, on the
//! environment's `Canvas`. The environment also supplies the trace log
//! through `HasLog`.
//!
//! Following Stillwater 0.11.0 conventions:
//! - Effects are built with the free-standing `from_fn()` and `fail()`
//! - Each command is one `BoxedEffect`, run with `.run(&env).await`

mod canvas;
mod shell;

pub use canvas::{Canvas, CanvasError, HasLog, RecordingCanvas, TracingCanvas};
pub use shell::{draw_line, execute, execute_line, run_program, run_script, ShellError};
