//! Core turtle types and logic.
//!
//! This module contains the pure functional core of the turtle:
//! - Positions and move geometry
//! - Immutable turtle state and the command vocabulary
//! - Transition functions and the single `apply` dispatcher
//! - Named move and ink policies
//! - Immutable history tracking
//!
//! All logic in this module is pure (no side effects). Trace messages go
//! to a caller-supplied `TurtleLog`, which cannot influence results.

mod command;
mod history;
mod log;
mod policy;
mod position;
mod state;
mod transition;

pub use command::Command;
pub use history::{TransitionRecord, TurtleHistory};
pub use log::{MemoryLog, NoLog, SharedLog, TracingLog, TurtleLog};
pub use policy::{
    move_with_policy, set_color_with_ink, InkSupply, MovePolicy, MoveResponse, SetColorResponse,
    DEFAULT_MAX_COORD, DEFAULT_MIN_COORD,
};
pub use position::{calc_new_position, to_radians, Angle, Distance, Position};
pub use state::{normalize_heading, PenColor, PenState, TurtleState};
pub use transition::{
    apply, apply_move, apply_pen_down, apply_pen_up, apply_set_color, apply_turn, LineSegment,
    Step,
};
