//! Drawing surfaces used as effect environments.

use crate::core::{LineSegment, SharedLog, TracingLog, TurtleLog};
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("Canvas unavailable: {0}")]
    Unavailable(String),
}

/// Something lines can be drawn on.
pub trait Canvas {
    fn draw_line(&self, segment: &LineSegment) -> Result<(), CanvasError>;
}

/// Environments that carry the sink for transition trace messages.
pub trait HasLog {
    fn turtle_log(&self) -> &dyn TurtleLog;
}

/// Keeps every drawn line in memory. Clones share the same drawing.
#[derive(Clone)]
pub struct RecordingCanvas {
    lines: Arc<Mutex<Vec<LineSegment>>>,
    log: SharedLog,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::with_log(Arc::new(TracingLog))
    }
}

impl fmt::Debug for RecordingCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingCanvas")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl RecordingCanvas {
    /// A blank canvas that traces transitions through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: SharedLog) -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            log,
        }
    }

    /// Lines drawn so far, in drawing order.
    pub fn lines(&self) -> Vec<LineSegment> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&self, segment: &LineSegment) -> Result<(), CanvasError> {
        self.lines
            .lock()
            .map_err(|_| CanvasError::Unavailable("lock poisoned".to_string()))?
            .push(*segment);
        Ok(())
    }
}

impl HasLog for RecordingCanvas {
    fn turtle_log(&self) -> &dyn TurtleLog {
        self.log.as_ref()
    }
}

/// Reports every line as a `tracing` event instead of drawing it.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingCanvas;

impl Canvas for TracingCanvas {
    fn draw_line(&self, segment: &LineSegment) -> Result<(), CanvasError> {
        tracing::info!(
            from = %segment.from,
            to = %segment.to,
            color = %segment.color,
            "draw line"
        );
        Ok(())
    }
}

impl HasLog for TracingCanvas {
    fn turtle_log(&self) -> &dyn TurtleLog {
        &TracingLog
    }
}
