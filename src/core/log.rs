//! Injected log sinks for human-readable trace messages.
//!
//! Transition functions report what they do ("Move 100", "Turn 120") to a
//! caller-supplied sink. The sink is a side channel only; nothing it does
//! can change a computed state.

use std::sync::{Arc, Mutex};

/// Sink for trace messages emitted by turtle operations.
///
/// Implemented for any `Fn(&str)`, so a closure can be passed directly.
///
/// # Example
///
/// ```rust
/// use trundle::core::{apply_turn, TurtleState};
///
/// let log = |message: &str| println!("{message}");
/// let state = apply_turn(&TurtleState::initial(), 90.0, &log);
/// assert_eq!(state.heading, 90.0);
/// ```
pub trait TurtleLog {
    fn log(&self, message: &str);
}

impl<F> TurtleLog for F
where
    F: Fn(&str),
{
    fn log(&self, message: &str) {
        self(message)
    }
}

/// A log sink that can be shared between owners and threads.
pub type SharedLog = Arc<dyn TurtleLog + Send + Sync>;

/// Discards every message. Used when replaying history.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLog;

impl TurtleLog for NoLog {
    fn log(&self, _message: &str) {}
}

/// Forwards messages to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl TurtleLog for TracingLog {
    fn log(&self, message: &str) {
        tracing::debug!(target: "trundle::turtle", "{message}");
    }
}

/// Keeps messages in memory so they can be inspected later.
#[derive(Debug, Default)]
pub struct MemoryLog {
    messages: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages logged so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TurtleLog for MemoryLog {
    fn log(&self, message: &str) {
        // A poisoned buffer only loses trace text, never state.
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn closures_are_log_sinks() {
        let seen = RefCell::new(Vec::new());
        let sink = |message: &str| seen.borrow_mut().push(message.to_string());
        sink.log("Move 100");
        sink.log("Turn 90");
        assert_eq!(*seen.borrow(), vec!["Move 100", "Turn 90"]);
    }

    #[test]
    fn memory_log_keeps_order() {
        let log = MemoryLog::new();
        log.log("first");
        log.log("second");
        assert_eq!(log.messages(), vec!["first", "second"]);
    }

    #[test]
    fn silent_sinks_accept_messages() {
        NoLog.log("ignored");
        TracingLog.log("traced");
    }
}
