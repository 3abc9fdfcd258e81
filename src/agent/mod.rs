//! Mailbox-driven turtles.
//!
//! Commands are posted to a turtle's mailbox and applied later, in the
//! order they were posted, when the agent is processed. Processing is
//! explicit and synchronous: nothing runs in the background, and the
//! caller decides when each mailbox is drained.

use crate::core::{apply, Command, LineSegment, SharedLog, TracingLog, TurtleState};
use crate::event_sourcing::TurtleId;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error("No agent registered for turtle {0}")]
    UnknownTurtle(TurtleId),
}

/// First-in, first-out message queue.
#[derive(Debug, Clone)]
pub struct Mailbox<T> {
    messages: VecDeque<T>,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
        }
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, message: T) {
        self.messages.push_back(message);
    }

    /// Take the oldest message, if any.
    pub fn receive(&mut self) -> Option<T> {
        self.messages.pop_front()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Remove and return every message, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.messages.drain(..)
    }
}

/// A turtle that owns its state and reads commands from a mailbox.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use trundle::agent::TurtleAgent;
/// use trundle::core::{Command, NoLog};
///
/// let mut agent = TurtleAgent::with_log(Arc::new(NoLog));
/// agent.post(Command::Turn(90.0));
/// agent.post(Command::Turn(90.0));
/// assert_eq!(agent.pending(), 2);
///
/// assert_eq!(agent.process(), 2);
/// assert_eq!(agent.state().heading, 180.0);
/// ```
pub struct TurtleAgent {
    id: TurtleId,
    mailbox: Mailbox<Command>,
    state: TurtleState,
    lines: Vec<LineSegment>,
    log: SharedLog,
}

impl Default for TurtleAgent {
    fn default() -> Self {
        Self::with_log(Arc::new(TracingLog))
    }
}

impl TurtleAgent {
    pub fn with_log(log: SharedLog) -> Self {
        Self::with_id(TurtleId::new(), log)
    }

    pub fn with_id(id: TurtleId, log: SharedLog) -> Self {
        Self {
            id,
            mailbox: Mailbox::new(),
            state: TurtleState::initial(),
            lines: Vec::new(),
            log,
        }
    }

    pub fn id(&self) -> TurtleId {
        self.id
    }

    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    /// Number of commands waiting in the mailbox.
    pub fn pending(&self) -> usize {
        self.mailbox.len()
    }

    /// Queue a command. It has no effect until `process` runs.
    pub fn post(&mut self, command: Command) {
        self.mailbox.post(command);
    }

    /// Apply every queued command in submission order.
    ///
    /// Returns the number of commands applied.
    pub fn process(&mut self) -> usize {
        let mut processed = 0;
        while let Some(command) = self.mailbox.receive() {
            let step = apply(&self.state, &command, self.log.as_ref());
            self.state = step.state;
            self.lines.extend(step.drawn);
            processed += 1;
        }
        if processed > 0 {
            tracing::debug!(turtle_id = %self.id, processed, "mailbox drained");
        }
        processed
    }
}

/// Owns one agent per turtle id.
///
/// Commands for the same id are applied in the order they were posted.
/// There is no ordering between different ids.
pub struct AgentRegistry {
    agents: HashMap<TurtleId, TurtleAgent>,
    log: SharedLog,
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::with_log(Arc::new(TracingLog))
    }
}

impl AgentRegistry {
    pub fn with_log(log: SharedLog) -> Self {
        Self {
            agents: HashMap::new(),
            log,
        }
    }

    /// Start a new agent and return its id.
    pub fn spawn(&mut self) -> TurtleId {
        let agent = TurtleAgent::with_log(Arc::clone(&self.log));
        let id = agent.id();
        self.agents.insert(id, agent);
        tracing::debug!(turtle_id = %id, "agent spawned");
        id
    }

    pub fn agent(&self, id: TurtleId) -> Option<&TurtleAgent> {
        self.agents.get(&id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn post(&mut self, id: TurtleId, command: Command) -> Result<(), AgentError> {
        self.agents
            .get_mut(&id)
            .ok_or(AgentError::UnknownTurtle(id))?
            .post(command);
        Ok(())
    }

    pub fn process(&mut self, id: TurtleId) -> Result<usize, AgentError> {
        self.agents
            .get_mut(&id)
            .map(TurtleAgent::process)
            .ok_or(AgentError::UnknownTurtle(id))
    }

    /// Drain every mailbox. Returns the total number of commands applied.
    pub fn process_all(&mut self) -> usize {
        self.agents.values_mut().map(TurtleAgent::process).sum()
    }

    pub fn state(&self, id: TurtleId) -> Result<TurtleState, AgentError> {
        self.agents
            .get(&id)
            .map(|agent| *agent.state())
            .ok_or(AgentError::UnknownTurtle(id))
    }

    /// Stop an agent, discarding anything still in its mailbox.
    pub fn remove(&mut self, id: TurtleId) -> Option<TurtleAgent> {
        self.agents.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryLog, NoLog, PenColor, Position};
    use crate::interpreter::run_sequence;

    #[test]
    fn mailbox_is_fifo() {
        let mut mailbox = Mailbox::new();
        mailbox.post(1);
        mailbox.post(2);
        mailbox.post(3);
        assert_eq!(mailbox.receive(), Some(1));
        assert_eq!(mailbox.drain().collect::<Vec<_>>(), vec![2, 3]);
        assert!(mailbox.is_empty());
        assert_eq!(mailbox.receive(), None);
    }

    #[test]
    fn posting_does_not_change_state() {
        let mut agent = TurtleAgent::with_log(Arc::new(NoLog));
        agent.post(Command::Move(10.0));
        assert_eq!(*agent.state(), TurtleState::initial());
        assert_eq!(agent.pending(), 1);
    }

    #[test]
    fn processing_matches_fold_in_submission_order() {
        let commands = [
            Command::PenDown,
            Command::Move(100.0),
            Command::Turn(90.0),
            Command::SetColor(PenColor::Red),
            Command::Move(50.0),
        ];
        let mut agent = TurtleAgent::with_log(Arc::new(NoLog));
        for command in commands {
            agent.post(command);
        }
        assert_eq!(agent.process(), commands.len());
        assert_eq!(
            *agent.state(),
            run_sequence(&commands, TurtleState::initial(), &NoLog)
        );
        assert_eq!(agent.lines().len(), 2);
        assert_eq!(agent.lines()[1].color, PenColor::Red);
    }

    #[test]
    fn agent_logs_through_shared_sink() {
        let log = Arc::new(MemoryLog::new());
        let mut agent = TurtleAgent::with_log(log.clone());
        agent.post(Command::PenDown);
        agent.process();
        assert_eq!(log.messages(), vec!["Pen down"]);
    }

    #[test]
    fn registry_keeps_turtles_apart() {
        let mut registry = AgentRegistry::with_log(Arc::new(NoLog));
        let a = registry.spawn();
        let b = registry.spawn();

        registry.post(a, Command::Move(10.0)).unwrap();
        registry.post(b, Command::Turn(45.0)).unwrap();
        assert_eq!(registry.process_all(), 2);

        assert!(registry
            .state(a)
            .unwrap()
            .position
            .approx_eq(&Position::new(10.0, 0.0), 1e-9));
        assert_eq!(registry.state(b).unwrap().heading, 45.0);
        assert_eq!(registry.state(b).unwrap().position, Position::ORIGIN);
    }

    #[test]
    fn unknown_turtle_is_an_error() {
        let mut registry = AgentRegistry::with_log(Arc::new(NoLog));
        let stranger = TurtleId::new();
        assert_eq!(
            registry.post(stranger, Command::PenUp),
            Err(AgentError::UnknownTurtle(stranger))
        );
        assert!(registry.process(stranger).is_err());
    }

    #[test]
    fn removed_agent_is_gone() {
        let mut registry = AgentRegistry::with_log(Arc::new(NoLog));
        let id = registry.spawn();
        assert_eq!(registry.len(), 1);
        assert!(registry.remove(id).is_some());
        assert!(registry.is_empty());
        assert!(registry.state(id).is_err());
    }
}
