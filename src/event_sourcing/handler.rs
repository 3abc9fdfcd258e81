//! Command handling by replaying past events.

use super::events::{MovedEvent, StateChangedEvent, TurtleCommand, TurtleEvent, TurtleId};
use super::store::{EventStore, StoreError};
use crate::core::{apply, Command, NoLog, TracingLog, TurtleLog, TurtleState};

/// Apply one state change to `state`.
pub fn apply_event(
    state: &TurtleState,
    event: StateChangedEvent,
    log: &dyn TurtleLog,
) -> TurtleState {
    apply(state, &event.to_command(), log).state
}

/// Fold state changes, oldest first, from the initial state.
pub fn replay<'a, I>(events: I) -> TurtleState
where
    I: IntoIterator<Item = &'a StateChangedEvent>,
{
    events
        .into_iter()
        .fold(TurtleState::initial(), |state, event| {
            apply_event(&state, *event, &NoLog)
        })
}

/// The events that record `command` being applied to `before`.
///
/// Always one `StateChanged` event, followed by a `Moved` event when the
/// pen was down and the position actually changed.
pub fn events_from_command(
    command: &Command,
    before: &TurtleState,
    log: &dyn TurtleLog,
) -> Vec<TurtleEvent> {
    let changed = StateChangedEvent::from(*command);
    let after = apply_event(before, changed, log);

    let mut events = vec![TurtleEvent::StateChanged(changed)];
    if before.is_pen_down() && after.position != before.position {
        events.push(TurtleEvent::Moved(MovedEvent {
            start: before.position,
            end: after.position,
            color: before.color,
        }));
    }
    events
}

/// Turns commands into stored events.
///
/// The handler keeps no state of its own: before each command it rebuilds
/// the turtle's state from the store.
///
/// # Example
///
/// ```rust
/// use trundle::core::{Command, NoLog};
/// use trundle::event_sourcing::{CommandHandler, InMemoryEventStore, TurtleCommand, TurtleId};
///
/// let store = InMemoryEventStore::new();
/// let handler = CommandHandler::with_log(&store, NoLog);
/// let id = TurtleId::new();
///
/// handler.handle(TurtleCommand::new(id, Command::Turn(90.0))).unwrap();
/// assert_eq!(handler.state_of(id).unwrap().heading, 90.0);
/// ```
pub struct CommandHandler<S: EventStore, L: TurtleLog = TracingLog> {
    store: S,
    log: L,
}

impl<S: EventStore> CommandHandler<S, TracingLog> {
    pub fn new(store: S) -> Self {
        Self::with_log(store, TracingLog)
    }
}

impl<S: EventStore, L: TurtleLog> CommandHandler<S, L> {
    pub fn with_log(store: S, log: L) -> Self {
        Self { store, log }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rebuild the current state of `id` from its stored events.
    pub fn state_of(&self, id: TurtleId) -> Result<TurtleState, StoreError> {
        let history = self.store.state_changed_events(id)?;
        Ok(replay(&history))
    }

    /// Process one command, returning the events it produced.
    pub fn handle(&self, command: TurtleCommand) -> Result<Vec<TurtleEvent>, StoreError> {
        let before = self.state_of(command.turtle_id)?;
        let events = events_from_command(&command.command, &before, &self.log);
        for event in &events {
            self.store.append(command.turtle_id, *event)?;
        }
        tracing::debug!(
            turtle_id = %command.turtle_id,
            command = %command.command,
            events = events.len(),
            "command handled"
        );
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PenColor, PenState, Position};
    use crate::event_sourcing::InMemoryEventStore;
    use crate::interpreter::run_sequence;

    fn handle_all(
        handler: &CommandHandler<&InMemoryEventStore, NoLog>,
        id: TurtleId,
        commands: &[Command],
    ) {
        for command in commands {
            handler.handle(TurtleCommand::new(id, *command)).unwrap();
        }
    }

    #[test]
    fn turn_emits_no_moved_event() {
        let events = events_from_command(&Command::Turn(90.0), &TurtleState::initial(), &NoLog);
        assert_eq!(
            events,
            vec![TurtleEvent::StateChanged(StateChangedEvent::Turned(90.0))]
        );
    }

    #[test]
    fn pen_up_move_emits_no_moved_event() {
        let events = events_from_command(&Command::Move(10.0), &TurtleState::initial(), &NoLog);
        assert_eq!(
            events,
            vec![TurtleEvent::StateChanged(StateChangedEvent::Moved(10.0))]
        );
        assert!(events.iter().all(|event| event.as_moved().is_none()));
    }

    #[test]
    fn pen_down_move_carries_color() {
        let before = TurtleState::initial()
            .with_pen(PenState::Down)
            .with_color(PenColor::Red);
        let events = events_from_command(&Command::Move(10.0), &before, &NoLog);
        assert_eq!(events.len(), 2);
        let moved = events[1].as_moved().unwrap();
        assert_eq!(moved.color, PenColor::Red);
        assert!(moved.end.approx_eq(&Position::new(10.0, 0.0), 1e-9));
    }

    #[test]
    fn zero_move_emits_no_moved_event() {
        let before = TurtleState::initial().with_pen(PenState::Down);
        let events = events_from_command(&Command::Move(0.0), &before, &NoLog);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn replayed_state_matches_fold() {
        let store = InMemoryEventStore::new();
        let handler = CommandHandler::with_log(&store, NoLog);
        let id = TurtleId::new();
        let commands = [
            Command::PenDown,
            Command::Move(100.0),
            Command::Turn(120.0),
            Command::SetColor(PenColor::Blue),
            Command::Move(100.0),
        ];
        handle_all(&handler, id, &commands);

        assert_eq!(
            handler.state_of(id).unwrap(),
            run_sequence(&commands, TurtleState::initial(), &NoLog)
        );
        // two moves, each with a Moved event
        assert_eq!(store.events(id).unwrap().len(), commands.len() + 2);
    }

    #[test]
    fn triangle_draws_three_lines_and_returns_home() {
        let store = InMemoryEventStore::new();
        let handler = CommandHandler::with_log(&store, NoLog);
        let id = TurtleId::new();
        handle_all(&handler, id, &[Command::PenDown]);
        for _ in 0..3 {
            handle_all(&handler, id, &[Command::Move(100.0), Command::Turn(120.0)]);
        }

        let lines: Vec<_> = store
            .events(id)
            .unwrap()
            .iter()
            .filter_map(TurtleEvent::as_moved)
            .map(|moved| moved.line())
            .collect();
        assert_eq!(lines.len(), 3);
        let home = handler.state_of(id).unwrap().position;
        assert!(home.approx_eq(&Position::ORIGIN, 1e-3));
    }

    #[test]
    fn turtles_do_not_share_state() {
        let store = InMemoryEventStore::new();
        let handler = CommandHandler::with_log(&store, NoLog);
        let (a, b) = (TurtleId::new(), TurtleId::new());
        handle_all(&handler, a, &[Command::Turn(90.0)]);

        assert_eq!(handler.state_of(a).unwrap().heading, 90.0);
        assert_eq!(handler.state_of(b).unwrap(), TurtleState::initial());
    }
}
