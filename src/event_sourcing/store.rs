//! Append-only event storage.

use super::events::{StateChangedEvent, TurtleEvent, TurtleId};
use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("event store lock poisoned")]
    Poisoned,
}

/// Append-only log of events, partitioned by turtle.
pub trait EventStore {
    fn append(&self, id: TurtleId, event: TurtleEvent) -> Result<(), StoreError>;

    /// All events for `id`, oldest first.
    fn events(&self, id: TurtleId) -> Result<Vec<TurtleEvent>, StoreError>;

    /// Forget every event for `id`.
    fn clear(&self, id: TurtleId) -> Result<(), StoreError>;

    /// Only the state-changing events for `id`, oldest first.
    fn state_changed_events(&self, id: TurtleId) -> Result<Vec<StateChangedEvent>, StoreError> {
        Ok(self
            .events(id)?
            .iter()
            .filter_map(TurtleEvent::as_state_changed)
            .collect())
    }
}

impl<S: EventStore + ?Sized> EventStore for &S {
    fn append(&self, id: TurtleId, event: TurtleEvent) -> Result<(), StoreError> {
        (**self).append(id, event)
    }

    fn events(&self, id: TurtleId) -> Result<Vec<TurtleEvent>, StoreError> {
        (**self).events(id)
    }

    fn clear(&self, id: TurtleId) -> Result<(), StoreError> {
        (**self).clear(id)
    }
}

/// In-memory store. Each stream is kept newest first and reversed on read.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    streams: RwLock<HashMap<TurtleId, VecDeque<TurtleEvent>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of turtles with at least one stored event.
    pub fn stream_count(&self) -> Result<usize, StoreError> {
        let streams = self.streams.read().map_err(|_| StoreError::Poisoned)?;
        Ok(streams.len())
    }
}

impl EventStore for InMemoryEventStore {
    fn append(&self, id: TurtleId, event: TurtleEvent) -> Result<(), StoreError> {
        let mut streams = self.streams.write().map_err(|_| StoreError::Poisoned)?;
        streams.entry(id).or_default().push_front(event);
        tracing::trace!(turtle_id = %id, ?event, "event appended");
        Ok(())
    }

    fn events(&self, id: TurtleId) -> Result<Vec<TurtleEvent>, StoreError> {
        let streams = self.streams.read().map_err(|_| StoreError::Poisoned)?;
        Ok(streams
            .get(&id)
            .map(|stream| stream.iter().rev().copied().collect())
            .unwrap_or_default())
    }

    fn clear(&self, id: TurtleId) -> Result<(), StoreError> {
        let mut streams = self.streams.write().map_err(|_| StoreError::Poisoned)?;
        streams.remove(&id);
        Ok(())
    }
}
