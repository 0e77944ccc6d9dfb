// In memory implementation of the EventStore port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Store events keyed by id; full scans return them in id order.
// - Count full scans so callers can observe whether a read was served from cache.
// - Fail every call while toggled offline.

use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::core::ports::{EventStore, EventStoreError};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<BTreeMap<EventId, Event>>,
    find_all_calls: AtomicUsize,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: RwLock::new(events.into_iter().map(|event| (event.id, event)).collect()),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn find_all(&self) -> Result<Vec<Event>, EventStoreError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;
        Ok(self.events.read().await.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: EventId) -> Result<bool, EventStoreError> {
        self.ensure_online()?;
        Ok(self.events.read().await.contains_key(&id))
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.events.read().await.get(&id).cloned())
    }

    async fn save(&self, event: Event) -> Result<Event, EventStoreError> {
        self.ensure_online()?;
        self.events.write().await.insert(event.id, event.clone());
        Ok(event)
    }

    async fn delete_by_id(&self, id: EventId) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.events.write().await.remove(&id);
        Ok(())
    }
}
