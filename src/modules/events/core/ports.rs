// Ports define what the events core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the event store as a trait so use cases never depend on a concrete database.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - The in memory adapter can be toggled offline to exercise the failure paths.

use crate::modules::events::core::event::{Event, EventId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Event>, EventStoreError>;
    async fn exists_by_id(&self, id: EventId) -> Result<bool, EventStoreError>;
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventStoreError>;
    async fn save(&self, event: Event) -> Result<Event, EventStoreError>;
    async fn delete_by_id(&self, id: EventId) -> Result<(), EventStoreError>;
}
