// Delete use case.
//
// Responsibilities
// - Reject unknown ids with NotFound, leaving the store untouched.
// - Invalidate the snapshot cache once the delete has succeeded.

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::application::snapshot_cache::EventSnapshotCache;
use crate::modules::events::core::event::EventId;
use crate::modules::events::core::ports::EventStore;
use std::sync::Arc;

pub struct DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
    snapshots: Arc<EventSnapshotCache<TEventStore>>,
}

impl<TEventStore> DeleteEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        snapshots: Arc<EventSnapshotCache<TEventStore>>,
    ) -> Self {
        Self {
            event_store,
            snapshots,
        }
    }

    pub async fn handle(&self, id: EventId) -> Result<(), ApplicationError> {
        if !self.event_store.exists_by_id(id).await? {
            tracing::warn!(event_id = id, "delete rejected: event not found");
            return Err(ApplicationError::NotFound(id));
        }
        self.event_store.delete_by_id(id).await?;
        self.snapshots.invalidate().await;
        tracing::info!(event_id = id, "event deleted");
        Ok(())
    }
}
