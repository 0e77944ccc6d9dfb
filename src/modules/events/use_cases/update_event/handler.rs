// Update use case: copy comment and star rating onto a stored event.
//
// Responsibilities
// - Reject unknown ids with NotFound.
// - Merge the patch onto the stored event, save it, then invalidate the snapshot cache.

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::application::snapshot_cache::EventSnapshotCache;
use crate::modules::events::core::event::{Event, EventId};
use crate::modules::events::core::patch::EventPatch;
use crate::modules::events::core::ports::EventStore;
use std::sync::Arc;

pub struct UpdateEventHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
    snapshots: Arc<EventSnapshotCache<TEventStore>>,
}

impl<TEventStore> UpdateEventHandler<TEventStore>
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

    pub async fn handle(&self, id: EventId, patch: EventPatch) -> Result<Event, ApplicationError> {
        let Some(existing) = self.event_store.find_by_id(id).await? else {
            tracing::warn!(event_id = id, "update rejected: event not found");
            return Err(ApplicationError::NotFound(id));
        };
        let saved = self.event_store.save(patch.apply_to(existing)).await?;
        self.snapshots.invalidate().await;
        tracing::info!(event_id = id, nb_stars = ?saved.nb_stars, "event updated");
        Ok(saved)
    }
}
