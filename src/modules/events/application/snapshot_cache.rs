// Cached full snapshot of the event store.
//
// Purpose
// - Avoid a full scan for every listing and every search.
//
// Responsibilities
// - get: serve the memoized snapshot, or load it from the store and memoize it.
// - invalidate: called by every write use case once its write has succeeded.
//
// Notes
// - Only the unfiltered snapshot is cached. Search results are recomputed on every call.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::{EventStore, EventStoreError};
use crate::shared::infrastructure::read_cache::ReadCache;
use std::sync::Arc;

pub type EventSnapshot = Arc<Vec<Event>>;

pub struct EventSnapshotCache<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    event_store: Arc<TEventStore>,
    cache: ReadCache<EventSnapshot>,
}

impl<TEventStore> EventSnapshotCache<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self {
            event_store,
            cache: ReadCache::new("events"),
        }
    }

    pub async fn get(&self) -> Result<EventSnapshot, EventStoreError> {
        self.cache
            .get_or_load(|| async { self.event_store.find_all().await.map(Arc::new) })
            .await
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}
