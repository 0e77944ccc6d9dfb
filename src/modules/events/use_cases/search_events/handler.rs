// Search use case: read the cached snapshot, then filter it in memory.
//
// Responsibilities
// - Validate the query before touching the store.
// - Never cache the filtered result; only the snapshot underneath is memoized.

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::application::snapshot_cache::EventSnapshotCache;
use crate::modules::events::core::ports::EventStore;
use crate::modules::events::core::search::{SearchQuery, search};
use crate::modules::events::core::view::EventView;
use std::sync::Arc;

pub struct SearchEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    snapshots: Arc<EventSnapshotCache<TEventStore>>,
}

impl<TEventStore> SearchEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(snapshots: Arc<EventSnapshotCache<TEventStore>>) -> Self {
        Self { snapshots }
    }

    pub async fn handle(&self, query: Option<&str>) -> Result<Vec<EventView>, ApplicationError> {
        let query = SearchQuery::parse(query)?;
        let snapshot = self.snapshots.get().await?;
        let views = search(&snapshot, &query);
        tracing::debug!(query = query.as_str(), matches = views.len(), "events searched");
        Ok(views)
    }
}
