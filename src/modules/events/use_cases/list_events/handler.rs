use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::application::snapshot_cache::{EventSnapshot, EventSnapshotCache};
use crate::modules::events::core::ports::EventStore;
use std::sync::Arc;

pub struct ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    snapshots: Arc<EventSnapshotCache<TEventStore>>,
}

impl<TEventStore> ListEventsHandler<TEventStore>
where
    TEventStore: EventStore + 'static,
{
    pub fn new(snapshots: Arc<EventSnapshotCache<TEventStore>>) -> Self {
        Self { snapshots }
    }

    pub async fn handle(&self) -> Result<EventSnapshot, ApplicationError> {
        Ok(self.snapshots.get().await?)
    }
}
