use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::application::snapshot_cache::EventSnapshotCache;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::events::use_cases::search_events::handler::SearchEventsHandler;
use crate::modules::events::use_cases::update_event::handler::UpdateEventHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListEventsHandler<InMemoryEventStore>>,
    pub search_handler: Arc<SearchEventsHandler<InMemoryEventStore>>,
    pub delete_handler: Arc<DeleteEventHandler<InMemoryEventStore>>,
    pub update_handler: Arc<UpdateEventHandler<InMemoryEventStore>>,
}

impl AppState {
    /// Wires every use case onto one store and one shared snapshot cache.
    pub fn new(event_store: Arc<InMemoryEventStore>) -> Self {
        let snapshots = Arc::new(EventSnapshotCache::new(event_store.clone()));
        Self {
            list_handler: Arc::new(ListEventsHandler::new(snapshots.clone())),
            search_handler: Arc::new(SearchEventsHandler::new(snapshots.clone())),
            delete_handler: Arc::new(DeleteEventHandler::new(
                event_store.clone(),
                snapshots.clone(),
            )),
            update_handler: Arc::new(UpdateEventHandler::new(event_store, snapshots)),
        }
    }
}
