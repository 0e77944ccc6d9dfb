use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::search_events::inbound::http as search_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/events", get(list_http::handle))
        .route("/api/events/", get(list_http::handle))
        .route("/api/events/search", get(search_http::handle_params))
        .route("/api/events/search/{query}", get(search_http::handle))
        .route(
            "/api/events/{id}",
            delete(delete_http::handle).put(update_http::handle),
        )
        .with_state(state)
}
