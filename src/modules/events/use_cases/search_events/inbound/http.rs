use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SearchEventsParams {
    pub q: Option<String>,
}

/// `GET /api/events/search/{query}`
pub async fn handle(State(state): State<AppState>, Path(query): Path<String>) -> Response {
    search(&state, Some(query.as_str())).await
}

/// `GET /api/events/search?q=...`; a missing `q` is an invalid argument.
pub async fn handle_params(
    State(state): State<AppState>,
    Query(params): Query<SearchEventsParams>,
) -> Response {
    search(&state, params.q.as_deref()).await
}

async fn search(state: &AppState, query: Option<&str>) -> Response {
    match state.search_handler.handle(query).await {
        Ok(views) => Json(views).into_response(),
        Err(error) => error.into_response(),
    }
}
