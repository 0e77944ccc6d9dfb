use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::events::adapters::inbound::error_response::{invalid_body, invalid_path};
use crate::modules::events::core::event::EventId;
use crate::modules::events::core::patch::EventPatch;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<EventId>, PathRejection>,
    body: Result<Json<EventPatch>, JsonRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(p) => p,
        Err(rejection) => return invalid_path(rejection),
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    match state.update_handler.handle(id, patch).await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(error) => error.into_response(),
    }
}
