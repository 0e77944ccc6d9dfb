use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.list_handler.handle().await {
        Ok(events) => Json(events.as_slice()).into_response(),
        Err(error) => error.into_response(),
    }
}
