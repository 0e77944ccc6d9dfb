use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::events::adapters::inbound::error_response::invalid_path;
use crate::modules::events::core::event::EventId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<EventId>, PathRejection>,
) -> Response {
    let Path(id) = match id {
        Ok(p) => p,
        Err(rejection) => return invalid_path(rejection),
    };

    match state.delete_handler.handle(id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod delete_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::events::adapters::inbound::error_response::ErrorResponse;
    use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
    use crate::modules::events::core::ports::EventStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::events::load_all_events;

    use super::handle;

    fn app(store: Arc<InMemoryEventStore>) -> Router {
        Router::new()
            .route("/api/events/{id}", delete(handle))
            .with_state(AppState::new(store))
    }

    #[tokio::test]
    async fn it_should_return_200_and_remove_the_event() {
        let store = Arc::new(InMemoryEventStore::with_events(load_all_events()));
        let response = app(store.clone())
            .oneshot(Request::delete("/api/events/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(!store.exists_by_id(1).await.unwrap());
    }

    #[tokio::test]
    async fn it_should_return_404_when_the_event_does_not_exist() {
        let store = Arc::new(InMemoryEventStore::with_events(load_all_events()));
        let response = app(store.clone())
            .oneshot(
                Request::delete("/api/events/666")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "Event not found with id: 666");
        assert_eq!(body.code, "not_found");
        assert_eq!(store.find_all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn it_should_return_500_with_an_error_body_when_the_id_is_not_a_number() {
        let store = Arc::new(InMemoryEventStore::with_events(load_all_events()));
        let response = app(store.clone())
            .oneshot(
                Request::delete("/api/events/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, ErrorResponse::server_error());
        assert_eq!(store.find_all().await.unwrap().len(), 5);
    }
}
