// HTTP mapping of use case errors.
//
// Responsibilities
// - NotFound becomes 404 with the error message.
// - Every other error becomes 500 with a generic message; the cause is logged, never sent.
// - Unreadable request bodies become 400.
// - Unparseable path parameters become the generic 500.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::events::application::errors::ApplicationError;

pub const TECHNICAL_ERROR_MESSAGE: &str = "A technical problem has occurred";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "not_found".to_string(),
        }
    }

    pub fn invalid_body_format(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "invalid_body_format".to_string(),
        }
    }

    pub fn server_error() -> Self {
        Self {
            message: TECHNICAL_ERROR_MESSAGE.to_string(),
            code: "server_error".to_string(),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found(self.to_string())),
            )
                .into_response(),
            error => {
                tracing::error!(error = %error, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::server_error()),
                )
                    .into_response()
            }
        }
    }
}

pub fn invalid_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::invalid_body_format(rejection.body_text())),
    )
        .into_response()
}

pub fn invalid_path(rejection: PathRejection) -> Response {
    tracing::warn!(rejection = %rejection.body_text(), "unreadable path parameter");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::server_error()),
    )
        .into_response()
}

#[cfg(test)]
mod error_response_tests {
    use super::*;
    use crate::modules::events::core::ports::EventStoreError;
    use http_body_util::BodyExt;
    use rstest::rstest;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_map_not_found_to_404() {
        let response = ApplicationError::NotFound(666).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            ErrorResponse::not_found("Event not found with id: 666")
        );
    }

    #[rstest]
    #[case(ApplicationError::InvalidArgument("search query is missing".into()))]
    #[case(ApplicationError::StoreFailure(EventStoreError::Backend("Event store offline".into())))]
    #[tokio::test]
    async fn it_should_map_everything_else_to_a_generic_500(#[case] error: ApplicationError) {
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, ErrorResponse::server_error());
    }
}
