use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::core::database::StoreError;
use crate::shared::constants::{MSG_DATABASE_CONNECTION_LOST, MSG_OUTSIDE_REGION};
use crate::shared::types::StatusResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Location outside Philippines")]
    OutsideRegion,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Store(StoreError::Unavailable(ref e)) => {
                tracing::error!("Database unavailable: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MSG_DATABASE_CONNECTION_LOST.to_string(),
                )
            }
            AppError::Store(StoreError::Operation(ref e)) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.clone())
            }
            AppError::OutsideRegion => (StatusCode::BAD_REQUEST, MSG_OUTSIDE_REGION.to_string()),
            AppError::MalformedBody(ref msg) => {
                tracing::warn!("Malformed request body: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(StatusResponse::error(message));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unavailable_store_reports_connection_lost() {
        let response =
            AppError::from(StoreError::Unavailable("server selection timeout".into()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Database connection lost");
    }

    #[tokio::test]
    async fn test_store_operation_error_exposes_message() {
        let response =
            AppError::from(StoreError::Operation("duplicate key".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "duplicate key");
    }

    #[tokio::test]
    async fn test_outside_region_is_bad_request() {
        let response = AppError::OutsideRegion.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Location outside Philippines");
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_server_error_with_detail() {
        let response =
            AppError::MalformedBody("expected value at line 1 column 1".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "expected value at line 1 column 1");
    }
}
