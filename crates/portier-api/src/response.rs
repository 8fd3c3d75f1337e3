//! Error responses
//!
//! Every failure leaves the API as `{"error": "<message>"}`. Server-side
//! failures are logged with their cause and answered with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portier_core::DomainError;
use portier_shared::types::PaginationError;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Unprocessable(msg) => {
                tracing::warn!("Request rejected ({}): {}", status.as_u16(), msg);
                msg
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("Service unavailable: {}", msg);
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                INTERNAL_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DomainError::DependencyMissing(_) => ApiError::Unprocessable(err.to_string()),
            DomainError::QueryTimeout(_)
            | DomainError::PasswordHashError(_)
            | DomainError::DatabaseError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<PaginationError> for ApiError {
    fn from(err: PaginationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_internal_errors_hide_cause() {
        let (status, body) =
            body_of(DomainError::DatabaseError("relation \"users\" does not exist".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "internal server error"}));
    }

    #[tokio::test]
    async fn test_timeout_is_internal() {
        let (status, _) = body_of(DomainError::QueryTimeout(Duration::from_secs(5)).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_client_errors_keep_message() {
        let (status, body) = body_of(PaginationError::InvalidLimit(0).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "limit must be greater than 0, got 0");
    }

    #[test]
    fn test_domain_status_mapping() {
        let not_found: ApiError = DomainError::NotFound { entity: "key", id: 4 }.into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let missing: ApiError = DomainError::DependencyMissing("tenant").into();
        assert_eq!(missing.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let invalid: ApiError = DomainError::ValidationError("bad".into()).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }
}
