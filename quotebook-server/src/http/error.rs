//! API error types with IntoResponse
//!
//! Every error becomes an `{"err": ...}` envelope with a matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::DbError;
use crate::models::{Envelope, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not valid JSON for the endpoint (400)
    Decode(String),

    /// Decoded input failed validation (400)
    Validation(ValidationError),

    /// Storage query failed (500, logged)
    Storage(DbError),

    /// Storage did not answer a health ping (503, logged)
    Unavailable(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = match self {
            Self::Decode(reason) => {
                tracing::debug!(%reason, "rejecting undecodable body");
                Envelope::error(format!("invalid request body: {}", reason))
            }
            Self::Validation(e) => Envelope::error(e),
            Self::Storage(e) => {
                tracing::error!(err = ?e, "storage error");
                Envelope::error(e)
            }
            Self::Unavailable(e) => {
                tracing::error!(err = ?e, "health check failed");
                Envelope::error(e)
            }
        };

        (status, Json(envelope)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Storage(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn envelope_of(response: Response) -> Envelope {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            envelope_of(response).await,
            Envelope::error("name cannot be empty")
        );
    }

    #[tokio::test]
    async fn storage_error_is_500_with_description() {
        let err = ApiError::from(DbError::Unavailable {
            reason: "connection refused".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let envelope = envelope_of(response).await;
        assert_eq!(
            envelope.err.as_deref(),
            Some("storage unavailable: connection refused")
        );
        assert!(envelope.msg.is_none());
    }

    #[tokio::test]
    async fn unavailable_is_503() {
        let err = ApiError::Unavailable(DbError::Unavailable {
            reason: "down".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
