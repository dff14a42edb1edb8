//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Read the whole body and decode it as JSON.
///
/// Unlike `axum::Json` the `Content-Type` header is not checked, and any
/// failure is rejected with an error envelope so the handler never runs.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Decode(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let JsonBody(named) = JsonBody::<Named>::from_request(request(r#"{"name":"stoic"}"#), &())
            .await
            .unwrap();
        assert_eq!(named.name, "stoic");
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let err = JsonBody::<Named>::from_request(request(r#"{"name":"#), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn rejects_missing_field() {
        let err = JsonBody::<Named>::from_request(request("{}"), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::Decode(ref reason) if reason.contains("name")));
    }
}
