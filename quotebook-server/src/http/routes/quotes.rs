//! Quote endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{EntityRef, NewQuote};

/// Create quote request
///
/// `category` and `author` may be bare ids or objects with an `id` field.
#[derive(Deserialize)]
pub struct CreateQuoteRequest {
    pub category: EntityRef,
    pub author: EntityRef,
    pub message: String,
}

/// POST /quote/new - add a quote, empty body on success
#[tracing::instrument(skip_all)]
async fn create_quote(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateQuoteRequest>,
) -> Result<StatusCode, ApiError> {
    let quote = NewQuote::new(req.category, req.author, &req.message)?;
    state.store.add_quote(&quote).await?;
    tracing::debug!(
        category_id = quote.category_id,
        author_id = quote.author_id,
        "quote added"
    );

    Ok(StatusCode::CREATED)
}

/// Quote routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quote/new", post(create_quote))
}
