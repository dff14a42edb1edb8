//! Author endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{Author, EntityName};

/// Create author request
#[derive(Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
}

/// GET /author - list all authors
async fn list_authors(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Author>>, ApiError> {
    let authors = state.store.authors().await?;
    Ok(Json(authors))
}

/// POST /author/new - add an author, empty body on success
#[tracing::instrument(skip_all)]
async fn create_author(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateAuthorRequest>,
) -> Result<StatusCode, ApiError> {
    let name = EntityName::new(&req.name)?;
    state.store.add_author(&name).await?;
    tracing::debug!(name = %name.as_str(), "author added");

    Ok(StatusCode::CREATED)
}

/// Author routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/author", get(list_authors))
        .route("/author/new", post(create_author))
}
