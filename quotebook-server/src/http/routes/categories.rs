//! Category endpoints

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
use crate::models::{Category, EntityName};

/// Create category request
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// GET /category - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.store.categories().await?;
    Ok(Json(categories))
}

/// POST /category/new - add a category, empty body on success
#[tracing::instrument(skip_all)]
async fn create_category(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCategoryRequest>,
) -> Result<StatusCode, ApiError> {
    let name = EntityName::new(&req.name)?;
    state.store.add_category(&name).await?;
    tracing::debug!(name = %name.as_str(), "category added");

    Ok(StatusCode::CREATED)
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/category", get(list_categories))
        .route("/category/new", post(create_category))
}
