//! Root greeting, kept for clients that probe `/`

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::http::server::AppState;

/// GET /
async fn hello() -> &'static str {
    "hello, world"
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(hello))
}
