use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use super::handlers::{hello, resolve_url, submit_url, AppState};
use super::static_files::index_page;
use crate::registry::UrlRegistry;

pub fn create_router(registry: UrlRegistry) -> Router {
    let state = Arc::new(AppState { registry });

    Router::new()
        .route("/", get(index_page))
        .route("/api/hello", get(hello))
        .route("/api/shorturl", post(submit_url))
        .route("/api/shorturl/{code}", get(resolve_url))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
