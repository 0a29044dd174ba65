use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::extract::JsonOrForm;
use crate::models::SubmitUrlRequest;
use crate::registry::{RegistryError, UrlRegistry};

pub struct AppState {
    pub registry: UrlRegistry,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct SubmitUrlResponse {
    pub original_url: String,
    pub short_url: u64,
}

#[derive(Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
}

/// Shorten a URL
pub async fn submit_url(
    State(state): State<Arc<AppState>>,
    JsonOrForm(payload): JsonOrForm<SubmitUrlRequest>,
) -> Response {
    match state.registry.submit(&payload.url).await {
        Ok(entry) => Json(SubmitUrlResponse {
            original_url: entry.original_url,
            short_url: entry.short_code,
        })
        .into_response(),
        // Invalid submissions answer 200 with an error payload; existing
        // clients match on the body, not the status
        Err(RegistryError::InvalidUrl) => Json(ErrorResponse {
            error: "invalid url".to_string(),
        })
        .into_response(),
        Err(err) => internal_error(err),
    }
}

/// Redirect a short code to its original URL
pub async fn resolve_url(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Response {
    // A non-numeric segment can never match an assigned code
    let Ok(code) = code.parse::<u64>() else {
        return not_found();
    };

    match state.registry.resolve(code).await {
        Ok(entry) => found_redirect(&entry.original_url),
        Err(RegistryError::NotFound) => not_found(),
        Err(err) => internal_error(err),
    }
}

/// Greeting probe endpoint
pub async fn hello() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        greeting: "hello API".to_string(),
    })
}

/// 302 redirect; axum's `Redirect` helpers only build 303/307/308
fn found_redirect(location: &str) -> Response {
    match location.parse::<header::HeaderValue>() {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(err) => internal_error(anyhow::Error::new(err)),
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "No short URL found".to_string(),
        }),
    )
        .into_response()
}

fn internal_error(err: impl std::fmt::Display) -> Response {
    tracing::error!(error = %err, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal server error".to_string(),
        }),
    )
        .into_response()
}
