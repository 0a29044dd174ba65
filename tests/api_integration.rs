//! API integration tests
//!
//! These tests drive the full router end to end: submission, validation
//! failures, redirects, and lookup misses.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use hoplink::api;
use hoplink::registry::{MemoryStore, UrlRegistry, UrlStore};
use hoplink::resolver::{HostResolver, StaticResolver};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Helper to build a router over a fresh store and the given oracle
fn test_app(resolver: impl HostResolver + 'static) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let registry = UrlRegistry::new(store.clone(), Arc::new(resolver));
    (api::create_router(registry), store)
}

fn submit_request(url: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/shorturl")
        .header("content-type", "application/json")
        .body(Body::from(format!(r#"{{"url": "{url}"}}"#)))
        .unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_submit_returns_entry() {
    let (app, store) = test_app(StaticResolver::accepting());

    let response = app
        .oneshot(submit_request("https://www.freecodecamp.org"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["original_url"], "https://www.freecodecamp.org");
    assert_eq!(body["short_url"], 1);
    assert_eq!(store.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_submit_unparsable_url() {
    let (app, store) = test_app(StaticResolver::accepting());

    let response = app.oneshot(submit_request("not a url")).await.unwrap();

    // The error payload rides on a 200; clients match on the body
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "invalid url");
    assert_eq!(store.len().await.unwrap(), 0, "store must stay unchanged");
}

#[tokio::test]
async fn test_submit_unresolvable_hostname() {
    let (app, store) = test_app(StaticResolver::rejecting());

    let response = app
        .oneshot(submit_request("https://this-host-does-not-exist.invalid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "invalid url");
    assert_eq!(store.len().await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_form_encoded_body() {
    let (app, _store) = test_app(StaticResolver::accepting());

    let request = Request::builder()
        .method("POST")
        .uri("/api/shorturl")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(
            "url=https%3A%2F%2Fwww.example.com%2Fpage".to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["original_url"], "https://www.example.com/page");
    assert_eq!(body["short_url"], 1);
}

#[tokio::test]
async fn test_resolve_redirects_to_original() {
    let (app, _store) = test_app(StaticResolver::accepting());

    app.clone()
        .oneshot(submit_request("https://www.freecodecamp.org"))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/shorturl/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND, "should answer 302");
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .unwrap();
    assert_eq!(location, "https://www.freecodecamp.org");
}

#[tokio::test]
async fn test_resolve_unassigned_code() {
    let (app, _store) = test_app(StaticResolver::accepting());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/shorturl/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "No short URL found");
}

#[tokio::test]
async fn test_resolve_non_numeric_code() {
    let (app, _store) = test_app(StaticResolver::accepting());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/shorturl/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // A non-numeric segment can never match an assigned code; it
    // answers the same not-found payload
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "No short URL found");
}

#[tokio::test]
async fn test_sequential_submissions_roundtrip() {
    let (app, _store) = test_app(StaticResolver::accepting());

    for i in 1..=3u64 {
        let response = app
            .clone()
            .oneshot(submit_request(&format!("https://example.com/{i}")))
            .await
            .unwrap();
        let body = json_body(response.into_body()).await;
        assert_eq!(body["short_url"], i);
    }

    for i in 1..=3u64 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/shorturl/{i}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(location, format!("https://example.com/{i}"));
    }
}

#[tokio::test]
async fn test_hello_endpoint() {
    let (app, _store) = test_app(StaticResolver::accepting());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["greeting"], "hello API");
}

#[tokio::test]
async fn test_index_page_serves_form() {
    let (app, _store) = test_app(StaticResolver::accepting());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<form"), "landing page should carry the form");
    assert!(html.contains("/api/shorturl"));
}
