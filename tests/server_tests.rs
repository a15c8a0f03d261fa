//! In-process tests for the HTTP host.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use path_router::http::X_REQUEST_ID;
use path_router::HttpServer;

mod common;

fn app() -> axum::Router {
    let config = common::config();
    let router = Arc::new(common::router());
    HttpServer::new(&config.server, router).into_app()
}

async fn send(uri: &str) -> (StatusCode, Option<String>, Value) {
    let req = Request::builder()
        .uri(uri)
        .header(X_REQUEST_ID, "test-req-1")
        .body(Body::empty())
        .unwrap();
    let res = app().oneshot(req).await.unwrap();

    let status = res.status();
    let request_id = res
        .headers()
        .get(X_REQUEST_ID)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(res.into_body(), 64 * 1024).await.unwrap();
    (status, request_id, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_matched_request_returns_resolution() {
    let (status, request_id, body) = send("/users/42?page=2&format=xml").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(request_id.as_deref(), Some("test-req-1"));
    assert_eq!(body["request_id"], "test-req-1");
    assert_eq!(body["route"], "user_show");
    assert_eq!(body["action"], "UserShow");
    assert_eq!(body["args"]["layout"], "main");
    assert_eq!(body["query"]["id"], "42");
    assert_eq!(body["query"]["page"], "2");
    // route defaults override the inbound query
    assert_eq!(body["query"]["format"], "html");
}

#[tokio::test]
async fn test_unmatched_request_is_not_found() {
    let (status, _, body) = send("/nothing/here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["route"].is_null());
    assert!(body["action"].is_null());
}

#[tokio::test]
async fn test_generated_request_id() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let res = app().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let id = res.headers().get(X_REQUEST_ID).unwrap().to_str().unwrap();
    assert_eq!(id.len(), 36);
}
