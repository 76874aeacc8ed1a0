// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;

use dgn_core::application::{
    ports::{security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use dgn_core::presentation::http::{
    routes::{RouterOptions, build_router, build_router_with_options},
    state::HttpState,
};

use super::mocks::{DummyClock, DummyTokenManager, InMemoryCms};

pub fn build_services(store: Arc<InMemoryCms>) -> Arc<ApplicationServices> {
    let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager);
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);

    Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        token_manager,
        clock,
    ))
}

/// Services over a freshly seeded store, plus the store for inspection.
pub fn seeded_services() -> (Arc<ApplicationServices>, Arc<InMemoryCms>) {
    let store = Arc::new(InMemoryCms::seeded());
    (build_services(store.clone()), store)
}

pub fn make_test_router_with(store: Arc<InMemoryCms>) -> axum::Router {
    build_router(HttpState {
        services: build_services(store),
    })
}

pub fn make_test_router_with_options(
    store: Arc<InMemoryCms>,
    options: RouterOptions,
) -> axum::Router {
    build_router_with_options(
        HttpState {
            services: build_services(store),
        },
        options,
    )
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with(Arc::new(InMemoryCms::seeded()))
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("valid request")
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
