#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;

use student_toolkit_api::auth::TokenService;
use student_toolkit_api::state::AppState;
use student_toolkit_api::store::MemStore;

pub const TEST_SECRET: &str = "integration-test-secret";

/// The full application router wired to an in-memory store. The store and
/// token service handles are kept so tests can seed data and mint tokens
/// without going through the HTTP surface.
pub struct TestApp {
    pub app: Router,
    pub store: Arc<MemStore>,
    pub tokens: TokenService,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(MemStore::new());
    let tokens = TokenService::new(TEST_SECRET.to_string(), 2);
    let state = AppState::new(store.clone(), tokens.clone());

    TestApp {
        app: student_toolkit_api::app(state),
        store,
        tokens,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn with_bearer(mut request: Request<Body>, token: &str) -> Request<Body> {
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );
    request
}

/// Read the response body and deserialize it from JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
