use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use bedrock_gateway::{
    adapter::InferenceAdapter,
    config::CorsConfig,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Build the full router around a mock client, returning the mock for inspection
pub fn create_test_app(mock: MockLlmClient) -> (Router, Arc<MockLlmClient>) {
    let mock = Arc::new(mock);
    let adapter = InferenceAdapter::new(mock.clone());
    let app = server::router(AppState { adapter }, &CorsConfig::default()).unwrap();
    (app, mock)
}

pub fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
