use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use pantheon_relay::{
    llm::LlmClient,
    relay::ChatRelay,
    server::{AllowedOrigins, AppState, router},
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEPLOYED_ORIGIN: &str = "https://pantheon-qa.vercel.app";
pub const EVIL_ORIGIN: &str = "https://evil.example";

pub fn create_test_app(mock: Option<Arc<MockLlmClient>>) -> Router {
    create_test_app_with_timeout(mock, Duration::from_secs(5))
}

/// `None` simulates a process started without an upstream API key.
pub fn create_test_app_with_timeout(mock: Option<Arc<MockLlmClient>>, timeout: Duration) -> Router {
    let client = mock.map(|m| m as Arc<dyn LlmClient>);
    let relay = ChatRelay::new(client, "gpt-4o-mini", timeout);
    let allowed_origins = AllowedOrigins::new([ALLOWED_ORIGIN, DEPLOYED_ORIGIN]).unwrap();

    router(AppState {
        relay: Arc::new(relay),
        allowed_origins: Arc::new(allowed_origins),
    })
}

pub fn chat_request(body: impl Into<String>, origin: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json");

    if let Some(origin) = origin {
        builder = builder.header("origin", origin);
    }

    builder.body(Body::from(body.into())).unwrap()
}

pub fn preflight_request(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/chat")
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
