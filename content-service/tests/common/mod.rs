#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use content_service::config::{
    AuthConfig, ContentConfig, Environment, OpenAiConfig, DEFAULT_SERVICE_NAME,
};
use content_service::startup::{build_router, AppState};
use content_service::services::TextProvider;
use secrecy::Secret;
use service_core::config as core_config;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-custom-api-key";
pub const TEST_OPENAI_KEY: &str = "sk-test-openai";

pub fn test_config(api_key: Option<&str>, openai_base_url: &str) -> ContentConfig {
    ContentConfig {
        common: core_config::Config {
            host: "127.0.0.1".parse().unwrap(),
            port: 0, // Random port
        },
        environment: Environment::Dev,
        service_name: DEFAULT_SERVICE_NAME.to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
        auth: AuthConfig {
            api_key: api_key.map(|k| Secret::new(k.to_string())),
        },
        openai: OpenAiConfig {
            api_key: Some(Secret::new(TEST_OPENAI_KEY.to_string())),
            base_url: openai_base_url.to_string(),
            timeout_secs: Some(5),
        },
    }
}

pub fn router_with(provider: Arc<dyn TextProvider>) -> Router {
    router_with_key(Some(TEST_API_KEY), provider)
}

pub fn router_with_key(api_key: Option<&str>, provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState {
        config: test_config(api_key, "http://127.0.0.1:9"),
        text_provider: provider,
    })
}

pub fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "prompt": "Write a blog post about dry eye treatment",
        "region": "Seoul",
        "ophthalmology_keywords": ["dry eye", "lasik"]
    })
}

pub fn post_request(api_key: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/generate-content")
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(body.into()).unwrap()
}

pub fn post_json(api_key: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    post_request(api_key, body.to_string())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.bytes).expect("Response body is not JSON")
    }
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router
        .oneshot(request)
        .await
        .expect("Failed to execute request");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec();

    TestResponse {
        status,
        headers,
        bytes,
    }
}
