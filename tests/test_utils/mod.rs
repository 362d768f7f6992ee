//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use palante_training::api::AppState;
use palante_training::api::app;
use palante_training::core::AppConfig;

/// Creates a test application router pointed at a mock completion
/// service (usually a `mockito` server URL).
pub fn test_app(anthropic_api_hostname: &str) -> Router {
    let app_config = AppConfig {
        anthropic_api_hostname: anthropic_api_hostname.to_string(),
        anthropic_api_key: String::from("test-api-key"),
        anthropic_model: String::from("claude-sonnet-4-20250514"),
        system_prompt: String::from("You are a test persona."),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Collect a response body into a string.
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not valid utf-8")
}
