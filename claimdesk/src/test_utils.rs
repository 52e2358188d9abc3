//! Shared constructors for HTTP-level tests.

use crate::api::models::accounts::AccountResponse;
use crate::config::Config;
use axum_test::TestServer;
use serde_json::json;

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        enable_metrics: false,
        enable_otel_export: false,
        ..Default::default()
    }
}

pub fn create_test_app_with_config(config: Config) -> TestServer {
    crate::Application::new(config)
        .expect("Failed to create application")
        .into_test_server()
}

pub fn create_test_app() -> TestServer {
    create_test_app_with_config(create_test_config())
}

/// Record a minimal account under `session_id` and return it.
pub async fn create_test_account(app: &TestServer, session_id: &str, patient_name: &str) -> AccountResponse {
    let response = app
        .post("/api/v1/accounts")
        .json(&json!({
            "session_id": session_id,
            "patient_name": patient_name,
            "account_number": "A-100",
            "insurance_id": "INS-1",
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<AccountResponse>()
}
