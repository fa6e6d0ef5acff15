//! HTTP request handlers.

pub mod suites;
pub mod testcases;

use axum::response::Json;

/// Root route pointing callers at the API.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "TestDeck API" }))
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
