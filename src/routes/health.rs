use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Nothing is stored and the email provider is only contacted per enquiry,
/// so a running process is ready.
pub async fn ready() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ready"})))
}
