use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// GET / - service banner
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "AI Text-to-Speech API is running!" })),
    )
}

/// GET /health - liveness check
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
