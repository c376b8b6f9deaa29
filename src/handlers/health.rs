use axum::Json;
use axum::response::IntoResponse;

pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "message": "API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
