use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod client_key;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openai;
pub mod prompts;
pub mod rate_limit;
pub mod state;

use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/api/chat", post(handlers::chat_handler))
        .route(
            "/api/history",
            get(handlers::get_history_handler).post(handlers::create_conversation_handler),
        )
        .route("/api/discover", post(handlers::discover_handler))
        .route("/api/analyze", post(handlers::analyze_handler))
        .route("/api/search", post(handlers::search_handler))
        .route("/api/quota", get(handlers::quota_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
