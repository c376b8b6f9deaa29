use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::client_key::ClientKey;
use crate::models::QuotaResponse;
use crate::state::AppState;

// Read-only quota inspection; never consumes a request slot.
pub async fn quota_handler(
    State(state): State<Arc<AppState>>,
    client: ClientKey,
) -> Json<QuotaResponse> {
    Json(QuotaResponse {
        remaining_requests: state.limiter.peek_remaining(client.as_str()),
        max_requests: state.limiter.max_requests(),
        window_seconds: state.limiter.window().as_secs(),
    })
}
