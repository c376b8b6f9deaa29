use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use std::time::Instant;

use crate::client_key::ClientKey;
use crate::error::ApiError;
use crate::metrics::{RATE_LIMITED_TOTAL, REQUEST_TOTAL, UPSTREAM_LATENCY};
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, DiscoverRequest, DiscoverResponse, SearchRequest,
    SearchResponse,
};
use crate::prompts;
use crate::state::AppState;

// Rate-limit gate shared by the AI routes. Returns the remaining quota on
// admission. The check happens before input validation, so a malformed
// request still consumes a slot (matches the original backend's ordering).
fn admit(state: &AppState, client: &ClientKey) -> Result<u32, ApiError> {
    REQUEST_TOTAL.inc();
    let admission = state.limiter.check_and_admit(client.as_str());
    if !admission.admitted {
        RATE_LIMITED_TOTAL.inc();
        tracing::debug!(client = client.as_str(), "request denied by rate limiter");
        return Err(ApiError::RateLimited {
            max_requests: state.limiter.max_requests(),
        });
    }
    Ok(admission.remaining)
}

// The completion call runs well outside the limiter's critical section; the
// entry guard is dropped before admit() returns.
async fn complete(state: &AppState, prompt: &str) -> Result<String, ApiError> {
    let started = Instant::now();
    let result = state.completions.complete(prompt, None).await;
    UPSTREAM_LATENCY.observe(started.elapsed().as_secs_f64());
    Ok(result?)
}

pub async fn discover_handler(
    State(state): State<Arc<AppState>>,
    client: ClientKey,
    Json(payload): Json<DiscoverRequest>,
) -> Result<Json<DiscoverResponse>, ApiError> {
    let remaining = admit(&state, &client)?;

    if payload.query.trim().is_empty() {
        return Err(ApiError::BadRequest("Search query cannot be empty".into()));
    }

    let prompt = prompts::discover_prompt(
        &payload.query,
        payload.industry.as_deref(),
        payload.stage.as_deref(),
    );
    let results = complete(&state, &prompt).await?;

    Ok(Json(DiscoverResponse {
        results,
        query: payload.query,
        remaining_requests: remaining,
    }))
}

pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    client: ClientKey,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let remaining = admit(&state, &client)?;

    if payload.startup_name.trim().is_empty() {
        return Err(ApiError::BadRequest("Startup name cannot be empty".into()));
    }

    let prompt = prompts::analysis_prompt(&payload.startup_name, &payload.analysis_type);
    let analysis = complete(&state, &prompt).await?;

    Ok(Json(AnalyzeResponse {
        analysis,
        startup_name: payload.startup_name,
        analysis_type: payload.analysis_type,
        remaining_requests: remaining,
    }))
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    client: ClientKey,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let remaining = admit(&state, &client)?;

    if payload.query.trim().is_empty() {
        return Err(ApiError::BadRequest("Search query cannot be empty".into()));
    }

    let prompt = prompts::search_prompt(&payload.query, &payload.search_type);
    let results = complete(&state, &prompt).await?;

    Ok(Json(SearchResponse {
        results,
        query: payload.query,
        search_type: payload.search_type,
        remaining_requests: remaining,
    }))
}
