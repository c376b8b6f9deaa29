use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dealscout_api::config::Args;
use dealscout_api::metrics::TRACKED_CLIENTS;
use dealscout_api::openai::CompletionClient;
use dealscout_api::rate_limit::RateLimiter;
use dealscout_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let limiter = RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window))
        .context("invalid rate limit configuration")?;

    let completions = CompletionClient::new(
        args.openai_url.clone(),
        std::env::var("OPENAI_API_KEY").ok(),
        args.model.clone(),
    );

    let state = Arc::new(AppState::new(completions, limiter));

    // Background sweep: drop rate-limit entries for clients that have been
    // quiet for a full window.
    let sweep_state = state.clone();
    let sweep_interval = Duration::from_secs(args.rate_window);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_interval);
        loop {
            interval.tick().await;
            let dropped = sweep_state.limiter.evict_idle();
            if dropped > 0 {
                debug!(dropped, "evicted idle rate limit entries");
            }
            TRACKED_CLIENTS.set(sweep_state.limiter.tracked_clients() as f64);
        }
    });

    let origins = args
        .cors_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid CORS origin")?;
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = dealscout_api::router(state).layer(cors);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(port = args.port, "dealscout API listening");
    info!(
        max_requests = args.rate_limit,
        window_seconds = args.rate_window,
        "rate limit configured"
    );
    info!(url = %args.openai_url, model = %args.model, "forwarding completions upstream");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
