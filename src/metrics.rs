use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter = register_counter!(
        "dealscout_requests_total",
        "Total number of rate-limited API requests"
    )
    .unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "dealscout_rate_limited_total",
        "Requests denied by the rate limiter"
    )
    .unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "dealscout_upstream_latency_seconds",
        "Completion API call latency in seconds"
    )
    .unwrap();
    pub static ref TRACKED_CLIENTS: Gauge = register_gauge!(
        "dealscout_tracked_clients",
        "Client keys currently tracked by the rate limiter"
    )
    .unwrap();
}
