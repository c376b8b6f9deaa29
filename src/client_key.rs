use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use std::convert::Infallible;
use std::net::SocketAddr;

/// Sentinel key shared by every request whose origin cannot be determined.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Identity string used to partition rate-limit state per requester.
///
/// Resolution order: first `X-Forwarded-For` hop, then `X-Real-IP`, then the
/// peer address, then [`UNKNOWN_CLIENT`]. The limiter treats the result as an
/// opaque key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKey(pub String);

impl ClientKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_headers(headers: &HeaderMap, peer: Option<SocketAddr>) -> Self {
        if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            if let Some(first) = forwarded.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return ClientKey(first.to_string());
                }
            }
        }

        if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
            let real_ip = real_ip.trim();
            if !real_ip.is_empty() {
                return ClientKey(real_ip.to_string());
            }
        }

        match peer {
            Some(addr) => ClientKey(addr.ip().to_string()),
            None => ClientKey(UNKNOWN_CLIENT.to_string()),
        }
    }
}

impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(ClientKey::from_headers(&parts.headers, peer))
    }
}
