//! Rate limiting middleware using governor and `tower_governor`.
//!
//! - `auth_rate_limiter`: login and signup submissions (~10/min)
//! - `form_rate_limiter`: contact form and checkout submissions (~60/min)

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

/// Proxy headers checked for the client address, most trusted first.
const CLIENT_IP_HEADERS: [&str; 4] = [
    "cf-connecting-ip",
    "x-forwarded-for",
    "x-real-ip",
    "fly-client-ip",
];

/// Key extractor that prefers proxy headers and falls back to the peer
/// address when the server runs without a proxy in front.
#[derive(Clone, Copy)]
pub struct ForwardedIpKeyExtractor;

/// First parseable client IP from the proxy headers.
fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    CLIENT_IP_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|v| v.to_str().ok())
            // X-Forwarded-For lists the client first
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
    })
}

impl tower_governor::key_extractor::KeyExtractor for ForwardedIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        forwarded_ip(req.headers())
            .or_else(|| {
                req.extensions()
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip())
            })
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ForwardedIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Rate limiter for auth endpoints: ~10 requests per minute per IP.
///
/// Configuration: 1 request every 6 seconds (replenish), burst of 5.
///
/// # Panics
///
/// Does not panic; `per_second(6)` and `burst_size(5)` are always accepted
/// by `GovernorConfigBuilder`.
#[must_use]
pub fn auth_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ForwardedIpKeyExtractor)
        .per_second(6)
        .burst_size(5)
        .finish()
        .expect("rate limiter config with per_second(6) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}

/// Rate limiter for other form posts: ~60 requests per minute per IP.
///
/// # Panics
///
/// Does not panic; `per_second(1)` and `burst_size(20)` are always accepted
/// by `GovernorConfigBuilder`.
#[must_use]
pub fn form_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ForwardedIpKeyExtractor)
        .per_second(1)
        .burst_size(20)
        .finish()
        .expect("rate limiter config with per_second(1) and burst_size(20) is valid");
    GovernorLayer::new(Arc::new(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_cloudflare_header_wins() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
        headers.insert("cf-connecting-ip", HeaderValue::from_static("203.0.113.7"));
        assert_eq!(
            forwarded_ip(&headers),
            Some("203.0.113.7".parse().unwrap())
        );
    }

    #[test]
    fn test_forwarded_for_uses_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("198.51.100.4, 10.0.0.1"),
        );
        assert_eq!(
            forwarded_ip(&headers),
            Some("198.51.100.4".parse().unwrap())
        );
    }

    #[test]
    fn test_no_headers() {
        assert_eq!(forwarded_ip(&HeaderMap::new()), None);
    }
}
