//! Request ID middleware for request tracing and correlation.
//!
//! Uses the upstream `x-request-id` when present, otherwise a new UUID v4.
//! The id is recorded on the current span, tagged on the Sentry scope,
//! stored in request extensions as [`RequestId`] and echoed on the response.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderValue, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream id accepted as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// The current request's id, for log lines written by handlers.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

fn upstream_id(request: &Request) -> Option<String> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .map(String::from)
}

/// Middleware that ensures every request has a unique request ID.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = upstream_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Self>()
            .cloned()
            .unwrap_or_else(|| Self("unknown".to_string())))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;

    use super::*;

    #[test]
    fn test_upstream_id_used_when_reasonable() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, " cf-1234 ")
            .body(Body::empty())
            .unwrap();
        assert_eq!(upstream_id(&request).as_deref(), Some("cf-1234"));
    }

    #[test]
    fn test_oversized_upstream_id_ignored() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "x".repeat(500))
            .body(Body::empty())
            .unwrap();
        assert!(upstream_id(&request).is_none());
    }
}
