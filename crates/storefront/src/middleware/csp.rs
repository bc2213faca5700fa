//! CSP nonce middleware for inline `<style>` and `<script>` tags.
//!
//! Theme pages carry a small inline style block with the store's CSS
//! variables, plus whatever custom CSS and JS the merchant saved in the
//! Theme Builder. Each of those tags carries the per-request nonce, and the
//! CSP header allows only that nonce.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;

/// A per-request CSP nonce (128-bit, base64-encoded).
#[derive(Clone, Debug)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// Generate a new random nonce.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        Self(STANDARD.encode(bytes))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// CSP source expression, e.g. `'nonce-abc=='`.
    #[must_use]
    pub fn source(&self) -> String {
        format!("'nonce-{}'", self.0)
    }
}

/// Middleware that generates a CSP nonce and stores it in request extensions.
///
/// Must run before `security_headers_middleware` so the header can
/// reference the same nonce the templates render.
pub async fn csp_nonce_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(CspNonce::generate());
    next.run(request).await
}

impl<S> FromRequestParts<S> for CspNonce
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_else(|| {
            tracing::warn!(
                "CSP nonce not found in request extensions - middleware may be misconfigured"
            );
            Self(String::new())
        }))
    }
}
