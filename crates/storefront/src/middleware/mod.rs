//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded on the span)
//! 4. CSP nonce (per-request nonce for inline style and script)
//! 5. Security headers (CSP built from the nonce)
//! 6. Session layer (tower-sessions with in-memory store)
//! 7. Rate limiting on form posts (governor)

pub mod auth;
pub mod csp;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{OptionalAuth, clear_current_customer, set_current_customer};
pub use csp::{CspNonce, csp_nonce_middleware};
pub use rate_limit::{auth_rate_limiter, form_rate_limiter};
pub use request_id::{RequestId, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
