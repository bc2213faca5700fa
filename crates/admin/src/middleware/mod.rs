//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (shared with the storefront)
//! 4. Security headers (admin CSP)
//! 5. Session layer (tower-sessions, SameSite=Strict)
//! 6. Rate limiting on the login form (shared with the storefront)

pub mod auth;
pub mod security_headers;
pub mod session;

pub use auth::{RequireAdmin, clear_current_admin, is_fetch, set_current_admin};
pub use dukkan_storefront::middleware::{auth_rate_limiter, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
