//! Dukkan Storefront library.
//!
//! The storefront is built as a library so the binary, the admin's live
//! preview and the integration tests all share one router and one set of
//! section renderers.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod sections;
pub mod services;
pub mod state;
pub mod views;

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    routing::get,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Directory holding `css/` and `js/` assets.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the storefront router with its full middleware stack.
///
/// Sentry layers are added by the binary, outside this stack.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::csp_nonce_middleware))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// The theme directory may be missing (every store then uses its theme
/// defaults) but must be readable when present.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match tokio::fs::metadata(state.themes().dir()).await {
        Ok(meta) if meta.is_dir() => StatusCode::OK,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}
