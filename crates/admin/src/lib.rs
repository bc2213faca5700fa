//! Dukkan Admin library.
//!
//! The Theme Builder: per-store settings, section order and a live preview
//! rendered by the storefront's own section renderers. Saved documents land
//! in the theme directory the storefront reads.
//!
//! # Security
//!
//! The admin writes every store's theme. It is protected by a single
//! operator access token and should not be exposed publicly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
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

/// Directory holding the builder's own CSS and script.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the admin router with its full middleware stack.
///
/// The storefront's stylesheet is mounted at `/theme-static` so the live
/// preview is styled exactly like the store.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .nest_service(
            "/theme-static",
            ServeDir::new(dukkan_storefront::STATIC_DIR),
        )
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Saving creates the theme directory, so it only has to be writable once
/// it exists.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match tokio::fs::metadata(state.themes().dir()).await {
        Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => StatusCode::OK,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}
