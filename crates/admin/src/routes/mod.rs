//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                              - Health check
//!
//! # Auth (single operator, access token)
//! GET  /login                               - Login page
//! POST /login                               - Check the token (rate limited)
//! POST /logout                              - Flush the session
//!
//! # Dashboard
//! GET  /                                    - Stores and their saved themes
//!
//! # Theme Builder (nested under /stores/{store_id}/theme-builder)
//! GET  /                                    - Builder page
//! GET  /preview                             - Preview fragment
//! GET  /export                              - Draft as a JSON download
//! POST /settings                            - Set one settings field
//! POST /layout/reorder                      - Move one section
//! POST /layout/order                        - Replace the section order
//! POST /device                              - Preview device
//! POST /scale                               - Preview zoom
//! POST /auto-preview                        - Auto preview on/off
//! POST /theme                               - Switch base theme
//! POST /reset                               - Restore theme defaults
//! POST /save                                - Write the next version
//! POST /import                              - Load a JSON document into the draft
//! ```

pub mod auth;
pub mod builder;
pub mod dashboard;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// Create the Theme Builder routes for one store.
pub fn builder_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(builder::show))
        .route("/preview", get(builder::preview))
        .route("/export", get(builder::export))
        .route("/settings", post(builder::update_setting))
        .route("/layout/reorder", post(builder::reorder))
        .route("/layout/order", post(builder::apply_order))
        .route("/device", post(builder::set_device))
        .route("/scale", post(builder::set_scale))
        .route("/auto-preview", post(builder::set_auto_preview))
        .route("/theme", post(builder::switch_theme))
        .route("/reset", post(builder::reset))
        .route("/save", post(builder::save))
        .route("/import", post(builder::import))
}

/// Create all routes for admin.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route(
            "/login",
            post(auth::login)
                .layer(auth_rate_limiter())
                .get(auth::login_page),
        )
        .route("/logout", post(auth::logout))
        .nest("/stores/{store_id}/theme-builder", builder_routes())
}
