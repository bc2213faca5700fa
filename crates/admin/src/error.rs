//! Unified error handling for admin.
//!
//! Builder changes that fail validation map to `422 Unprocessable Entity`
//! with a message the builder script shows next to the control; the draft
//! in the session is left unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use dukkan_core::builder::{DocumentError, LayoutError, SettingsError};

use crate::db::RepositoryError;

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing theme documents failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Rendering a page or fragment failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// A settings field was rejected.
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// A layout change was rejected.
    #[error("{0}")]
    Layout(#[from] LayoutError),

    /// An imported document failed to parse or validate.
    #[error("{0}")]
    Import(#[from] DocumentError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Repository(_) | Self::Session(_) | Self::Template(_) | Self::Internal(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Admin request error"
            );
        }

        let status = match &self {
            Self::Repository(_) | Self::Session(_) | Self::Template(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Settings(_) | Self::Layout(_) | Self::Import(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = if self.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
