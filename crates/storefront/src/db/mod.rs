//! Storefront data access.
//!
//! The storefront owns no database. It reads the theme documents the admin
//! saves under `THEME_DATA_DIR` and keeps customer accounts in process.
//!
//! - [`themes`] - Cached, read-only access to saved theme documents
//! - [`accounts`] - In-memory customer accounts with argon2 hashes

pub mod accounts;
pub mod themes;

use thiserror::Error;

use dukkan_core::builder::DocumentError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading the backing file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document failed to parse or validate.
    #[error("data corruption: {0}")]
    DataCorruption(#[from] DocumentError),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}
