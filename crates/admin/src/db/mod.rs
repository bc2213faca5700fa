//! Theme document storage for admin.
//!
//! # Layout: `${THEME_DATA_DIR}/{store_id}.json`
//!
//! One pretty-printed JSON [`ThemeDocument`](dukkan_core::builder::ThemeDocument)
//! per store. The storefront reads the same directory, so the admin never
//! leaves a partially written file behind: every save goes to a temporary
//! file in the same directory and is renamed into place.

pub mod themes;

use thiserror::Error;

use dukkan_core::builder::DocumentError;

pub use themes::ThemeStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Filesystem operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document failed to parse or validate.
    #[error("data corruption: {0}")]
    DataCorruption(#[from] DocumentError),
}
