//! Session-related types for admin authentication.
//!
//! Builder drafts are kept per store, so the operator can have several
//! stores open in the builder at once.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session-stored operator identity.
///
/// The admin has a single operator, authenticated by access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// When the token was accepted.
    pub logged_in_at: DateTime<Utc>,
}

/// Session keys for admin state.
pub mod keys {
    use dukkan_core::StoreId;

    /// Key for storing the current logged-in operator.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for a store's unsaved builder draft.
    #[must_use]
    pub fn draft(store: &StoreId) -> String {
        format!("draft:{store}")
    }
}
