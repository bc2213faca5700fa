//! Session-related types.
//!
//! Carts, wishlists and checkout progress are scoped per store, so a shopper
//! browsing two demo stores keeps two independent carts. The logged-in
//! customer is shared across stores.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dukkan_core::{Email, StoreId};

use crate::db::accounts::Account;

/// Session-stored customer identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentCustomer {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
}

impl From<&Account> for CurrentCustomer {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
        }
    }
}

/// Session keys.
pub mod keys {
    use super::StoreId;

    /// Key for storing the current logged-in customer.
    pub const CURRENT_CUSTOMER: &str = "current_customer";

    /// Key for the store's cart.
    #[must_use]
    pub fn cart(store: &StoreId) -> String {
        format!("cart:{store}")
    }

    /// Key for the store's wishlisted product ids.
    #[must_use]
    pub fn wishlist(store: &StoreId) -> String {
        format!("wishlist:{store}")
    }

    /// Key for the store's checkout wizard.
    #[must_use]
    pub fn checkout(store: &StoreId) -> String {
        format!("checkout:{store}")
    }

    /// Key for the most recent order confirmation.
    #[must_use]
    pub fn last_order(store: &StoreId) -> String {
        format!("last_order:{store}")
    }
}
