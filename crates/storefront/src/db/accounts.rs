//! In-process customer accounts.
//!
//! Accounts live for the lifetime of the process. Emails are unique; the
//! password is only ever stored as an argon2 PHC string.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use dukkan_core::Email;

use super::RepositoryError;

/// A registered customer.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Customer account store shared by all storefront handlers.
#[derive(Clone, Default)]
pub struct AccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl AccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an account by email address.
    pub async fn get_by_email(&self, email: &Email) -> Option<Account> {
        self.accounts.read().await.get(email).cloned()
    }

    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already registered.
    pub async fn create(
        &self,
        name: &str,
        email: &Email,
        password_hash: String,
    ) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(RepositoryError::Conflict(format!(
                "account already exists for {}",
                email.masked()
            )));
        }

        let account = Account {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.clone(),
            password_hash,
            created_at: Utc::now(),
        };
        accounts.insert(email.clone(), account.clone());
        Ok(account)
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_lookup() {
        let store = AccountStore::new();
        let email = Email::parse("noura@example.com").unwrap();
        let created = store.create("نورة", &email, "hash".to_string()).await.unwrap();
        let found = store.get_by_email(&email).await.unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = AccountStore::new();
        let email = Email::parse("noura@example.com").unwrap();
        store.create("نورة", &email, "hash".to_string()).await.unwrap();
        let again = store.create("Noura", &email, "other".to_string()).await;
        assert!(matches!(again, Err(RepositoryError::Conflict(_))));
        assert_eq!(store.len().await, 1);
    }
}
