//! Authentication service.
//!
//! Customer signup and password login against the in-process
//! [`AccountStore`]. Passwords are hashed with Argon2id.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::instrument;

use dukkan_core::Email;
use dukkan_core::account::NewAccount;

use crate::db::RepositoryError;
use crate::db::accounts::{Account, AccountStore};

/// Authentication service.
pub struct AuthService<'a> {
    accounts: &'a AccountStore,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub const fn new(accounts: &'a AccountStore) -> Self {
        Self { accounts }
    }

    /// Register a validated signup.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserAlreadyExists` if the email is already
    /// registered, or `AuthError::PasswordHash` if hashing fails.
    #[instrument(skip(self, account), fields(email = %account.email.masked()))]
    pub async fn register(&self, account: &NewAccount) -> Result<Account, AuthError> {
        if self.accounts.get_by_email(&account.email).await.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = hash_password(&account.password)?;

        self.accounts
            .create(&account.name, &account.email, password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })
    }

    /// Check an email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email or a
    /// wrong password.
    #[instrument(skip(self, password), fields(email = %email.masked()))]
    pub async fn login(&self, email: &Email, password: &str) -> Result<Account, AuthError> {
        let account = self
            .accounts
            .get_by_email(email)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &account.password_hash)?;
        Ok(account)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dukkan_core::account::SignupRequest;

    use super::*;

    fn signup(email: &str) -> NewAccount {
        SignupRequest {
            name: "ريم".to_string(),
            email: email.to_string(),
            password: "correct horse".to_string(),
            confirm_password: "correct horse".to_string(),
            accept_terms: true,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("s3cret-pass").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("s3cret-pass", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let store = AccountStore::new();
        let auth = AuthService::new(&store);
        let account = auth.register(&signup("reem@example.com")).await.unwrap();
        assert_ne!(account.password_hash, "correct horse");

        let email = Email::parse("reem@example.com").unwrap();
        let logged_in = auth.login(&email, "correct horse").await.unwrap();
        assert_eq!(logged_in.id, account.id);
        assert!(matches!(
            auth.login(&email, "incorrect").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let store = AccountStore::new();
        let auth = AuthService::new(&store);
        auth.register(&signup("reem@example.com")).await.unwrap();
        assert!(matches!(
            auth.register(&signup("reem@example.com")).await,
            Err(AuthError::UserAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_unknown_email_is_invalid_credentials() {
        let store = AccountStore::new();
        let email = Email::parse("nobody@example.com").unwrap();
        assert!(matches!(
            AuthService::new(&store).login(&email, "whatever1").await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
