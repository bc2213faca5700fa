//! Authentication error types.

use thiserror::Error;

use dukkan_core::account::AccountFormError;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The submitted form failed validation.
    #[error("invalid form: {0}")]
    Form(#[from] AccountFormError),

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account already exists for the email.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Repository error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

impl AuthError {
    /// i18n key for the message shown on the form.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Form(e) => e.message_key(),
            Self::InvalidCredentials => "error.invalid_credentials",
            Self::UserAlreadyExists => "error.email_taken",
            Self::Repository(_) | Self::PasswordHash => "error.internal",
        }
    }

    /// Whether the error is about the submitted form rather than the server.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Form(_) | Self::InvalidCredentials | Self::UserAlreadyExists
        )
    }
}
