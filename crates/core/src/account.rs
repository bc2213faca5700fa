//! Customer login and signup form validation.
//!
//! Validation happens before anything is stored: a rejected form leaves the
//! account store and the session untouched.

use thiserror::Error;

use crate::types::{Email, EmailError};

/// Minimum password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum password length, to bound hashing cost.
pub const MAX_PASSWORD_LEN: usize = 128;

/// Maximum display name length.
pub const MAX_NAME_LEN: usize = 100;

/// Why a login or signup form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountFormError {
    #[error("name is required")]
    NameRequired,
    #[error("name is too long")]
    NameTooLong,
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("password is required")]
    PasswordRequired,
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("password must be at most {max} characters")]
    PasswordTooLong { max: usize },
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("terms must be accepted")]
    TermsNotAccepted,
}

impl AccountFormError {
    /// Translation key for the message shown next to the form.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::NameRequired => "error.name_required",
            Self::NameTooLong => "error.name_too_long",
            Self::InvalidEmail(_) => "error.invalid_email",
            Self::PasswordRequired => "error.password_required",
            Self::PasswordTooShort { .. } => "error.password_too_short",
            Self::PasswordTooLong { .. } => "error.password_too_long",
            Self::PasswordMismatch => "error.password_mismatch",
            Self::TermsNotAccepted => "error.terms_required",
        }
    }
}

/// Check a new password and its confirmation.
///
/// # Errors
///
/// Returns an error if the password is empty, outside the length bounds, or
/// differs from the confirmation.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), AccountFormError> {
    if password.is_empty() {
        return Err(AccountFormError::PasswordRequired);
    }
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(AccountFormError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if len > MAX_PASSWORD_LEN {
        return Err(AccountFormError::PasswordTooLong {
            max: MAX_PASSWORD_LEN,
        });
    }
    if password != confirmation {
        return Err(AccountFormError::PasswordMismatch);
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<String, AccountFormError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AccountFormError::NameRequired);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AccountFormError::NameTooLong);
    }
    Ok(name.to_owned())
}

/// Raw signup form input.
#[derive(Clone, Default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("accept_terms", &self.accept_terms)
            .finish_non_exhaustive()
    }
}

impl SignupRequest {
    /// Validate the form.
    ///
    /// Checks run in form order: name, email, password, confirmation, terms.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(self) -> Result<NewAccount, AccountFormError> {
        let name = validate_name(&self.name)?;
        let email = Email::parse(&self.email)?;
        validate_new_password(&self.password, &self.confirm_password)?;
        if !self.accept_terms {
            return Err(AccountFormError::TermsNotAccepted);
        }
        Ok(NewAccount {
            name,
            email,
            password: self.password,
        })
    }
}

/// A validated account ready to be hashed and stored.
#[derive(Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: Email,
    /// Plain text; hash before storing.
    pub password: String,
}

impl NewAccount {
    /// Build from checkout's optional account fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the name, email or password checks fail.
    pub fn from_checkout(
        name: &str,
        email: &Email,
        password: &str,
        confirmation: &str,
    ) -> Result<Self, AccountFormError> {
        let name = validate_name(name)?;
        validate_new_password(password, confirmation)?;
        Ok(Self {
            name,
            email: email.clone(),
            password: password.to_owned(),
        })
    }
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Raw login form input.
#[derive(Clone, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl LoginRequest {
    /// Validate shape only; credentials are checked against the store.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed email or an empty password.
    pub fn validate(self) -> Result<(Email, String), AccountFormError> {
        let email = Email::parse(&self.email)?;
        if self.password.is_empty() {
            return Err(AccountFormError::PasswordRequired);
        }
        Ok((email, self.password))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn signup() -> SignupRequest {
        SignupRequest {
            name: "سارة".to_owned(),
            email: "Sara@Example.com".to_owned(),
            password: "correct horse".to_owned(),
            confirm_password: "correct horse".to_owned(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_valid_signup() {
        let account = signup().validate().unwrap();
        assert_eq!(account.name, "سارة");
        assert_eq!(account.email.as_str(), "sara@example.com");
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let err = SignupRequest {
            confirm_password: "correct horsf".to_owned(),
            ..signup()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, AccountFormError::PasswordMismatch);
        assert_eq!(err.message_key(), "error.password_mismatch");
    }

    #[test]
    fn test_short_password_rejected() {
        let err = SignupRequest {
            password: "short".to_owned(),
            confirm_password: "short".to_owned(),
            ..signup()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, AccountFormError::PasswordTooShort { min: 8 });
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Eight Arabic letters are sixteen bytes but still eight characters.
        assert!(validate_new_password("كلمةسرية", "كلمةسرية").is_ok());
    }

    #[test]
    fn test_terms_required() {
        let err = SignupRequest {
            accept_terms: false,
            ..signup()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, AccountFormError::TermsNotAccepted);
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = SignupRequest {
            name: "   ".to_owned(),
            ..signup()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, AccountFormError::NameRequired);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let err = SignupRequest {
            email: "not-an-email".to_owned(),
            ..signup()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AccountFormError::InvalidEmail(_)));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", signup());
        assert!(!debug.contains("correct horse"));
        let debug = format!("{:?}", signup().validate().unwrap());
        assert!(!debug.contains("correct horse"));
    }

    #[test]
    fn test_login_requires_password() {
        let err = LoginRequest {
            email: "a@b.co".to_owned(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, AccountFormError::PasswordRequired);
    }
}
