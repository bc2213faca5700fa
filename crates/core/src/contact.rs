//! Contact form validation.

use thiserror::Error;

use crate::account::MAX_NAME_LEN;
use crate::types::{Email, EmailError};

/// Maximum message length in characters.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Why a contact form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("name is required")]
    NameRequired,
    #[error("name is too long")]
    NameTooLong,
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("message is required")]
    MessageRequired,
    #[error("message must be at most {max} characters")]
    MessageTooLong { max: usize },
}

impl ContactFormError {
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::NameRequired => "error.name_required",
            Self::NameTooLong => "error.name_too_long",
            Self::InvalidEmail(_) => "error.invalid_email",
            Self::MessageRequired => "error.message_required",
            Self::MessageTooLong { .. } => "error.message_too_long",
        }
    }
}

/// Raw contact form input.
#[derive(Debug, Clone, Default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Validate name, email and message; the subject is optional.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(self) -> Result<ContactMessage, ContactFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactFormError::NameRequired);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ContactFormError::NameTooLong);
        }
        let email = Email::parse(&self.email)?;
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactFormError::MessageRequired);
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ContactFormError::MessageTooLong {
                max: MAX_MESSAGE_LEN,
            });
        }
        let subject = self.subject.trim();

        Ok(ContactMessage {
            name: name.to_owned(),
            email,
            subject: (!subject.is_empty()).then(|| subject.to_owned()),
            message: message.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "سارة".to_string(),
            email: "sara@example.com".to_string(),
            subject: "  ".to_string(),
            message: "متى يصل الطلب؟".to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        let message = request().validate().unwrap();
        assert_eq!(message.name, "سارة");
        assert_eq!(message.subject, None);
    }

    #[test]
    fn test_checks_run_in_form_order() {
        let mut r = request();
        r.name = " ".to_string();
        r.email = "bad".to_string();
        assert_eq!(r.validate().unwrap_err(), ContactFormError::NameRequired);

        let mut r = request();
        r.email = "bad".to_string();
        assert!(matches!(
            r.validate().unwrap_err(),
            ContactFormError::InvalidEmail(_)
        ));

        let mut r = request();
        r.message = "\n".to_string();
        assert_eq!(r.validate().unwrap_err(), ContactFormError::MessageRequired);
    }

    #[test]
    fn test_message_length_counts_characters() {
        let mut r = request();
        r.message = "ع".repeat(MAX_MESSAGE_LEN);
        assert!(r.clone().validate().is_ok());
        r.message.push('ع');
        assert_eq!(
            r.validate().unwrap_err(),
            ContactFormError::MessageTooLong {
                max: MAX_MESSAGE_LEN
            }
        );
    }
}
