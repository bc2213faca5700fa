//! Store slug identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`StoreId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreIdError {
    #[error("store id cannot be empty")]
    Empty,
    #[error("store id must be at most {max} characters")]
    TooLong { max: usize },
    #[error("store id may only contain lowercase letters, digits and '-'")]
    InvalidCharacter,
}

/// URL-safe store identifier, e.g. `luxe-boutique`.
///
/// Store ids double as file names for saved theme documents, so only
/// lowercase ASCII letters, digits and `-` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StoreId(String);

impl StoreId {
    pub const MAX_LENGTH: usize = 64;

    /// Parse a store id.
    ///
    /// # Errors
    ///
    /// Returns an error if the slug is empty, too long, or contains anything
    /// other than `[a-z0-9-]`.
    pub fn parse(s: &str) -> Result<Self, StoreIdError> {
        if s.is_empty() {
            return Err(StoreIdError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(StoreIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(StoreIdError::InvalidCharacter);
        }
        Ok(Self(s.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for StoreId {
    type Error = StoreIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StoreId> for String {
    fn from(id: StoreId) -> Self {
        id.0
    }
}

impl std::str::FromStr for StoreId {
    type Err = StoreIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_slugs() {
        assert!(StoreId::parse("tech-hub").is_ok());
        assert!(StoreId::parse("store2").is_ok());
    }

    #[test]
    fn test_parse_rejects_path_traversal() {
        assert_eq!(StoreId::parse("../etc"), Err(StoreIdError::InvalidCharacter));
        assert_eq!(StoreId::parse("Tech"), Err(StoreIdError::InvalidCharacter));
        assert_eq!(StoreId::parse(""), Err(StoreIdError::Empty));
    }
}
