//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input string is longer than the RFC 5321 limit.
    #[error("email must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input does not contain an @ symbol.
    #[error("email must contain an @ symbol")]
    MissingAtSymbol,
    /// The local part (before @) or domain (after @) is empty.
    #[error("email must have text on both sides of the @ symbol")]
    MissingPart,
}

/// A structurally valid email address.
///
/// Validation is intentionally shallow: one @ separating a non-empty local
/// part from a non-empty domain, within the RFC 5321 length limit. Anything
/// stricter belongs to a verification flow, not a type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] if the input is empty, too long, missing
    /// the @ symbol, or missing the local part or domain.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        let at_pos = s.find('@').ok_or(EmailError::MissingAtSymbol)?;
        if at_pos == 0 || at_pos == s.len() - 1 {
            return Err(EmailError::MissingPart);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the domain part of the email (after the @).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_emails() {
        assert!(Email::parse("reader@example.com").is_ok());
        assert!(Email::parse("first.last+tag@shop.example.co.uk").is_ok());
        assert!(Email::parse("a@b").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("no-at-symbol"), Err(EmailError::MissingAtSymbol));
        assert_eq!(Email::parse("@shop.example"), Err(EmailError::MissingPart));
        assert_eq!(Email::parse("reader@"), Err(EmailError::MissingPart));
    }

    #[test]
    fn test_parse_rejects_too_long() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(Email::parse(&long), Err(EmailError::TooLong { .. })));
    }

    #[test]
    fn test_domain() {
        let email = Email::parse("reader@example.com").unwrap();
        assert_eq!(email.domain(), "example.com");
        assert_eq!(email.as_str(), "reader@example.com");
    }

    #[test]
    fn test_from_str_and_display() {
        let email: Email = "reader@example.com".parse().unwrap();
        assert_eq!(format!("{email}"), "reader@example.com");
    }
}
