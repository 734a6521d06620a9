//! Mock account session.
//!
//! The original store never verifies anything beyond the shape of the
//! email address: any well-formed login succeeds and registration is the
//! same call with a fresh id. That mock behavior is preserved here behind
//! a session type so a real identity provider can replace it wholesale.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use paper_lantern_core::{Email, EmailError, UserId};

/// Errors from account operations.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The supplied email is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The display name is blank.
    #[error("name cannot be empty")]
    EmptyName,
}

/// A signed-in shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}

/// The session's authentication state.
#[derive(Debug, Clone, Default)]
pub struct AccountSession {
    user: Option<User>,
    token: Option<Uuid>,
    next_user_id: i32,
}

impl AccountSession {
    /// Create a signed-out session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            user: None,
            token: None,
            next_user_id: 0,
        }
    }

    /// Sign in. Mock semantics: any well-formed name and email succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the name is blank or the email malformed.
    pub fn login(&mut self, name: &str, email: &str) -> Result<&User, AuthError> {
        if name.trim().is_empty() {
            return Err(AuthError::EmptyName);
        }
        let email = Email::parse(email)?;

        self.next_user_id += 1;
        let user = User {
            id: UserId::new(self.next_user_id),
            name: name.trim().to_owned(),
            email,
        };
        let token = Uuid::new_v4();
        tracing::info!(user_id = %user.id, session = %token, "signed in");

        self.token = Some(token);
        Ok(self.user.insert(user))
    }

    /// Register a new account. Mock semantics: identical to login.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the name is blank or the email malformed.
    pub fn register(&mut self, name: &str, email: &str) -> Result<&User, AuthError> {
        self.login(name, email)
    }

    /// Sign out, dropping the user and session token.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        self.token = None;
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The opaque session token, present while signed in.
    #[must_use]
    pub fn token(&self) -> Option<Uuid> {
        self.token
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_valid_email() {
        let mut session = AccountSession::new();
        let user = session.login("Jordan Reader", "jordan@example.com").unwrap();
        assert_eq!(user.name, "Jordan Reader");
        assert!(session.is_authenticated());
        assert!(session.token().is_some());
    }

    #[test]
    fn test_login_rejects_bad_input() {
        let mut session = AccountSession::new();
        assert!(matches!(
            session.login("", "jordan@example.com"),
            Err(AuthError::EmptyName)
        ));
        assert!(matches!(
            session.login("Jordan", "not-an-email"),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut session = AccountSession::new();
        session.login("Jordan", "jordan@example.com").unwrap();
        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_register_assigns_fresh_ids() {
        let mut session = AccountSession::new();
        let first = session.register("A", "a@example.com").unwrap().id;
        session.logout();
        let second = session.register("B", "b@example.com").unwrap().id;
        assert_ne!(first, second);
    }
}
