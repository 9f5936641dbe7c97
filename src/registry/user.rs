//! User model for mailsim.

use std::fmt;

use crate::mail::Inbox;

/// Stable handle to a registered user.
///
/// The registry is append-only, so the insertion index never changes for
/// the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub(crate) usize);

impl UserId {
    /// Position of the user in registration order, starting at 0.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user together with the inbox it owns.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    password_hash: u32,
    inbox: Inbox,
}

impl User {
    pub(crate) fn new(new_user: NewUser) -> Self {
        Self {
            username: new_user.username,
            password_hash: new_user.password_hash,
            inbox: Inbox::new(),
        }
    }

    /// Login username. Never changes after registration.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stored password hash.
    pub fn password_hash(&self) -> u32 {
        self.password_hash
    }

    /// Received mail, newest first.
    pub fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    pub(crate) fn inbox_mut(&mut self) -> &mut Inbox {
        &mut self.inbox
    }
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login username.
    pub username: String,
    /// Already-hashed password.
    pub password_hash: u32,
}

impl NewUser {
    /// Create a new user record from a username and a password hash.
    pub fn new(username: impl Into<String>, password_hash: u32) -> Self {
        Self {
            username: username.into(),
            password_hash,
        }
    }
}
