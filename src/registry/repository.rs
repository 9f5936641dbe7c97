//! In-memory user registry.

use tracing::debug;

use super::user::{NewUser, User, UserId};

/// Append-only, insertion-ordered collection of users.
///
/// Lookups are linear scans with exact, case-sensitive matching. The
/// registry does not enforce unique usernames; when duplicates exist the
/// earliest registration wins.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new user with an empty inbox.
    pub fn register(&mut self, new_user: NewUser) -> UserId {
        let id = UserId(self.users.len());
        self.users.push(User::new(new_user));
        debug!(user_id = %id, "User appended to registry");
        id
    }

    /// Find the first user with the given username.
    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username() == username)
    }

    /// Find the id of the first user with the given username.
    pub fn find_id_by_username(&self, username: &str) -> Option<UserId> {
        self.users
            .iter()
            .position(|u| u.username() == username)
            .map(UserId)
    }

    /// Check whether any user has the given username.
    pub fn username_exists(&self, username: &str) -> bool {
        self.find_id_by_username(username).is_some()
    }

    /// Get a user by id.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(id.0)
    }

    /// Get a mutable user by id.
    pub fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(id.0)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over users in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &User)> {
        self.users.iter().enumerate().map(|(i, u)| (UserId(i), u))
    }

    /// Total number of emails held across all inboxes.
    pub fn total_emails(&self) -> usize {
        self.users.iter().map(|u| u.inbox().len()).sum()
    }
}
