//! User registration for mailsim.

use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::hash_password;
use crate::registry::{NewUser, UserId, UserRegistry};
use crate::{MailsimError, Result};

/// How sign-up treats a username that is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationPolicy {
    /// Duplicates are accepted; lookups return the earliest registration.
    #[default]
    Permissive,
    /// Duplicates are rejected with `UsernameExists`.
    Unique,
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired username.
    pub username: String,
    /// Plaintext password. Only its hash is stored.
    pub password: String,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Register a new user.
///
/// Hashes the password and appends the user to the registry with an
/// empty inbox.
///
/// # Errors
///
/// Returns `UsernameExists` only under [`RegistrationPolicy::Unique`]
/// when the username is already taken. The registry is unchanged then.
///
/// # Examples
///
/// ```
/// use mailsim::auth::{register, RegistrationPolicy, RegistrationRequest};
/// use mailsim::registry::UserRegistry;
///
/// let mut registry = UserRegistry::new();
/// let request = RegistrationRequest::new("alice", "pw1");
/// let id = register(&mut registry, request, RegistrationPolicy::Permissive).unwrap();
/// assert_eq!(registry.get(id).unwrap().username(), "alice");
/// ```
pub fn register(
    registry: &mut UserRegistry,
    request: RegistrationRequest,
    policy: RegistrationPolicy,
) -> Result<UserId> {
    if policy == RegistrationPolicy::Unique && registry.username_exists(&request.username) {
        warn!(username = %request.username, "Registration rejected: username taken");
        return Err(MailsimError::UsernameExists(request.username));
    }

    let password_hash = hash_password(&request.password);
    let user_id = registry.register(NewUser::new(request.username, password_hash));

    if let Some(user) = registry.get(user_id) {
        info!(username = %user.username(), user_id = %user_id, "New user registered");
    }

    Ok(user_id)
}
