//! Login for mailsim.

use tracing::{debug, info};

use crate::auth::verify_password;
use crate::registry::{UserId, UserRegistry};
use crate::{MailsimError, Result};

/// Authentication session representing a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// User ID associated with this session.
    pub user_id: UserId,
    /// Username as typed at login; used as the sender of outgoing mail.
    pub username: String,
}

/// Authenticate a user by username and password.
///
/// The first registered user with a matching username is checked.
///
/// # Errors
///
/// - `UserNotFound` if no user has that username
/// - `AuthenticationFailed` if the password hash does not match
pub fn login(registry: &UserRegistry, username: &str, password: &str) -> Result<AuthSession> {
    let Some(user_id) = registry.find_id_by_username(username) else {
        debug!(username = %username, "Login failed: unknown user");
        return Err(MailsimError::UserNotFound(username.to_string()));
    };

    let user = registry
        .get(user_id)
        .ok_or_else(|| MailsimError::UserNotFound(username.to_string()))?;

    if let Err(e) = verify_password(password, user.password_hash()) {
        debug!(username = %username, "Login failed: wrong password");
        return Err(e.into());
    }

    info!(username = %username, user_id = %user_id, "User logged in");

    Ok(AuthSession {
        user_id,
        username: username.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use crate::registry::NewUser;

    fn setup_registry() -> UserRegistry {
        let mut registry = UserRegistry::new();
        registry.register(NewUser::new("alice", hash_password("secret")));
        registry.register(NewUser::new("bob", hash_password("pw")));
        registry
    }

    #[test]
    fn test_login_success() {
        let registry = setup_registry();
        let session = login(&registry, "alice", "secret").unwrap();

        assert_eq!(session.username, "alice");
        assert_eq!(session.user_id.index(), 0);
    }

    #[test]
    fn test_login_unknown_user() {
        let registry = setup_registry();
        let result = login(&registry, "carol", "secret");
        assert!(matches!(result, Err(MailsimError::UserNotFound(_))));
    }

    #[test]
    fn test_login_wrong_password() {
        let registry = setup_registry();
        let result = login(&registry, "bob", "secret");
        assert!(matches!(result, Err(MailsimError::AuthenticationFailed)));
    }

    #[test]
    fn test_login_duplicate_checks_first_only() {
        let mut registry = setup_registry();
        registry.register(NewUser::new("alice", hash_password("other")));

        assert!(login(&registry, "alice", "secret").is_ok());
        assert!(matches!(
            login(&registry, "alice", "other"),
            Err(MailsimError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_login_empty_password_account() {
        let mut registry = UserRegistry::new();
        registry.register(NewUser::new("guest", hash_password("")));
        assert!(login(&registry, "guest", "").is_ok());
    }
}
