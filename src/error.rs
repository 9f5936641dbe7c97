//! Error types for mailsim.

use thiserror::Error;

use crate::auth::PasswordError;

/// Common error type for mailsim.
#[derive(Error, Debug)]
pub enum MailsimError {
    /// No registered user has the given username.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// The password did not match the stored hash.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Menu input was not one of the offered choices.
    #[error("invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    /// Username is already registered (only under the unique policy).
    #[error("username already exists: {0}")]
    UsernameExists(String),

    /// A console line was not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidEncoding,

    /// Console I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<PasswordError> for MailsimError {
    fn from(_: PasswordError) -> Self {
        MailsimError::AuthenticationFailed
    }
}

impl MailsimError {
    /// Check if the session can carry on after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MailsimError::Io(_) | MailsimError::Config(_))
    }
}

/// Result type alias for mailsim operations.
pub type Result<T> = std::result::Result<T, MailsimError>;
