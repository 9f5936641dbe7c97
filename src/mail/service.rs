//! Mail service for mailsim.
//!
//! Validates that both parties exist and delivers the email to the
//! receiver's inbox.

use tracing::{info, warn};

use crate::registry::{UserId, UserRegistry};
use crate::{MailsimError, Result};

use super::inbox::Inbox;
use super::types::Email;

/// Request to send an email.
#[derive(Debug, Clone)]
pub struct SendMailRequest {
    /// Sender username.
    pub sender_username: String,
    /// Receiver username.
    pub receiver_username: String,
    /// Email subject.
    pub subject: String,
    /// Email body.
    pub message: String,
}

impl SendMailRequest {
    /// Create a new send mail request.
    pub fn new(
        sender_username: impl Into<String>,
        receiver_username: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            sender_username: sender_username.into(),
            receiver_username: receiver_username.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Service for mail operations.
pub struct MailService<'a> {
    registry: &'a mut UserRegistry,
}

impl<'a> MailService<'a> {
    /// Create a new MailService over the given registry.
    pub fn new(registry: &'a mut UserRegistry) -> Self {
        Self { registry }
    }

    /// Send an email.
    ///
    /// Subject, sender and message are truncated to their maximum
    /// lengths. Only the receiver's inbox is modified.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the sender or the receiver is not
    /// registered. Nothing is delivered in that case.
    pub fn send_mail(&mut self, request: &SendMailRequest) -> Result<()> {
        if !self.registry.username_exists(&request.sender_username) {
            warn!(sender = %request.sender_username, "Mail rejected: unknown sender");
            return Err(MailsimError::UserNotFound(request.sender_username.clone()));
        }

        let Some(receiver_id) = self
            .registry
            .find_id_by_username(&request.receiver_username)
        else {
            info!(receiver = %request.receiver_username, "Mail rejected: unknown receiver");
            return Err(MailsimError::UserNotFound(request.receiver_username.clone()));
        };

        let email = Email::new(&request.subject, &request.sender_username, &request.message);
        let receiver = self
            .registry
            .get_mut(receiver_id)
            .ok_or_else(|| MailsimError::UserNotFound(request.receiver_username.clone()))?;
        receiver.inbox_mut().deliver(email);

        info!(
            sender = %request.sender_username,
            receiver = %request.receiver_username,
            inbox_len = receiver.inbox().len(),
            "Mail delivered"
        );

        Ok(())
    }

    /// Get a user's inbox.
    pub fn inbox(&self, user_id: UserId) -> Result<&Inbox> {
        self.registry
            .get(user_id)
            .map(|u| u.inbox())
            .ok_or_else(|| MailsimError::UserNotFound(user_id.to_string()))
    }
}
