//! Mail types for mailsim.

/// Maximum length for an email subject, in characters.
pub const MAX_SUBJECT_LENGTH: usize = 49;

/// Maximum length for the sender name stored on an email, in characters.
pub const MAX_SENDER_LENGTH: usize = 49;

/// Maximum length for an email message, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 199;

/// Truncate `s` to at most `max` characters.
///
/// Cuts on `char` boundaries, so the result is always valid UTF-8.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// A received email.
///
/// Emails are owned by the recipient's inbox. The sender is a copy of
/// the sender's username at send time, not a link back to the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    subject: String,
    sender: String,
    message: String,
}

impl Email {
    /// Create an email, truncating every field to its maximum length.
    pub fn new(subject: &str, sender: &str, message: &str) -> Self {
        Self {
            subject: truncate_chars(subject, MAX_SUBJECT_LENGTH).to_string(),
            sender: truncate_chars(sender, MAX_SENDER_LENGTH).to_string(),
            message: truncate_chars(message, MAX_MESSAGE_LENGTH).to_string(),
        }
    }

    /// Email subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Sender username.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Email body.
    pub fn message(&self) -> &str {
        &self.message
    }
}
