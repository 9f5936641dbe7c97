//! Mail module for mailsim.
//!
//! This module provides in-memory mail functionality including:
//! - Email records with bounded field lengths
//! - Newest-first per-user inboxes
//! - Sending between registered users

mod inbox;
mod service;
mod types;

pub use inbox::Inbox;
pub use service::{MailService, SendMailRequest};
pub use types::{
    truncate_chars, Email, MAX_MESSAGE_LENGTH, MAX_SENDER_LENGTH, MAX_SUBJECT_LENGTH,
};
