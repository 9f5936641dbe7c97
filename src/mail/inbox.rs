//! Per-user inbox storage.

use std::collections::VecDeque;

use super::types::Email;

/// Received emails, newest first.
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    emails: VecDeque<Email>,
}

impl Inbox {
    /// Create an empty inbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an email. It becomes the first entry of the inbox.
    pub fn deliver(&mut self, email: Email) {
        self.emails.push_front(email);
    }

    /// Iterate newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Email> {
        self.emails.iter()
    }

    /// Most recently delivered email.
    pub fn latest(&self) -> Option<&Email> {
        self.emails.front()
    }

    /// Number of emails in the inbox.
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Check if the inbox holds no email.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

impl<'a> IntoIterator for &'a Inbox {
    type Item = &'a Email;
    type IntoIter = std::collections::vec_deque::Iter<'a, Email>;

    fn into_iter(self) -> Self::IntoIter {
        self.emails.iter()
    }
}
