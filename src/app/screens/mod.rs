//! Screen modules for mailsim.
//!
//! This module provides the console I/O context and the mail screens.

mod common;
mod mail;

pub use common::{ScreenContext, MAX_INPUT_LENGTH};
pub use mail::MailScreen;

/// Result of a screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenResult {
    /// Stay in the current menu.
    Continue,
    /// User wants to logout.
    Logout,
    /// Input ended; leave the program.
    Quit,
}
