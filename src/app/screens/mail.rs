//! Mail screen handler.

use std::io::{BufRead, Write};

use tracing::debug;

use super::common::ScreenContext;
use super::ScreenResult;
use crate::auth::AuthSession;
use crate::error::{MailsimError, Result};
use crate::mail::{Inbox, MailService, SendMailRequest};
use crate::registry::UserRegistry;

/// Separator printed before every inbox entry.
const ENTRY_SEPARATOR: &str = "-----------------------------";

/// Mail screen handler.
pub struct MailScreen;

impl MailScreen {
    /// Print the logged-in user's inbox, newest first.
    pub fn show_inbox<R: BufRead, W: Write>(
        ctx: &mut ScreenContext<R, W>,
        registry: &UserRegistry,
        auth: &AuthSession,
    ) -> Result<ScreenResult> {
        let user = registry
            .get(auth.user_id)
            .ok_or_else(|| MailsimError::UserNotFound(auth.username.clone()))?;

        ctx.send_line(&format!("Inbox for user {}:", user.username()))?;
        Self::render_inbox(ctx, user.inbox())?;

        debug!(username = %user.username(), count = user.inbox().len(), "Inbox viewed");
        Ok(ScreenResult::Continue)
    }

    fn render_inbox<R: BufRead, W: Write>(
        ctx: &mut ScreenContext<R, W>,
        inbox: &Inbox,
    ) -> Result<()> {
        for email in inbox {
            ctx.send_line(ENTRY_SEPARATOR)?;
            ctx.send_line(&format!("Subject: {}", email.subject()))?;
            ctx.send_line(&format!("Sender: {}", email.sender()))?;
            ctx.send_line(&format!("Message: {}", email.message()))?;
        }
        Ok(())
    }

    /// Ask for receiver, subject and message, then send the email.
    ///
    /// An unknown receiver is reported on the console and the user stays
    /// in the menu. Returns [`ScreenResult::Quit`] if input ends midway.
    pub fn compose<R: BufRead, W: Write>(
        ctx: &mut ScreenContext<R, W>,
        registry: &mut UserRegistry,
        auth: &AuthSession,
    ) -> Result<ScreenResult> {
        let Some(receiver) = ctx.prompt("Enter receiver's username: ")? else {
            return Ok(ScreenResult::Quit);
        };
        let Some(subject) = ctx.prompt("Enter email subject: ")? else {
            return Ok(ScreenResult::Quit);
        };
        let Some(message) = ctx.prompt("Enter email message: ")? else {
            return Ok(ScreenResult::Quit);
        };

        let request = SendMailRequest::new(&auth.username, receiver, subject, message);
        let mut service = MailService::new(registry);

        match service.send_mail(&request) {
            Ok(()) => ctx.send_line(&format!(
                "Email sent successfully from {} to {}",
                request.sender_username, request.receiver_username
            ))?,
            Err(MailsimError::UserNotFound(_)) => {
                ctx.send_line("User not found. Email not sent.")?
            }
            Err(e) => return Err(e),
        }

        Ok(ScreenResult::Continue)
    }
}
