//! Session handler for console sessions.
//!
//! Drives the menu state machine: main menu, user menu and exit.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::menu::{MainMenuAction, UserMenuAction};
use super::screens::{MailScreen, ScreenContext, ScreenResult};
use crate::auth::{login, register, AuthSession, RegistrationPolicy, RegistrationRequest};
use crate::error::{MailsimError, Result};
use crate::registry::UserRegistry;

const CHOICE_PROMPT: &str = "Enter your choice: ";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a valid option.";
const INVALID_INPUT: &str = "Invalid input. Please enter valid UTF-8 text.";
const LOGIN_FAILED: &str = "User not found or password incorrect.";

/// Session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Logged out, showing the main menu. Initial state.
    MainMenu,
    /// Logged in, showing the user menu.
    UserMenu(AuthSession),
    /// Terminal state.
    Exit,
}

/// Session handler that manages one console session.
pub struct SessionHandler<'a> {
    registry: &'a mut UserRegistry,
    policy: RegistrationPolicy,
    state: SessionState,
}

impl<'a> SessionHandler<'a> {
    /// Create a new session handler over the given registry.
    pub fn new(registry: &'a mut UserRegistry, policy: RegistrationPolicy) -> Self {
        Self {
            registry,
            policy,
            state: SessionState::MainMenu,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the session until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, ctx: &mut ScreenContext<R, W>) -> Result<()> {
        while self.state != SessionState::Exit {
            self.step(ctx)?;
        }
        Ok(())
    }

    /// Show the current menu once and handle one choice.
    ///
    /// A recoverable error is reported on the console and the session stays
    /// in its current state; any other error ends the session.
    pub fn step<R: BufRead, W: Write>(&mut self, ctx: &mut ScreenContext<R, W>) -> Result<()> {
        let result = match self.state.clone() {
            SessionState::MainMenu => self.run_main_menu(ctx),
            SessionState::UserMenu(auth) => self.run_user_menu(ctx, auth),
            SessionState::Exit => Ok(SessionState::Exit),
        };

        let next = match result {
            Ok(next) => next,
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, state = ?self.state, "Input rejected");
                ctx.send_line(notice(&e))?;
                self.state.clone()
            }
            Err(e) => return Err(e),
        };

        if next != self.state {
            debug!(from = ?self.state, to = ?next, "Session state change");
        }
        self.state = next;
        Ok(())
    }

    fn show_menu<R: BufRead, W: Write>(
        ctx: &mut ScreenContext<R, W>,
        title: &str,
        items: impl IntoIterator<Item = (u8, &'static str)>,
    ) -> Result<Option<String>> {
        ctx.send_line("")?;
        ctx.send_line(title)?;
        for (number, label) in items {
            ctx.send_line(&format!("{number}. {label}"))?;
        }
        ctx.prompt(CHOICE_PROMPT)
    }

    fn run_main_menu<R: BufRead, W: Write>(
        &mut self,
        ctx: &mut ScreenContext<R, W>,
    ) -> Result<SessionState> {
        let items = MainMenuAction::ALL.iter().map(|a| (a.number(), a.label()));
        let Some(input) = Self::show_menu(ctx, MainMenuAction::TITLE, items)? else {
            info!("Input closed at main menu");
            return Ok(SessionState::Exit);
        };

        match MainMenuAction::parse(&input)? {
            MainMenuAction::Login => self.handle_login(ctx),
            MainMenuAction::SignUp => self.handle_sign_up(ctx),
            MainMenuAction::Exit => {
                ctx.send_line("Exiting program.")?;
                Ok(SessionState::Exit)
            }
        }
    }

    fn handle_login<R: BufRead, W: Write>(
        &mut self,
        ctx: &mut ScreenContext<R, W>,
    ) -> Result<SessionState> {
        let Some(username) = ctx.prompt("Enter your username: ")? else {
            return Ok(SessionState::Exit);
        };
        let Some(password) = ctx.prompt("Enter your password: ")? else {
            return Ok(SessionState::Exit);
        };

        match login(self.registry, &username, &password) {
            Ok(auth) => Ok(SessionState::UserMenu(auth)),
            Err(MailsimError::UserNotFound(_) | MailsimError::AuthenticationFailed) => {
                ctx.send_line(LOGIN_FAILED)?;
                Ok(SessionState::MainMenu)
            }
            Err(e) => Err(e),
        }
    }

    fn handle_sign_up<R: BufRead, W: Write>(
        &mut self,
        ctx: &mut ScreenContext<R, W>,
    ) -> Result<SessionState> {
        let Some(username) = ctx.prompt("Enter a new username: ")? else {
            return Ok(SessionState::Exit);
        };
        let Some(password) = ctx.prompt("Enter a new password: ")? else {
            return Ok(SessionState::Exit);
        };

        let request = RegistrationRequest::new(username.clone(), password);
        match register(self.registry, request, self.policy) {
            Ok(_) => ctx.send_line(&format!("User {username} registered successfully."))?,
            Err(MailsimError::UsernameExists(name)) => {
                ctx.send_line(&format!("Username {name} is already taken."))?
            }
            Err(e) => return Err(e),
        }

        Ok(SessionState::MainMenu)
    }

    fn run_user_menu<R: BufRead, W: Write>(
        &mut self,
        ctx: &mut ScreenContext<R, W>,
        auth: AuthSession,
    ) -> Result<SessionState> {
        let items = UserMenuAction::ALL.iter().map(|a| (a.number(), a.label()));
        let Some(input) = Self::show_menu(ctx, UserMenuAction::TITLE, items)? else {
            info!(username = %auth.username, "Input closed at user menu");
            return Ok(SessionState::Exit);
        };

        let result = match UserMenuAction::parse(&input)? {
            UserMenuAction::ViewMessages => MailScreen::show_inbox(ctx, self.registry, &auth)?,
            UserMenuAction::SendEmail => MailScreen::compose(ctx, self.registry, &auth)?,
            UserMenuAction::Logout => {
                ctx.send_line("Logging out...")?;
                info!(username = %auth.username, "User logged out");
                ScreenResult::Logout
            }
        };

        Ok(match result {
            ScreenResult::Continue => SessionState::UserMenu(auth),
            ScreenResult::Logout => SessionState::MainMenu,
            ScreenResult::Quit => SessionState::Exit,
        })
    }
}

/// Console notice for an error the session recovers from.
fn notice(error: &MailsimError) -> &'static str {
    match error {
        MailsimError::InvalidEncoding => INVALID_INPUT,
        _ => INVALID_CHOICE,
    }
}
