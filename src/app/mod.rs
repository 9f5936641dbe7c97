//! Application module.
//!
//! Provides the top-level application state and the console session loop.

mod menu;
pub mod screens;
mod session_handler;

pub use menu::{MainMenuAction, UserMenuAction};
pub use screens::{ScreenContext, ScreenResult};
pub use session_handler::{SessionHandler, SessionState};

use std::io::{BufRead, Write};

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::registry::UserRegistry;

/// Main application owning the configuration and all user data.
///
/// Everything lives for the duration of one run. Dropping the
/// application releases the registry and every inbox.
pub struct Application {
    config: Config,
    registry: UserRegistry,
}

impl Application {
    /// Create a new application instance with an empty registry.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: UserRegistry::new(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the user registry.
    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    /// Create a session handler borrowing the registry.
    pub fn create_session_handler(&mut self) -> SessionHandler<'_> {
        SessionHandler::new(&mut self.registry, self.config.registry.usernames)
    }

    /// Run a console session over the given streams until exit.
    ///
    /// Returns the output stream so callers can inspect what was written.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<W> {
        let mut ctx = ScreenContext::new(input, output);
        self.create_session_handler().run(&mut ctx)?;

        info!(
            users = self.registry.len(),
            emails = self.registry.total_emails(),
            "Session ended"
        );

        Ok(ctx.into_output())
    }
}
