//! Test helpers for E2E tests.
//!
//! Provides a scripted console session that runs through `Application`
//! with in-memory input and captured output.

#![allow(dead_code)]

use std::io::Cursor;

use mailsim::config::Config;
use mailsim::{Application, RegistrationPolicy};

/// Main menu exactly as printed, including the trailing prompt.
pub const MAIN_MENU: &str = "\nMain Menu:\n1. Login\n2. Sign Up\n3. Exit\nEnter your choice: ";

/// User menu exactly as printed, including the trailing prompt.
pub const USER_MENU: &str =
    "\nUser Menu:\n1. View Messages\n2. Send Email\n3. Logout\nEnter your choice: ";

/// Builder for console input.
#[derive(Debug, Default)]
pub struct Script {
    lines: Vec<Vec<u8>>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input line.
    pub fn line(self, line: &str) -> Self {
        self.bytes(line.as_bytes())
    }

    /// Add an input line given as raw bytes, which need not be UTF-8.
    pub fn bytes(mut self, line: &[u8]) -> Self {
        self.lines.push(line.to_vec());
        self
    }

    /// Main menu: sign up.
    pub fn sign_up(self, username: &str, password: &str) -> Self {
        self.line("2").line(username).line(password)
    }

    /// Main menu: log in.
    pub fn login(self, username: &str, password: &str) -> Self {
        self.line("1").line(username).line(password)
    }

    /// User menu: view inbox.
    pub fn view_inbox(self) -> Self {
        self.line("1")
    }

    /// User menu: send an email.
    pub fn send(self, receiver: &str, subject: &str, message: &str) -> Self {
        self.line("2").line(receiver).line(subject).line(message)
    }

    /// User menu: log out.
    pub fn logout(self) -> Self {
        self.line("3")
    }

    /// Main menu: exit.
    pub fn exit(self) -> Self {
        self.line("3")
    }

    /// Input bytes, one line per entry.
    pub fn input(&self) -> Vec<u8> {
        let mut input = Vec::new();
        for line in &self.lines {
            input.extend_from_slice(line);
            input.push(b'\n');
        }
        input
    }

    /// Run the script with the default configuration.
    pub fn run(self) -> TestRun {
        self.run_with_config(Config::default())
    }

    /// Run the script with the unique-username policy.
    pub fn run_unique(self) -> TestRun {
        let mut config = Config::default();
        config.registry.usernames = RegistrationPolicy::Unique;
        self.run_with_config(config)
    }

    /// Run the script with the given configuration.
    pub fn run_with_config(self, config: Config) -> TestRun {
        let mut app = Application::new(config);
        let output = app
            .run(Cursor::new(self.input()), Vec::new())
            .expect("session should not fail on in-memory streams");
        TestRun {
            app,
            output: String::from_utf8(output).expect("output is UTF-8"),
        }
    }
}

/// Finished session.
pub struct TestRun {
    pub app: Application,
    pub output: String,
}

impl TestRun {
    /// Check that the output contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.output.contains(text)
    }

    /// Count occurrences of `text` in the output.
    pub fn count(&self, text: &str) -> usize {
        self.output.matches(text).count()
    }
}
