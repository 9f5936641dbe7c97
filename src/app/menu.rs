//! Menu handling module.
//!
//! Provides menu actions and parsing for the main and user menus.

use crate::{MailsimError, Result};

/// Parse a numeric menu choice, ignoring surrounding whitespace.
fn parse_choice(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Action chosen from the main (logged-out) menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuAction {
    /// Log in with username and password.
    Login,
    /// Register a new account.
    SignUp,
    /// Quit the program.
    Exit,
}

impl MainMenuAction {
    /// Menu heading.
    pub const TITLE: &'static str = "Main Menu:";

    /// All actions in display order.
    pub const ALL: [MainMenuAction; 3] = [
        MainMenuAction::Login,
        MainMenuAction::SignUp,
        MainMenuAction::Exit,
    ];

    /// Parse a menu action from user input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMenuChoice` for non-numeric input or a number that
    /// is not on the menu.
    pub fn parse(input: &str) -> Result<Self> {
        match parse_choice(input) {
            Some(1) => Ok(MainMenuAction::Login),
            Some(2) => Ok(MainMenuAction::SignUp),
            Some(3) => Ok(MainMenuAction::Exit),
            _ => Err(MailsimError::InvalidMenuChoice(input.trim().to_string())),
        }
    }

    /// Number the user types to pick this action.
    pub fn number(&self) -> u8 {
        match self {
            MainMenuAction::Login => 1,
            MainMenuAction::SignUp => 2,
            MainMenuAction::Exit => 3,
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MainMenuAction::Login => "Login",
            MainMenuAction::SignUp => "Sign Up",
            MainMenuAction::Exit => "Exit",
        }
    }
}

/// Action chosen from the user (logged-in) menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuAction {
    /// Show the inbox.
    ViewMessages,
    /// Compose and send an email.
    SendEmail,
    /// Return to the main menu.
    Logout,
}

impl UserMenuAction {
    /// Menu heading.
    pub const TITLE: &'static str = "User Menu:";

    /// All actions in display order.
    pub const ALL: [UserMenuAction; 3] = [
        UserMenuAction::ViewMessages,
        UserMenuAction::SendEmail,
        UserMenuAction::Logout,
    ];

    /// Parse a menu action from user input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMenuChoice` for non-numeric input or a number that
    /// is not on the menu.
    pub fn parse(input: &str) -> Result<Self> {
        match parse_choice(input) {
            Some(1) => Ok(UserMenuAction::ViewMessages),
            Some(2) => Ok(UserMenuAction::SendEmail),
            Some(3) => Ok(UserMenuAction::Logout),
            _ => Err(MailsimError::InvalidMenuChoice(input.trim().to_string())),
        }
    }

    /// Number the user types to pick this action.
    pub fn number(&self) -> u8 {
        match self {
            UserMenuAction::ViewMessages => 1,
            UserMenuAction::SendEmail => 2,
            UserMenuAction::Logout => 3,
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            UserMenuAction::ViewMessages => "View Messages",
            UserMenuAction::SendEmail => "Send Email",
            UserMenuAction::Logout => "Logout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_main_menu() {
        assert_eq!(MainMenuAction::parse("1").unwrap(), MainMenuAction::Login);
        assert_eq!(MainMenuAction::parse("2").unwrap(), MainMenuAction::SignUp);
        assert_eq!(MainMenuAction::parse("3").unwrap(), MainMenuAction::Exit);
    }

    #[test]
    fn test_parse_user_menu() {
        assert_eq!(
            UserMenuAction::parse("1").unwrap(),
            UserMenuAction::ViewMessages
        );
        assert_eq!(UserMenuAction::parse("2").unwrap(), UserMenuAction::SendEmail);
        assert_eq!(UserMenuAction::parse("3").unwrap(), UserMenuAction::Logout);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MainMenuAction::parse("  2 ").unwrap(), MainMenuAction::SignUp);
        assert_eq!(UserMenuAction::parse("\t3").unwrap(), UserMenuAction::Logout);
    }

    #[test]
    fn test_parse_out_of_range() {
        for input in ["0", "4", "-1", "99999999999"] {
            assert!(matches!(
                MainMenuAction::parse(input),
                Err(MailsimError::InvalidMenuChoice(_))
            ));
            assert!(matches!(
                UserMenuAction::parse(input),
                Err(MailsimError::InvalidMenuChoice(_))
            ));
        }
    }

    #[test]
    fn test_parse_non_numeric() {
        for input in ["", "abc", "1a", "one", "1.0"] {
            assert!(matches!(
                MainMenuAction::parse(input),
                Err(MailsimError::InvalidMenuChoice(_))
            ));
        }
    }

    #[test]
    fn test_invalid_choice_keeps_input() {
        match MainMenuAction::parse(" x ") {
            Err(MailsimError::InvalidMenuChoice(s)) => assert_eq!(s, "x"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_numbers_round_trip() {
        for action in MainMenuAction::ALL {
            assert_eq!(MainMenuAction::parse(&action.number().to_string()).unwrap(), action);
        }
        for action in UserMenuAction::ALL {
            assert_eq!(UserMenuAction::parse(&action.number().to_string()).unwrap(), action);
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = MainMenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Login", "Sign Up", "Exit"]);
        let labels: Vec<_> = UserMenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["View Messages", "Send Email", "Logout"]);
    }
}
