//! E2E menu tests for mailsim.
//!
//! Tests menu rendering, invalid input and end-of-input handling.

mod common;

use common::{Script, MAIN_MENU, USER_MENU};

#[test]
fn test_main_menu_rendering() {
    let run = Script::new().exit().run();
    assert_eq!(run.output, format!("{MAIN_MENU}Exiting program.\n"));
}

#[test]
fn test_invalid_numeric_choice_main_menu() {
    let run = Script::new().line("9").line("0").exit().run();

    assert_eq!(run.count("Invalid choice. Please enter a valid option.\n"), 2);
    assert_eq!(run.count(MAIN_MENU), 3);
}

#[test]
fn test_non_numeric_choice_main_menu() {
    let run = Script::new().line("hello").line("").line("1x").exit().run();

    assert_eq!(run.count("Invalid choice. Please enter a valid option.\n"), 3);
    assert!(run.app.registry().is_empty());
}

#[test]
fn test_invalid_choice_user_menu() {
    let run = Script::new()
        .sign_up("alice", "a")
        .login("alice", "a")
        .line("4")
        .line("abc")
        .logout()
        .exit()
        .run();

    assert_eq!(run.count("Invalid choice. Please enter a valid option.\n"), 2);
    assert_eq!(run.count(USER_MENU), 3);
}

#[test]
fn test_choice_with_whitespace() {
    let run = Script::new().line(" 3 ").run();
    assert!(run.output.ends_with("Exiting program.\n"));
}

#[test]
fn test_eof_at_main_menu() {
    let run = Script::new().sign_up("alice", "a").run();

    assert!(run.output.ends_with(MAIN_MENU));
    assert!(!run.contains("Exiting program."));
    assert_eq!(run.app.registry().len(), 1);
}

#[test]
fn test_eof_at_user_menu() {
    let run = Script::new()
        .sign_up("alice", "a")
        .login("alice", "a")
        .run();

    assert!(run.output.ends_with(USER_MENU));
}

#[test]
fn test_eof_during_compose() {
    let run = Script::new()
        .sign_up("alice", "a")
        .sign_up("bob", "b")
        .login("alice", "a")
        .line("2")
        .line("bob")
        .run();

    assert!(run.output.ends_with("Enter email subject: "));
    assert_eq!(run.app.registry().total_emails(), 0);
}

#[test]
fn test_eof_during_login() {
    let run = Script::new().sign_up("alice", "a").line("1").line("alice").run();
    assert!(run.output.ends_with("Enter your password: "));
}

#[test]
fn test_crlf_input() {
    let run = Script::new()
        .line("2\r")
        .line("alice\r")
        .line("pw\r")
        .line("1\r")
        .line("alice\r")
        .line("pw\r")
        .logout()
        .exit()
        .run();

    assert!(run.contains("User alice registered successfully.\n"));
    assert!(run.contains(USER_MENU));
}

#[test]
fn test_non_utf8_choice_is_rejected() {
    let run = Script::new().bytes(b"\xb3").exit().run();

    assert!(run.contains("Invalid input. Please enter valid UTF-8 text.\n"));
    assert_eq!(run.count(MAIN_MENU), 2);
}
