//! Authentication module for mailsim.
//!
//! This module provides password hashing, user registration and login.

mod password;
mod registration;
mod session;

pub use password::{hash_password, verify_password, PasswordError};
pub use registration::{register, RegistrationPolicy, RegistrationRequest};
pub use session::{login, AuthSession};
