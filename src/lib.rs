//! mailsim - in-memory mail simulator
//!
//! Users register, log in and exchange short text messages through a
//! line-oriented console menu. All state lives in memory for one run.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod mail;
pub mod registry;

pub use app::{Application, SessionHandler, SessionState};
pub use auth::{
    hash_password, login, register, verify_password, AuthSession, PasswordError,
    RegistrationPolicy, RegistrationRequest,
};
pub use config::Config;
pub use error::{MailsimError, Result};
pub use mail::{Email, Inbox, MailService, SendMailRequest};
pub use registry::{NewUser, User, UserId, UserRegistry};
