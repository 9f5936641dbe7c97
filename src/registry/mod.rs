//! User registry for mailsim.
//!
//! Users live in process memory only, in registration order. Each user
//! owns its inbox; dropping the registry releases everything.

mod repository;
mod user;

pub use repository::UserRegistry;
pub use user::{NewUser, User, UserId};
