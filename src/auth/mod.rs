//! Accounts and authentication.
//!
//! - **`users`** - user row type and queries
//! - **`sessions`** - bearer token issuance and verification
//! - **`handlers`** - register, login, and profile endpoints

pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::{get_profile, login, put_profile, register};
