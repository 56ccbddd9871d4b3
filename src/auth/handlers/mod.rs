//! HTTP handlers for registration, login, and the profile endpoints.

pub mod login;
pub mod profile;
pub mod register;
pub mod types;

pub use login::login;
pub use profile::{get_profile, put_profile};
pub use register::register;
