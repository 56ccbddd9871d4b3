//! The simulated inbox.
//!
//! - **`types`** - row type and request/response bodies
//! - **`db`** - owner-scoped queries and the demo purge
//! - **`sync`** - the canned-message generator standing in for a real
//!   provider integration
//! - **`handlers`** - HTTP handlers

pub mod db;
pub mod handlers;
pub mod sync;
pub mod types;

pub use handlers::{list_emails, mark_important, mark_read, sync_emails};
