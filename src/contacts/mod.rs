//! Address-book contacts and the public sales-lead intake.
//!
//! - **`types`** - row type, lead sources, request/response bodies
//! - **`db`** - owner-scoped queries
//! - **`handlers`** - HTTP handlers

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{
    create_contact, create_sales_lead, delete_contact, list_contacts, update_contact,
};
