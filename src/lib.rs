//! SuperSync backend library.
//!
//! An authenticated HTTP/JSON API for the SuperSync demo: user accounts
//! with bearer-token auth, an owner-scoped address book, a simulated
//! email inbox, and dashboard aggregation, all backed by PostgreSQL.
//!
//! # Module Structure
//!
//! - **`server`** - configuration, shared state, startup wiring
//! - **`routes`** - route tables and router assembly
//! - **`middleware`** - bearer-token authentication
//! - **`error`** - the API error taxonomy
//! - **`auth`** - accounts, tokens, and the auth endpoints
//! - **`contacts`** - address-book CRUD and the sales-lead intake
//! - **`emails`** - the simulated inbox and its demo sync
//! - **`dashboard`** - read-only stats aggregation
//! - **`shared`** - pagination and common response envelopes
//! - **`validation`** - input validation rules

pub mod auth;
pub mod contacts;
pub mod dashboard;
pub mod emails;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod shared;
pub mod validation;
