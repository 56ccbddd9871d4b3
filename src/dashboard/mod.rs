//! Read-only dashboard aggregation.

pub mod handlers;

pub use handlers::get_stats;
