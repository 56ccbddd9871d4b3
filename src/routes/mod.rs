//! HTTP route configuration.
//!
//! - **`api_routes`** - public and protected route tables
//! - **`health`** - the health endpoint
//! - **`router`** - final assembly with fallback and layers

pub mod api_routes;
pub mod health;
pub mod router;

pub use router::create_router;
