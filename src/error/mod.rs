//! API error taxonomy and HTTP response conversion.
//!
//! - **`types`** - the `ApiError` enum and status-code mapping
//! - **`conversion`** - `IntoResponse` with the `{"error": "..."}` body shape

pub mod conversion;
pub mod types;

pub use types::ApiError;
