//! Data models
//!
//! Wire DTOs shared between the server and its clients (the web frontend
//! and any admin tooling). JSON field names are camelCase to match what
//! the frontend sends and expects.

pub mod guest;
pub mod qr;
pub mod service_request;

// Re-exports
pub use guest::*;
pub use qr::*;
pub use service_request::*;
