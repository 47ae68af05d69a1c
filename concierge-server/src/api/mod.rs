//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`guests`] - guest lookup and check-in provisioning
//! - [`services`] - the fixed service catalog
//! - [`service_requests`] - guest submissions and staff updates
//! - [`qr_codes`] - QR gallery and ad-hoc generation

pub mod guests;
pub mod health;
pub mod qr_codes;
pub mod service_requests;
pub mod services;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
