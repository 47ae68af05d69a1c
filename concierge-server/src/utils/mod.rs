//! Utility module - common helpers and types
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] - application error handling
//! - [`logger`] - tracing setup and log retention
//! - [`validation`] - text length limits and validators

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
