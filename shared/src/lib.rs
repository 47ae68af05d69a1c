//! Shared types for the Concierge guest-services backend
//!
//! Wire-level types used by the server and any client: request/response
//! DTOs, the service-request status lifecycle, the fixed service catalog,
//! and the unified API response envelope.

pub mod catalog;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use catalog::{ServiceCatalogEntry, SERVICE_CATALOG};
pub use models::{RequestStatus, ServiceRequestCreate, ServiceRequestUpdate};
pub use response::ApiResponse;
