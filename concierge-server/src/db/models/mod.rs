//! Database models
//!
//! SurrealDB record types. RecordId fields serialize as `table:id`
//! strings via [`serde_helpers`].

pub mod serde_helpers;

pub mod guest;
pub mod room_qr;
pub mod service_request;

// Re-exports
pub use guest::Guest;
pub use room_qr::RoomQr;
pub use service_request::ServiceRequest;
