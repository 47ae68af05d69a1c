//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables. Handlers construct
//! a repository per request from the shared database handle; cloning the
//! handle is cheap.

pub mod guest;
pub mod room_qr;
pub mod service_request;

// Re-exports
pub use guest::GuestRepository;
pub use room_qr::RoomQrRepository;
pub use service_request::ServiceRequestRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Current wall-clock time as Unix millis (stored timestamp format)
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
