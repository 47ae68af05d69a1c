//! Database Module
//!
//! Embedded SurrealDB storage: RocksDb on disk for the server, Mem for
//! tests. Schema is applied idempotently at startup.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "hotel";
const DATABASE: &str = "concierge";

/// Schema definitions, safe to re-run on every startup
///
/// Documents keep the wire-format camelCase field names (the original
/// datastore stored them that way), so index columns are camelCase too.
const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS guest SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS service_request SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS room_qr SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS room_qr_unique ON TABLE room_qr COLUMNS hotelId, roomNumber UNIQUE;
    DEFINE INDEX IF NOT EXISTS guest_room_idx ON TABLE guest COLUMNS hotelId, roomNumber;
    DEFINE INDEX IF NOT EXISTS request_time_idx ON TABLE service_request COLUMNS requestedAt;
";

/// Database service owning the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database at `db_path` and apply the schema
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::prepare(db).await
    }

    /// Open an in-memory database (tests)
    pub async fn memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!("Database ready (ns={NAMESPACE}, db={DATABASE})");

        Ok(Self { db })
    }
}
