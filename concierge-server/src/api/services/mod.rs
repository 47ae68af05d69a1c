//! Service catalog route
//!
//! The catalog is static (see `shared::catalog`); this endpoint just
//! serves it so the frontend has one source of truth.

use axum::{Json, Router, routing::get};
use shared::catalog::{SERVICE_CATALOG, ServiceCatalogEntry};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/services", get(list))
}

/// GET /api/services - the fixed service catalog
pub async fn list() -> Json<&'static [ServiceCatalogEntry]> {
    Json(SERVICE_CATALOG)
}
