//! Service Request API module

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/request-service", post(handler::submit))
        .route("/api/service-requests", get(handler::list))
        .route("/api/service-request/{id}", patch(handler::update))
}
