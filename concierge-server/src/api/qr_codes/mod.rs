//! QR Code API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/qr-codes/{hotel_id}", get(handler::gallery))
        .route("/api/generate-qr", post(handler::generate))
}
