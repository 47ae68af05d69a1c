//! Guest API module
//!
//! Guest lookup is what a QR scan lands on; check-in is the
//! administrative provisioning step that creates the records the scan
//! reads.

mod handler;

use axum::{Router, routing::{get, post}};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/guest/{room_number}", get(handler::get_by_room))
        .route(
            "/api/guest-service-requests/{room_number}",
            get(handler::list_requests),
        )
        .route("/api/guests", post(handler::check_in))
}
