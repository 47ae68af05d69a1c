//! Guest API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::GuestCheckIn;

use crate::core::ServerState;
use crate::db::models::{Guest, ServiceRequest};
use crate::db::repository::{GuestRepository, RoomQrRepository, ServiceRequestRepository};
use crate::qr;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_ROOM_NUMBER_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/guest/{room_number} - active guest for a room, or 404
pub async fn get_by_room(
    State(state): State<ServerState>,
    Path(room_number): Path<String>,
) -> AppResult<Json<Guest>> {
    let repo = GuestRepository::new(state.get_db());
    let guest = repo
        .find_active_by_room(&state.config.hotel_id, &room_number)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Room {} not found", room_number)))?;
    Ok(Json(guest))
}

/// GET /api/guest-service-requests/{room_number} - a room's requests, newest first
pub async fn list_requests(
    State(state): State<ServerState>,
    Path(room_number): Path<String>,
) -> AppResult<Json<Vec<ServiceRequest>>> {
    let repo = ServiceRequestRepository::new(state.get_db());
    let requests = repo.find_by_room(&room_number).await.map_err(AppError::from)?;
    Ok(Json(requests))
}

/// POST /api/guests - check-in provisioning
///
/// Creates the guest record and (re)provisions the room QR in one step.
pub async fn check_in(
    State(state): State<ServerState>,
    Json(payload): Json<GuestCheckIn>,
) -> AppResult<(StatusCode, Json<Guest>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.room_number, "roomNumber", MAX_ROOM_NUMBER_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.room_type, "roomType", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    let target_url = qr::guest_profile_url(
        &state.config.public_url,
        &payload.room_number,
        &payload.name,
    );
    let qr_code = qr::generate_data_url(&target_url)?;

    let guest_repo = GuestRepository::new(state.get_db());
    let guest = guest_repo
        .check_in(&state.config.hotel_id, payload, qr_code.clone())
        .await
        .map_err(AppError::from)?;

    // Keep the gallery in sync with the latest occupant
    let qr_repo = RoomQrRepository::new(state.get_db());
    qr_repo
        .upsert(
            &state.config.hotel_id,
            &guest.room_number,
            target_url,
            qr_code,
            Some(guest.name.clone()),
        )
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        room = %guest.room_number,
        guest = %guest.name,
        "Guest checked in, room QR provisioned"
    );

    Ok((StatusCode::CREATED, Json(guest)))
}
