//! QR Code API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{GenerateQrRequest, GenerateQrResponse, QrGalleryEntry};

use crate::core::ServerState;
use crate::db::repository::RoomQrRepository;
use crate::qr;
use crate::utils::validation::{MAX_URL_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/qr-codes/{hotel_id} - provisioned room QR gallery
pub async fn gallery(
    State(state): State<ServerState>,
    Path(hotel_id): Path<String>,
) -> AppResult<Json<Vec<QrGalleryEntry>>> {
    let repo = RoomQrRepository::new(state.get_db());
    let entries = repo
        .find_by_hotel(&hotel_id)
        .await
        .map_err(AppError::from)?
        .into_iter()
        .map(|e| QrGalleryEntry {
            name: e.guest_name,
            room: e.room_number,
            qr_code: e.qr_code,
        })
        .collect();
    Ok(Json(entries))
}

/// POST /api/generate-qr - ad-hoc QR for a URL
///
/// The frontend posts `{}` for a portal QR; `url` overrides the target.
/// No uniqueness constraint: every call renders a fresh image.
pub async fn generate(
    State(state): State<ServerState>,
    Json(payload): Json<GenerateQrRequest>,
) -> AppResult<Json<GenerateQrResponse>> {
    let url = payload
        .url
        .unwrap_or_else(|| state.config.public_url.clone());
    validate_required_text(&url, "url", MAX_URL_LEN)?;

    let qr_code = qr::generate_data_url(&url)?;
    Ok(Json(GenerateQrResponse { qr_code, url }))
}
