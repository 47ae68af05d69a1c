//! Service Request API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use shared::models::{ServiceRequestCreate, ServiceRequestUpdate};

use crate::core::ServerState;
use crate::db::models::ServiceRequest;
use crate::db::repository::ServiceRequestRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_ROOM_NUMBER_LEN, MAX_SERVICE_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Response for a guest submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: String,
    pub request: ServiceRequest,
    pub email_sent: bool,
}

/// POST /api/request-service - guest submission
///
/// Persists the request (status `pending`), then notifies staff by email.
/// Email failure never fails the submission; it only clears `emailSent`.
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ServiceRequestCreate>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.room_number, "roomNumber", MAX_ROOM_NUMBER_LEN)?;
    validate_required_text(&payload.service, "service", MAX_SERVICE_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let repo = ServiceRequestRepository::new(state.get_db());
    let request = repo
        .create(&state.config.hotel_id, payload)
        .await
        .map_err(AppError::from)?;

    tracing::info!(
        guest = %request.name,
        room = %request.room_number,
        service = %request.service,
        "Service request submitted"
    );

    let email_sent = state.mailer.notify_staff(&request).await;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Service request submitted successfully".to_string(),
            request,
            email_sent,
        }),
    ))
}

/// GET /api/service-requests - all requests, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ServiceRequest>>> {
    let repo = ServiceRequestRepository::new(state.get_db());
    let requests = repo.find_all().await.map_err(AppError::from)?;
    Ok(Json(requests))
}

/// PATCH /api/service-request/{id} - staff status/assignee update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ServiceRequestUpdate>,
) -> AppResult<Json<ServiceRequest>> {
    validate_optional_text(&payload.assigned_to, "assignedTo", MAX_NAME_LEN)?;

    let repo = ServiceRequestRepository::new(state.get_db());
    let request = repo.update(&id, payload).await.map_err(AppError::from)?;
    Ok(Json(request))
}
