//! Room QR Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Provisioned QR image for a room
///
/// Unique per (hotel_id, room_number); re-provisioning replaces the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomQr {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub hotel_id: String,
    pub room_number: String,
    /// URL the QR image encodes (guest-profile deep link)
    pub target_url: String,
    /// Base64 PNG data URL
    pub qr_code: String,
    /// Name of the guest the QR was provisioned for, if any
    #[serde(default)]
    pub guest_name: Option<String>,
    /// Provisioning time (Unix timestamp millis)
    pub created_at: i64,
}
