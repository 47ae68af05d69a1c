//! Guest Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Guest record: one active row per occupied room
///
/// Created by check-in provisioning, read on every QR scan. This app never
/// mutates it apart from the provisioning step that stores the QR image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub hotel_id: String,
    pub room_number: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    pub room_type: String,
    #[serde(default)]
    pub room_price: f64,
    /// Check-in time (Unix timestamp millis)
    pub checkin_at: i64,
    /// Check-out time (Unix timestamp millis), None while the stay is open
    #[serde(default)]
    pub checkout_at: Option<i64>,
    #[serde(default)]
    pub expected_stay_days: Option<i32>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    /// Room QR image as a base64 PNG data URL
    #[serde(default)]
    pub qr_code: Option<String>,
}

fn default_true() -> bool {
    true
}
