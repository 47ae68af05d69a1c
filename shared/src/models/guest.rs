//! Guest wire types

use serde::{Deserialize, Serialize};

/// Check-in provisioning payload (`POST /api/guests`)
///
/// Creates a guest record and provisions the room QR in one step.
/// Required fields default to empty so missing ones surface as 400
/// validation errors rather than deserialization rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCheckIn {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub room_price: f64,
    #[serde(default)]
    pub expected_stay_days: Option<i32>,
}
