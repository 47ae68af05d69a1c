//! QR code wire types

use serde::{Deserialize, Serialize};

/// Ad-hoc generation payload (`POST /api/generate-qr`)
///
/// The frontend posts `{}` to get a QR for the portal itself; `url`
/// overrides the target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Generated QR image and the URL it encodes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQrResponse {
    /// `data:image/png;base64,...` data URL
    pub qr_code: String,
    pub url: String,
}

/// One gallery entry (`GET /api/qr-codes/{hotel_id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrGalleryEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub room: String,
    pub qr_code: String,
}
