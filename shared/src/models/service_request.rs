//! Service Request wire types

use serde::{Deserialize, Serialize};

/// Service request lifecycle status
///
/// Nominal flow is pending → in-progress → completed, with cancelled
/// possible at any point. Transitions are not enforced server-side; staff
/// PATCH the field directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::InProgress => "in-progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Guest submission payload (`POST /api/request-service`)
///
/// Required fields default to empty so that a missing field surfaces as a
/// field-level validation error (400) instead of a deserialization
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room_number: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Staff update payload (`PATCH /api/service-request/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}
