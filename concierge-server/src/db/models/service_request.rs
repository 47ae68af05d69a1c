//! Service Request Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::RequestStatus;
use surrealdb::RecordId;

/// Service request entity
///
/// Room number is a snapshot of the submitting guest's context; it is not
/// re-validated against the guest table after creation. Requests are never
/// deleted, only status/assignee are updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub room_number: String,
    /// Catalog display name, stored as free text
    pub service: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
    pub hotel_id: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Submission time (Unix timestamp millis)
    pub requested_at: i64,
    /// Set when status becomes `completed`, cleared when it leaves it
    #[serde(default)]
    pub completed_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_with_camel_case_wire_names() {
        let json = r#"{
            "name": "Ada",
            "roomNumber": "204",
            "service": "Housekeeping",
            "status": "in-progress",
            "hotelId": "default",
            "assignedTo": "Marco",
            "requestedAt": 1700000000000
        }"#;
        let req: ServiceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.status, RequestStatus::InProgress);
        assert_eq!(req.assigned_to.as_deref(), Some("Marco"));
        assert!(req.completed_at.is_none());

        let out = serde_json::to_value(&req).unwrap();
        assert_eq!(out["roomNumber"], "204");
        assert_eq!(out["status"], "in-progress");
    }
}
