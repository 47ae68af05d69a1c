//! Service Request Repository

use super::{BaseRepository, RepoError, RepoResult, now_millis};
use crate::db::models::ServiceRequest;
use shared::models::{RequestStatus, ServiceRequestCreate, ServiceRequestUpdate};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "service_request";

#[derive(Clone)]
pub struct ServiceRequestRepository {
    base: BaseRepository,
}

impl ServiceRequestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a guest submission; always starts as `pending`
    pub async fn create(&self, hotel_id: &str, data: ServiceRequestCreate) -> RepoResult<ServiceRequest> {
        let request = ServiceRequest {
            id: None,
            name: data.name,
            room_number: data.room_number,
            service: data.service,
            notes: data.notes,
            status: RequestStatus::Pending,
            hotel_id: hotel_id.to_string(),
            assigned_to: None,
            requested_at: now_millis(),
            completed_at: None,
        };

        let created: Option<ServiceRequest> =
            self.base.db().create(TABLE).content(request).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create service request".to_string()))
    }

    /// All requests, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<ServiceRequest>> {
        let requests: Vec<ServiceRequest> = self
            .base
            .db()
            .query("SELECT * FROM service_request ORDER BY requestedAt DESC")
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// Requests submitted from one room, newest first
    pub async fn find_by_room(&self, room_number: &str) -> RepoResult<Vec<ServiceRequest>> {
        let requests: Vec<ServiceRequest> = self
            .base
            .db()
            .query(
                "SELECT * FROM service_request WHERE roomNumber = $room \
                 ORDER BY requestedAt DESC",
            )
            .bind(("room", room_number.to_string()))
            .await?
            .take(0)?;
        Ok(requests)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ServiceRequest>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let request: Option<ServiceRequest> = self.base.db().select(thing).await?;
        Ok(request)
    }

    /// Apply a staff status/assignee patch
    ///
    /// `completed_at` follows the status field: stamped when the request
    /// becomes `completed`, cleared when it leaves that state. No other
    /// transition rules are enforced.
    pub async fn update(&self, id: &str, data: ServiceRequestUpdate) -> RepoResult<ServiceRequest> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Service request {} not found", id)))?;

        let status = data.status.unwrap_or(existing.status);
        let assigned_to = data.assigned_to.or(existing.assigned_to);
        let completed_at = match status {
            RequestStatus::Completed => existing.completed_at.or_else(|| Some(now_millis())),
            _ => None,
        };

        self.base
            .db()
            .query(
                "UPDATE $thing SET status = $status, assignedTo = $assigned_to, \
                 completedAt = $completed_at",
            )
            .bind(("thing", thing))
            .bind(("status", status))
            .bind(("assigned_to", assigned_to))
            .bind(("completed_at", completed_at))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Service request {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn submission(room: &str, service: &str) -> ServiceRequestCreate {
        ServiceRequestCreate {
            name: "Ada Lovelace".to_string(),
            room_number: room.to_string(),
            service: service.to_string(),
            notes: Some("Extra towels please".to_string()),
        }
    }

    #[tokio::test]
    async fn create_persists_pending_with_timestamp() {
        let db = DbService::memory().await.unwrap().db;
        let repo = ServiceRequestRepository::new(db);

        let created = repo
            .create("default", submission("204", "Housekeeping"))
            .await
            .unwrap();
        assert_eq!(created.status, RequestStatus::Pending);
        assert!(created.requested_at > 0);
        assert!(created.completed_at.is_none());
        assert_eq!(created.hotel_id, "default");
    }

    #[tokio::test]
    async fn find_all_returns_newest_first() {
        let db = DbService::memory().await.unwrap().db;
        let repo = ServiceRequestRepository::new(db);

        repo.create("default", submission("101", "Room Service"))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        repo.create("default", submission("102", "Laundry Service"))
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].requested_at >= all[1].requested_at);
        assert_eq!(all[0].room_number, "102");

        let by_room = repo.find_by_room("101").await.unwrap();
        assert_eq!(by_room.len(), 1);
        assert_eq!(by_room[0].service, "Room Service");
    }

    #[tokio::test]
    async fn completing_sets_timestamp_and_uncompleting_clears_it() {
        let db = DbService::memory().await.unwrap().db;
        let repo = ServiceRequestRepository::new(db);

        let created = repo
            .create("default", submission("204", "Housekeeping"))
            .await
            .unwrap();
        let id = created.id.unwrap().to_string();

        let completed = repo
            .update(
                &id,
                ServiceRequestUpdate {
                    status: Some(RequestStatus::Completed),
                    assigned_to: Some("Marco".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(completed.status, RequestStatus::Completed);
        assert!(completed.completed_at.is_some());
        assert_eq!(completed.assigned_to.as_deref(), Some("Marco"));

        // Reopening clears the completion stamp, keeps the assignee
        let reopened = repo
            .update(
                &id,
                ServiceRequestUpdate {
                    status: Some(RequestStatus::InProgress),
                    assigned_to: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(reopened.status, RequestStatus::InProgress);
        assert!(reopened.completed_at.is_none());
        assert_eq!(reopened.assigned_to.as_deref(), Some("Marco"));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let db = DbService::memory().await.unwrap().db;
        let repo = ServiceRequestRepository::new(db);

        let err = repo
            .update(
                "service_request:nope",
                ServiceRequestUpdate {
                    status: Some(RequestStatus::Cancelled),
                    assigned_to: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
