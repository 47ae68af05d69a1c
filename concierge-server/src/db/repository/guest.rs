//! Guest Repository

use super::{BaseRepository, RepoError, RepoResult, now_millis};
use crate::db::models::Guest;
use shared::models::GuestCheckIn;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "guest";

#[derive(Clone)]
pub struct GuestRepository {
    base: BaseRepository,
}

impl GuestRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find the active guest for a room
    pub async fn find_active_by_room(
        &self,
        hotel_id: &str,
        room_number: &str,
    ) -> RepoResult<Option<Guest>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM guest \
                 WHERE hotelId = $hotel AND roomNumber = $room AND isActive = true \
                 LIMIT 1",
            )
            .bind(("hotel", hotel_id.to_string()))
            .bind(("room", room_number.to_string()))
            .await?;
        let guests: Vec<Guest> = result.take(0)?;
        Ok(guests.into_iter().next())
    }

    /// Check in a guest: creates the guest record with its room QR snapshot
    pub async fn check_in(
        &self,
        hotel_id: &str,
        data: GuestCheckIn,
        qr_code: String,
    ) -> RepoResult<Guest> {
        // One active guest per room
        if self
            .find_active_by_room(hotel_id, &data.room_number)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Room {} already has an active guest",
                data.room_number
            )));
        }

        let guest = Guest {
            id: None,
            hotel_id: hotel_id.to_string(),
            room_number: data.room_number,
            name: data.name,
            email: data.email,
            phone: data.phone,
            room_type: data.room_type,
            room_price: data.room_price,
            checkin_at: now_millis(),
            checkout_at: None,
            expected_stay_days: data.expected_stay_days,
            is_active: true,
            qr_code: Some(qr_code),
        };

        let created: Option<Guest> = self.base.db().create(TABLE).content(guest).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create guest".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn check_in_payload(room: &str) -> GuestCheckIn {
        GuestCheckIn {
            name: "Ada Lovelace".to_string(),
            room_number: room.to_string(),
            phone: "+34 600 000 000".to_string(),
            email: Some("ada@example.com".to_string()),
            room_type: "Deluxe".to_string(),
            room_price: 180.0,
            expected_stay_days: Some(3),
        }
    }

    #[tokio::test]
    async fn check_in_then_lookup_by_room() {
        let db = DbService::memory().await.unwrap().db;
        let repo = GuestRepository::new(db);

        let created = repo
            .check_in("default", check_in_payload("204"), "data:image/png;base64,AA==".into())
            .await
            .unwrap();
        assert!(created.id.is_some());
        assert!(created.is_active);

        let found = repo
            .find_active_by_room("default", "204")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Ada Lovelace");
        assert_eq!(found.qr_code.as_deref(), Some("data:image/png;base64,AA=="));
    }

    #[tokio::test]
    async fn lookup_misses_unknown_room_and_other_hotels() {
        let db = DbService::memory().await.unwrap().db;
        let repo = GuestRepository::new(db);

        repo.check_in("default", check_in_payload("204"), "qr".into())
            .await
            .unwrap();

        assert!(repo.find_active_by_room("default", "999").await.unwrap().is_none());
        assert!(repo.find_active_by_room("other", "204").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn double_check_in_same_room_is_rejected() {
        let db = DbService::memory().await.unwrap().db;
        let repo = GuestRepository::new(db);

        repo.check_in("default", check_in_payload("204"), "qr".into())
            .await
            .unwrap();
        let err = repo
            .check_in("default", check_in_payload("204"), "qr".into())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
