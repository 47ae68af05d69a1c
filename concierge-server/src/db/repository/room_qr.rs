//! Room QR Repository

use super::{BaseRepository, RepoError, RepoResult, now_millis};
use crate::db::models::RoomQr;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "room_qr";

#[derive(Clone)]
pub struct RoomQrRepository {
    base: BaseRepository,
}

impl RoomQrRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All provisioned QR images for a hotel, by room number
    pub async fn find_by_hotel(&self, hotel_id: &str) -> RepoResult<Vec<RoomQr>> {
        let entries: Vec<RoomQr> = self
            .base
            .db()
            .query("SELECT * FROM room_qr WHERE hotelId = $hotel ORDER BY roomNumber")
            .bind(("hotel", hotel_id.to_string()))
            .await?
            .take(0)?;
        Ok(entries)
    }

    pub async fn find_by_room(
        &self,
        hotel_id: &str,
        room_number: &str,
    ) -> RepoResult<Option<RoomQr>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM room_qr WHERE hotelId = $hotel AND roomNumber = $room LIMIT 1")
            .bind(("hotel", hotel_id.to_string()))
            .bind(("room", room_number.to_string()))
            .await?;
        let entries: Vec<RoomQr> = result.take(0)?;
        Ok(entries.into_iter().next())
    }

    /// Store a room's QR image, replacing any previous one for the same
    /// (hotel_id, room_number) pair
    pub async fn upsert(
        &self,
        hotel_id: &str,
        room_number: &str,
        target_url: String,
        qr_code: String,
        guest_name: Option<String>,
    ) -> RepoResult<RoomQr> {
        if let Some(existing) = self.find_by_room(hotel_id, room_number).await? {
            let thing = existing
                .id
                .ok_or_else(|| RepoError::Database("room_qr row without id".to_string()))?;
            self.base
                .db()
                .query(
                    "UPDATE $thing SET targetUrl = $url, qrCode = $qr, \
                     guestName = $guest, createdAt = $now",
                )
                .bind(("thing", thing))
                .bind(("url", target_url))
                .bind(("qr", qr_code))
                .bind(("guest", guest_name))
                .bind(("now", now_millis()))
                .await?;
            return self
                .find_by_room(hotel_id, room_number)
                .await?
                .ok_or_else(|| RepoError::Database("room_qr vanished during upsert".to_string()));
        }

        let entry = RoomQr {
            id: None,
            hotel_id: hotel_id.to_string(),
            room_number: room_number.to_string(),
            target_url,
            qr_code,
            guest_name,
            created_at: now_millis(),
        };

        let created: Option<RoomQr> = self.base.db().create(TABLE).content(entry).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create room_qr".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn upsert_replaces_existing_room_entry() {
        let db = DbService::memory().await.unwrap().db;
        let repo = RoomQrRepository::new(db);

        let first = repo
            .upsert("default", "204", "https://h.example/g?room=204".into(), "qr-v1".into(), None)
            .await
            .unwrap();
        let second = repo
            .upsert(
                "default",
                "204",
                "https://h.example/g?room=204&name=Ada".into(),
                "qr-v2".into(),
                Some("Ada".into()),
            )
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.qr_code, "qr-v2");
        assert_eq!(second.guest_name.as_deref(), Some("Ada"));

        let all = repo.find_by_hotel("default").await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn gallery_is_scoped_to_hotel_and_sorted() {
        let db = DbService::memory().await.unwrap().db;
        let repo = RoomQrRepository::new(db);

        repo.upsert("default", "310", "u".into(), "qr".into(), None)
            .await
            .unwrap();
        repo.upsert("default", "101", "u".into(), "qr".into(), None)
            .await
            .unwrap();
        repo.upsert("other", "101", "u".into(), "qr".into(), None)
            .await
            .unwrap();

        let rooms: Vec<_> = repo
            .find_by_hotel("default")
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.room_number)
            .collect();
        assert_eq!(rooms, vec!["101", "310"]);
    }
}
