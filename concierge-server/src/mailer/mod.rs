//! Staff notification email
//!
//! Posts a JSON payload to a transactional-mail HTTP API. Delivery is
//! best-effort: failures are logged and surface to the guest only as
//! `emailSent: false`; the request itself is already persisted.

use serde::Serialize;

use crate::core::Config;
use crate::db::models::ServiceRequest;

/// Outgoing provider payload (generic transactional-mail shape)
#[derive(Debug, Serialize)]
struct MailPayload {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
}

#[derive(Clone, Debug)]
pub struct MailerService {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    from: String,
    staff_email: String,
}

impl MailerService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from: config.mail_from.clone(),
            staff_email: config.staff_email.clone(),
        }
    }

    /// Whether a provider API key is configured
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Email the staff inbox about a new service request
    ///
    /// Returns whether the provider accepted the message.
    pub async fn notify_staff(&self, request: &ServiceRequest) -> bool {
        let Some(api_key) = &self.api_key else {
            tracing::debug!("Mailer disabled (no MAIL_API_KEY), skipping staff notification");
            return false;
        };

        let payload = MailPayload {
            from: self.from.clone(),
            to: vec![self.staff_email.clone()],
            subject: notification_subject(request),
            text: notification_body(request),
        };

        let resp = match self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to reach mail provider");
                return false;
            }
        };

        if !resp.status().is_success() {
            tracing::warn!(
                status = %resp.status(),
                "Mail provider rejected staff notification"
            );
            return false;
        }

        tracing::info!(
            room = %request.room_number,
            service = %request.service,
            "Staff notification email sent"
        );
        true
    }
}

fn notification_subject(request: &ServiceRequest) -> String {
    format!(
        "New service request: {} (room {})",
        request.service, request.room_number
    )
}

fn notification_body(request: &ServiceRequest) -> String {
    let requested_at = chrono::DateTime::from_timestamp_millis(request.requested_at)
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| request.requested_at.to_string());

    let mut body = format!(
        "Guest:   {}\nRoom:    {}\nService: {}\nTime:    {}\n",
        request.name, request.room_number, request.service, requested_at
    );
    if let Some(notes) = &request.notes {
        body.push_str(&format!("Notes:   {notes}\n"));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RequestStatus;

    fn sample_request() -> ServiceRequest {
        ServiceRequest {
            id: None,
            name: "Ada Lovelace".to_string(),
            room_number: "204".to_string(),
            service: "Room Service".to_string(),
            notes: Some("No onions".to_string()),
            status: RequestStatus::Pending,
            hotel_id: "default".to_string(),
            assigned_to: None,
            requested_at: 1_700_000_000_000,
            completed_at: None,
        }
    }

    #[test]
    fn subject_names_service_and_room() {
        assert_eq!(
            notification_subject(&sample_request()),
            "New service request: Room Service (room 204)"
        );
    }

    #[test]
    fn body_includes_notes_when_present() {
        let with_notes = notification_body(&sample_request());
        assert!(with_notes.contains("No onions"));
        assert!(with_notes.contains("Ada Lovelace"));

        let mut req = sample_request();
        req.notes = None;
        assert!(!notification_body(&req).contains("Notes:"));
    }

    #[tokio::test]
    async fn disabled_mailer_reports_not_sent() {
        let config = Config::with_overrides("/tmp/concierge-test", 0);
        // no MAIL_API_KEY in test env
        let mailer = MailerService {
            client: reqwest::Client::new(),
            api_url: config.mail_api_url.clone(),
            api_key: None,
            from: config.mail_from.clone(),
            staff_email: config.staff_email.clone(),
        };
        assert!(!mailer.is_enabled());
        assert!(!mailer.notify_staff(&sample_request()).await);
    }
}
