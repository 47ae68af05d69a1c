use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/concierge | working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | HOTEL_ID | default | hotel identifier stamped on records |
/// | PUBLIC_URL | http://localhost:3000 | base URL encoded into room QR codes |
/// | MAIL_API_URL | https://api.resend.com/emails | mail provider endpoint |
/// | MAIL_API_KEY | (unset = mail disabled) | provider bearer key |
/// | MAIL_FROM | concierge@hotel.local | sender address |
/// | STAFF_EMAIL | frontdesk@hotel.local | staff notification inbox |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Hotel identifier; single-property deployment, stamped on every record
    pub hotel_id: String,
    /// Public base URL the room QR codes point at
    pub public_url: String,
    /// Mail provider endpoint
    pub mail_api_url: String,
    /// Mail provider API key; mail dispatch is disabled when unset
    pub mail_api_key: Option<String>,
    /// Sender address for staff notifications
    pub mail_from: String,
    /// Staff notification inbox
    pub staff_email: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/concierge".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            hotel_id: std::env::var("HOTEL_ID").unwrap_or_else(|_| "default".into()),
            public_url: std::env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            mail_api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com/emails".into()),
            mail_api_key: std::env::var("MAIL_API_KEY").ok().filter(|k| !k.is_empty()),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "concierge@hotel.local".into()),
            staff_email: std::env::var("STAFF_EMAIL")
                .unwrap_or_else(|_| "frontdesk@hotel.local".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override work dir and port; used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rotated log files
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
