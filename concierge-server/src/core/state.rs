use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::mailer::MailerService;

/// Shared handles for every request handler
///
/// Cloning is cheap: the database handle and HTTP client are internally
/// reference-counted.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Staff notification mailer
    pub mailer: MailerService,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, mailer: MailerService) -> Self {
        Self { config, db, mailer }
    }

    /// Initialize server state
    ///
    /// Ensures the work directory layout exists, opens the database at
    /// `{work_dir}/database`, and wires up the mailer.
    ///
    /// # Panics
    ///
    /// Panics when the work directory or database cannot be initialized;
    /// the process cannot serve anything without them.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("concierge.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let mailer = MailerService::new(config);
        if !mailer.is_enabled() {
            tracing::warn!("MAIL_API_KEY not set; staff notification email disabled");
        }

        Self::new(config.clone(), db_service.db, mailer)
    }

    /// In-memory state for tests: Mem database, mail disabled
    pub async fn for_tests(config: Config) -> Self {
        let db_service = DbService::memory()
            .await
            .expect("Failed to open in-memory database");
        let mailer = MailerService::new(&config);
        Self::new(config, db_service.db, mailer)
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
