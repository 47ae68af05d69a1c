//! Concierge Edge Server - hotel guest-services backend
//!
//! # Overview
//!
//! A guest scans a room QR code, lands on the portal with their room
//! pre-filled, browses the service catalog and submits service requests.
//! Requests are persisted and staff are notified by email. This crate is
//! everything behind the portal:
//!
//! - **HTTP API** (`api`): RESTful endpoints for guests, requests, QR codes
//! - **Database** (`db`): embedded SurrealDB storage and repositories
//! - **QR generation** (`qr`): room QR provisioning and ad-hoc generation
//! - **Mailer** (`mailer`): staff notification over a mail-provider HTTP API
//!
//! # Module structure
//!
//! ```text
//! concierge-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models and repositories
//! ├── qr/            # QR image generation
//! ├── mailer/        # staff notification email
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod mailer;
pub mod qr;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState, build_app, build_router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env`, initialize logging, and sweep expired log files
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let logs_dir = config.logs_dir();

    config.ensure_work_dir_structure()?;
    init_logger_with_file(
        &level,
        config.is_production(),
        logs_dir.to_str(),
    )?;
    cleanup_old_logs(&logs_dir)?;

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______                 _
  / ____/___  ____  _____(_)__  _________ ____
 / /   / __ \/ __ \/ ___/ / _ \/ ___/ __ `/ _ \
/ /___/ /_/ / / / / /__/ /  __/ /  / /_/ /  __/
\____/\____/_/ /_/\___/_/\___/_/   \__, /\___/
                                  /____/
    "#
    );
}
