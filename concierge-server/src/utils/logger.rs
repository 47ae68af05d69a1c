//! Logging Infrastructure
//!
//! Structured logging setup for development and production:
//! - console output, plain text in development, JSON in production
//! - optional daily rotating file logs under `{work_dir}/logs/app`
//! - old application logs deleted after 14 days

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Retention for daily application logs
const LOG_RETENTION_DAYS: i64 = 14;

/// Initialize console-only logging (development default)
pub fn init_logger() {
    let _ = init_logger_with_file("info", false, None);
}

/// Initialize the logging system with optional daily-rotating file output
///
/// # Arguments
/// * `level` - default log level when `RUST_LOG` is unset
/// * `json_format` - JSON output (production) vs plain text (development)
/// * `log_dir` - optional directory for file logging, e.g. `{work_dir}/logs`
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match log_dir {
        Some(dir) => {
            let app_log_dir = Path::new(dir).join("app");
            fs::create_dir_all(&app_log_dir)?;

            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app.log");
            let layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .boxed();
            Some(layer)
        }
        None => None,
    };

    let console_layer = if json_format {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Clean up old application log files (older than the retention window)
///
/// Call this periodically (e.g. at startup) to bound log size.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    use chrono::{Local, TimeZone};

    let cutoff = Local::now() - chrono::Duration::days(LOG_RETENTION_DAYS);

    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(());
    }

    // Rolling appender names files app.log.YYYY-MM-DD
    for entry in fs::read_dir(app_log_dir)? {
        let entry = entry?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(date_part) = name.strip_prefix("app.log.") else {
            continue;
        };
        let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") else {
            continue;
        };
        let Some(midnight) = naive_date.and_hms_opt(0, 0, 0) else {
            continue;
        };

        if let Some(local_midnight) = Local.from_local_datetime(&midnight).single()
            && local_midnight < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_removes_only_expired_logs() {
        let tmp = tempfile::tempdir().unwrap();
        let app_dir = tmp.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();

        let old = app_dir.join("app.log.2001-01-01");
        let fresh = app_dir.join(format!(
            "app.log.{}",
            chrono::Local::now().format("%Y-%m-%d")
        ));
        let unrelated = app_dir.join("notes.txt");
        for p in [&old, &fresh, &unrelated] {
            fs::write(p, b"log line").unwrap();
        }

        cleanup_old_logs(tmp.path()).unwrap();

        assert!(!old.exists());
        assert!(fresh.exists());
        assert!(unrelated.exists());
    }

    #[test]
    fn cleanup_is_a_noop_without_log_dir() {
        let tmp = tempfile::tempdir().unwrap();
        cleanup_old_logs(tmp.path()).unwrap();
    }
}
