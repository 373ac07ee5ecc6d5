//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/terminal-warden/logs/`
/// Log level is controlled by `TWARDEN_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TWARDEN_LOG=debug twarden
/// TWARDEN_LOG=trace twarden
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "twarden.log");

    // Default to info, allow override via TWARDEN_LOG
    let env_filter = EnvFilter::try_from_env("TWARDEN_LOG").unwrap_or_else(|_| {
        EnvFilter::new("terminal_warden=info,twarden_core=info,twarden_app=info,twarden_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Terminal Warden starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("terminal-warden").join("logs"))
}

/// Get the log file path for the current day.
///
/// Daily rotation suffixes the file with the date, so the path changes
/// at midnight.
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    let today = chrono::Local::now().format("%Y-%m-%d");
    Ok(dir.join(format!("twarden.log.{today}")))
}
