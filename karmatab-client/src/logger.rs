//! Logging Infrastructure
//!
//! Console output (plain for development, JSON for production) plus an
//! optional daily-rotating JSON file. `RUST_LOG` overrides the level.

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, prelude::*};

/// Rotated log files kept on disk
pub const LOG_RETENTION_FILES: usize = 14;

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether the console uses JSON
/// * `log_dir` - Optional directory for daily rotating `karmatab.*.log` files
///
/// Fails if a global subscriber is already installed.
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// karmatab_client::logger::init_logger("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if json_format {
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        );
    } else {
        layers.push(fmt::layer().with_target(true).boxed());
    }

    if let Some(dir) = log_dir {
        fs::create_dir_all(dir)?;
        let appender = build_file_appender(dir)?;
        layers.push(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(true)
                .with_writer(std::sync::Mutex::new(appender))
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

fn build_file_appender(dir: &Path) -> anyhow::Result<RollingFileAppender> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("karmatab")
        .filename_suffix("log")
        .max_log_files(LOG_RETENTION_FILES)
        .build(dir)?;
    Ok(appender)
}
