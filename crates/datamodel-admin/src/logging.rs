//! Logging setup for the admin CLI
//!
//! Console output goes to stderr so rendered tables on stdout stay clean.
//! An optional daily-rotated JSON file collects the same events.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::LoggingSettings;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level filter
    pub default_filter: String,

    /// Directory for JSON log files
    pub json_log_dir: Option<PathBuf>,

    /// Whether to include file/line information in console logs
    pub include_location: bool,
}

impl LoggingConfig {
    pub fn from_settings(settings: &LoggingSettings, verbose: bool) -> Self {
        let default_filter = if verbose {
            "debug".to_string()
        } else {
            settings.default_filter.clone()
        };

        Self {
            default_filter,
            json_log_dir: settings.json_log_dir.clone(),
            include_location: verbose,
        }
    }

    /// RUST_LOG takes precedence over the configured default
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Initialize logging.
///
/// The returned guard flushes the JSON file writer when dropped and must be
/// held until the program exits.
pub fn init(config: LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = config.env_filter();
    let mut layers = Vec::new();

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_writer(std::io::stderr)
        .with_filter(env_filter.clone())
        .boxed();
    layers.push(console_layer);

    let mut guard = None;
    if let Some(log_dir) = &config.json_log_dir {
        std::fs::create_dir_all(log_dir)?;

        let file_appender = tracing_appender::rolling::daily(log_dir, "datamodel-admin.log");
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        let json_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .json()
            .with_current_span(true)
            .with_writer(non_blocking)
            .with_filter(env_filter)
            .boxed();
        layers.push(json_layer);
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    tracing::debug!(
        json_log_dir = ?config.json_log_dir,
        "Logging system initialized"
    );

    Ok(guard)
}
