//! Logging built on the tracing ecosystem.
//!
//! # Environment Variables
//!
//! - `PARLEY_LOG`: Filter directive (like `RUST_LOG`), e.g., `parley_core=debug`
//! - `PARLEY_LOG_FORMAT`: Output format: `pretty`, `json`, `compact`
//! - `PARLEY_LOG_DIR`: Override the log file directory
//!
//! Interactive screens own the terminal, so they log to daily rolling files
//! only. Non-interactive commands log to stderr.
//!
//! # Example
//!
//! ```no_run
//! use parley_core::config::LoggingConfig;
//! use parley_core::logging::{self, LogTarget};
//!
//! let _guard = logging::init_logging(&LoggingConfig::default(), LogTarget::Stderr)?;
//! # Ok::<(), parley_core::Error>(())
//! ```

use crate::Error;
use crate::config::LoggingConfig;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    #[default]
    Compact,
}

impl LogFormat {
    /// All available log formats.
    pub const VALUES: &[LogFormat] = &[LogFormat::Pretty, LogFormat::Json, LogFormat::Compact];

    /// Parse a log format from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

/// Where log events go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for commands that do not take over the terminal
    Stderr,
    /// Rolling files only, for the TUI screens
    File,
}

/// Build an EnvFilter from the config and environment variables.
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    let filter = env::var("PARLEY_LOG")
        .ok()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.level.clone());

    EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Resolve the output format: environment first, then config, then TTY detection.
fn detect_format(config: &LoggingConfig) -> LogFormat {
    if let Ok(fmt_str) = env::var("PARLEY_LOG_FORMAT")
        && let Some(fmt) = LogFormat::parse_str(&fmt_str)
    {
        return fmt;
    }

    if let Some(fmt) = LogFormat::parse_str(&config.format) {
        return fmt;
    }

    if atty::is(atty::Stream::Stderr) { LogFormat::Pretty } else { LogFormat::Compact }
}

/// Get the log directory path.
pub fn log_dir(config: &LoggingConfig) -> Result<PathBuf, Error> {
    if let Ok(custom_dir) = env::var("PARLEY_LOG_DIR") {
        return Ok(PathBuf::from(custom_dir));
    }

    if let Some(dir) = &config.file.directory {
        return Ok(dir.clone());
    }

    dirs::data_local_dir()
        .map(|dir| dir.join("parley").join("logs"))
        .ok_or_else(|| Error::Logging("could not determine data directory".to_string()))
}

/// Initialize the global tracing subscriber.
///
/// Returns the file writer guard when file logging is active; keep it alive
/// until exit so buffered events are flushed. With `LogTarget::File` and file
/// logging disabled, no subscriber is installed.
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> Result<Option<WorkerGuard>, Error> {
    let env_filter = build_env_filter(config);
    let format = detect_format(config);
    let registry = Registry::default().with(env_filter);

    match target {
        LogTarget::Stderr => {
            let result = match format {
                LogFormat::Pretty => registry
                    .with(fmt::layer().pretty().with_writer(io::stderr).with_ansi(true))
                    .try_init(),
                LogFormat::Json => registry.with(fmt::layer().json().with_writer(io::stderr)).try_init(),
                LogFormat::Compact => registry.with(fmt::layer().compact().with_writer(io::stderr)).try_init(),
            };
            result.map_err(|e| Error::Logging(e.to_string()))?;
            Ok(None)
        }
        LogTarget::File => {
            if !config.file.enabled {
                return Ok(None);
            }

            let dir = log_dir(config)?;
            std::fs::create_dir_all(&dir)
                .map_err(|e| Error::Logging(format!("failed to create log directory: {}", e)))?;

            let file_appender = tracing_appender::rolling::daily(&dir, "parley.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let result = match format {
                LogFormat::Json => registry.with(fmt::layer().json().with_writer(non_blocking)).try_init(),
                LogFormat::Pretty | LogFormat::Compact => registry
                    .with(fmt::layer().compact().with_ansi(false).with_writer(non_blocking))
                    .try_init(),
            };
            result.map_err(|e| Error::Logging(e.to_string()))?;
            Ok(Some(guard))
        }
    }
}

/// Shorten message text for log fields.
pub fn redact_message(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.to_string();
    }

    let mut truncated = text.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated.push_str(&format!(" ({} total chars)", total));
    truncated
}
