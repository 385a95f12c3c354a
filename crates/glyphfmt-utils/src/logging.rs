//! # Logging Utilities
//!
//! Logging infrastructure for glyphfmt using `tracing`.
//!
//! The formatter core only emits `tracing` events (mostly at `trace` and
//! `debug`, since it runs on every glyph hover). Binaries call one of the
//! initializers here once at startup to decide where those events go.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=glyphfmt_core=trace`)
//! - `GLYPHFMT_LOG_FORMAT`: Set output format (`json` or `pretty`, default: `pretty`)
//! - `GLYPHFMT_LOG_FILE`: Optional path to log file (if not set, logs only to stderr)
//!
//! ## Examples
//!
//! ```rust,no_run
//! use glyphfmt_utils::{LogFormat, LogLevel, init_logging_with_level};
//!
//! let _guard = init_logging_with_level(LogLevel::Debug, LogFormat::Pretty)
//!     .expect("Failed to initialize logging");
//! tracing::debug!("Formatter registered");
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, io};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "GLYPHFMT_LOG_FORMAT";
/// Environment variable naming an additional log file
pub const LOG_FILE_ENV: &str = "GLYPHFMT_LOG_FILE";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default for development)
    Pretty,
    /// JSON format (default for production)
    Json,
}

impl FromStr for LogFormat
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidFormat(s.to_string())),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level (default for the CLI)
    Warn,
    /// Info level
    Info,
    /// Debug level
    Debug,
    /// Trace level (every skipped statement lookup)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LoggingError::InvalidLevel(s.to_string())),
        }
    }
}

/// Settings resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings
{
    /// Output format
    pub format: LogFormat,
    /// Level used when `RUST_LOG` holds no valid filter
    pub default_level: LogLevel,
    /// Optional file receiving a copy of every event
    pub file: Option<PathBuf>,
}

impl LogSettings
{
    /// Resolve settings from explicit variable values.
    ///
    /// Unparseable values fall back to the defaults (`pretty`, `fallback`).
    #[must_use]
    pub fn resolve(format: Option<&str>, rust_log: Option<&str>, file: Option<&str>, fallback: LogLevel) -> Self
    {
        Self {
            format: format.and_then(|s| s.parse().ok()).unwrap_or(LogFormat::Pretty),
            default_level: rust_log.and_then(|s| s.parse().ok()).unwrap_or(fallback),
            file: file.filter(|s| !s.is_empty()).map(PathBuf::from),
        }
    }

    /// Resolve settings from `GLYPHFMT_LOG_FORMAT`, `RUST_LOG` and `GLYPHFMT_LOG_FILE`.
    #[must_use]
    pub fn from_env(fallback: LogLevel) -> Self
    {
        let format = env::var(LOG_FORMAT_ENV).ok();
        let rust_log = env::var("RUST_LOG").ok();
        let file = env::var(LOG_FILE_ENV).ok();
        Self::resolve(format.as_deref(), rust_log.as_deref(), file.as_deref(), fallback)
    }
}

/// Keeps the background file writer alive; drop it at the end of `main`
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard
{
    _file: Option<WorkerGuard>,
}

/// Initialize logging with default settings
///
/// Reads configuration from environment variables:
/// - `RUST_LOG`: Log level filter (e.g., `debug`, `glyphfmt_core=trace`)
/// - `GLYPHFMT_LOG_FORMAT`: Output format (`json` or `pretty`, default: `pretty`)
/// - `GLYPHFMT_LOG_FILE`: Optional path to log file
///
/// Events go to stderr so they never mix with formatted output on stdout.
///
/// ## Errors
///
/// Returns an error if logging is already initialized.
pub fn init_logging() -> Result<LoggingGuard, LoggingError>
{
    init_with_settings(&LogSettings::from_env(LogLevel::Warn))
}

/// Initialize logging with explicit level and format
///
/// `GLYPHFMT_LOG_FILE` is still honored.
///
/// ## Errors
///
/// Returns an error if logging is already initialized.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<LoggingGuard, LoggingError>
{
    let mut settings = LogSettings::from_env(level);
    settings.format = format;
    settings.default_level = level;
    init_with_settings(&settings)
}

/// Initialize logging from resolved [`LogSettings`]
///
/// ## Errors
///
/// Returns an error if logging is already initialized, or the log file's
/// directory cannot be created, or the log file cannot be opened.
pub fn init_with_settings(settings: &LogSettings) -> Result<LoggingGuard, LoggingError>
{
    let level = Level::from(settings.default_level);
    // RUST_LOG can override the default level with more specific filters
    let env_filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let console_layer = match settings.format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true)
            .with_writer(io::stderr)
            .with_filter(env_filter())
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(io::stderr)
            .with_filter(env_filter())
            .boxed(),
    };

    let Some(file_path) = &settings.file else {
        Registry::default()
            .with(console_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;
        return Ok(LoggingGuard { _file: None });
    };

    let directory = file_path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    std::fs::create_dir_all(directory).map_err(LoggingError::FileError)?;
    let file_name = file_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidFile(file_path.display().to_string()))?;
    // The caller picks the file name, so no rotation
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| LoggingError::FileOpen {
            path: file_path.display().to_string(),
            reason: e.to_string(),
        })?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = match settings.format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false) // No ANSI in files
            .with_filter(env_filter())
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(env_filter())
            .boxed(),
    };

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;

    Ok(LoggingGuard { _file: Some(guard) })
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log format
    #[error("Unknown log format: {0}. Use 'pretty' or 'json'")]
    InvalidFormat(String),

    /// Invalid log level
    #[error("Unknown log level: {0}. Use 'error', 'warn', 'info', 'debug', or 'trace'")]
    InvalidLevel(String),

    /// Log file path has no file name
    #[error("Invalid log file path: {0}")]
    InvalidFile(String),

    /// Log file could not be opened for appending
    #[error("Cannot open log file {path}: {reason}")]
    FileOpen
    {
        /// Path from the settings
        path: String,
        /// Underlying appender error
        reason: String,
    },

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}
