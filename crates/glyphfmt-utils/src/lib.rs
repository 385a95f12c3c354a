//! # glyphfmt Utilities
//!
//! Shared utilities, logging, and configuration helpers for glyphfmt.
//!
//! This crate provides the logging setup used by the glyphfmt binaries,
//! built on `tracing` and `tracing-subscriber`.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_with_level, init_with_settings, LogFormat, LogLevel, LogSettings, LoggingError, LoggingGuard};
pub use tracing::{debug, error, info, trace, warn};
