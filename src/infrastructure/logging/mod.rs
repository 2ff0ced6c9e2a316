//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Compact, pretty or JSON output on stderr
//! - Optional rolling JSON log files

pub mod logger;

pub use logger::LoggerImpl;
