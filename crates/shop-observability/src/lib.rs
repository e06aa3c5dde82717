//! Observability infrastructure for the admin pages.
//!
//! Currently structured logging: one logger per request, correlated by
//! request ID, emitting JSON (production) or human-readable (development)
//! lines to stderr where Spin captures them.

mod logging;

pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
