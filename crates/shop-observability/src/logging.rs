//! Request-scoped structured logging.

use std::fmt::{self, Write as _};

use serde::Serialize;
use serde_json::{Map, Value};
use shop_core::RequestId;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wire format for emitted lines.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// Machine-readable JSON lines for log aggregation.
    #[default]
    Json,
    /// Readable lines for local development.
    Human,
}

/// One log line, prior to formatting.
///
/// Extra fields live in a `serde_json::Map`, so both output formats emit
/// them in key order and repeated runs produce identical lines.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Severity.
    pub level: LogLevel,
    /// Message text.
    pub message: String,
    /// Correlating request ID.
    pub request_id: String,
    /// Page name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Extra structured fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// Microseconds since request start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Serialize to a JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Render the readable form.
    pub fn to_human(&self) -> String {
        let mut line = format!("[{}] {}", self.level, self.message);
        if let Some(elapsed) = self.elapsed_us {
            let _ = write!(line, " ({}us)", elapsed);
        }
        for (i, (key, value)) in self.fields.iter().enumerate() {
            line.push_str(if i == 0 { " | " } else { " " });
            let _ = write!(line, "{}={}", key, value);
        }
        line
    }
}

/// Request-scoped logger.
///
/// Created once per navigation; every entry carries the request ID and the
/// time elapsed since the logger was set up.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    page: Option<String>,
    route: Option<String>,
    started: std::time::Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    /// Logger for one request.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            page: None,
            route: None,
            started: std::time::Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Set the page name.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Attach the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Drop entries below `level`.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Choose the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Emit a trace line.
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, Map::new());
    }

    /// Emit a debug line.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, Map::new());
    }

    /// Emit an info line.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, Map::new());
    }

    /// Emit a warn line.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, Map::new());
    }

    /// Emit an error line.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, Map::new());
    }

    /// Begin a fluent info entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Begin a fluent warn entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Begin a fluent error entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Build the entry for a message without emitting it.
    pub fn entry(&self, level: LogLevel, message: &str, fields: Map<String, Value>) -> LogEntry {
        LogEntry {
            level,
            message: message.to_string(),
            request_id: self.request_id.to_string(),
            page: self.page.clone(),
            route: self.route.clone(),
            fields,
            elapsed_us: Some(self.started.elapsed().as_micros() as u64),
        }
    }

    fn log(&self, level: LogLevel, message: &str, fields: Map<String, Value>) {
        if level < self.min_level {
            return;
        }
        let entry = self.entry(level, message, fields);
        // Stderr - Spin captures it.
        match self.format {
            LogFormat::Json => eprintln!("{}", entry.to_json()),
            LogFormat::Human => eprintln!("{}", entry.to_human()),
        }
    }
}

/// Accumulates fields for one entry before emission.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: Map<String, Value>,
}

impl<'a> LogBuilder<'a> {
    fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: Map::new(),
        }
    }

    /// Attach a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), Value::from(value.into()));
        self
    }

    /// Attach an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    /// Emit the finished entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}
