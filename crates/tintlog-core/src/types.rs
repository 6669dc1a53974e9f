//! Core types for tintlog-core.
//!
//! This module defines the data that flows through the logger: the closed
//! [`LogLevel`] enumeration, the caller-facing [`LogEvent`] and its
//! [`ErrorReport`] payload, and the persisted [`LogRecord`] shape that the
//! file sink writes and the reader decodes.

use serde::{Deserialize, Serialize};

/// Message used when an event carries no explicit message.
pub const DEFAULT_MESSAGE: &str = "Unidentified Error";

/// Local date-time format shared by console output and file records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current local time formatted with [`TIMESTAMP_FORMAT`] (second precision).
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// Every level the registry knows about.
///
/// Level names are matched exactly against [`LogLevel::as_str`]; anything
/// else resolves to [`LogLevel::FALLBACK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Access,
    System,
    Database,
    Event,
    Warn,
    Debug,
    Info,
    Error,
    Fatal,
}

impl LogLevel {
    /// All levels in registry order.
    pub const ALL: [LogLevel; 9] = [
        LogLevel::Access,
        LogLevel::System,
        LogLevel::Database,
        LogLevel::Event,
        LogLevel::Warn,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Level used when an event names no level or an unregistered one.
    pub const FALLBACK: LogLevel = LogLevel::Info;

    /// Lower-case registry key, also used as the log file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Access => "access",
            LogLevel::System => "system",
            LogLevel::Database => "database",
            LogLevel::Event => "event",
            LogLevel::Warn => "warn",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }

    /// Exact, case-sensitive lookup of a registry key.
    pub fn lookup(name: &str) -> Option<LogLevel> {
        LogLevel::ALL.into_iter().find(|level| level.as_str() == name)
    }

    /// Resolve an optional level name to a registered level.
    ///
    /// A missing or unknown name is not an error: it is silently corrected
    /// to [`LogLevel::FALLBACK`].
    pub fn resolve(name: Option<&str>) -> LogLevel {
        match name.and_then(LogLevel::lookup) {
            Some(level) => level,
            // Unknown or absent level: fall back to info.
            None => LogLevel::FALLBACK,
        }
    }

    /// Position in [`LogLevel::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

// ---------------------------------------------------------------------------
// Error payload
// ---------------------------------------------------------------------------

/// An error attached to a [`LogEvent`].
///
/// The `stack` is only ever rendered to the console; file records never
/// see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    pub stack: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// Build a report from any [`std::error::Error`], walking its source
    /// chain into the stack text.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let message = err.to_string();
        let mut stack = format!("Error: {message}");
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str(&format!("\n    Caused by: {cause}"));
            source = cause.source();
        }
        Self { message, stack }
    }
}

impl From<anyhow::Error> for ErrorReport {
    fn from(err: anyhow::Error) -> Self {
        Self {
            message: err.to_string(),
            stack: format!("Error: {err:?}"),
        }
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(err: std::io::Error) -> Self {
        Self::from_error(&err)
    }
}

/// Argument accepted by the `error` and `fatal` convenience calls: plain
/// text is logged as the message, an error as the event's error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Error(ErrorReport),
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<ErrorReport> for Payload {
    fn from(report: ErrorReport) -> Self {
        Payload::Error(report)
    }
}

impl From<anyhow::Error> for Payload {
    fn from(err: anyhow::Error) -> Self {
        Payload::Error(err.into())
    }
}

impl From<std::io::Error> for Payload {
    fn from(err: std::io::Error) -> Self {
        Payload::Error(err.into())
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Input to the facade.
///
/// `level` is kept as free text because callers may pass names the registry
/// does not know; resolution happens inside the logger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEvent {
    pub level: Option<String>,
    pub message: Option<String>,
    pub error: Option<ErrorReport>,
}

impl LogEvent {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: Some(level.into()),
            ..Self::default()
        }
    }

    /// Event pre-filled with a registered level.
    pub fn at(level: LogLevel) -> Self {
        Self::new(level.as_str())
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn error(mut self, error: impl Into<ErrorReport>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Route a [`Payload`] to `message` or `error` by its kind.
    pub fn payload(self, payload: Payload) -> Self {
        match payload {
            Payload::Text(text) => self.message(text),
            Payload::Error(report) => self.error(report),
        }
    }

    /// The message that sinks receive: the explicit message, else
    /// [`DEFAULT_MESSAGE`]. The error's text never substitutes for it.
    pub fn effective_message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }
}

// ---------------------------------------------------------------------------
// Persisted records
// ---------------------------------------------------------------------------

/// One line of a level file. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Upper-case level name.
    pub level: String,
    /// Local time, [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    pub message: String,
}

/// A record decoded back from a level file.
pub type LogEntry = LogRecord;

impl LogRecord {
    pub fn new(level: LogLevel, timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: level.to_string(),
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
