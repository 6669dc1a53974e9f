//! tintlog — leveled, colored, structured logging with file persistence.
//!
//! Callers emit events through a [`Logger`]; each event is rendered to the
//! console in its level's color and, when the level is configured to persist,
//! appended to `<logs_dir>/<level>.log` as one JSON record. Persisted records
//! are read back with [`Logger::read_log`].
//!
//! # Architecture
//!
//! ```text
//! LogEvent ──► Logger ──► LevelRegistry::resolve
//!                │
//!                ├──► ConsoleRenderer  (always)
//!                └──► FileSink         (level.write_to_file)
//!
//! Logger::read_log ──► LogReader ──► Vec<LogEntry>
//! ```
//!
//! Writes are synchronous; retrieval is async on tokio.
//!
//! ```no_run
//! use tintlog::{LogEvent, Logger, LoggerConfig};
//!
//! let logger = Logger::new(LoggerConfig::defaults())?;
//! logger.log(LogEvent::new("info").message("Hello World!"))?;
//! logger.warn("This is a warning!")?;
//! # Ok::<(), tintlog::LoggerError>(())
//! ```

pub mod logger;

pub use logger::Logger;
pub use tintlog_core::types;
pub use tintlog_core::{
    ConfigError, ErrorReport, LevelColor, LevelDefinition, LevelRegistry, LogEntry, LogEvent,
    LogLevel, LogRecord, LoggerConfig, LoggerError, NamedColor, Payload, RawColor, ReadError,
    SinkError,
};
pub use tintlog_sinks::{ConsoleRenderer, FileSink, LogReader};
