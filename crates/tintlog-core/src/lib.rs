//! tintlog-core — shared building blocks for the tintlog logger.
//!
//! # Architecture
//!
//! ```text
//!             ┌──► Console renderer
//! Logger ─────┤
//!   │         └──► File sink ──► <logs_dir>/<level>.log ──► Log reader
//!   │
//!   └── LevelRegistry (built once from LoggerConfig)
//! ```
//!
//! This crate owns the level registry, its configuration and the types that
//! cross the sink boundary. The sinks live in `tintlog-sinks`; the facade in
//! the `tintlog` crate.

pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::{LevelConfig, LoggerConfig, RawColor};
pub use error::{ConfigError, LoggerError, ReadError, SinkError};
pub use registry::{LevelColor, LevelDefinition, LevelRegistry, NamedColor};
pub use types::{ErrorReport, LogEntry, LogEvent, LogLevel, LogRecord, Payload};
