//! Error taxonomy shared by the registry, the sinks and the facade.
//!
//! An unknown level is deliberately absent here: it is corrected to the
//! fallback level, never reported.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid logger configuration. Raised while the registry is built, before
/// any event is logged.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "logger level [{level}] is set for RGB but has {found} values; \
         an RGB color must be an array of exactly 3 values"
    )]
    RgbArity { level: String, found: usize },

    #[error("logger level [{level}] has RGB value {value} outside 0..=255")]
    RgbChannel { level: String, value: i64 },

    #[error("logger level [{level}] has malformed hex color {value:?}")]
    InvalidHex { level: String, value: String },

    #[error("logger level [{level}] names unknown color {name:?}")]
    UnknownColor { level: String, name: String },

    #[error("configuration defines unknown logger level {0:?}")]
    UnknownLevel(String),

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Failure while writing an event to the console or a level file.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to {path}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to console: {0}")]
    Console(#[source] std::io::Error),

    #[error("failed to encode log record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure while retrieving a level file. No partial result accompanies it.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record at {path}:{line}: {source}")]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything the facade can surface to its caller.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error(transparent)]
    Read(#[from] ReadError),
}
