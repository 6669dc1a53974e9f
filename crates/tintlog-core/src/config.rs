//! Configuration types for tintlog.
//!
//! [`LoggerConfig::load`] layers a user TOML file over the embedded defaults.
//! [`LoggerConfig::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests). The resulting value is handed to the logger
//! once at startup; there is no process-wide mutable configuration.

use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
write_to_file = false
json          = true
colored       = true
logs_dir      = "./logs"

[levels.access]
color = "gray"

[levels.system]
color = "blue"

[levels.database]
color = "cyanBright"

[levels.event]
color = "magenta"

[levels.warn]
color = "yellow"

[levels.debug]
color = "cyan"

[levels.info]
color = "green"

[levels.error]
color = "red"

[levels.fatal]
color = "redBright"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level logger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    /// Persist every level to `<logs_dir>/<level>.log` unless the level
    /// overrides it.
    #[serde(default)]
    pub write_to_file: bool,
    /// Structured (JSON) console output instead of `[LEVEL][time]: message`.
    #[serde(default = "default_json")]
    pub json: bool,
    /// Emit terminal color escapes.
    #[serde(default = "default_colored")]
    pub colored: bool,
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,
    /// Per-level presentation, keyed by lower-case level name.
    #[serde(default)]
    pub levels: BTreeMap<String, LevelConfig>,
}

/// `[levels.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelConfig {
    pub color: Option<RawColor>,
    pub write_to_file: Option<bool>,
    pub json: Option<bool>,
}

/// A color exactly as written in configuration. Interpreted by
/// [`LevelColor::from_raw`](crate::registry::LevelColor::from_raw).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawColor {
    /// A color name or a `#`-prefixed hex string.
    Text(String),
    /// RGB channels; valid only with exactly three entries.
    Channels(Vec<i64>),
}

impl From<&str> for RawColor {
    fn from(text: &str) -> Self {
        RawColor::Text(text.to_string())
    }
}

impl From<Vec<i64>> for RawColor {
    fn from(channels: Vec<i64>) -> Self {
        RawColor::Channels(channels)
    }
}

fn default_json() -> bool { true }
fn default_colored() -> bool { true }
fn default_logs_dir() -> PathBuf { PathBuf::from("./logs") }

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl LoggerConfig {
    /// Load from `path`, layered on top of the built-in defaults. A missing
    /// file leaves the defaults untouched.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_ref()).required(false))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Parse `src` as TOML layered over the built-in defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn with_write_to_file(mut self, write_to_file: bool) -> Self {
        self.write_to_file = write_to_file;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn with_logs_dir(mut self, logs_dir: impl Into<PathBuf>) -> Self {
        self.logs_dir = logs_dir.into();
        self
    }

    pub fn with_level_color(mut self, level: LogLevel, color: impl Into<RawColor>) -> Self {
        self.level_mut(level).color = Some(color.into());
        self
    }

    /// Override the file switch for a single level.
    pub fn with_level_write_to_file(mut self, level: LogLevel, write_to_file: bool) -> Self {
        self.level_mut(level).write_to_file = Some(write_to_file);
        self
    }

    fn level_mut(&mut self, level: LogLevel) -> &mut LevelConfig {
        self.levels.entry(level.as_str().to_string()).or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
