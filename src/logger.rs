//! The [`Logger`] facade: every event enters through [`Logger::log`] and fans
//! out to the console (always) and the level file (when the level asks for
//! it).

use std::io::Write;
use tintlog_core::types::timestamp_now;
use tintlog_core::{
    LevelRegistry, LogEntry, LogEvent, LogLevel, LoggerConfig, LoggerError, Payload,
};
use tintlog_sinks::{ConsoleRenderer, FileSink, LogReader};

pub struct Logger {
    registry: LevelRegistry,
    console: ConsoleRenderer,
    file: FileSink,
    reader: LogReader,
}

impl Logger {
    /// Build a logger that renders to stdout.
    ///
    /// Fails if any level's color is invalid; nothing is logged in that case.
    pub fn new(config: LoggerConfig) -> Result<Self, LoggerError> {
        let console = ConsoleRenderer::stdout(config.colored);
        Self::with_console(config, console)
    }

    /// Build a logger whose console output goes to `writer`.
    pub fn with_console_writer(
        config: LoggerConfig,
        writer: impl Write + Send + 'static,
    ) -> Result<Self, LoggerError> {
        let console = ConsoleRenderer::new(writer, config.colored);
        Self::with_console(config, console)
    }

    fn with_console(config: LoggerConfig, console: ConsoleRenderer) -> Result<Self, LoggerError> {
        Ok(Self {
            registry: LevelRegistry::from_config(&config)?,
            console,
            file: FileSink::new(&config.logs_dir),
            reader: LogReader::new(&config.logs_dir),
        })
    }

    /// The validated level definitions this logger renders with.
    pub fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    /// Emit one event.
    ///
    /// The level is resolved with info as the fallback. The console always
    /// sees the event. When the level persists to file, the file receives the
    /// effective message only: an error-only event is recorded as
    /// [`DEFAULT_MESSAGE`](tintlog_core::types::DEFAULT_MESSAGE), never with
    /// the error's text.
    pub fn log(&self, event: LogEvent) -> Result<(), LoggerError> {
        let def = self.registry.resolve(event.level.as_deref());
        let message = event.effective_message();
        let timestamp = timestamp_now();

        self.console
            .render(def, message, event.error.as_ref(), &timestamp)?;

        if def.write_to_file {
            self.file.append(def.level, message, &timestamp)?;
        }
        Ok(())
    }

    /// Read the entries of a level file (or any file under the log
    /// directory, when `name` has an extension), then print a notice and the
    /// entries to the console.
    pub async fn read_log(&self, name: &str) -> Result<Vec<LogEntry>, LoggerError> {
        let entries = self.reader.read(name).await?;
        self.console.notice(name, &entries)?;
        Ok(entries)
    }

    fn log_message(&self, level: LogLevel, message: impl Into<String>) -> Result<(), LoggerError> {
        self.log(LogEvent::at(level).message(message))
    }

    pub fn access(&self, message: impl Into<String>) -> Result<(), LoggerError> {
        self.log_message(LogLevel::Access, message)
    }

    pub fn system(&self, message: impl Into<String>) -> Result<(), LoggerError> {
        self.log_message(LogLevel::System, message)
    }

    pub fn database(&self, message: impl Into<String>) -> Result<(), LoggerError> {
        self.log_message(LogLevel::Database, message)
    }

    pub fn event(&self, message: impl Into<String>) -> Result<(), LoggerError> {
        self.log_message(LogLevel::Event, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> Result<(), LoggerError> {
        self.log_message(LogLevel::Warn, message)
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<(), LoggerError> {
        self.log_message(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Result<(), LoggerError> {
        self.log_message(LogLevel::Info, message)
    }

    /// Text is logged as the message; an error as the event's error.
    pub fn error(&self, payload: impl Into<Payload>) -> Result<(), LoggerError> {
        self.log(LogEvent::at(LogLevel::Error).payload(payload.into()))
    }

    /// Text is logged as the message; an error as the event's error.
    pub fn fatal(&self, payload: impl Into<Payload>) -> Result<(), LoggerError> {
        self.log(LogEvent::at(LogLevel::Fatal).payload(payload.into()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet(dir: &std::path::Path) -> LoggerConfig {
        LoggerConfig::defaults().with_colored(false).with_logs_dir(dir)
    }

    #[test]
    fn invalid_color_fails_construction() {
        let tmp = TempDir::new().unwrap();
        let cfg = quiet(tmp.path()).with_level_color(LogLevel::Info, vec![1i64, 2]);
        let err = Logger::with_console_writer(cfg, std::io::sink()).err().unwrap();
        assert!(matches!(err, LoggerError::Config(_)));
    }

    #[test]
    fn default_config_never_touches_disk() {
        let tmp = TempDir::new().unwrap();
        let logs = tmp.path().join("logs");
        let logger = Logger::with_console_writer(quiet(&logs), std::io::sink()).unwrap();
        logger.info("Hello World!").unwrap();
        logger.fatal("disk full").unwrap();
        assert!(!logs.exists());
    }

    #[test]
    fn append_failure_propagates() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("logs");
        std::fs::write(&blocker, b"file in the way").unwrap();

        let cfg = quiet(&blocker).with_write_to_file(true);
        let logger = Logger::with_console_writer(cfg, std::io::sink()).unwrap();
        let err = logger.warn("x").unwrap_err();
        assert!(matches!(err, LoggerError::Sink(_)), "{err}");
    }
}
