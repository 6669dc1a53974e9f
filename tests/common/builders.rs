//! Test builders — a logger wired to a temporary log directory and an
//! in-memory console.
//!
//! These are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tintlog::{Logger, LoggerConfig};

// ---------------------------------------------------------------------------
// SharedBuffer
// ---------------------------------------------------------------------------

/// A clonable in-memory console. Clones share the same bytes.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("console output is UTF-8")
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

// ---------------------------------------------------------------------------
// TestLogger
// ---------------------------------------------------------------------------

/// A [`Logger`] whose log directory lives in a fresh temp dir and whose
/// console is a [`SharedBuffer`]. The directory is removed on drop.
pub struct TestLogger {
    pub logger: Logger,
    pub console: SharedBuffer,
    dir: TempDir,
}

impl TestLogger {
    /// `config` is used as given except for `logs_dir`, which is pointed at
    /// `<tempdir>/logs` (not created until the first append).
    pub fn new(config: LoggerConfig) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let console = SharedBuffer::default();
        let config = config.with_logs_dir(dir.path().join("logs"));
        let logger = Logger::with_console_writer(config, console.clone()).expect("valid config");
        Self { logger, console, dir }
    }

    /// Defaults with colors off.
    pub fn quiet() -> Self {
        Self::new(quiet_config())
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.dir.path().join("logs")
    }

    pub fn level_file(&self, name: &str) -> PathBuf {
        self.logs_dir().join(format!("{name}.log"))
    }

    /// Raw lines of a level file, terminators stripped.
    pub fn file_lines(&self, name: &str) -> Vec<String> {
        let content = std::fs::read_to_string(self.level_file(name)).expect("read level file");
        content.split_terminator("\r\n").map(str::to_string).collect()
    }
}

/// Built-in defaults with colors off, so console text can be compared
/// literally.
pub fn quiet_config() -> LoggerConfig {
    LoggerConfig::defaults().with_colored(false)
}
