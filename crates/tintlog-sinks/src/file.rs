//! File sink — appends one JSON record per event to `<dir>/<level>.log`.
//!
//! Writes are synchronous and unbuffered: the record is on disk (as far as
//! the OS is concerned) before [`FileSink::append`] returns. The directory is
//! created on first use.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tintlog_core::{LogLevel, LogRecord, SinkError};

/// Extension of every level file.
pub const LOG_EXTENSION: &str = "log";

/// Record terminator.
const LINE_END: &str = "\r\n";

/// Permission bits requested at creation (0666 before umask).
#[cfg(unix)]
const FILE_MODE: u32 = 0o666;

#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file that holds `level`'s records.
    pub fn path_for(&self, level: LogLevel) -> PathBuf {
        self.dir.join(format!("{}.{LOG_EXTENSION}", level.as_str()))
    }

    /// Append one record and return the file it went to.
    pub fn append(
        &self,
        level: LogLevel,
        message: &str,
        timestamp: &str,
    ) -> Result<PathBuf, SinkError> {
        self.ensure_dir()?;

        let record = LogRecord::new(level, timestamp, message);
        let mut line = serde_json::to_string(&record)?;
        line.push_str(LINE_END);

        let path = self.path_for(level);
        let append_err = |source| SinkError::Append {
            path: path.clone(),
            source,
        };

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options.open(&path).map_err(append_err)?;
        file.write_all(line.as_bytes()).map_err(append_err)?;
        tracing::trace!(path = %path.display(), "appended log record");

        Ok(path)
    }

    fn ensure_dir(&self) -> Result<(), SinkError> {
        if self.dir.is_dir() {
            return Ok(());
        }
        match std::fs::create_dir_all(&self.dir) {
            Ok(()) => {
                tracing::debug!(dir = %self.dir.display(), "created log directory");
                Ok(())
            }
            // Lost a race with another writer.
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && self.dir.is_dir() => Ok(()),
            Err(source) => Err(SinkError::CreateDir {
                path: self.dir.clone(),
                source,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const TS: &str = "2024-01-15T10:00:00";

    #[test]
    fn creates_directory_lazily() {
        let tmp = TempDir::new().unwrap();
        let sink = FileSink::new(tmp.path().join("logs"));
        assert!(!sink.dir().exists());

        let path = sink.append(LogLevel::Info, "Hello World!", TS).unwrap();
        assert!(sink.dir().is_dir());
        assert_eq!(path, tmp.path().join("logs").join("info.log"));
    }

    #[test]
    fn record_line_is_json_terminated_by_crlf() {
        let tmp = TempDir::new().unwrap();
        let sink = FileSink::new(tmp.path());
        let path = sink.append(LogLevel::Error, "disk full", TS).unwrap();
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "{\"level\":\"ERROR\",\"timestamp\":\"2024-01-15T10:00:00\",\"message\":\"disk full\"}\r\n"
        );
    }

    #[test]
    fn repeated_appends_accumulate_in_order() {
        let tmp = TempDir::new().unwrap();
        let sink = FileSink::new(tmp.path().join("logs"));
        sink.append(LogLevel::Warn, "first", TS).unwrap();
        let path = sink.append(LogLevel::Warn, "second", TS).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let messages: Vec<String> = content
            .split_terminator("\r\n")
            .map(|l| serde_json::from_str::<LogRecord>(l).unwrap().message)
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn message_with_quotes_stays_one_record() {
        let tmp = TempDir::new().unwrap();
        let sink = FileSink::new(tmp.path());
        let path = sink.append(LogLevel::Info, "line \"one\"\nline two", TS).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.matches("\r\n").count(), 1);
    }

    #[test]
    fn directory_blocked_by_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("logs");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = FileSink::new(&blocker).append(LogLevel::Info, "x", TS).unwrap_err();
        assert!(
            matches!(err, SinkError::CreateDir { .. } | SinkError::Append { .. }),
            "{err}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_mode_excludes_execute_bits() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let path = FileSink::new(tmp.path()).append(LogLevel::Info, "x", TS).unwrap();
        let mode = std::fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0);
    }
}
