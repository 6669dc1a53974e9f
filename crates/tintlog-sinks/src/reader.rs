//! Log reader — decodes a level file back into [`LogEntry`] values.
//!
//! Reading is all-or-nothing: the first unreadable or malformed line fails
//! the whole call and no entries are returned.

use crate::file::LOG_EXTENSION;
use std::path::{Path, PathBuf};
use tintlog_core::{LogEntry, ReadError};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone)]
pub struct LogReader {
    dir: PathBuf,
}

impl LogReader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `info` → `<dir>/info.log`; a name that already contains a dot is
    /// used as given.
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        if name.contains('.') {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{name}.{LOG_EXTENSION}"))
        }
    }

    /// Read every record of `name` in file order.
    pub async fn read(&self, name: &str) -> Result<Vec<LogEntry>, ReadError> {
        let path = self.resolve_path(name);
        let file = File::open(&path).await.map_err(|source| ReadError::Open {
            path: path.clone(),
            source,
        })?;

        let mut lines = BufReader::new(file).lines();
        let mut entries = Vec::new();
        let mut line_no = 0usize;

        while let Some(line) = lines.next_line().await.map_err(|source| ReadError::Io {
            path: path.clone(),
            source,
        })? {
            line_no += 1;
            let entry = serde_json::from_str::<LogEntry>(&line).map_err(|source| {
                ReadError::Malformed {
                    path: path.clone(),
                    line: line_no,
                    source,
                }
            })?;
            entries.push(entry);
        }

        tracing::debug!(path = %path.display(), entries = entries.len(), "read log file");
        Ok(entries)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
