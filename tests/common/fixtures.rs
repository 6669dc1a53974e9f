//! Static record corpora used across harnesses.

use std::path::Path;

/// Two valid records as the file sink writes them.
pub const RECORDS_INFO: &[&str] = &[
    r#"{"level":"INFO","timestamp":"2024-01-15T10:00:00","message":"Server started"}"#,
    r#"{"level":"INFO","timestamp":"2024-01-15T10:00:05","message":"Graceful shutdown complete"}"#,
];

/// The same shape with spaces after separators.
pub const RECORDS_SPACED: &[&str] = &[
    r#"{"level": "WARN", "timestamp": "2024-01-15T10:00:02", "message": "Slow query"}"#,
    r#"{"level": "WARN", "timestamp": "2024-01-15T10:00:03", "message": "Disk usage at 92%"}"#,
];

/// A line no reader should accept.
pub const MALFORMED_RECORD: &str =
    r#"{"level": "INFO", "timestamp": "2024-01-15T10:00:04", "message": "unterminated"#;

/// Write `lines` to `<dir>/<file>`, each terminated by CRLF, creating `dir`.
pub fn write_records(dir: &Path, file: &str, lines: &[&str]) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let body: String = lines.iter().map(|l| format!("{l}\r\n")).collect();
    std::fs::write(dir.join(file), body)
}
