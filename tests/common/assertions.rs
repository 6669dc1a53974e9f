//! Domain-specific assertion macros for tintlog harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which sink produced the unexpected output.

/// Assert that a decoded entry has the given level and message.
///
/// ```rust
/// assert_entry!(entries[0], "INFO", "Hello World!");
/// ```
#[macro_export]
macro_rules! assert_entry {
    ($entry:expr, $level:expr, $message:expr) => {{
        let entry: &tintlog::LogEntry = &$entry;
        pretty_assertions::assert_eq!(
            (entry.level.as_str(), entry.message.as_str()),
            ($level, $message),
            "assert_entry! failed for entry with timestamp {:?}",
            entry.timestamp
        );
    }};
}

/// Assert that captured console output contains a substring.
#[macro_export]
macro_rules! assert_console_contains {
    ($console:expr, $needle:expr) => {{
        let text = $console.contents();
        let needle: &str = $needle;
        if !text.contains(needle) {
            panic!(
                "assert_console_contains! failed: {:?} not found.\n  Console output:\n{}",
                needle, text
            );
        }
    }};
}

/// Assert that a level file was never created.
#[macro_export]
macro_rules! assert_no_level_file {
    ($harness:expr, $name:expr) => {{
        let path = $harness.level_file($name);
        if path.exists() {
            panic!(
                "assert_no_level_file! failed: {} exists with content:\n{}",
                path.display(),
                std::fs::read_to_string(&path).unwrap_or_default()
            );
        }
    }};
}

/// Parse a structured console line.
pub fn json_line(line: &str) -> serde_json::Value {
    serde_json::from_str(line)
        .unwrap_or_else(|e| panic!("console line is not JSON ({e}): {line}"))
}
