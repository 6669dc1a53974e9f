//! tintlog-sinks — the destinations an event can reach.
//!
//! The console renderer and file sink are synchronous; only retrieval
//! through [`LogReader`] is async.

pub mod console;
pub mod file;
pub mod reader;

pub use console::ConsoleRenderer;
pub use file::FileSink;
pub use reader::LogReader;
