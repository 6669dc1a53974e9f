//! Console renderer — turns an event into one or two colored lines on a
//! writer (stdout unless the caller supplies another).
//!
//! Two presentations, selected per level:
//!
//! ```text
//! json   {"level":"info","timestamp":"2024-01-15T10:00:00","message":"Hello"}
//! plain  [INFO][2024-01-15T10:00:00]: Hello
//! ```
//!
//! With an error attached, JSON mode swaps the message for the colored error
//! message and prints the stack on a second line; plain mode prints
//! `<message> \n <stack>` as the body.

use crossterm::style::{style, Color, Stylize};
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use tintlog_core::{ErrorReport, LevelColor, LevelDefinition, LogEntry, NamedColor, SinkError};

/// Color of the retrieval notice.
const NOTICE_COLOR: Color = Color::DarkYellow;

/// Map a validated level color onto a crossterm [`Color`].
///
/// crossterm names the bright palette half plainly (`Red` is SGR 91) and the
/// normal half `Dark*` (`DarkRed` is SGR 31).
pub fn terminal_color(color: LevelColor) -> Color {
    match color {
        LevelColor::Named(named) => match named {
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::DarkRed,
            NamedColor::Green => Color::DarkGreen,
            NamedColor::Yellow => Color::DarkYellow,
            NamedColor::Blue => Color::DarkBlue,
            NamedColor::Magenta => Color::DarkMagenta,
            NamedColor::Cyan => Color::DarkCyan,
            NamedColor::White => Color::Grey,
            NamedColor::Gray => Color::DarkGrey,
            NamedColor::RedBright => Color::Red,
            NamedColor::GreenBright => Color::Green,
            NamedColor::YellowBright => Color::Yellow,
            NamedColor::BlueBright => Color::Blue,
            NamedColor::MagentaBright => Color::Magenta,
            NamedColor::CyanBright => Color::Cyan,
            NamedColor::WhiteBright => Color::White,
        },
        LevelColor::Hex { r, g, b } | LevelColor::Rgb { r, g, b } => Color::Rgb { r, g, b },
    }
}

pub struct ConsoleRenderer {
    out: Mutex<Box<dyn Write + Send>>,
    colored: bool,
}

impl ConsoleRenderer {
    pub fn stdout(colored: bool) -> Self {
        Self::new(std::io::stdout(), colored)
    }

    pub fn new(writer: impl Write + Send + 'static, colored: bool) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
            colored,
        }
    }

    /// Render one event and write it. Every call produces exactly one
    /// emission regardless of level.
    pub fn render(
        &self,
        def: &LevelDefinition,
        message: &str,
        error: Option<&ErrorReport>,
        timestamp: &str,
    ) -> Result<(), SinkError> {
        let lines = self.format_event(def, message, error, timestamp)?;
        self.write_lines(&lines)
    }

    /// The lines [`render`](Self::render) would write, without writing them.
    pub fn format_event(
        &self,
        def: &LevelDefinition,
        message: &str,
        error: Option<&ErrorReport>,
        timestamp: &str,
    ) -> Result<Vec<String>, SinkError> {
        let color = terminal_color(def.color);

        if def.json {
            let message = match error {
                Some(err) => self.paint_json_string(&err.message, color)?,
                None => serde_json::to_string(message)?,
            };
            let line = format!(
                "{{\"level\":{},\"timestamp\":{},\"message\":{}}}",
                serde_json::to_string(def.name())?,
                serde_json::to_string(timestamp)?,
                message,
            );
            let mut lines = vec![line];
            if let Some(err) = error {
                lines.push(self.paint(&err.stack, color));
            }
            Ok(lines)
        } else {
            let header = format!("[{}][{}]", def.level, timestamp);
            let body = match error {
                Some(err) => format!("{} \n {}", err.message, err.stack),
                None => message.to_string(),
            };
            Ok(vec![format!("{}: {}", self.paint(&header, color), self.paint(&body, color))])
        }
    }

    /// Announce a completed retrieval and dump its entries.
    pub fn notice(&self, name: &str, entries: &[LogEntry]) -> Result<(), SinkError> {
        let banner = format!("{} logs have been accessed.", name.to_uppercase());
        let lines = [
            self.paint(&banner, NOTICE_COLOR),
            serde_json::to_string_pretty(entries)?,
        ];
        self.write_lines(&lines)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// JSON-encode `text` and color the contents between the quotes, so the
    /// line is still valid JSON once escapes are stripped.
    fn paint_json_string(&self, text: &str, color: Color) -> Result<String, SinkError> {
        let quoted = serde_json::to_string(text)?;
        let inner = &quoted[1..quoted.len() - 1];
        Ok(format!("\"{}\"", self.paint(inner, color)))
    }

    fn write_lines(&self, lines: &[impl AsRef<str>]) -> Result<(), SinkError> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        for line in lines {
            writeln!(out, "{}", line.as_ref()).map_err(SinkError::Console)?;
        }
        out.flush().map_err(SinkError::Console)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
