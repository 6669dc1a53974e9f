//! Level registry: the presentation rule of every [`LogLevel`].
//!
//! Built once from a [`LoggerConfig`] with [`LevelRegistry::from_config`] and
//! read-only afterwards. All color values are validated here, so a malformed
//! color can never reach a renderer.

use crate::config::{LoggerConfig, RawColor};
use crate::error::ConfigError;
use crate::types::LogLevel;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Conventional 16-color terminal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Bright black.
    Gray,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,
}

impl NamedColor {
    /// Parse a palette name. Accepts `gray`/`grey`/`blackBright` for bright
    /// black and the `<color>Bright` spellings.
    pub fn parse(name: &str) -> Option<NamedColor> {
        let color = match name {
            "black" => NamedColor::Black,
            "red" => NamedColor::Red,
            "green" => NamedColor::Green,
            "yellow" => NamedColor::Yellow,
            "blue" => NamedColor::Blue,
            "magenta" => NamedColor::Magenta,
            "cyan" => NamedColor::Cyan,
            "white" => NamedColor::White,
            "gray" | "grey" | "blackBright" => NamedColor::Gray,
            "redBright" => NamedColor::RedBright,
            "greenBright" => NamedColor::GreenBright,
            "yellowBright" => NamedColor::YellowBright,
            "blueBright" => NamedColor::BlueBright,
            "magentaBright" => NamedColor::MagentaBright,
            "cyanBright" => NamedColor::CyanBright,
            "whiteBright" => NamedColor::WhiteBright,
            _ => return None,
        };
        Some(color)
    }
}

/// A validated level color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelColor {
    Named(NamedColor),
    Hex { r: u8, g: u8, b: u8 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl LevelColor {
    /// Interpret a configured color for `level`.
    ///
    /// Precedence: a string containing `#` is hex, an array is RGB (exactly
    /// three channels), any other string is a palette name.
    pub fn from_raw(level: LogLevel, raw: &RawColor) -> Result<LevelColor, ConfigError> {
        match raw {
            RawColor::Text(text) if text.contains('#') => parse_hex(text).ok_or_else(|| {
                ConfigError::InvalidHex {
                    level: level.to_string(),
                    value: text.clone(),
                }
            }),
            RawColor::Channels(channels) => {
                let [r, g, b] = channels.as_slice() else {
                    return Err(ConfigError::RgbArity {
                        level: level.to_string(),
                        found: channels.len(),
                    });
                };
                Ok(LevelColor::Rgb {
                    r: channel(level, *r)?,
                    g: channel(level, *g)?,
                    b: channel(level, *b)?,
                })
            }
            RawColor::Text(name) => NamedColor::parse(name)
                .map(LevelColor::Named)
                .ok_or_else(|| ConfigError::UnknownColor {
                    level: level.to_string(),
                    name: name.clone(),
                }),
        }
    }
}

/// `#rgb` or `#rrggbb`.
fn parse_hex(text: &str) -> Option<LevelColor> {
    let digits = text.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    let (r, g, b) = match digits.len() {
        3 => {
            let nibble = |i: usize| byte(&digits[i..i + 1]).map(|n| n * 17);
            (nibble(0)?, nibble(1)?, nibble(2)?)
        }
        6 => (byte(&digits[0..2])?, byte(&digits[2..4])?, byte(&digits[4..6])?),
        _ => return None,
    };
    Some(LevelColor::Hex { r, g, b })
}

fn channel(level: LogLevel, value: i64) -> Result<u8, ConfigError> {
    u8::try_from(value).map_err(|_| ConfigError::RgbChannel {
        level: level.to_string(),
        value,
    })
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Presentation rule for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDefinition {
    pub level: LogLevel,
    pub color: LevelColor,
    /// Append events of this level to its file.
    pub write_to_file: bool,
    /// Structured console rendering.
    pub json: bool,
}

impl LevelDefinition {
    /// Lower-case canonical name.
    pub fn name(&self) -> &'static str {
        self.level.as_str()
    }
}

/// One [`LevelDefinition`] per [`LogLevel`], indexed by [`LogLevel::index`].
#[derive(Debug, Clone)]
pub struct LevelRegistry {
    levels: Vec<LevelDefinition>,
}

impl LevelRegistry {
    /// Build and validate every level definition.
    ///
    /// Global switches apply to every level unless its `[levels.<name>]`
    /// section overrides them. A level with no configured color is an
    /// [`ConfigError::UnknownColor`] with an empty name; the embedded
    /// defaults always provide one.
    pub fn from_config(config: &LoggerConfig) -> Result<Self, ConfigError> {
        if let Some(unknown) = config.levels.keys().find(|k| LogLevel::lookup(k).is_none()) {
            return Err(ConfigError::UnknownLevel(unknown.clone()));
        }

        let levels = LogLevel::ALL
            .into_iter()
            .map(|level| {
                let section = config.levels.get(level.as_str()).cloned().unwrap_or_default();
                let raw = section.color.unwrap_or_else(|| RawColor::Text(String::new()));
                Ok(LevelDefinition {
                    level,
                    color: LevelColor::from_raw(level, &raw)?,
                    write_to_file: section.write_to_file.unwrap_or(config.write_to_file),
                    json: section.json.unwrap_or(config.json),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { levels })
    }

    pub fn get(&self, level: LogLevel) -> &LevelDefinition {
        &self.levels[level.index()]
    }

    /// Resolve a level name, falling back to the info level for an absent or
    /// unregistered name.
    pub fn resolve(&self, name: Option<&str>) -> &LevelDefinition {
        self.get(LogLevel::resolve(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.levels.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
