//! Channel display color

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// RGB line color of a channel
///
/// Stored for the renderer; the core never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "black" => Color::rgb(0x00, 0x00, 0x00),
            "white" => Color::rgb(0xff, 0xff, 0xff),
            "red" => Color::rgb(0xff, 0x00, 0x00),
            "green" => Color::rgb(0x00, 0x80, 0x00),
            "blue" => Color::rgb(0x00, 0x00, 0xff),
            "yellow" => Color::YELLOW,
            "cyan" => Color::rgb(0x00, 0xff, 0xff),
            "magenta" => Color::rgb(0xff, 0x00, 0xff),
            "orange" => Color::rgb(0xff, 0xa5, 0x00),
            "gray" | "grey" => Color::rgb(0x80, 0x80, 0x80),
            _ => return None,
        };
        Some(color)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::YELLOW
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Parse `#rrggbb` or a basic color name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ConfigError::InvalidColor(s.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        Color::named(&trimmed.to_ascii_lowercase()).ok_or_else(invalid)
    }
}
