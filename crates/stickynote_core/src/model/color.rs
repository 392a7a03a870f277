//! RGB color values and hex encoding.
//!
//! # Invariants
//! - `to_hex` always yields `#RRGGBB` uppercase.
//! - `from_hex` accepts exactly six hex digits, with or without `#`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{6})$").expect("valid hex color regex"));

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const RED: Rgb = Rgb::new(0xFF, 0x3B, 0x30);
    pub const ORANGE: Rgb = Rgb::new(0xFF, 0x95, 0x00);
    pub const BLUE: Rgb = Rgb::new(0x00, 0x7A, 0xFF);
    pub const PURPLE: Rgb = Rgb::new(0xAF, 0x52, 0xDE);

    /// Text colors offered by the properties bar, in display order.
    pub const PALETTE: [Rgb; 5] = [Rgb::BLACK, Rgb::RED, Rgb::ORANGE, Rgb::BLUE, Rgb::PURPLE];

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parses `#RRGGBB` / `RRGGBB`, trimming surrounding whitespace.
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = HEX_COLOR_RE
            .captures(value.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| ColorParseError(value.to_string()))?;

        let channel = |offset: usize| {
            u8::from_str_radix(&digits[offset..offset + 2], 16)
                .map_err(|_| ColorParseError(value.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_hex(value)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(value.as_str())
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// Rejected hex color input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl Display for ColorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid hex color `{}`; expected #RRGGBB", self.0)
    }
}

impl Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn hex_accepts_optional_hash_and_any_case() {
        assert_eq!(Rgb::from_hex("#ff9500").unwrap(), Rgb::ORANGE);
        assert_eq!(Rgb::from_hex(" 007AFF ").unwrap(), Rgb::BLUE);
    }

    #[test]
    fn hex_rejects_short_long_and_non_hex_input() {
        for bad in ["", "#FFF", "#1234567", "#GG0000", "red"] {
            let err = Rgb::from_hex(bad).unwrap_err();
            assert!(err.to_string().contains("#RRGGBB"), "input: {bad}");
        }
    }

    #[test]
    fn to_hex_is_uppercase_with_hash() {
        assert_eq!(Rgb::new(0xe5, 0xd7, 0xee).to_hex(), "#E5D7EE");
        assert_eq!(Rgb::default().to_hex(), "#000000");
    }
}
