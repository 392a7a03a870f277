//! Cosmetic enumerations shared by notes and items.
//!
//! # Responsibility
//! - Define the fixed theme/size/font tiers a note or item can take.
//! - Map each tier to its fixed geometry, point size or font family.
//!
//! # Invariants
//! - Every tier serializes as a stable snake_case tag.
//! - Tag parsing is strict: unknown tags are rejected, never defaulted.

use crate::model::color::Rgb;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Color theme of a note card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteStyle {
    Lavender,
    Banana,
    Kiwi,
}

impl NoteStyle {
    /// All themes in picker order.
    pub const ALL: [NoteStyle; 3] = [NoteStyle::Lavender, NoteStyle::Banana, NoteStyle::Kiwi];

    /// Card background color.
    pub fn background_color(self) -> Rgb {
        match self {
            Self::Lavender => Rgb::new(0xE5, 0xD7, 0xEE),
            Self::Banana => Rgb::new(0xFF, 0xEB, 0xBE),
            Self::Kiwi => Rgb::new(0xCF, 0xE8, 0xBE),
        }
    }

    /// Emoji dropped when a note of this theme is opened or completed.
    pub fn celebration_emoji(self) -> &'static str {
        match self {
            Self::Lavender => "\u{1F338}",
            Self::Banana => "\u{1F34C}",
            Self::Kiwi => "\u{1F49A}",
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Lavender => "lavender",
            Self::Banana => "banana",
            Self::Kiwi => "kiwi",
        }
    }
}

/// Marker rendering mode for a note's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    /// Completion-tracking checkboxes.
    Checkbox,
    /// Plain bulleted list.
    Bullet,
}

impl ListStyle {
    /// Returns the other mode (list-style toggle button).
    pub fn toggled(self) -> Self {
        match self {
            Self::Checkbox => Self::Bullet,
            Self::Bullet => Self::Checkbox,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Bullet => "bullet",
        }
    }
}

/// Note dimension tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSize {
    Small,
    Medium,
    Large,
}

impl NoteSize {
    pub const ALL: [NoteSize; 3] = [NoteSize::Small, NoteSize::Medium, NoteSize::Large];

    /// Card `(width, height)` in points.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Small => (300, 370),
            Self::Medium => (350, 420),
            Self::Large => (400, 470),
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Text size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    /// Point size used for item text and checkbox glyphs.
    pub fn points(self) -> u32 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 18,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Font family tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    /// Regular system font.
    Simple,
    /// Monospaced font.
    Monospaced,
    /// Handwritten style.
    Scribbled,
}

impl FontStyle {
    pub const ALL: [FontStyle; 3] = [
        FontStyle::Simple,
        FontStyle::Monospaced,
        FontStyle::Scribbled,
    ];

    /// Label shown in the font picker.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Simple => "Regular",
            Self::Monospaced => "Technical",
            Self::Scribbled => "Scribbled",
        }
    }

    /// Preferred family name.
    pub fn family_name(self) -> &'static str {
        self.family_candidates()[0]
    }

    /// Family names in lookup order. The presentation layer falls back to
    /// the platform system font when none of these resolve.
    pub fn family_candidates(self) -> &'static [&'static str] {
        match self {
            Self::Simple => &[".AppleSystemUIFont"],
            Self::Monospaced => &["SFMono-Regular", "Menlo-Regular"],
            Self::Scribbled => &["Bradley Hand", "Noteworthy"],
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Monospaced => "monospaced",
            Self::Scribbled => "scribbled",
        }
    }
}

/// Error for unknown style tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleParseError {
    /// Name of the enumeration being parsed.
    pub kind: &'static str,
    /// Raw rejected input.
    pub value: String,
}

impl Display for StyleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} tag: `{}`", self.kind, self.value)
    }
}

impl Error for StyleParseError {}

macro_rules! impl_tag_from_str {
    ($ty:ty, $kind:literal, [$($variant:expr),+ $(,)?]) => {
        impl FromStr for $ty {
            type Err = StyleParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = value.trim().to_ascii_lowercase();
                [$($variant),+]
                    .into_iter()
                    .find(|candidate| candidate.as_tag() == normalized)
                    .ok_or_else(|| StyleParseError {
                        kind: $kind,
                        value: value.to_string(),
                    })
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_tag())
            }
        }
    };
}

impl_tag_from_str!(NoteStyle, "note style", [NoteStyle::Lavender, NoteStyle::Banana, NoteStyle::Kiwi]);
impl_tag_from_str!(ListStyle, "list style", [ListStyle::Checkbox, ListStyle::Bullet]);
impl_tag_from_str!(NoteSize, "note size", [NoteSize::Small, NoteSize::Medium, NoteSize::Large]);
impl_tag_from_str!(FontSize, "font size", [FontSize::Small, FontSize::Medium, FontSize::Large]);
impl_tag_from_str!(
    FontStyle,
    "font style",
    [FontStyle::Simple, FontStyle::Monospaced, FontStyle::Scribbled]
);
