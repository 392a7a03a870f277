//! Board and note default configuration.
//!
//! # Responsibility
//! - Hold the defaults applied to newly opened notes.
//! - Load overrides from JSON, falling back to built-in values per field.
//!
//! # Invariants
//! - Missing JSON fields take the built-in default, never a zero value.
//! - `max_open_notes`, when set, is at least 1.

use crate::model::color::Rgb;
use crate::model::style::{FontSize, FontStyle, ListStyle, NoteSize};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Defaults applied when a note is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteDefaults {
    pub list_style: ListStyle,
    pub size: NoteSize,
    pub font_size: FontSize,
    pub font_style: FontStyle,
    /// Default text color for new items (`#RRGGBB` in JSON).
    pub text_color: Rgb,
    /// Start each note with one empty item ready for typing.
    pub seed_empty_item: bool,
}

impl Default for NoteDefaults {
    fn default() -> Self {
        Self {
            list_style: ListStyle::Checkbox,
            size: NoteSize::Medium,
            font_size: FontSize::Medium,
            font_style: FontStyle::Simple,
            text_color: Rgb::BLACK,
            seed_empty_item: true,
        }
    }
}

/// Configuration for a board of open notes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub defaults: NoteDefaults,
    /// Upper bound on simultaneously open notes; `None` is unbounded.
    pub max_open_notes: Option<u32>,
}

impl BoardConfig {
    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or unknown tags.
    /// - `ConfigError::Invalid` when a value violates config invariants.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_open_notes == Some(0) {
            return Err(ConfigError::Invalid(
                "max_open_notes must be at least 1 when set",
            ));
        }
        Ok(())
    }
}

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid board config: {err}"),
            Self::Invalid(details) => write!(f, "invalid board config: {details}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}
