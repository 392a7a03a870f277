//! List item domain model.
//!
//! # Responsibility
//! - Define one entry of a note's list and its per-item style overrides.
//! - Keep text/completion consistency inside the model.
//!
//! # Invariants
//! - `id` and `created_at` never change after construction.
//! - `id` is never the nil UUID.
//! - An item with empty text is never completed.
//! - Items carry no reference to their owning note.

use crate::model::color::Rgb;
use crate::model::now_epoch_ms;
use crate::model::style::{FontSize, FontStyle};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one list item.
pub type ItemId = Uuid;

/// Per-item text styling.
///
/// Also used as the composer style: the values the properties bar applies to
/// newly created entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStyle {
    pub text_color: Rgb,
    pub font_size: FontSize,
    pub font_style: FontStyle,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            text_color: Rgb::BLACK,
            font_size: FontSize::Medium,
            font_style: FontStyle::Simple,
        }
    }
}

/// Validation errors for item construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Nil UUID cannot identify an item.
    NilId,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be nil"),
        }
    }
}

impl Error for ItemValidationError {}

/// One entry in a note's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    id: ItemId,
    text: String,
    is_completed: bool,
    style: ItemStyle,
    created_at: i64,
}

impl Item {
    /// Creates an empty, incomplete item with a fresh id and timestamp.
    ///
    /// An empty item represents "currently composing a new entry".
    pub fn new(style: ItemStyle) -> Self {
        Self::with_text("", style)
    }

    /// Creates an incomplete item with the given text.
    pub fn with_text(text: impl Into<String>, style: ItemStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_completed: false,
            style,
            created_at: now_epoch_ms(),
        }
    }

    /// Creates an item with caller-provided identity and creation time.
    ///
    /// Used by import paths and tests that need deterministic ordering.
    ///
    /// # Errors
    /// - `ItemValidationError::NilId` when `id` is nil.
    pub fn with_id(
        id: ItemId,
        created_at: i64,
        text: impl Into<String>,
        style: ItemStyle,
    ) -> Result<Self, ItemValidationError> {
        if id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        Ok(Self {
            id,
            text: text.into(),
            is_completed: false,
            style,
            created_at,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text_color(&self) -> Rgb {
        self.style.text_color
    }

    pub fn font_size(&self) -> FontSize {
        self.style.font_size
    }

    pub fn font_style(&self) -> FontStyle {
        self.style.font_style
    }

    pub fn style(&self) -> ItemStyle {
        self.style
    }

    /// Unix epoch milliseconds at construction.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Replaces the text content.
    ///
    /// Clearing the text of a completed item also clears its completion flag.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.text.is_empty() {
            self.is_completed = false;
        }
    }

    /// Sets the completion flag. Completing an empty item is a no-op.
    pub fn set_completed(&mut self, completed: bool) {
        self.is_completed = completed && !self.text.is_empty();
    }

    /// Flips the completion flag and returns the new value.
    ///
    /// An empty item stays incomplete.
    pub fn toggle_completed(&mut self) -> bool {
        self.set_completed(!self.is_completed);
        self.is_completed
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.style.text_color = color;
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.style.font_size = size;
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.style.font_style = style;
    }
}

/// External interchange shape of an item.
///
/// Field names are part of the JSON contract; colors travel as `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub text: String,
    pub is_completed: bool,
    pub text_color: Rgb,
    pub font_size: FontSize,
    pub font_style: FontStyle,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            text: item.text,
            is_completed: item.is_completed,
            text_color: item.style.text_color,
            font_size: item.style.font_size,
            font_style: item.style.font_style,
            created_at: item.created_at,
        }
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let style = ItemStyle {
            text_color: record.text_color,
            font_size: record.font_size,
            font_style: record.font_style,
        };
        let mut item = Item::with_id(record.id, record.created_at, record.text, style)?;
        item.set_completed(record.is_completed);
        Ok(item)
    }
}
