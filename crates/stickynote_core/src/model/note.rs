//! Sticky note domain model and mutation API.
//!
//! # Responsibility
//! - Own the ordered item collection of one note card.
//! - Apply note-level style changes uniformly to contained items.
//! - Derive the display ordering without touching storage order.
//!
//! # Invariants
//! - `id`, `style` and `created_at` never change after construction.
//! - Storage order is insertion order; only explicit inserts/removals alter it.
//! - After `update_font_size(s)` every item has font size `s` (same for style).
//! - Operations naming an unknown item leave the collection unchanged.

use crate::config::NoteDefaults;
use crate::model::color::Rgb;
use crate::model::item::{Item, ItemId, ItemStyle};
use crate::model::now_epoch_ms;
use crate::model::style::{FontSize, FontStyle, ListStyle, NoteSize, NoteStyle};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one note card.
pub type NoteId = Uuid;

/// Error for note mutations addressing missing items or positions.
///
/// Callers that follow the "only act on what is rendered" contract may
/// ignore these; the note is never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteError {
    /// No item with this id in the note.
    ItemNotFound(ItemId),
    /// Insert position past the end of the list.
    IndexOutOfBounds { index: usize, len: usize },
    /// Empty entries cannot be completed.
    EmptyItem(ItemId),
}

impl Display for NoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "insert index {index} out of bounds for {len} item(s)")
            }
            Self::EmptyItem(id) => write!(f, "item has no text to complete: {id}"),
        }
    }
}

impl Error for NoteError {}

/// One sticky note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    style: NoteStyle,
    list_style: ListStyle,
    size: NoteSize,
    font_size: FontSize,
    font_style: FontStyle,
    text_color: Rgb,
    created_at: i64,
    items: Vec<Item>,
}

impl Note {
    /// Creates a note with built-in defaults.
    pub fn new(style: NoteStyle) -> Self {
        Self::with_defaults(style, &NoteDefaults::default())
    }

    /// Creates a note using the given defaults.
    ///
    /// When `defaults.seed_empty_item` is set the note starts with one empty
    /// item ready for typing.
    pub fn with_defaults(style: NoteStyle, defaults: &NoteDefaults) -> Self {
        let mut note = Self {
            id: Uuid::new_v4(),
            style,
            list_style: defaults.list_style,
            size: defaults.size,
            font_size: defaults.font_size,
            font_style: defaults.font_style,
            text_color: defaults.text_color,
            created_at: now_epoch_ms(),
            items: Vec::new(),
        };
        if defaults.seed_empty_item {
            note.add_item();
        }
        note
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn style(&self) -> NoteStyle {
        self.style
    }

    pub fn list_style(&self) -> ListStyle {
        self.list_style
    }

    pub fn size(&self) -> NoteSize {
        self.size
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    /// Default text color for new items.
    pub fn text_color(&self) -> Rgb {
        self.text_color
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Style inherited by items created through `add_item`/`insert_item`.
    pub fn item_style(&self) -> ItemStyle {
        ItemStyle {
            text_color: self.text_color,
            font_size: self.font_size,
            font_style: self.font_style,
        }
    }

    /// Items in storage (insertion) order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn has_empty_item(&self) -> bool {
        self.items.iter().any(Item::is_empty)
    }

    pub fn first_empty_item(&self) -> Option<ItemId> {
        self.items.iter().find(|item| item.is_empty()).map(Item::id)
    }

    /// True when the note has items and every one is completed.
    pub fn all_items_completed(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(Item::is_completed)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_completed()).count()
    }

    /// Sets the size class. Geometry animation belongs to the caller.
    pub fn update_size(&mut self, size: NoteSize) {
        self.size = size;
    }

    /// Sets the note font size and overwrites every item's font size.
    pub fn update_font_size(&mut self, size: FontSize) {
        self.font_size = size;
        for item in &mut self.items {
            item.set_font_size(size);
        }
    }

    /// Sets the note font family and overwrites every item's font family.
    pub fn update_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
        for item in &mut self.items {
            item.set_font_style(style);
        }
    }

    /// Sets the default text color for items created afterwards.
    pub fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    pub fn set_list_style(&mut self, style: ListStyle) {
        self.list_style = style;
    }

    /// Appends an empty item using the note's current style.
    pub fn add_item(&mut self) -> ItemId {
        self.add_item_with(self.item_style())
    }

    /// Appends an empty item with explicit style.
    pub fn add_item_with(&mut self, style: ItemStyle) -> ItemId {
        let item = Item::new(style);
        let id = item.id();
        self.items.push(item);
        id
    }

    /// Inserts an empty item at `index` (`index == len` appends).
    pub fn insert_item(&mut self, index: usize) -> Result<ItemId, NoteError> {
        self.insert_item_with(index, self.item_style())
    }

    pub fn insert_item_with(&mut self, index: usize, style: ItemStyle) -> Result<ItemId, NoteError> {
        if index > self.items.len() {
            return Err(NoteError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        let item = Item::new(style);
        let id = item.id();
        self.items.insert(index, item);
        Ok(id)
    }

    /// Inserts an empty item directly after `after`.
    pub fn insert_item_after(&mut self, after: ItemId) -> Result<ItemId, NoteError> {
        self.insert_item_after_with(after, self.item_style())
    }

    pub fn insert_item_after_with(
        &mut self,
        after: ItemId,
        style: ItemStyle,
    ) -> Result<ItemId, NoteError> {
        let index = self
            .position_of(after)
            .ok_or(NoteError::ItemNotFound(after))?;
        self.insert_item_with(index + 1, style)
    }

    /// Appends an already constructed item, e.g. one decoded from a record.
    pub fn push_item(&mut self, item: Item) -> ItemId {
        let id = item.id();
        self.items.push(item);
        id
    }

    /// Removes the item if present. Missing ids are a no-op.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.position_of(id)?;
        Some(self.items.remove(index))
    }

    /// Flips completion of the named item and returns its new state.
    ///
    /// Empty items are refused with `NoteError::EmptyItem` and left as is.
    pub fn toggle_item_completion(&mut self, id: ItemId) -> Result<bool, NoteError> {
        let item = self.item_mut(id)?;
        if item.is_empty() {
            return Err(NoteError::EmptyItem(id));
        }
        Ok(item.toggle_completed())
    }

    pub fn set_item_text(&mut self, id: ItemId, text: impl Into<String>) -> Result<(), NoteError> {
        self.item_mut(id)?.set_text(text);
        Ok(())
    }

    pub fn set_item_text_color(&mut self, id: ItemId, color: Rgb) -> Result<(), NoteError> {
        self.item_mut(id)?.set_text_color(color);
        Ok(())
    }

    pub fn set_item_font_size(&mut self, id: ItemId, size: FontSize) -> Result<(), NoteError> {
        self.item_mut(id)?.set_font_size(size);
        Ok(())
    }

    pub fn set_item_font_style(&mut self, id: ItemId, style: FontStyle) -> Result<(), NoteError> {
        self.item_mut(id)?.set_font_style(style);
        Ok(())
    }

    /// Items as displayed: incomplete before completed, then by creation time.
    ///
    /// Ties keep storage order. Storage is not reordered.
    pub fn display_order(&self) -> Vec<&Item> {
        let mut ordered: Vec<&Item> = self.items.iter().collect();
        ordered.sort_by_key(|item| (item.is_completed(), item.created_at()));
        ordered
    }

    fn item_mut(&mut self, id: ItemId) -> Result<&mut Item, NoteError> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(NoteError::ItemNotFound(id))
    }
}
