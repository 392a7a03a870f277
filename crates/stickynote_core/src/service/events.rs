//! Note events and the sinks that receive them.
//!
//! # Responsibility
//! - Describe model changes the presentation layer may react to (focus,
//!   celebration effects, geometry changes).
//! - Deliver them through a channel the presentation layer owns.
//!
//! # Invariants
//! - Events carry identifiers and enum tags only, never item text.
//! - Emitting an event never feeds back into model state.

use crate::model::item::ItemId;
use crate::model::note::NoteId;
use crate::model::style::{FontSize, FontStyle, ListStyle, NoteSize};
use std::sync::mpsc::Sender;

/// Observable change on one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEvent {
    /// Editing focus moved; `None` means no item is being edited.
    FocusChanged {
        note_id: NoteId,
        item_id: Option<ItemId>,
    },
    ItemAdded {
        note_id: NoteId,
        item_id: ItemId,
    },
    ItemRemoved {
        note_id: NoteId,
        item_id: ItemId,
    },
    ItemCompletionChanged {
        note_id: NoteId,
        item_id: ItemId,
        completed: bool,
    },
    /// Every item of a non-empty note is now completed.
    AllItemsCompleted { note_id: NoteId },
    NoteSizeChanged { note_id: NoteId, size: NoteSize },
    FontSizeChanged { note_id: NoteId, size: FontSize },
    FontStyleChanged { note_id: NoteId, style: FontStyle },
    ListStyleChanged { note_id: NoteId, style: ListStyle },
}

impl NoteEvent {
    pub fn note_id(&self) -> NoteId {
        match *self {
            Self::FocusChanged { note_id, .. }
            | Self::ItemAdded { note_id, .. }
            | Self::ItemRemoved { note_id, .. }
            | Self::ItemCompletionChanged { note_id, .. }
            | Self::AllItemsCompleted { note_id }
            | Self::NoteSizeChanged { note_id, .. }
            | Self::FontSizeChanged { note_id, .. }
            | Self::FontStyleChanged { note_id, .. }
            | Self::ListStyleChanged { note_id, .. } => note_id,
        }
    }
}

/// Receiver of note events, owned by the presentation layer.
pub trait EventSink {
    fn emit(&mut self, event: NoteEvent);
}

impl EventSink for Vec<NoteEvent> {
    fn emit(&mut self, event: NoteEvent) {
        self.push(event);
    }
}

impl EventSink for Sender<NoteEvent> {
    fn emit(&mut self, event: NoteEvent) {
        // A dropped receiver means nobody renders this note anymore.
        let _ = self.send(event);
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: NoteEvent) {}
}
