//! Editing session for one note.
//!
//! # Responsibility
//! - Track which item is being composed and the composer's selected style.
//! - Translate discrete user actions (tap, return, delete, arrow keys,
//!   checkbox clicks) into note mutations plus `NoteEvent`s.
//!
//! # Invariants
//! - Focus only ever points at an item present in the note, or nothing.
//! - A session only acts on the note it was created for; any other note is
//!   left untouched and nothing is emitted.
//! - Stale ids are silent no-ops: nothing is mutated and nothing is emitted.
//! - Items with empty text cannot be checked off.

use crate::model::color::Rgb;
use crate::model::item::{ItemId, ItemStyle};
use crate::model::note::{Note, NoteId};
use crate::service::events::{EventSink, NoteEvent};
use log::debug;

/// Focus and composer state for one open note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    note_id: NoteId,
    editing: Option<ItemId>,
    composer: ItemStyle,
}

impl EditSession {
    /// Starts a session with the note's current item style as composer style.
    pub fn new(note: &Note) -> Self {
        Self {
            note_id: note.id(),
            editing: None,
            composer: note.item_style(),
        }
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    /// Item currently being edited.
    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    /// Style applied to entries created from this session.
    pub fn composer(&self) -> ItemStyle {
        self.composer
    }

    pub fn set_composer(&mut self, style: ItemStyle) {
        self.composer = style;
    }

    /// Focuses `id` if it belongs to the note.
    pub fn start_editing(&mut self, note: &Note, id: ItemId, sink: &mut impl EventSink) -> bool {
        if !self.owns(note) || note.item(id).is_none() {
            return false;
        }
        self.focus(Some(id), sink);
        true
    }

    pub fn stop_editing(&mut self, sink: &mut impl EventSink) {
        self.focus(None, sink);
    }

    /// Tap on the list background: reuse the first empty entry, or append one.
    pub fn tap_empty_area(
        &mut self,
        note: &mut Note,
        sink: &mut impl EventSink,
    ) -> Option<ItemId> {
        if !self.owns(note) {
            return None;
        }
        let id = match note.first_empty_item() {
            Some(existing) => existing,
            None => {
                let created = note.add_item_with(self.composer);
                sink.emit(NoteEvent::ItemAdded {
                    note_id: self.note_id,
                    item_id: created,
                });
                created
            }
        };
        self.focus(Some(id), sink);
        Some(id)
    }

    /// Return key on `id`: insert a fresh entry right after it and focus it.
    pub fn submit(
        &mut self,
        note: &mut Note,
        id: ItemId,
        sink: &mut impl EventSink,
    ) -> Option<ItemId> {
        if !self.owns(note) {
            return None;
        }
        let created = note.insert_item_after_with(id, self.composer).ok()?;
        sink.emit(NoteEvent::ItemAdded {
            note_id: self.note_id,
            item_id: created,
        });
        self.focus(Some(created), sink);
        Some(created)
    }

    /// Deletes `id`; focus moves to the preceding entry, or nothing when the
    /// note becomes empty.
    pub fn delete(&mut self, note: &mut Note, id: ItemId, sink: &mut impl EventSink) -> bool {
        if !self.owns(note) {
            return false;
        }
        let Some(index) = note.position_of(id) else {
            return false;
        };
        note.remove_item(id);
        sink.emit(NoteEvent::ItemRemoved {
            note_id: self.note_id,
            item_id: id,
        });

        let next_focus = note
            .items()
            .get(index.saturating_sub(1))
            .map(|item| item.id());
        self.focus(next_focus, sink);
        true
    }

    /// Moves focus one entry up in storage order. No wrap-around.
    pub fn move_to_previous(&mut self, note: &Note, sink: &mut impl EventSink) -> Option<ItemId> {
        let index = self.editing_index(note, sink)?;
        let target = note.items()[index.checked_sub(1)?].id();
        self.focus(Some(target), sink);
        Some(target)
    }

    /// Moves focus one entry down in storage order. No wrap-around.
    pub fn move_to_next(&mut self, note: &Note, sink: &mut impl EventSink) -> Option<ItemId> {
        let index = self.editing_index(note, sink)?;
        let target = note.items().get(index + 1)?.id();
        self.focus(Some(target), sink);
        Some(target)
    }

    /// Replaces the text of `id`. Clearing a completed entry un-completes it.
    pub fn update_text(
        &mut self,
        note: &mut Note,
        id: ItemId,
        text: impl Into<String>,
        sink: &mut impl EventSink,
    ) -> bool {
        if !self.owns(note) {
            return false;
        }
        let Some(was_completed) = note.item(id).map(|item| item.is_completed()) else {
            return false;
        };
        if note.set_item_text(id, text).is_err() {
            return false;
        }
        let completed = note.item(id).is_some_and(|item| item.is_completed());
        if was_completed != completed {
            sink.emit(NoteEvent::ItemCompletionChanged {
                note_id: self.note_id,
                item_id: id,
                completed,
            });
        }
        true
    }

    /// Checkbox click on `id`. Returns the new completion state.
    ///
    /// Empty entries are refused. Emits `AllItemsCompleted` when this click
    /// completes the whole note.
    pub fn toggle(
        &mut self,
        note: &mut Note,
        id: ItemId,
        sink: &mut impl EventSink,
    ) -> Option<bool> {
        if !self.owns(note) {
            return None;
        }
        let completed = note.toggle_item_completion(id).ok()?;
        sink.emit(NoteEvent::ItemCompletionChanged {
            note_id: self.note_id,
            item_id: id,
            completed,
        });
        if completed && note.all_items_completed() {
            debug!(
                "event=note_all_completed module=edit_session status=ok note_id={} item_count={}",
                self.note_id,
                note.len()
            );
            sink.emit(NoteEvent::AllItemsCompleted {
                note_id: self.note_id,
            });
        }
        Some(completed)
    }

    /// Color swatch pick: becomes the composer color and recolors the entry
    /// being edited, if any. A focused entry that no longer exists loses focus.
    pub fn select_text_color(
        &mut self,
        note: &mut Note,
        color: Rgb,
        sink: &mut impl EventSink,
    ) -> bool {
        if !self.owns(note) {
            return false;
        }
        self.composer.text_color = color;
        if let Some(id) = self.editing {
            if note.set_item_text_color(id, color).is_err() {
                self.focus(None, sink);
            }
        }
        true
    }

    fn owns(&self, note: &Note) -> bool {
        note.id() == self.note_id
    }

    fn editing_index(&mut self, note: &Note, sink: &mut impl EventSink) -> Option<usize> {
        if !self.owns(note) {
            return None;
        }
        let id = self.editing?;
        let index = note.position_of(id);
        if index.is_none() {
            self.focus(None, sink);
        }
        index
    }

    fn focus(&mut self, item_id: Option<ItemId>, sink: &mut impl EventSink) {
        if self.editing == item_id {
            return;
        }
        self.editing = item_id;
        sink.emit(NoteEvent::FocusChanged {
            note_id: self.note_id,
            item_id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::EditSession;
    use crate::model::color::Rgb;
    use crate::model::note::Note;
    use crate::model::style::NoteStyle;
    use crate::service::events::{NoteEvent, NullSink};

    #[test]
    fn focus_change_to_same_item_emits_once() {
        let note = Note::new(NoteStyle::Banana);
        let id = note.items()[0].id();
        let mut session = EditSession::new(&note);
        let mut events = Vec::new();

        assert!(session.start_editing(&note, id, &mut events));
        assert!(session.start_editing(&note, id, &mut events));
        assert_eq!(
            events,
            vec![NoteEvent::FocusChanged {
                note_id: note.id(),
                item_id: Some(id)
            }]
        );
    }

    #[test]
    fn stale_focus_is_cleared_on_navigation() {
        let mut note = Note::new(NoteStyle::Kiwi);
        let id = note.items()[0].id();
        let mut session = EditSession::new(&note);
        session.start_editing(&note, id, &mut NullSink);

        note.remove_item(id);
        assert_eq!(session.move_to_next(&note, &mut NullSink), None);
        assert_eq!(session.editing(), None);
    }

    #[test]
    fn session_ignores_foreign_note() {
        let mut own = Note::new(NoteStyle::Lavender);
        let mut foreign = Note::new(NoteStyle::Banana);
        let foreign_item = foreign.items()[0].id();
        let snapshot = foreign.clone();
        let mut session = EditSession::new(&own);
        let mut events = Vec::new();

        assert_eq!(session.tap_empty_area(&mut foreign, &mut events), None);
        assert_eq!(session.submit(&mut foreign, foreign_item, &mut events), None);
        assert!(!session.start_editing(&foreign, foreign_item, &mut events));
        assert!(!session.update_text(&mut foreign, foreign_item, "x", &mut events));
        assert_eq!(session.toggle(&mut foreign, foreign_item, &mut events), None);
        assert!(!session.select_text_color(&mut foreign, Rgb::RED, &mut events));
        assert!(!session.delete(&mut foreign, foreign_item, &mut events));
        assert_eq!(foreign, snapshot);
        assert!(events.is_empty());
        assert_eq!(session.editing(), None);

        assert!(session.tap_empty_area(&mut own, &mut events).is_some());
        assert!(events.iter().all(|event| event.note_id() == own.id()));
    }

    #[test]
    fn recolor_with_stale_focus_clears_focus() {
        let mut note = Note::new(NoteStyle::Kiwi);
        let id = note.items()[0].id();
        let mut session = EditSession::new(&note);
        session.start_editing(&note, id, &mut NullSink);
        note.remove_item(id);

        let mut events = Vec::new();
        assert!(session.select_text_color(&mut note, Rgb::ORANGE, &mut events));
        assert_eq!(session.editing(), None);
        assert_eq!(session.composer().text_color, Rgb::ORANGE);
        assert_eq!(
            events,
            vec![NoteEvent::FocusChanged {
                note_id: note.id(),
                item_id: None
            }]
        );
    }
}
