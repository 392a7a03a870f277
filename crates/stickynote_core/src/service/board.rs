//! Board of open notes.
//!
//! # Responsibility
//! - Own every open note and address them by `NoteId`.
//! - Provide note-level style use-cases that also emit `NoteEvent`s.
//!
//! # Invariants
//! - Notes are listed in opening order.
//! - Closing an unknown note is a no-op.
//! - The number of open notes never exceeds `max_open_notes` when set.
//! - Log lines carry ids and tags only, never item text.

use crate::config::BoardConfig;
use crate::model::note::{Note, NoteError, NoteId};
use crate::model::style::{FontSize, FontStyle, ListStyle, NoteSize, NoteStyle};
use crate::service::events::{EventSink, NoteEvent};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for board use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target note is not open.
    NoteNotFound(NoteId),
    /// Opening another note would exceed the configured limit.
    BoardFull { limit: u32 },
    /// Note-level mutation failure.
    Note(NoteError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::BoardFull { limit } => write!(f, "board is full ({limit} open notes)"),
            Self::Note(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Note(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NoteError> for BoardError {
    fn from(value: NoteError) -> Self {
        Self::Note(value)
    }
}

pub type BoardResult<T> = Result<T, BoardError>;

/// The set of open sticky notes.
#[derive(Debug, Default)]
pub struct NoteBoard {
    config: BoardConfig,
    notes: Vec<Note>,
}

impl NoteBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            notes: Vec::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Opens a new note with the board defaults.
    pub fn open_note(&mut self, style: NoteStyle) -> BoardResult<NoteId> {
        if let Some(limit) = self.config.max_open_notes {
            if self.notes.len() >= limit as usize {
                warn!(
                    "event=note_open module=board status=rejected reason=board_full limit={limit}"
                );
                return Err(BoardError::BoardFull { limit });
            }
        }

        let note = Note::with_defaults(style, &self.config.defaults);
        let note_id = note.id();
        self.notes.push(note);
        info!(
            "event=note_open module=board status=ok note_id={note_id} style={style} open_count={}",
            self.notes.len()
        );
        Ok(note_id)
    }

    /// Closes a note and returns it. Unknown ids are a no-op.
    pub fn close_note(&mut self, note_id: NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|note| note.id() == note_id)?;
        let note = self.notes.remove(index);
        info!(
            "event=note_close module=board status=ok note_id={note_id} item_count={} open_count={}",
            note.len(),
            self.notes.len()
        );
        Some(note)
    }

    pub fn note(&self, note_id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == note_id)
    }

    pub fn note_mut(&mut self, note_id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id() == note_id)
    }

    /// Open notes in opening order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Runs `f` against the named note.
    pub fn with_note_mut<T>(
        &mut self,
        note_id: NoteId,
        f: impl FnOnce(&mut Note) -> T,
    ) -> BoardResult<T> {
        self.note_mut(note_id)
            .map(f)
            .ok_or(BoardError::NoteNotFound(note_id))
    }

    pub fn update_size(
        &mut self,
        note_id: NoteId,
        size: NoteSize,
        sink: &mut impl EventSink,
    ) -> BoardResult<()> {
        self.with_note_mut(note_id, |note| note.update_size(size))?;
        debug!("event=note_resize module=board status=ok note_id={note_id} size={size}");
        sink.emit(NoteEvent::NoteSizeChanged { note_id, size });
        Ok(())
    }

    pub fn update_font_size(
        &mut self,
        note_id: NoteId,
        size: FontSize,
        sink: &mut impl EventSink,
    ) -> BoardResult<()> {
        let item_count = self.with_note_mut(note_id, |note| {
            note.update_font_size(size);
            note.len()
        })?;
        debug!(
            "event=note_font_size module=board status=ok note_id={note_id} size={size} item_count={item_count}"
        );
        sink.emit(NoteEvent::FontSizeChanged { note_id, size });
        Ok(())
    }

    pub fn update_font_style(
        &mut self,
        note_id: NoteId,
        style: FontStyle,
        sink: &mut impl EventSink,
    ) -> BoardResult<()> {
        let item_count = self.with_note_mut(note_id, |note| {
            note.update_font_style(style);
            note.len()
        })?;
        debug!(
            "event=note_font_style module=board status=ok note_id={note_id} style={style} item_count={item_count}"
        );
        sink.emit(NoteEvent::FontStyleChanged { note_id, style });
        Ok(())
    }

    pub fn set_list_style(
        &mut self,
        note_id: NoteId,
        style: ListStyle,
        sink: &mut impl EventSink,
    ) -> BoardResult<()> {
        let changed = self.with_note_mut(note_id, |note| {
            let changed = note.list_style() != style;
            note.set_list_style(style);
            changed
        })?;
        if changed {
            sink.emit(NoteEvent::ListStyleChanged { note_id, style });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardError, NoteBoard};
    use crate::config::BoardConfig;
    use crate::model::style::{ListStyle, NoteStyle};
    use crate::service::events::NoteEvent;
    use uuid::Uuid;

    #[test]
    fn board_full_rejects_extra_note() {
        let mut board = NoteBoard::new(BoardConfig {
            max_open_notes: Some(1),
            ..BoardConfig::default()
        });
        board.open_note(NoteStyle::Banana).unwrap();
        let err = board.open_note(NoteStyle::Kiwi).unwrap_err();
        assert_eq!(err, BoardError::BoardFull { limit: 1 });
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn unchanged_list_style_emits_nothing() {
        let mut board = NoteBoard::default();
        let note_id = board.open_note(NoteStyle::Lavender).unwrap();
        let mut events = Vec::new();

        board
            .set_list_style(note_id, ListStyle::Checkbox, &mut events)
            .unwrap();
        assert!(events.is_empty());

        board
            .set_list_style(note_id, ListStyle::Bullet, &mut events)
            .unwrap();
        assert_eq!(
            events,
            vec![NoteEvent::ListStyleChanged {
                note_id,
                style: ListStyle::Bullet
            }]
        );
    }

    #[test]
    fn unknown_note_reports_not_found() {
        let mut board = NoteBoard::default();
        let missing = Uuid::new_v4();
        let err = board.with_note_mut(missing, |note| note.len()).unwrap_err();
        assert_eq!(err, BoardError::NoteNotFound(missing));
        assert!(board.close_note(missing).is_none());
    }
}
