//! FFI use-case API for UI-shell calls.
//!
//! # Responsibility
//! - Expose note/item mutations to the UI shell via FRB.
//! - Own the process-wide board the shell renders.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Ids and enum tags cross the boundary as strings.
//! - Stale ids never change state; removals and toggles of stale item ids
//!   still report `ok` with no `id`.

use log::warn;
use stickynote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardError, FontSize, FontStyle, Item, ListStyle, Note, NoteBoard, NoteError, NoteSize,
    NoteStyle, NullSink,
};
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static BOARD: OnceLock<Mutex<NoteBoard>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Id created or affected by the action, if any.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub item_id: String,
    pub text: String,
    pub is_completed: bool,
    /// `#RRGGBB`.
    pub text_color: String,
    pub font_points: u32,
    pub font_family: String,
}

/// Render snapshot of one note; items are in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub note_id: String,
    pub style: String,
    /// `#RRGGBB` card background.
    pub background_color: String,
    pub list_style: String,
    pub width: u32,
    pub height: u32,
    pub items: Vec<ItemView>,
    pub all_completed: bool,
}

/// Snapshot envelope; `note` is `None` when `ok == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteViewResponse {
    pub ok: bool,
    pub note: Option<NoteView>,
    pub message: String,
}

/// Opens a new note with the given theme tag (`lavender|banana|kiwi`).
#[flutter_rust_bridge::frb(sync)]
pub fn board_open_note(style: String) -> NoteActionResponse {
    let style = match NoteStyle::from_str(style.as_str()) {
        Ok(style) => style,
        Err(err) => return NoteActionResponse::failure(format!("board_open_note failed: {err}")),
    };
    match with_board(|board| board.open_note(style)) {
        Ok(note_id) => NoteActionResponse::success("Note opened.", Some(note_id.to_string())),
        Err(err) => NoteActionResponse::failure(format!("board_open_note failed: {err}")),
    }
}

/// Closes a note. Closing an unknown note succeeds without effect.
#[flutter_rust_bridge::frb(sync)]
pub fn board_close_note(note_id: String) -> NoteActionResponse {
    let result = parse_id(&note_id)
        .and_then(|note_id| with_board(|board| Ok(board.close_note(note_id).is_some())));
    match result {
        Ok(true) => NoteActionResponse::success("Note closed.", Some(note_id)),
        Ok(false) => NoteActionResponse::success("Note already closed.", None),
        Err(err) => NoteActionResponse::failure(format!("board_close_note failed: {err}")),
    }
}

/// Appends an empty item using the note's current style.
#[flutter_rust_bridge::frb(sync)]
pub fn note_add_item(note_id: String) -> NoteActionResponse {
    match with_note(&note_id, |note| Ok(note.add_item())) {
        Ok(item_id) => NoteActionResponse::success("Item added.", Some(item_id.to_string())),
        Err(err) => NoteActionResponse::failure(format!("note_add_item failed: {err}")),
    }
}

/// Removes an item. Unknown items succeed without effect.
#[flutter_rust_bridge::frb(sync)]
pub fn note_remove_item(note_id: String, item_id: String) -> NoteActionResponse {
    let result = parse_id(&item_id)
        .and_then(|item_id| with_note(&note_id, |note| Ok(note.remove_item(item_id).is_some())));
    match result {
        Ok(true) => NoteActionResponse::success("Item removed.", Some(item_id)),
        Ok(false) => NoteActionResponse::success("Item already removed.", None),
        Err(err) => NoteActionResponse::failure(format!("note_remove_item failed: {err}")),
    }
}

/// Replaces item text; clearing a completed item un-completes it.
#[flutter_rust_bridge::frb(sync)]
pub fn note_set_item_text(note_id: String, item_id: String, text: String) -> NoteActionResponse {
    let result = parse_id(&item_id).and_then(|id| {
        with_note(&note_id, |note| {
            note.set_item_text(id, text).map_err(BoardError::from)
        })
    });
    match result {
        Ok(()) => NoteActionResponse::success("Item updated.", Some(item_id)),
        Err(err) => NoteActionResponse::failure(format!("note_set_item_text failed: {err}")),
    }
}

/// Toggles completion; `message` is `completed` or `open` on success.
///
/// A stale item id is a successful no-op (`id: None`), like `note_remove_item`.
/// Items without text are refused.
#[flutter_rust_bridge::frb(sync)]
pub fn note_toggle_item(note_id: String, item_id: String) -> NoteActionResponse {
    let result = parse_id(&item_id)
        .and_then(|id| with_note(&note_id, |note| Ok(note.toggle_item_completion(id))));
    match result {
        Ok(Ok(true)) => NoteActionResponse::success("completed", Some(item_id)),
        Ok(Ok(false)) => NoteActionResponse::success("open", Some(item_id)),
        Ok(Err(NoteError::ItemNotFound(_))) => {
            NoteActionResponse::success("Item not found.", None)
        }
        Ok(Err(err)) => NoteActionResponse::failure(format!("note_toggle_item failed: {err}")),
        Err(err) => NoteActionResponse::failure(format!("note_toggle_item failed: {err}")),
    }
}

/// Sets the note size class (`small|medium|large`).
#[flutter_rust_bridge::frb(sync)]
pub fn note_update_size(note_id: String, size: String) -> NoteActionResponse {
    let result = parse_tag::<NoteSize>(&size).and_then(|size| {
        parse_id(&note_id)
            .and_then(|id| with_board(|board| board.update_size(id, size, &mut NullSink)))
    });
    action_result("note_update_size", "Size updated.", result)
}

/// Sets the note font size (`small|medium|large`) on the note and all items.
#[flutter_rust_bridge::frb(sync)]
pub fn note_update_font_size(note_id: String, size: String) -> NoteActionResponse {
    let result = parse_tag::<FontSize>(&size).and_then(|size| {
        parse_id(&note_id)
            .and_then(|id| with_board(|board| board.update_font_size(id, size, &mut NullSink)))
    });
    action_result("note_update_font_size", "Font size updated.", result)
}

/// Sets the font family (`simple|monospaced|scribbled`) on the note and all items.
#[flutter_rust_bridge::frb(sync)]
pub fn note_update_font_style(note_id: String, style: String) -> NoteActionResponse {
    let result = parse_tag::<FontStyle>(&style).and_then(|style| {
        parse_id(&note_id)
            .and_then(|id| with_board(|board| board.update_font_style(id, style, &mut NullSink)))
    });
    action_result("note_update_font_style", "Font style updated.", result)
}

/// Switches list markers (`checkbox|bullet`).
#[flutter_rust_bridge::frb(sync)]
pub fn note_set_list_style(note_id: String, style: String) -> NoteActionResponse {
    let result = parse_tag::<ListStyle>(&style).and_then(|style| {
        parse_id(&note_id)
            .and_then(|id| with_board(|board| board.set_list_style(id, style, &mut NullSink)))
    });
    action_result("note_set_list_style", "List style updated.", result)
}

/// Returns a render snapshot with items in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn note_snapshot(note_id: String) -> NoteViewResponse {
    match with_note(&note_id, |note| Ok(to_note_view(note))) {
        Ok(view) => NoteViewResponse {
            ok: true,
            note: Some(view),
            message: String::new(),
        },
        Err(err) => NoteViewResponse {
            ok: false,
            note: None,
            message: format!("note_snapshot failed: {err}"),
        },
    }
}

fn action_result(
    operation: &str,
    message: &str,
    result: Result<(), String>,
) -> NoteActionResponse {
    match result {
        Ok(()) => NoteActionResponse::success(message, None),
        Err(err) => NoteActionResponse::failure(format!("{operation} failed: {err}")),
    }
}

fn parse_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid id `{raw}`: {err}"))
}

fn parse_tag<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(raw).map_err(|err| err.to_string())
}

fn with_board<T>(f: impl FnOnce(&mut NoteBoard) -> Result<T, BoardError>) -> Result<T, String> {
    let mut board = BOARD
        .get_or_init(|| Mutex::new(NoteBoard::default()))
        .lock()
        .map_err(|_| {
            warn!("event=board_lock module=ffi status=error reason=poisoned");
            "board state unavailable".to_string()
        })?;
    f(&mut *board).map_err(|err| err.to_string())
}

fn with_note<T>(
    note_id: &str,
    f: impl FnOnce(&mut Note) -> Result<T, BoardError>,
) -> Result<T, String> {
    let note_id = parse_id(note_id)?;
    with_board(|board| {
        board
            .note_mut(note_id)
            .ok_or(BoardError::NoteNotFound(note_id))
            .and_then(f)
    })
}

fn to_note_view(note: &Note) -> NoteView {
    let (width, height) = note.size().dimensions();
    NoteView {
        note_id: note.id().to_string(),
        style: note.style().as_tag().to_string(),
        background_color: note.style().background_color().to_hex(),
        list_style: note.list_style().as_tag().to_string(),
        width,
        height,
        items: note.display_order().into_iter().map(to_item_view).collect(),
        all_completed: note.all_items_completed(),
    }
}

fn to_item_view(item: &Item) -> ItemView {
    ItemView {
        item_id: item.id().to_string(),
        text: item.text().to_string(),
        is_completed: item.is_completed(),
        text_color: item.text_color().to_hex(),
        font_points: item.font_size().points(),
        font_family: item.font_style().family_name().to_string(),
    }
}
