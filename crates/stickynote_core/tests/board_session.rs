use stickynote_core::{
    BoardConfig, EditSession, FontSize, ItemStyle, NoteBoard, NoteDefaults, NoteEvent, NoteSize,
    NoteStyle, NullSink, Rgb,
};
use std::sync::mpsc::channel;

fn board_without_seed() -> NoteBoard {
    NoteBoard::new(BoardConfig {
        defaults: NoteDefaults {
            seed_empty_item: false,
            ..NoteDefaults::default()
        },
        max_open_notes: None,
    })
}

#[test]
fn open_and_close_notes_in_order() {
    let mut board = NoteBoard::default();
    let lavender = board.open_note(NoteStyle::Lavender).unwrap();
    let kiwi = board.open_note(NoteStyle::Kiwi).unwrap();

    let styles: Vec<NoteStyle> = board.notes().iter().map(|note| note.style()).collect();
    assert_eq!(styles, vec![NoteStyle::Lavender, NoteStyle::Kiwi]);
    assert_eq!(board.note(lavender).unwrap().len(), 1);

    let closed = board.close_note(lavender).unwrap();
    assert_eq!(closed.id(), lavender);
    assert_eq!(board.len(), 1);
    assert!(board.note(kiwi).is_some());
    assert!(board.close_note(lavender).is_none());
}

#[test]
fn board_defaults_flow_into_new_notes() {
    let config = BoardConfig::from_json_str(
        r##"{"defaults": {"size": "small", "font_size": "large", "text_color": "#AF52DE"}}"##,
    )
    .unwrap();
    let mut board = NoteBoard::new(config);
    let note_id = board.open_note(NoteStyle::Banana).unwrap();
    let note = board.note(note_id).unwrap();

    assert_eq!(note.size(), NoteSize::Small);
    assert_eq!(note.items()[0].font_size(), FontSize::Large);
    assert_eq!(note.items()[0].text_color(), Rgb::PURPLE);
}

#[test]
fn board_font_size_update_emits_event_and_overwrites_items() {
    let mut board = NoteBoard::default();
    let note_id = board.open_note(NoteStyle::Kiwi).unwrap();
    board
        .with_note_mut(note_id, |note| {
            note.add_item();
        })
        .unwrap();

    let (mut tx, rx) = channel();
    board
        .update_font_size(note_id, FontSize::Small, &mut tx)
        .unwrap();

    assert_eq!(
        rx.try_recv().unwrap(),
        NoteEvent::FontSizeChanged {
            note_id,
            size: FontSize::Small
        }
    );
    let note = board.note(note_id).unwrap();
    assert!(note
        .items()
        .iter()
        .all(|item| item.font_size() == FontSize::Small));
}

#[test]
fn tap_reuses_empty_item_before_appending() {
    let mut board = NoteBoard::default();
    let note_id = board.open_note(NoteStyle::Lavender).unwrap();
    let note = board.note_mut(note_id).unwrap();
    let seeded = note.items()[0].id();
    let mut session = EditSession::new(note);
    let mut events = Vec::new();

    assert_eq!(session.tap_empty_area(note, &mut events), Some(seeded));
    assert_eq!(note.len(), 1);

    session.update_text(note, seeded, "groceries", &mut events);
    let appended = session.tap_empty_area(note, &mut events).unwrap();
    assert_ne!(appended, seeded);
    assert_eq!(note.len(), 2);
    assert_eq!(session.editing(), Some(appended));
    assert!(events.contains(&NoteEvent::ItemAdded {
        note_id,
        item_id: appended
    }));
}

#[test]
fn submit_inserts_after_with_composer_style() {
    let mut board = board_without_seed();
    let note_id = board.open_note(NoteStyle::Banana).unwrap();
    let note = board.note_mut(note_id).unwrap();
    let first = note.add_item();
    let last = note.add_item();

    let mut session = EditSession::new(note);
    session.set_composer(ItemStyle {
        text_color: Rgb::RED,
        ..ItemStyle::default()
    });
    let inserted = session.submit(note, first, &mut NullSink).unwrap();

    assert_eq!(note.position_of(inserted), Some(1));
    assert_eq!(note.position_of(last), Some(2));
    assert_eq!(note.item(inserted).unwrap().text_color(), Rgb::RED);
    assert_eq!(session.editing(), Some(inserted));
}

#[test]
fn delete_moves_focus_to_previous_then_clears() {
    let mut board = board_without_seed();
    let note_id = board.open_note(NoteStyle::Kiwi).unwrap();
    let note = board.note_mut(note_id).unwrap();
    let a = note.add_item();
    let b = note.add_item();
    let mut session = EditSession::new(note);
    let mut events = Vec::new();

    session.start_editing(note, b, &mut events);
    assert!(session.delete(note, b, &mut events));
    assert_eq!(session.editing(), Some(a));

    assert!(session.delete(note, a, &mut events));
    assert_eq!(session.editing(), None);
    assert!(note.is_empty());
    assert_eq!(
        events.last(),
        Some(&NoteEvent::FocusChanged {
            note_id,
            item_id: None
        })
    );

    assert!(!session.delete(note, a, &mut events));
}

#[test]
fn arrow_navigation_is_bounded() {
    let mut board = board_without_seed();
    let note_id = board.open_note(NoteStyle::Lavender).unwrap();
    let note = board.note_mut(note_id).unwrap();
    let a = note.add_item();
    let b = note.add_item();
    let mut session = EditSession::new(note);

    assert_eq!(session.move_to_next(note, &mut NullSink), None);
    session.start_editing(note, a, &mut NullSink);
    assert_eq!(session.move_to_previous(note, &mut NullSink), None);
    assert_eq!(session.move_to_next(note, &mut NullSink), Some(b));
    assert_eq!(session.move_to_next(note, &mut NullSink), None);
    assert_eq!(session.editing(), Some(b));
    assert_eq!(session.move_to_previous(note, &mut NullSink), Some(a));
}

#[test]
fn completing_last_item_emits_all_completed_once() {
    let mut board = board_without_seed();
    let note_id = board.open_note(NoteStyle::Banana).unwrap();
    let note = board.note_mut(note_id).unwrap();
    let a = note.add_item();
    let b = note.add_item();
    let mut session = EditSession::new(note);
    let mut events = Vec::new();
    session.update_text(note, a, "one", &mut events);
    session.update_text(note, b, "two", &mut events);

    assert_eq!(session.toggle(note, a, &mut events), Some(true));
    assert!(!events.contains(&NoteEvent::AllItemsCompleted { note_id }));

    assert_eq!(session.toggle(note, b, &mut events), Some(true));
    let celebrations = events
        .iter()
        .filter(|event| **event == NoteEvent::AllItemsCompleted { note_id })
        .count();
    assert_eq!(celebrations, 1);
}

#[test]
fn empty_item_cannot_be_checked_off() {
    let mut board = NoteBoard::default();
    let note_id = board.open_note(NoteStyle::Kiwi).unwrap();
    let note = board.note_mut(note_id).unwrap();
    let seeded = note.items()[0].id();
    let mut session = EditSession::new(note);
    let mut events = Vec::new();

    assert_eq!(session.toggle(note, seeded, &mut events), None);
    assert!(!note.item(seeded).unwrap().is_completed());
    assert!(!note.all_items_completed());
    assert!(events.is_empty());
}

#[test]
fn session_leaves_other_notes_alone() {
    let mut board = NoteBoard::default();
    let lavender = board.open_note(NoteStyle::Lavender).unwrap();
    let kiwi = board.open_note(NoteStyle::Kiwi).unwrap();
    let mut session = EditSession::new(board.note(lavender).unwrap());

    let other = board.note_mut(kiwi).unwrap();
    let other_item = other.items()[0].id();
    let before = other.clone();
    let mut events = Vec::new();

    assert_eq!(session.tap_empty_area(other, &mut events), None);
    assert!(!session.update_text(other, other_item, "not mine", &mut events));
    assert_eq!(session.submit(other, other_item, &mut events), None);
    assert!(!session.delete(other, other_item, &mut events));
    assert_eq!(*other, before);
    assert!(events.is_empty());

    let own = board.note_mut(lavender).unwrap();
    let seeded = own.items()[0].id();
    assert_eq!(session.tap_empty_area(own, &mut events), Some(seeded));
    assert_eq!(
        events,
        vec![NoteEvent::FocusChanged {
            note_id: lavender,
            item_id: Some(seeded)
        }]
    );
}

#[test]
fn clearing_completed_text_emits_uncompleted_event() {
    let mut board = NoteBoard::default();
    let note_id = board.open_note(NoteStyle::Lavender).unwrap();
    let note = board.note_mut(note_id).unwrap();
    let id = note.items()[0].id();
    let mut session = EditSession::new(note);
    let mut events = Vec::new();

    session.update_text(note, id, "laundry", &mut events);
    session.toggle(note, id, &mut events);
    events.clear();

    assert!(session.update_text(note, id, "", &mut events));
    assert!(!note.item(id).unwrap().is_completed());
    assert_eq!(
        events,
        vec![NoteEvent::ItemCompletionChanged {
            note_id,
            item_id: id,
            completed: false
        }]
    );
}

#[test]
fn color_pick_recolors_focused_item_and_composer() {
    let mut board = NoteBoard::default();
    let note_id = board.open_note(NoteStyle::Banana).unwrap();
    let note = board.note_mut(note_id).unwrap();
    let id = note.items()[0].id();
    let mut session = EditSession::new(note);
    session.start_editing(note, id, &mut NullSink);

    assert!(session.select_text_color(note, Rgb::BLUE, &mut NullSink));
    assert_eq!(note.item(id).unwrap().text_color(), Rgb::BLUE);
    assert_eq!(session.composer().text_color, Rgb::BLUE);
}
