//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `stickynote_core` linkage.
//! - Print a deterministic walk-through of the display ordering.

use stickynote_core::{EditSession, NoteBoard, NoteStyle, NullSink};

fn main() {
    println!("stickynote_core ping={}", stickynote_core::ping());
    println!("stickynote_core version={}", stickynote_core::core_version());

    let mut board = NoteBoard::default();
    let Ok(note_id) = board.open_note(NoteStyle::Banana) else {
        eprintln!("failed to open demo note");
        std::process::exit(1);
    };
    let Some(note) = board.note_mut(note_id) else {
        eprintln!("demo note vanished after open");
        std::process::exit(1);
    };

    let mut session = EditSession::new(note);
    let mut sink = NullSink;
    if let Some(first) = session.tap_empty_area(note, &mut sink) {
        session.update_text(note, first, "buy milk", &mut sink);
        if let Some(second) = session.submit(note, first, &mut sink) {
            session.update_text(note, second, "water plants", &mut sink);
        }
        session.toggle(note, first, &mut sink);
    }

    let (width, height) = note.size().dimensions();
    println!(
        "note style={} size={}x{} list={}",
        note.style(),
        width,
        height,
        note.list_style()
    );
    for item in note.display_order() {
        let marker = if item.is_completed() { "[x]" } else { "[ ]" };
        println!("{marker} {}", item.text());
    }
}
