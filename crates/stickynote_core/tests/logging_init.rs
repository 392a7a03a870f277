use stickynote_core::{default_log_level, init_logging, logging_status, NoteBoard, NoteStyle};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir = tempfile::tempdir().unwrap();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging(" INFO ", &log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(level_error.contains("refusing to switch"));
    let dir_error = init_logging("info", &other_dir_str).unwrap_err();
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    let mut board = NoteBoard::default();
    let note_id = board.open_note(NoteStyle::Kiwi).unwrap();
    board.close_note(note_id);
    log::logger().flush();

    let wrote_file = std::fs::read_dir(log_dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("stickynote"));
    assert!(wrote_file);
}

#[test]
fn default_level_is_known() {
    assert!(["debug", "info"].contains(&default_log_level()));
}
