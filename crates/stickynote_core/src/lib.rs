//! Core domain logic for StickyNote.
//! This crate is the single source of truth for note/item invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{BoardConfig, ConfigError, NoteDefaults};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::color::{ColorParseError, Rgb};
pub use model::item::{Item, ItemId, ItemRecord, ItemStyle, ItemValidationError};
pub use model::note::{Note, NoteError, NoteId};
pub use model::style::{FontSize, FontStyle, ListStyle, NoteSize, NoteStyle, StyleParseError};
pub use service::board::{BoardError, BoardResult, NoteBoard};
pub use service::edit_session::EditSession;
pub use service::events::{EventSink, NoteEvent, NullSink};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
