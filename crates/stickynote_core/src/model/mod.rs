//! In-memory domain model for sticky notes.
//!
//! # Responsibility
//! - Define notes, list items and their cosmetic tiers.
//! - Keep every mutation synchronous and total over valid identifiers.
//!
//! # Invariants
//! - Every note and item is identified by a stable, never-reused UUID.
//! - A note exclusively owns its items; items never reference their note.

pub mod color;
pub mod item;
pub mod note;
pub mod style;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Falls back to `0` if the clock reports a time before the epoch.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
