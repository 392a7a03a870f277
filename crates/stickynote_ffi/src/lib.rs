//! FFI bridge crate for the StickyNote UI shell.

pub mod api;
