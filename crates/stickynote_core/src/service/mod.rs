//! Note use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutations into user-action level APIs.
//! - Deliver change notifications through caller-owned event sinks.
//!
//! # Invariants
//! - Services never hold references into the presentation layer.
//! - Every event names the note and item it concerns by id.

pub mod board;
pub mod edit_session;
pub mod events;
