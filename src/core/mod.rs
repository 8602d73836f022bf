//! Core behaviour — section anchors, visibility observation, and the
//! reveal state machine.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod reveal;
pub mod section;
pub mod visibility;
