//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game rules. It maps
//! `crossterm` key events into portable [`crate::types::InputCode`]s and
//! tracks held keys, including on terminals without key-release events.

pub mod map;
pub mod tracker;

pub use tui_snake_types as types;

pub use map::{key_code, should_quit};
pub use tracker::{KeyTracker, KeyTransition};
