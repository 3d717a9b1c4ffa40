//! TUI Snake (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, tests and
//! benches can use `tui_snake::{core,input,settings,term,types}`.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_settings as settings;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
