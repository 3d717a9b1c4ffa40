//! Terminal rendering for the snake playfield.
//!
//! The game produces plain text frames. This crate lays a frame out in the
//! terminal, colors it per glyph, and flushes only the cells that changed.
//!
//! - [`fb`]: styled cell framebuffer
//! - [`view`]: frame text to framebuffer (pure, testable)
//! - [`renderer`]: raw mode, alternate screen and diffed output

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{AnchorY, FrameView, Viewport};
