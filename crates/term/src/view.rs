//! FrameView: maps rendered playfield text into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Places the playfield text in the middle of the terminal and colors it
/// glyph by glyph.
#[derive(Debug, Clone, Copy)]
pub struct FrameView {
    anchor_y: AnchorY,
}

impl Default for FrameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl FrameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of a `cols` x `rows` frame inside `viewport`.
    ///
    /// Frames larger than the viewport are pinned to the top-left corner and
    /// clipped.
    pub fn origin(&self, cols: u16, rows: u16, viewport: Viewport) -> (u16, u16) {
        let x = viewport.width.saturating_sub(cols) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(rows) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport, so callers can keep one
    /// across frames.
    pub fn render_into(&self, frame: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let rows = frame.lines().count().min(u16::MAX as usize) as u16;
        let cols = frame
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16;
        let (ox, oy) = self.origin(cols, rows, viewport);

        let mut row: Vec<char> = Vec::with_capacity(cols as usize);
        for (dy, line) in frame.lines().enumerate() {
            let y = oy as usize + dy;
            if y >= viewport.height as usize {
                break;
            }
            row.clear();
            row.extend(line.chars());
            for (dx, &ch) in row.iter().enumerate() {
                let x = ox as usize + dx;
                if x >= viewport.width as usize {
                    break;
                }
                let left = if dx > 0 { row[dx - 1] } else { ' ' };
                let right = row.get(dx + 1).copied().unwrap_or(' ');
                fb.put_char(x as u16, y as u16, ch, CellStyle::for_glyph(ch, left, right));
            }
        }
    }

    pub fn render(&self, frame: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }
}
