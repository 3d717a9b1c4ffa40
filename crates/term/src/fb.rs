//! Framebuffer and style types for terminal rendering.

use crate::types::{BORDER_GLYPH, FRUIT_GLYPH, MINE_GLYPH, SNAKE_GLYPH};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

impl CellStyle {
    const fn fg(r: u8, g: u8, b: u8, bold: bool) -> Self {
        Self {
            fg: Rgb::new(r, g, b),
            bg: Rgb::new(0, 0, 0),
            bold,
        }
    }

    pub const SNAKE: CellStyle = CellStyle::fg(100, 220, 120, true);
    pub const FRUIT: CellStyle = CellStyle::fg(220, 80, 80, true);
    pub const MINE: CellStyle = CellStyle::fg(240, 220, 80, true);
    pub const BORDER: CellStyle = CellStyle::fg(120, 120, 130, false);
    pub const TEXT: CellStyle = CellStyle::fg(255, 255, 255, true);

    /// Style for a glyph of the playfield.
    ///
    /// `left`/`right` are the neighbouring glyphs on the same row; a mine
    /// glyph next to a letter is part of a word, not a mine.
    pub fn for_glyph(ch: char, left: char, right: char) -> CellStyle {
        match ch {
            SNAKE_GLYPH => CellStyle::SNAKE,
            FRUIT_GLYPH => CellStyle::FRUIT,
            BORDER_GLYPH => CellStyle::BORDER,
            MINE_GLYPH if !left.is_alphabetic() && !right.is_alphabetic() => CellStyle::MINE,
            ' ' => CellStyle::default(),
            _ => CellStyle::TEXT,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Row `y` as plain text.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
