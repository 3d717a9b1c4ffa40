//! Grid buffer - the text playfield every frame is drawn into.

use crate::types::{Position, BLANK_GLYPH};

/// 2D buffer of glyphs, flattened to one multi-line string per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
    last_output: Option<String>,
}

impl GridBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK_GLYPH; len],
            last_output: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    pub fn glyph_at(&self, pos: Position) -> Option<char> {
        self.idx(pos.x as i32, pos.y as i32).map(|i| self.cells[i])
    }

    /// Reset every cell to the blank glyph.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK_GLYPH);
    }

    /// Write one glyph. Cells outside the grid are ignored.
    pub fn put(&mut self, pos: Position, ch: char) {
        if let Some(i) = self.idx(pos.x as i32, pos.y as i32) {
            self.cells[i] = ch;
        }
    }

    /// Write `text` into a row.
    ///
    /// `y = None` picks the middle row `(height - 1) / 2`; `x = None` centers
    /// the run horizontally. Characters past the right edge are clipped.
    pub fn write_text(&mut self, text: &str, x: Option<u16>, y: Option<u16>) {
        let len = text.chars().count() as u16;
        let y = y.unwrap_or(self.height.saturating_sub(1) / 2);
        let x = x.unwrap_or(self.width.saturating_sub(len) / 2);
        if y >= self.height {
            return;
        }

        let mut cx = x;
        for ch in text.chars() {
            if cx >= self.width {
                break;
            }
            if let Some(i) = self.idx(cx as i32, y as i32) {
                self.cells[i] = ch;
            }
            cx += 1;
        }
    }

    /// Rows joined with `\n`.
    pub fn flatten(&self) -> String {
        let w = self.width as usize;
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for (row_i, row) in self.cells.chunks(w.max(1)).enumerate() {
            if row_i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }

    /// Flatten the buffer, returning the text only if it changed since the
    /// previous render.
    pub fn render(&mut self) -> Option<&str> {
        let output = self.flatten();
        if self.last_output.as_deref() == Some(output.as_str()) {
            return None;
        }
        self.last_output = Some(output);
        self.last_output.as_deref()
    }

    /// Forget the last output so the next render is emitted again.
    pub fn invalidate(&mut self) {
        self.last_output = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_blank() {
        let grid = GridBuffer::new(3, 2);
        assert_eq!(grid.flatten(), "   \n   ");
    }

    #[test]
    fn write_text_at_explicit_position() {
        let mut grid = GridBuffer::new(6, 2);
        grid.write_text("ab", Some(1), Some(1));
        assert_eq!(grid.flatten(), "      \n ab   ");
    }

    #[test]
    fn write_text_centers_when_unplaced() {
        let mut grid = GridBuffer::new(7, 5);
        grid.write_text("abc", None, None);
        // Middle row is (5 - 1) / 2 = 2; column is (7 - 3) / 2 = 2.
        assert_eq!(grid.get(2, 2), Some('a'));
        assert_eq!(grid.get(4, 2), Some('c'));
    }

    #[test]
    fn write_text_clips_at_right_edge() {
        let mut grid = GridBuffer::new(4, 1);
        grid.write_text("hello", Some(2), Some(0));
        assert_eq!(grid.flatten(), "  he");

        // Longer than the row when centered starts at column 0.
        grid.clear();
        grid.write_text("hello", None, Some(0));
        assert_eq!(grid.flatten(), "hell");
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut grid = GridBuffer::new(2, 2);
        grid.put(Position::new(-1, 0), 'x');
        grid.put(Position::new(2, 0), 'x');
        grid.write_text("x", Some(0), Some(5));
        assert_eq!(grid.flatten(), "  \n  ");
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut grid = GridBuffer::new(2, 2);
        grid.put(Position::new(1, 1), '#');
        grid.clear();
        assert_eq!(grid.glyph_at(Position::new(1, 1)), Some(' '));
    }

    #[test]
    fn render_suppresses_identical_frames() {
        let mut grid = GridBuffer::new(2, 1);
        assert_eq!(grid.render(), Some("  "));
        assert_eq!(grid.render(), None);

        grid.put(Position::new(0, 0), '#');
        assert_eq!(grid.render(), Some("# "));
        assert_eq!(grid.render(), None);

        grid.invalidate();
        assert_eq!(grid.render(), Some("# "));
    }
}
