//! Border frame around the playfield.

use crate::grid::GridBuffer;
use crate::types::{Position, BORDER_GLYPH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    glyph: char,
}

impl Default for Border {
    fn default() -> Self {
        Self::new(BORDER_GLYPH)
    }
}

impl Border {
    pub fn new(glyph: char) -> Self {
        Self { glyph }
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Fill the outermost ring of `grid` with the border glyph.
    pub fn draw(&self, grid: &mut GridBuffer) {
        let w = grid.width() as i16;
        let h = grid.height() as i16;
        if w == 0 || h == 0 {
            return;
        }

        for x in 0..w {
            grid.put(Position::new(x, 0), self.glyph);
            grid.put(Position::new(x, h - 1), self.glyph);
        }
        for y in 0..h {
            grid.put(Position::new(0, y), self.glyph);
            grid.put(Position::new(w - 1, y), self.glyph);
        }
    }

    /// True when `pos` lies on the ring drawn by [`Border::draw`], or past it.
    pub fn contains(width: u16, height: u16, pos: Position) -> bool {
        let (w, h) = (width as i16, height as i16);
        pos.x <= 0 || pos.y <= 0 || pos.x >= w - 1 || pos.y >= h - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_outer_ring_only() {
        let mut grid = GridBuffer::new(4, 3);
        Border::default().draw(&mut grid);
        assert_eq!(grid.flatten(), "XXXX\nX  X\nXXXX");
    }

    #[test]
    fn ring_membership() {
        assert!(Border::contains(41, 41, Position::new(40, 20)));
        assert!(Border::contains(41, 41, Position::new(0, 0)));
        assert!(!Border::contains(41, 41, Position::new(39, 39)));
        assert!(!Border::contains(41, 41, Position::new(1, 1)));
        assert!(Border::contains(41, 41, Position::new(-1, 20)));
    }
}
