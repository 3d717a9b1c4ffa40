//! Fruit and mine entities.

use log::warn;

use crate::rng::Randomness;
use crate::types::{
    Position, FRUIT_GLYPH, FRUIT_VALUE, MINE_GLYPH, MINE_VALUE, RELOCATE_ATTEMPTS,
};

/// A point on the grid with a reward value and a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub pos: Position,
    pub value: u32,
    pub glyph: char,
}

impl Entity {
    pub fn new(pos: Position, value: u32, glyph: char) -> Self {
        Self { pos, value, glyph }
    }

    pub fn fruit(pos: Position) -> Self {
        Self::new(pos, FRUIT_VALUE, FRUIT_GLYPH)
    }

    /// A mine that still needs to be placed with [`Entity::relocate`].
    pub fn mine() -> Self {
        Self::new(Position::default(), MINE_VALUE, MINE_GLYPH)
    }

    /// Move to a random interior cell that is neither `fruit` nor a mine.
    ///
    /// Samples uniformly, excluding the border ring, up to
    /// `RELOCATE_ATTEMPTS` times, then scans for the free cells left and
    /// picks one of those. Returns `false` and stays put when every interior
    /// cell is taken.
    pub fn relocate(
        &mut self,
        rng: &mut impl Randomness,
        width: u16,
        height: u16,
        fruit: Position,
        mines: &[Entity],
    ) -> bool {
        if width < 3 || height < 3 {
            return false;
        }
        let is_free = |p: Position| p != fruit && !mines.iter().any(|m| m.pos == p);

        for _ in 0..RELOCATE_ATTEMPTS {
            let x = rng.range_between(1, width as u32 - 1) as i16;
            let y = rng.range_between(1, height as u32 - 1) as i16;
            let candidate = Position::new(x, y);
            if is_free(candidate) {
                self.pos = candidate;
                return true;
            }
        }

        warn!("placement gave up sampling after {RELOCATE_ATTEMPTS} attempts, scanning");
        let free: Vec<Position> = (1..height as i16 - 1)
            .flat_map(|y| (1..width as i16 - 1).map(move |x| Position::new(x, y)))
            .filter(|&p| is_free(p))
            .collect();
        if free.is_empty() {
            return false;
        }
        self.pos = free[rng.next_range(free.len() as u32) as usize];
        true
    }
}
