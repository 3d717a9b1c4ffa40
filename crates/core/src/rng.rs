//! RNG module - injectable randomness for placement, flavors and mine rolls
//!
//! The game never reaches for a global random source. Everything random goes
//! through [`Randomness`], so a seeded [`SimpleRng`] reproduces a whole round
//! and tests can script exact placements with `ScriptedRng` (behind the
//! `testing` feature).

/// Source of randomness used by the game.
pub trait Randomness {
    /// Uniform integer in `[0, max)`. `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[min, max)`.
    fn range_between(&mut self, min: u32, max: u32) -> u32 {
        min + self.next_range(max - min)
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Randomness for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Scale by the high bits; the low bits of an LCG cycle quickly.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays scripted values, then falls back to a seeded [`SimpleRng`].
///
/// Test helper: only built for unit tests or with the `testing` feature.
///
/// `next_range` values are offsets taken modulo `max`; placement draws
/// `x` then `y` as offsets from the first interior cell, which [`cell`]
/// spells out.
///
/// [`cell`]: ScriptedRng::cell
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    ranges: std::collections::VecDeque<u32>,
    units: std::collections::VecDeque<f64>,
    fallback: SimpleRng,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw `next_range` results.
    pub fn ranges(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.ranges.extend(values);
        self
    }

    /// Queue `next_unit` results.
    pub fn units(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(values);
        self
    }

    /// Queue one placement on the interior cell `(x, y)`.
    pub fn cell(self, x: u32, y: u32) -> Self {
        self.ranges([x - 1, y - 1])
    }

    /// Scripted values not consumed yet.
    pub fn remaining(&self) -> usize {
        self.ranges.len() + self.units.len()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Randomness for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        match self.ranges.pop_front() {
            Some(v) => v % max,
            None => self.fallback.next_range(max),
        }
    }

    fn next_unit(&mut self) -> f64 {
        match self.units.pop_front() {
            Some(v) => v,
            None => self.fallback.next_unit(),
        }
    }
}
