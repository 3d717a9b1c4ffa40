//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, settings, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a square text grid:
//!
//! - **Width**: 41 columns (indexed 0-40)
//! - **Height**: 41 rows (indexed 0-40)
//! - The outermost ring of cells is the border; touching it ends the round.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `COUNTDOWN_FROM` | 3 | Countdown ticks before a round starts |
//! | `COUNTDOWN_TICK_MS` | 1000 | Length of one countdown tick |
//! | `FPS_WINDOW_MS` | 1000 | Frame-rate sampling window |
//!
//! # Difficulty
//!
//! Difficulty is the time the snake needs to advance one cell:
//!
//! | Difficulty | Code | Interval |
//! |------------|------|----------|
//! | Easy | `E` | 60ms |
//! | Medium | `M` | 40ms |
//! | Hard | `H` | 20ms |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Difficulty, Direction, Position, GRID_WIDTH};
//!
//! let head = Position::new(10, 20);
//! assert_eq!(head.step(Direction::Right), Position::new(11, 20));
//!
//! assert_eq!(Difficulty::from_code("h"), Some(Difficulty::Hard));
//! assert_eq!(Difficulty::Medium.move_interval_ms(), 40);
//!
//! assert_eq!(GRID_WIDTH, 41);
//! ```

/// Grid width in cells (41 columns)
pub const GRID_WIDTH: u16 = 41;

/// Grid height in cells (41 rows)
pub const GRID_HEIGHT: u16 = 41;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Countdown ticks shown before the snake starts moving
pub const COUNTDOWN_FROM: u32 = 3;

/// Length of a countdown tick (one second)
pub const COUNTDOWN_TICK_MS: u32 = 1000;

/// Frame-rate readout window (one second)
pub const FPS_WINDOW_MS: u64 = 1000;

/// Initial snake length
pub const SNAKE_START_LEN: usize = 3;

/// Segments added per fruit eaten
pub const GROW_BY: u32 = 2;

/// Points awarded per fruit
pub const FRUIT_VALUE: u32 = 5;

/// Points awarded when a mine is placed (mines are worth nothing)
pub const MINE_VALUE: u32 = 0;

/// Probability that eating a fruit also spawns a mine
pub const MINE_CHANCE: f64 = 0.45;

/// Rejection-sampling attempts before placement falls back to a full scan
pub const RELOCATE_ATTEMPTS: u32 = 1000;

/// Blank cell glyph
pub const BLANK_GLYPH: char = ' ';

/// Snake body glyph
pub const SNAKE_GLYPH: char = '#';

/// Fruit glyph
pub const FRUIT_GLYPH: char = '+';

/// Mine glyph
pub const MINE_GLYPH: char = 'o';

/// Border glyph
pub const BORDER_GLYPH: char = 'X';

/// Flavor labels announced when a fruit is eaten
pub const FRUIT_FLAVORS: [&str; 7] = [
    "Blueberry",
    "Apple",
    "Orange",
    "Strawberry",
    "Cherry",
    "Kiwi",
    "Passion Fruit",
];


/// A cell on the grid
///
/// Components are signed so that a step past the border is representable
/// before the collision check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Movement directions
///
/// Screen coordinates: `y` grows downwards, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)`
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }
}

/// Logical player actions
///
/// Key codes are bound to these; the game only ever sees actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Start a new round (only honoured after game over)
    Reset,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Reset,
    ];
}

/// Numeric key code, using the browser `keyCode` numbering
///
/// Arrow keys are 37-40, space is 32 and letters use their uppercase ASCII
/// value, so persisted bindings stay portable between hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputCode(pub u32);

impl InputCode {
    pub const BACKSPACE: InputCode = InputCode(8);
    pub const TAB: InputCode = InputCode(9);
    pub const ENTER: InputCode = InputCode(13);
    pub const ESCAPE: InputCode = InputCode(27);
    pub const SPACE: InputCode = InputCode(32);
    pub const ARROW_LEFT: InputCode = InputCode(37);
    pub const ARROW_UP: InputCode = InputCode(38);
    pub const ARROW_RIGHT: InputCode = InputCode(39);
    pub const ARROW_DOWN: InputCode = InputCode(40);

    pub fn value(self) -> u32 {
        self.0
    }
}

/// Snake speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse the persisted single-letter code (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_code("E"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_code("m"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_code("X"), None);
    /// ```
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "E" => Some(Difficulty::Easy),
            "M" => Some(Difficulty::Medium),
            "H" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Difficulty::Easy => "E",
            Difficulty::Medium => "M",
            Difficulty::Hard => "H",
        }
    }

    /// Milliseconds the snake needs to advance one cell
    pub fn move_interval_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 40,
            Difficulty::Hard => 20,
        }
    }
}
