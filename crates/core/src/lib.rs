//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O or the filesystem, making it:
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Testable**: Randomness is injected, so tests can script every placement
//! - **Portable**: Any host that can call a function once per frame can drive it
//!
//! # Module Structure
//!
//! - [`grid`]: Text buffer the playfield is drawn into, with redraw suppression
//! - [`entity`]: Fruit and mines, and their random placement
//! - [`snake`]: Body, steering, movement and collision resolution
//! - [`board`]: The border ring
//! - [`fps`]: Frame-rate readout
//! - [`game`]: One round, from countdown to game over
//! - [`session`]: Owns the live round, routes key codes, handles reset
//! - [`rng`]: Injectable randomness with a seeded LCG
//!
//! # Game Rules
//!
//! - **Movement**: One cell per movement interval (difficulty: 60/40/20ms)
//! - **Steering**: Edge-triggered, perpendicular turns only (no 180° reversal)
//! - **Fruit**: +5 points, grow by 2, flavor label, 45% chance to spawn a mine
//! - **Death**: Touching the border, the snake's own body, or a mine
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Game, GameConfig, Phase};
//!
//! let mut game = Game::seeded(GameConfig::default(), 12345);
//! assert_eq!(game.phase(), Phase::Countdown { remaining: 3 });
//!
//! // Four countdown ticks of one second each, then the round runs.
//! for _ in 0..4 {
//!     game.update(1000);
//! }
//! assert_eq!(game.phase(), Phase::Running);
//!
//! // One movement interval at medium difficulty.
//! game.update(40);
//! assert_eq!(game.snake().head().x, 11);
//! assert!(game.render().is_some());
//! ```
//!
//! # Timing
//!
//! Call [`Game::update`](game::Game::update) (or
//! [`Session::frame`](session::Session::frame)) every frame with elapsed
//! time. Leftover time beyond a movement interval is dropped, so the snake
//! never covers more than one cell per frame.

pub mod board;
pub mod entity;
pub mod fps;
pub mod game;
pub mod grid;
pub mod pressed;
pub mod rng;
pub mod session;
pub mod snake;

pub use tui_snake_settings as settings;
pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Border;
pub use entity::Entity;
pub use fps::FpsCounter;
pub use game::{Game, GameConfig, Phase};
pub use grid::GridBuffer;
pub use pressed::PressedSet;
pub use rng::{Randomness, SimpleRng};
#[cfg(any(test, feature = "testing"))]
pub use rng::ScriptedRng;
pub use session::Session;
pub use snake::{Collision, Field, MoveOutcome, Snake};
