//! Session - owns the current round and routes input to it.
//!
//! There is exactly one live [`Game`] at a time. Resetting builds a fresh one
//! and drops the old round; nothing is rewound in place.

use log::info;

use crate::game::{Game, GameConfig};
use crate::rng::SimpleRng;
use crate::settings::{KeyMap, Settings};
use crate::types::{Action, InputCode};

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    settings: Settings,
    keymap: KeyMap,
    /// Seeds each new round
    seeder: SimpleRng,
    last_frame_ms: Option<u64>,
    round: u32,
}

impl Session {
    pub fn new(settings: Settings, seed: u32) -> Self {
        let mut seeder = SimpleRng::new(seed);
        let game = Game::seeded(GameConfig::from_settings(&settings), seeder.next_u32());
        info!("session started, difficulty {}", settings.difficulty.code());
        Self {
            game,
            keymap: KeyMap::from_bindings(&settings.bindings),
            settings,
            seeder,
            last_frame_ms: None,
            round: 1,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Rounds played so far, counting the current one.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Handle a key press. Returns the bound action, if any.
    ///
    /// Reset only takes effect once the current round is over.
    pub fn key_down(&mut self, code: InputCode) -> Option<Action> {
        let action = self.keymap.action(code)?;
        self.game.press(action);
        if action == Action::Reset && self.game.is_stopped() {
            self.reset();
        }
        Some(action)
    }

    /// Handle a key release. Returns the bound action, if any.
    pub fn key_up(&mut self, code: InputCode) -> Option<Action> {
        let action = self.keymap.action(code)?;
        self.game.release(action);
        Some(action)
    }

    /// Run one frame at host time `now_ms`.
    ///
    /// Returns the frame text when it changed since the last frame returned.
    pub fn frame(&mut self, now_ms: u64) -> Option<String> {
        let delta = match self.last_frame_ms {
            Some(last) => now_ms.saturating_sub(last).min(u32::MAX as u64) as u32,
            None => 0,
        };
        self.last_frame_ms = Some(now_ms);

        self.game.update(delta);
        self.game.render().map(str::to_owned)
    }

    /// Replace the current round with a new one in countdown.
    pub fn reset(&mut self) {
        let final_score = self.game.score();
        self.game = Game::seeded(
            GameConfig::from_settings(&self.settings),
            self.seeder.next_u32(),
        );
        self.round += 1;
        info!("round {} started (previous score {final_score})", self.round);
    }

    /// Use new settings from now on, including in the live round.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.keymap = KeyMap::from_bindings(&settings.bindings);
        self.game.apply_settings(&settings);
        self.settings = settings;
        info!("settings applied, difficulty {}", settings.difficulty.code());
    }

    /// Make the next frame come back even if unchanged (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.game.invalidate();
    }
}
