//! Persisted player settings.
//!
//! Settings live in a flat string key-value store:
//!
//! | Key | Meaning | Default |
//! |-----|---------|---------|
//! | `difficulty` | `E`, `M` or `H` | `M` |
//! | `showFPS` | `"true"` / `"false"` | `false` |
//! | `keyUp` | key code | 38 |
//! | `keyDown` | key code | 40 |
//! | `keyLeft` | key code | 37 |
//! | `keyRight` | key code | 39 |
//!
//! Reset is always bound to space (32). Loading never fails: absent or
//! malformed values fall back to the defaults above.

pub mod bindings;
pub mod store;

pub use tui_snake_types as types;

pub use bindings::{Bindings, KeyMap};
pub use store::{JsonFileStore, MemoryStore, SettingsStore};

use std::path::PathBuf;

use log::warn;

use crate::types::{Difficulty, InputCode};

pub const KEY_DIFFICULTY: &str = "difficulty";
pub const KEY_SHOW_FPS: &str = "showFPS";
pub const KEY_UP: &str = "keyUp";
pub const KEY_DOWN: &str = "keyDown";
pub const KEY_LEFT: &str = "keyLeft";
pub const KEY_RIGHT: &str = "keyRight";

/// Environment variable overriding the settings file location
pub const SETTINGS_PATH_ENV: &str = "TUI_SNAKE_SETTINGS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub show_fps: bool,
    pub bindings: Bindings,
}

impl Settings {
    /// Read settings from `store`, falling back to defaults per key.
    pub fn load(store: &impl SettingsStore) -> Self {
        let defaults = Settings::default();

        let difficulty = match non_empty(store, KEY_DIFFICULTY) {
            None => defaults.difficulty,
            Some(raw) => Difficulty::from_code(&raw).unwrap_or_else(|| {
                warn!("unknown difficulty {raw:?}, using {}", defaults.difficulty.code());
                defaults.difficulty
            }),
        };

        let show_fps = match store.get(KEY_SHOW_FPS) {
            None => defaults.show_fps,
            Some(raw) => raw.trim() == "true",
        };

        let d = defaults.bindings;
        let bindings = Bindings {
            up: load_code(store, KEY_UP, d.up),
            down: load_code(store, KEY_DOWN, d.down),
            left: load_code(store, KEY_LEFT, d.left),
            right: load_code(store, KEY_RIGHT, d.right),
            reset: d.reset,
        };
        let bindings = if bindings.has_conflicts() {
            warn!("conflicting key bindings {bindings:?}, using defaults");
            d
        } else {
            bindings
        };

        Self {
            difficulty,
            show_fps,
            bindings,
        }
    }

    /// Write every persisted key to `store`.
    pub fn save(&self, store: &mut impl SettingsStore) {
        store.set(KEY_DIFFICULTY, self.difficulty.code().to_string());
        store.set(KEY_SHOW_FPS, self.show_fps.to_string());
        store.set(KEY_UP, self.bindings.up.value().to_string());
        store.set(KEY_DOWN, self.bindings.down.value().to_string());
        store.set(KEY_LEFT, self.bindings.left.value().to_string());
        store.set(KEY_RIGHT, self.bindings.right.value().to_string());
    }

    /// Milliseconds per cell for the configured difficulty.
    pub fn move_interval_ms(&self) -> u32 {
        self.difficulty.move_interval_ms()
    }
}

/// Where the settings file lives.
///
/// `$TUI_SNAKE_SETTINGS`, else `$HOME/.tui-snake.json`, else
/// `./tui-snake.json`.
pub fn settings_path() -> PathBuf {
    if let Some(p) = std::env::var_os(SETTINGS_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(p);
    }
    match std::env::var_os("HOME").filter(|p| !p.is_empty()) {
        Some(home) => PathBuf::from(home).join(".tui-snake.json"),
        None => PathBuf::from("tui-snake.json"),
    }
}

fn non_empty(store: &impl SettingsStore, key: &str) -> Option<String> {
    store.get(key).filter(|v| !v.trim().is_empty())
}

fn load_code(store: &impl SettingsStore, key: &str, default: InputCode) -> InputCode {
    let Some(raw) = non_empty(store, key) else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(code) if code > 0 => InputCode(code),
        _ => {
            warn!("invalid key code {raw:?} for {key}, using {}", default.value());
            default
        }
    }
}
