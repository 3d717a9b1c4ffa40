//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::key_code;
use crate::types::InputCode;

/// Most keys tracked as held at once; further presses are dropped.
pub const MAX_HELD_KEYS: usize = 16;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// A press/release edge to forward to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Down(InputCode),
    Up(InputCode),
}

#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Held codes with the time they were last seen pressed
    held: ArrayVec<(InputCode, u64), MAX_HELD_KEYS>,
    release_events_seen: bool,
    key_release_timeout_ms: u32,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            release_events_seen: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// True once the terminal has reported a real key release.
    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    pub fn is_held(&self, code: InputCode) -> bool {
        self.held.iter().any(|(c, _)| *c == code)
    }

    /// Feed one terminal key event observed at `now_ms`.
    ///
    /// Repeats of a held key only refresh it; they never produce a second
    /// `Down`.
    pub fn handle_key_event(&mut self, key: KeyEvent, now_ms: u64) -> Option<KeyTransition> {
        let code = key_code(key.code)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if let Some(entry) = self.held.iter_mut().find(|(c, _)| *c == code) {
                    entry.1 = now_ms;
                    return None;
                }
                self.held.try_push((code, now_ms)).ok()?;
                Some(KeyTransition::Down(code))
            }
            KeyEventKind::Release => {
                self.release_events_seen = true;
                let i = self.held.iter().position(|(c, _)| *c == code)?;
                self.held.remove(i);
                Some(KeyTransition::Up(code))
            }
        }
    }

    /// Release keys that went quiet, when the terminal never reports releases.
    pub fn update(&mut self, now_ms: u64) -> ArrayVec<InputCode, MAX_HELD_KEYS> {
        let mut released = ArrayVec::new();
        if self.release_events_seen {
            return released;
        }

        let timeout = self.key_release_timeout_ms as u64;
        self.held.retain(|(code, seen)| {
            if now_ms.saturating_sub(*seen) > timeout {
                released.push(*code);
                false
            } else {
                true
            }
        });
        released
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
