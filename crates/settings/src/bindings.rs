//! Key bindings: action → code, and the reverse lookup used on key events.

use std::collections::HashMap;

use crate::types::{Action, InputCode};

/// Key code bound to each action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub up: InputCode,
    pub down: InputCode,
    pub left: InputCode,
    pub right: InputCode,
    pub reset: InputCode,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            up: InputCode::ARROW_UP,
            down: InputCode::ARROW_DOWN,
            left: InputCode::ARROW_LEFT,
            right: InputCode::ARROW_RIGHT,
            reset: InputCode::SPACE,
        }
    }
}

impl Bindings {
    pub fn code_for(&self, action: Action) -> InputCode {
        match action {
            Action::Up => self.up,
            Action::Down => self.down,
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Reset => self.reset,
        }
    }

    /// True when two actions share a key code.
    pub fn has_conflicts(&self) -> bool {
        let codes = Action::ALL.map(|a| self.code_for(a));
        codes
            .iter()
            .enumerate()
            .any(|(i, c)| codes[i + 1..].contains(c))
    }
}

/// Reverse lookup from key code to action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMap {
    by_code: HashMap<InputCode, Action>,
}

impl KeyMap {
    pub fn from_bindings(bindings: &Bindings) -> Self {
        let by_code = Action::ALL
            .iter()
            .map(|&action| (bindings.code_for(action), action))
            .collect();
        Self { by_code }
    }

    pub fn action(&self, code: InputCode) -> Option<Action> {
        self.by_code.get(&code).copied()
    }
}
