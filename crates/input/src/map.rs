//! Key mapping from terminal events to portable key codes.

use crate::types::InputCode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key to its browser-style key code.
///
/// Letters map to their uppercase ASCII value, so `w` and `W` are the same
/// key, the way a keyboard reports them.
pub fn key_code(code: KeyCode) -> Option<InputCode> {
    match code {
        KeyCode::Left => Some(InputCode::ARROW_LEFT),
        KeyCode::Up => Some(InputCode::ARROW_UP),
        KeyCode::Right => Some(InputCode::ARROW_RIGHT),
        KeyCode::Down => Some(InputCode::ARROW_DOWN),
        KeyCode::Enter => Some(InputCode::ENTER),
        KeyCode::Esc => Some(InputCode::ESCAPE),
        KeyCode::Tab => Some(InputCode::TAB),
        KeyCode::Backspace => Some(InputCode::BACKSPACE),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(InputCode(c.to_ascii_uppercase() as u32))
        }
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => Some(InputCode(c as u32)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key_code(KeyCode::Left), Some(InputCode(37)));
        assert_eq!(key_code(KeyCode::Up), Some(InputCode(38)));
        assert_eq!(key_code(KeyCode::Right), Some(InputCode(39)));
        assert_eq!(key_code(KeyCode::Down), Some(InputCode(40)));
    }

    #[test]
    fn test_space_and_letters() {
        assert_eq!(key_code(KeyCode::Char(' ')), Some(InputCode::SPACE));
        assert_eq!(key_code(KeyCode::Char('w')), Some(InputCode(87)));
        assert_eq!(key_code(KeyCode::Char('W')), Some(InputCode(87)));
        assert_eq!(key_code(KeyCode::Char('7')), Some(InputCode(55)));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_code(KeyCode::F(5)), None);
        assert_eq!(key_code(KeyCode::Char('é')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
