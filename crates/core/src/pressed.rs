//! Set of currently held actions.

use crate::types::Action;

/// Which actions are held down right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PressedSet {
    bits: u8,
}

impl PressedSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn bit(action: Action) -> u8 {
        1 << (action as u8)
    }

    pub fn press(&mut self, action: Action) {
        self.bits |= Self::bit(action);
    }

    pub fn release(&mut self, action: Action) {
        self.bits &= !Self::bit(action);
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.bits & Self::bit(action) != 0
    }

    /// Held in `self` but not in `before`.
    pub fn newly_pressed(&self, before: &PressedSet, action: Action) -> bool {
        self.is_pressed(action) && !before.is_pressed(action)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl FromIterator<Action> for PressedSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = PressedSet::new();
        for action in iter {
            set.press(action);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release() {
        let mut set = PressedSet::new();
        assert!(set.is_empty());
        set.press(Action::Up);
        set.press(Action::Reset);
        assert!(set.is_pressed(Action::Up));
        assert!(set.is_pressed(Action::Reset));
        assert!(!set.is_pressed(Action::Down));
        set.release(Action::Up);
        assert!(!set.is_pressed(Action::Up));
    }

    #[test]
    fn edges() {
        let before: PressedSet = [Action::Left].into_iter().collect();
        let now: PressedSet = [Action::Left, Action::Up].into_iter().collect();
        assert!(now.newly_pressed(&before, Action::Up));
        assert!(!now.newly_pressed(&before, Action::Left));
        assert!(!before.newly_pressed(&now, Action::Up));
    }
}
