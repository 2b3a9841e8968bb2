use std::collections::HashSet;

use crossterm::event::KeyCode;

use super::{Direction, Paddle};
use crate::config::{Config, PaddleKeys};

/// Keys currently held down, as reported by the input surface for one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: HashSet<KeyCode>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters are folded to lowercase so Shift or Caps Lock don't matter.
    pub fn normalize(code: KeyCode) -> KeyCode {
        match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.keys.insert(Self::normalize(code));
    }

    #[cfg(test)]
    pub fn release(&mut self, code: KeyCode) {
        self.keys.remove(&Self::normalize(code));
    }

    pub fn is_down(&self, code: KeyCode) -> bool {
        self.keys.contains(&Self::normalize(code))
    }
}

impl FromIterator<KeyCode> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        let mut held = HeldKeys::new();
        for code in iter {
            held.press(code);
        }
        held
    }
}

/// Moves both paddles from the held keys, each direction checked on its own.
///
/// A step is only taken when it keeps the paddle on screen, so holding both
/// keys of a pair cancels out and a paddle at an edge stays put.
pub fn apply_movement(keys: &HeldKeys, left: &mut Paddle, right: &mut Paddle, cfg: &Config) {
    drive(keys, &cfg.left_keys, left, cfg.height);
    drive(keys, &cfg.right_keys, right, cfg.height);
}

fn drive(keys: &HeldKeys, binding: &PaddleKeys, paddle: &mut Paddle, floor: f32) {
    if keys.is_down(binding.up) && paddle.can_move(Direction::Up, floor) {
        paddle.advance(Direction::Up);
    }
    if keys.is_down(binding.down) && paddle.can_move(Direction::Down, floor) {
        paddle.advance(Direction::Down);
    }
}
