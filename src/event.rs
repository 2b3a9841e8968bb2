use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::HeldKeys;

/// How long a key counts as held after a press when the terminal never
/// reports releases. Long enough to bridge the auto-repeat delay.
const PRESS_HOLD: Duration = Duration::from_millis(400);
/// Extension granted by each auto-repeat of a key that is already held.
const REPEAT_HOLD: Duration = Duration::from_millis(90);

/// Result of draining the terminal's event queue for one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Quit,
    Keys(HeldKeys),
}

/// Turns a stream of key events into a held-key set.
///
/// With release reporting, a key is held from its press until its release.
/// Without it, every press keeps the key alive for a short window instead.
#[derive(Debug)]
pub struct KeyTracker {
    release_events: bool,
    held: HashMap<KeyCode, Option<Instant>>,
}

impl KeyTracker {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            held: HashMap::new(),
        }
    }

    pub fn record(&mut self, key: KeyEvent, now: Instant) {
        let code = HeldKeys::normalize(key.code);
        match key.kind {
            KeyEventKind::Release => {
                self.held.remove(&code);
            }
            KeyEventKind::Press | KeyEventKind::Repeat if self.release_events => {
                self.held.insert(code, None);
            }
            KeyEventKind::Press | KeyEventKind::Repeat => {
                let window = match self.held.get(&code) {
                    Some(Some(until)) if *until > now => REPEAT_HOLD,
                    _ => PRESS_HOLD,
                };
                let until = now + window;
                let entry = self.held.entry(code).or_insert(Some(until));
                if let Some(current) = entry {
                    *current = (*current).max(until);
                }
            }
        }
    }

    /// Keys still held at `now`; expired ones are forgotten.
    pub fn snapshot(&mut self, now: Instant) -> HeldKeys {
        self.held
            .retain(|_, until| until.map_or(true, |until| until > now));
        self.held.keys().copied().collect()
    }
}

/// Ctrl+C, Esc or `q` stand in for closing the window.
pub fn is_quit(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// Non-blocking reader of the terminal's input queue.
pub struct EventHandler {
    tracker: KeyTracker,
}

impl EventHandler {
    pub fn new(release_events: bool) -> Self {
        Self {
            tracker: KeyTracker::new(release_events),
        }
    }

    /// Drains every pending event without waiting.
    pub fn poll(&mut self) -> io::Result<Input> {
        while event::poll(Duration::ZERO)? {
            if let event::Event::Key(key) = event::read()? {
                if is_quit(&key) {
                    return Ok(Input::Quit);
                }
                self.tracker.record(key, Instant::now());
            }
        }
        Ok(Input::Keys(self.tracker.snapshot(Instant::now())))
    }
}
