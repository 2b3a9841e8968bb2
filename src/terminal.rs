use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen, SetTitle,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::Surface;
use crate::audio::{AudioSink, Cue, TerminalBell};
use crate::config::Config;
use crate::event::{EventHandler, Input};
use crate::game::Pong;
use crate::ui;

/// Sleeps away whatever is left of the current frame.
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            last: Instant::now(),
        }
    }

    pub fn tick(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        self.last = Instant::now();
    }
}

/// Terminal modes switched on so far, undone in reverse when dropped.
///
/// Created as soon as raw mode is on, so a failure anywhere later in setup
/// still leaves the terminal usable.
#[derive(Debug, Default)]
struct TerminalModes {
    raw: bool,
    alternate: bool,
    enhanced: bool,
    cursor_hidden: bool,
}

impl TerminalModes {
    fn restore_to<W: Write>(&mut self, out: &mut W) {
        if std::mem::replace(&mut self.enhanced, false) {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        if std::mem::replace(&mut self.alternate, false) {
            let _ = execute!(out, LeaveAlternateScreen);
        }
        if std::mem::replace(&mut self.cursor_hidden, false) {
            let _ = execute!(out, Show);
        }
        if std::mem::replace(&mut self.raw, false) {
            let _ = disable_raw_mode();
        }
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.restore_to(&mut io::stdout());
    }
}

/// The real terminal: drawing, key polling and the bell.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    modes: TerminalModes,
    events: EventHandler,
    bell: TerminalBell<Stdout>,
    clock: FrameClock,
}

impl TerminalSurface {
    pub fn new(cfg: &Config) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut modes = TerminalModes {
            raw: true,
            ..TerminalModes::default()
        };
        let enhanced = supports_keyboard_enhancement().unwrap_or(false);

        let mut stdout = io::stdout();
        modes.alternate = true;
        execute!(stdout, EnterAlternateScreen, SetTitle(cfg.caption))
            .context("failed to enter the alternate screen")?;
        if enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("failed to enable key release events")?;
            modes.enhanced = true;
        }

        let mut terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;
        terminal.clear().context("failed to clear terminal")?;
        modes.cursor_hidden = true;
        terminal.hide_cursor().context("failed to hide cursor")?;

        log::info!("terminal ready, key release events: {enhanced}");
        Ok(Self {
            terminal,
            modes,
            events: EventHandler::new(enhanced),
            bell: TerminalBell::stdout(),
            clock: FrameClock::new(cfg.frame_duration()),
        })
    }
}

impl Surface for TerminalSurface {
    fn throttle(&mut self) {
        self.clock.tick();
    }

    fn draw(&mut self, pong: &Pong, banner: Option<&str>) -> Result<()> {
        self.terminal
            .draw(|frame| ui::render(frame, pong, banner))
            .context("failed to draw frame")?;
        Ok(())
    }

    fn poll(&mut self) -> Result<Input> {
        self.events.poll().context("failed to read terminal input")
    }

    fn play(&mut self, cue: Cue) {
        self.bell.play(cue);
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        self.modes.restore_to(self.terminal.backend_mut());
        log::info!("terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_tick_waits_out_the_frame() {
        let frame = Duration::from_millis(20);
        let mut clock = FrameClock::new(frame);
        clock.tick();

        let start = Instant::now();
        clock.tick();
        let waited = start.elapsed();
        assert!(waited >= Duration::from_millis(15), "waited {waited:?}");
        assert!(waited < Duration::from_millis(500), "waited {waited:?}");
    }

    #[test]
    fn late_tick_does_not_sleep() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(20));

        let start = Instant::now();
        clock.tick();
        assert!(start.elapsed() < Duration::from_millis(5));
    }

    #[test]
    fn modes_undo_only_what_was_switched_on() {
        let mut modes = TerminalModes {
            alternate: true,
            enhanced: true,
            cursor_hidden: true,
            ..TerminalModes::default()
        };
        let mut out = Vec::new();
        modes.restore_to(&mut out);

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[<1u"), "{written:?}");
        assert!(written.contains("\x1b[?1049l"), "{written:?}");
        assert!(written.contains("\x1b[?25h"), "{written:?}");
        assert!(written.find("\x1b[<1u") < written.find("\x1b[?1049l"));
    }

    #[test]
    fn restore_runs_once() {
        let mut modes = TerminalModes {
            alternate: true,
            ..TerminalModes::default()
        };
        let mut first = Vec::new();
        modes.restore_to(&mut first);
        assert!(!first.is_empty());

        let mut second = Vec::new();
        modes.restore_to(&mut second);
        assert!(second.is_empty());
    }
}
