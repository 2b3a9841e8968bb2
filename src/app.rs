use std::time::Duration;

use anyhow::Result;

use crate::audio::Cue;
use crate::config::Config;
use crate::event::Input;
use crate::game::{Pong, Side};

/// Everything the loop needs from the outside world.
pub trait Surface {
    /// Blocks until the next frame is due.
    fn throttle(&mut self);
    /// Draws the court, with a centred banner when given.
    fn draw(&mut self, pong: &Pong, banner: Option<&str>) -> Result<()>;
    fn poll(&mut self) -> Result<Input>;
    fn play(&mut self, cue: Cue);
    fn pause(&mut self, duration: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub pong: Pong,
    pub should_quit: bool,
}

impl App {
    pub fn new(cfg: &Config) -> Self {
        Self {
            pong: Pong::new(cfg),
            should_quit: false,
        }
    }

    pub fn run<S: Surface>(&mut self, surface: &mut S) -> Result<()> {
        while self.tick(surface)? == Flow::Continue {}
        Ok(())
    }

    /// One pass of the fixed-rate loop.
    ///
    /// A quit request ends the tick right after input is read; nothing moves.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<Flow> {
        surface.throttle();
        surface.draw(&self.pong, None)?;

        let keys = match surface.poll()? {
            Input::Quit => {
                self.should_quit = true;
                return Ok(Flow::Quit);
            }
            Input::Keys(keys) => keys,
        };

        let report = self.pong.step(&keys);
        for cue in report.cues {
            surface.play(cue);
        }

        if let Some(winner) = self.pong.winner() {
            log::info!(
                "{} player wins {} - {}",
                winner.name(),
                self.pong.left_score,
                self.pong.right_score
            );
            surface.draw(&self.pong, Some(win_message(winner)))?;
            surface.pause(self.pong.config().win_delay);
            self.pong.reset_scores();
        }

        Ok(Flow::Continue)
    }
}

pub fn win_message(side: Side) -> &'static str {
    match side {
        Side::Left => "Left Player Wins!",
        Side::Right => "Right Player Wins!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::HeldKeys;
    use crossterm::event::KeyCode;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Throttle,
        Draw(Option<String>),
        Poll,
        Play(Cue),
        Pause(Duration),
    }

    /// Replays scripted input and records every call in order.
    #[derive(Default)]
    struct Scripted {
        inputs: VecDeque<Input>,
        calls: Vec<Call>,
    }

    impl Scripted {
        fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
            Self {
                inputs: inputs.into_iter().collect(),
                calls: Vec::new(),
            }
        }
    }

    impl Surface for Scripted {
        fn throttle(&mut self) {
            self.calls.push(Call::Throttle);
        }

        fn draw(&mut self, _pong: &Pong, banner: Option<&str>) -> Result<()> {
            self.calls.push(Call::Draw(banner.map(str::to_owned)));
            Ok(())
        }

        fn poll(&mut self) -> Result<Input> {
            self.calls.push(Call::Poll);
            Ok(self.inputs.pop_front().unwrap_or(Input::Quit))
        }

        fn play(&mut self, cue: Cue) {
            self.calls.push(Call::Play(cue));
        }

        fn pause(&mut self, duration: Duration) {
            self.calls.push(Call::Pause(duration));
        }
    }

    fn idle() -> Input {
        Input::Keys(HeldKeys::new())
    }

    #[test]
    fn quit_skips_the_rest_of_the_tick() {
        let mut app = App::new(&Config::default());
        let mut surface = Scripted::new([Input::Quit]);

        assert_eq!(app.tick(&mut surface).unwrap(), Flow::Quit);
        assert!(app.should_quit);
        assert_eq!(surface.calls, vec![Call::Throttle, Call::Draw(None), Call::Poll]);
        assert_eq!(app.pong.ball.x, 400.0);
    }

    #[test]
    fn run_stops_on_quit() {
        let mut app = App::new(&Config::default());
        let mut surface = Scripted::new([idle(), idle(), Input::Quit]);

        app.run(&mut surface).unwrap();
        let polls = surface.calls.iter().filter(|c| **c == Call::Poll).count();
        assert_eq!(polls, 3);
        assert_eq!(app.pong.ball.x, 412.0);
    }

    #[test]
    fn run_returns_on_the_tick_that_quits() {
        let mut app = App::new(&Config::default());
        let mut surface = Scripted::new([idle(), Input::Quit, idle()]);

        app.run(&mut surface).unwrap();
        assert!(app.should_quit);
        // The idle input scripted after the quit is never consumed.
        assert_eq!(surface.inputs.len(), 1);
        assert_eq!(app.pong.ball.x, 406.0);
    }

    #[test]
    fn keys_move_paddles_each_tick() {
        let mut app = App::new(&Config::default());
        let keys: HeldKeys = [KeyCode::Char('w')].into_iter().collect();
        let mut surface = Scripted::new([Input::Keys(keys), Input::Quit]);

        app.run(&mut surface).unwrap();
        assert_eq!(app.pong.left.y, 245.0);
    }

    #[test]
    fn scoring_plays_the_score_cue() {
        let mut app = App::new(&Config::default());
        app.pong.right.y = 0.0;
        app.pong.ball.x = 798.0;
        let mut surface = Scripted::new([idle()]);

        app.tick(&mut surface).unwrap();
        assert_eq!(app.pong.left_score, 1);
        assert_eq!(surface.calls.last(), Some(&Call::Play(Cue::Score)));
    }

    #[test]
    fn winning_point_shows_banner_pauses_and_resets_scores_only() {
        let cfg = Config::default();
        let mut app = App::new(&cfg);
        app.pong.left_score = 9;
        app.pong.right_score = 3;
        app.pong.right.y = 0.0;
        app.pong.left.y = 120.0;
        app.pong.ball.x = 798.0;
        let mut surface = Scripted::new([idle()]);

        app.tick(&mut surface).unwrap();

        assert_eq!(
            surface.calls,
            vec![
                Call::Throttle,
                Call::Draw(None),
                Call::Poll,
                Call::Play(Cue::Score),
                Call::Draw(Some("Left Player Wins!".to_owned())),
                Call::Pause(Duration::from_millis(3000)),
            ]
        );
        assert_eq!((app.pong.left_score, app.pong.right_score), (0, 0));
        // The point already re-served the ball; the win itself moves nothing.
        assert_eq!((app.pong.ball.x, app.pong.ball.y), (400.0, 300.0));
        assert_eq!(app.pong.left.y, 120.0);
        assert_eq!(app.pong.right.y, 0.0);
    }

    #[test]
    fn win_reached_without_a_point_this_tick_keeps_positions() {
        let mut app = App::new(&Config::default());
        app.pong.right_score = 10;
        app.pong.ball.x = 100.0;
        app.pong.ball.x_velocity = -6.0;
        let mut surface = Scripted::new([idle()]);

        app.tick(&mut surface).unwrap();
        assert_eq!((app.pong.left_score, app.pong.right_score), (0, 0));
        assert_eq!(app.pong.ball.x, 94.0);
        assert!(surface
            .calls
            .contains(&Call::Draw(Some("Right Player Wins!".to_owned()))));
    }
}
