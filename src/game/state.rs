use super::input::apply_movement;
use super::physics::{exited, resolve_collisions};
use super::{Ball, HeldKeys, Paddle, Side};
use crate::audio::Cue;
use crate::config::Config;

/// What happened during one [`Pong::step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Cues in the order they occurred.
    pub cues: Vec<Cue>,
    pub scored: Option<Side>,
}

/// A single match: both paddles, the ball and the score line.
pub struct Pong {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    cfg: Config,
}

impl Pong {
    pub fn new(cfg: &Config) -> Self {
        let paddle_y = cfg.paddle_start_y();
        Self {
            left: Paddle::new(
                cfg.paddle_x(Side::Left),
                paddle_y,
                cfg.paddle_width,
                cfg.paddle_height,
                cfg.paddle_velocity,
                cfg.left_color,
            ),
            right: Paddle::new(
                cfg.paddle_x(Side::Right),
                paddle_y,
                cfg.paddle_width,
                cfg.paddle_height,
                cfg.paddle_velocity,
                cfg.right_color,
            ),
            ball: Ball::new(
                (cfg.width / 2.0).floor(),
                (cfg.height / 2.0).floor(),
                cfg.ball_radius,
                cfg.ball_max_velocity,
                cfg.foreground,
            ),
            left_score: 0,
            right_score: 0,
            cfg: cfg.clone(),
        }
    }

    /// Movement, ball flight, collisions and scoring for one tick.
    pub fn step(&mut self, keys: &HeldKeys) -> TickReport {
        let mut report = TickReport::default();

        apply_movement(keys, &mut self.left, &mut self.right, &self.cfg);

        self.ball.advance();
        let contacts = resolve_collisions(&mut self.ball, &self.left, &self.right, &self.cfg);
        report.cues.extend(contacts.cues());

        if let Some(side) = exited(&self.ball, &self.cfg) {
            match side {
                Side::Left => self.left_score += 1,
                Side::Right => self.right_score += 1,
            }
            self.ball.reset_position();
            report.cues.push(Cue::Score);
            report.scored = Some(side);
            log::info!(
                "{} scores: {} - {}",
                side.name(),
                self.left_score,
                self.right_score
            );
        }

        report
    }

    /// The side that has reached the target score, left checked first.
    pub fn winner(&self) -> Option<Side> {
        if self.left_score >= self.cfg.target_score {
            Some(Side::Left)
        } else if self.right_score >= self.cfg.target_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Starts a new match in place.
    ///
    /// Only the score line is cleared; the ball and paddles keep their current
    /// positions until the next point is scored.
    pub fn reset_scores(&mut self) {
        self.left_score = 0;
        self.right_score = 0;
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }
}
