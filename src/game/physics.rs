//! Per-tick collision resolution.
//!
//! Everything here is pure arithmetic on the entities. Sound is not played
//! from this module: the caller gets a [`Contacts`] back and decides what to do
//! with the cues it yields.

use super::{Ball, Paddle, Side};
use crate::audio::Cue;
use crate::config::Config;

/// What the ball touched during one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub wall: bool,
    pub paddle: Option<Side>,
}

impl Contacts {
    /// One bounce cue per contact, wall first.
    pub fn cues(&self) -> impl Iterator<Item = Cue> {
        let wall = self.wall.then_some(Cue::Bounce);
        let paddle = self.paddle.map(|_| Cue::Bounce);
        wall.into_iter().chain(paddle)
    }
}

/// Resolves wall and paddle contacts for a ball that has already moved this tick.
///
/// Only the paddle the ball is travelling toward is tested: the left one while
/// `x_velocity < 0`, the right one otherwise.
pub fn resolve_collisions(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    cfg: &Config,
) -> Contacts {
    let mut contacts = Contacts::default();

    if ball.bottom() >= cfg.height || ball.top() <= 0.0 {
        ball.y_velocity = -ball.y_velocity;
        contacts.wall = true;
        log::trace!("wall bounce at y={:.1}", ball.y);
    }

    if ball.x_velocity < 0.0 {
        if left.spans(ball.y) && ball.left() <= left.right() {
            deflect(ball, left);
            contacts.paddle = Some(Side::Left);
        }
    } else if right.spans(ball.y) && ball.right() >= right.x {
        deflect(ball, right);
        contacts.paddle = Some(Side::Right);
    }

    if let Some(side) = contacts.paddle {
        log::debug!(
            "{} paddle hit, y_velocity now {:.2}",
            side.name(),
            ball.y_velocity
        );
    }

    contacts
}

/// Reverses the ball and angles it by where it struck the paddle.
///
/// Centre hits return flat; hits on the top or bottom edge leave at full
/// `max_velocity` upward or downward.
fn deflect(ball: &mut Ball, paddle: &Paddle) {
    ball.x_velocity = -ball.x_velocity;
    let offset = paddle.middle_y() - ball.y;
    let reduction_factor = (paddle.height / 2.0) / ball.max_velocity;
    ball.y_velocity = -offset / reduction_factor;
}

/// The side awarded a point if the ball has left the court horizontally.
///
/// The ball must be fully past the edge by its centre; a ball at exactly `0`
/// or `width` is still in play.
pub fn exited(ball: &Ball, cfg: &Config) -> Option<Side> {
    if ball.x < 0.0 {
        Some(Side::Right)
    } else if ball.x > cfg.width {
        Some(Side::Left)
    } else {
        None
    }
}
