use std::time::Duration;

use crossterm::event::KeyCode;
use ratatui::style::Color;

use crate::game::Side;

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
pub const PADDLE_WIDTH: f32 = 20.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
pub const PADDLE_VELOCITY: f32 = 5.0;
/// Gap between each paddle and its side wall.
pub const PADDLE_INSET: f32 = 20.0;
pub const BALL_RADIUS: f32 = 8.0;
pub const BALL_MAX_VELOCITY: f32 = 6.0;
pub const TARGET_SCORE: u32 = 10;
pub const FPS: u32 = 60;
pub const WIN_DELAY_MS: u64 = 3000;

/// Keys bound to one paddle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleKeys {
    pub up: KeyCode,
    pub down: KeyCode,
}

/// Everything the match, the loop and the terminal surface need to agree on.
///
/// Built once in `main` and handed out by reference; nothing mutates it.
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_velocity: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_max_velocity: f32,
    pub target_score: u32,
    pub fps: u32,
    pub win_delay: Duration,
    pub caption: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub left_color: Color,
    pub right_color: Color,
    pub left_keys: PaddleKeys,
    pub right_keys: PaddleKeys,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_velocity: PADDLE_VELOCITY,
            paddle_inset: PADDLE_INSET,
            ball_radius: BALL_RADIUS,
            ball_max_velocity: BALL_MAX_VELOCITY,
            target_score: TARGET_SCORE,
            fps: FPS,
            win_delay: Duration::from_millis(WIN_DELAY_MS),
            caption: "Enhanced Pong Game",
            background: Color::Rgb(0, 0, 0),
            foreground: Color::Rgb(255, 255, 255),
            left_color: Color::Rgb(0, 0, 255),
            right_color: Color::Rgb(255, 0, 0),
            left_keys: PaddleKeys {
                up: KeyCode::Char('w'),
                down: KeyCode::Char('s'),
            },
            right_keys: PaddleKeys {
                up: KeyCode::Up,
                down: KeyCode::Down,
            },
        }
    }
}

impl Config {
    /// Time budget of one tick at the fixed frame rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Left edge of the paddle guarding `side`.
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Top edge of a vertically centred paddle.
    pub fn paddle_start_y(&self) -> f32 {
        // Integer halves keep the layout on whole pixels.
        (self.height / 2.0).floor() - (self.paddle_height / 2.0).floor()
    }
}
