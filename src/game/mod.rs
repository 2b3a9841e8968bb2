pub mod ball;
pub mod input;
pub mod paddle;
pub mod physics;
pub mod state;

pub use ball::Ball;
pub use input::HeldKeys;
pub use paddle::{Direction, Paddle};
pub use state::Pong;

/// One half of the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}
