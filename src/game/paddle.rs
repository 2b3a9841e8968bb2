use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    /// Pixels travelled per tick.
    pub velocity: f32,
    start_x: f32,
    start_y: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, velocity: f32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            velocity,
            start_x: x,
            start_y: y,
        }
    }

    /// Shifts the paddle one step. Bounds are the caller's business.
    pub fn advance(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.y -= self.velocity,
            Direction::Down => self.y += self.velocity,
        }
    }

    /// Whether one step in `direction` keeps the paddle inside `[0, floor]`.
    pub fn can_move(&self, direction: Direction, floor: f32) -> bool {
        match direction {
            Direction::Up => self.y - self.velocity >= 0.0,
            Direction::Down => self.y + self.velocity + self.height <= floor,
        }
    }

    /// Back to the spawn point. A won match deliberately does not call this.
    #[allow(dead_code)]
    pub fn reset_position(&mut self) {
        self.x = self.start_x;
        self.y = self.start_y;
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn middle_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Inclusive vertical span test used for ball contact.
    pub fn spans(&self, y: f32) -> bool {
        self.y <= y && y <= self.y + self.height
    }
}
