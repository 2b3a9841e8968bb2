use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
    pub x_velocity: f32,
    pub y_velocity: f32,
    /// Horizontal speed magnitude; only the sign of `x_velocity` ever changes.
    pub max_velocity: f32,
    start_x: f32,
    start_y: f32,
}

impl Ball {
    /// A ball at rest vertically, serving toward the right.
    pub fn new(x: f32, y: f32, radius: f32, max_velocity: f32, color: Color) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            x_velocity: max_velocity,
            y_velocity: 0.0,
            max_velocity,
            start_x: x,
            start_y: y,
        }
    }

    pub fn advance(&mut self) {
        self.x += self.x_velocity;
        self.y += self.y_velocity;
    }

    /// Back to the centre, flat, serving the opposite way from the current heading.
    pub fn reset_position(&mut self) {
        self.x = self.start_x;
        self.y = self.start_y;
        self.y_velocity = 0.0;
        self.x_velocity = -self.x_velocity;
    }

    pub fn left(&self) -> f32 {
        self.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball() -> Ball {
        Ball::new(400.0, 300.0, 8.0, 6.0, Color::White)
    }

    #[test]
    fn advance_adds_velocity() {
        let mut b = ball();
        b.y_velocity = -2.5;
        b.advance();
        assert_eq!((b.x, b.y), (406.0, 297.5));
    }

    #[test]
    fn reset_toggles_heading_once_per_call() {
        let mut b = ball();
        b.x = 12.0;
        b.y = 40.0;
        b.y_velocity = 3.0;

        b.reset_position();
        assert_eq!((b.x, b.y), (400.0, 300.0));
        assert_eq!(b.x_velocity, -6.0);
        assert_eq!(b.y_velocity, 0.0);

        b.reset_position();
        assert_eq!((b.x, b.y), (400.0, 300.0));
        assert_eq!(b.x_velocity, 6.0);
    }

    #[test]
    fn reset_negates_regardless_of_who_scored() {
        // Heading right already (e.g. after a left-paddle return) still flips.
        let mut b = ball();
        b.x = -3.0;
        b.reset_position();
        assert_eq!(b.x_velocity, -6.0);
    }
}
