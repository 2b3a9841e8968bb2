//! Game-space drawing helpers on top of the ratatui canvas.
//!
//! The game works y-down in pixels; the canvas is y-up. Canvas shapes are
//! outlines only, so filled shapes are scan-converted into horizontal lines
//! spaced finer than one canvas dot.

use ratatui::prelude::*;
use ratatui::widgets::canvas::{Context, Line as CanvasLine};

pub struct Court {
    width: f32,
    height: f32,
    /// Game pixels covered by one terminal column.
    column: f32,
    /// Game pixels covered by one half-block dot.
    dot: f32,
}

impl Court {
    pub fn new(width: f32, height: f32, area: Rect) -> Self {
        let columns = area.width.max(1) as f32;
        let dots = area.height.max(1) as f32 * 2.0;
        Self {
            width,
            height,
            column: width / columns,
            dot: height / dots,
        }
    }

    fn flip(&self, y: f32) -> f64 {
        (self.height - y) as f64
    }

    fn scan(&self, ctx: &mut Context, x1: f32, x2: f32, y: f32, color: Color) {
        let x1 = x1.clamp(0.0, self.width) as f64;
        let x2 = x2.clamp(0.0, self.width) as f64;
        let y = self.flip(y);
        ctx.draw(&CanvasLine::new(x1, y, x2, y, color));
    }

    pub fn fill_rect(&self, ctx: &mut Context, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let step = (self.dot / 2.0).max(0.5);
        let mut row = y;
        while row < y + h {
            self.scan(ctx, x, x + w, row, color);
            row += step;
        }
        self.scan(ctx, x, x + w, y + h, color);
    }

    pub fn fill_circle(&self, ctx: &mut Context, cx: f32, cy: f32, radius: f32, color: Color) {
        let step = (self.dot / 2.0).max(0.5);
        self.scan(ctx, cx - radius, cx + radius, cy, color);
        let mut dy = step;
        while dy <= radius {
            let half = (radius * radius - dy * dy).sqrt();
            self.scan(ctx, cx - half, cx + half, cy - dy, color);
            self.scan(ctx, cx - half, cx + half, cy + dy, color);
            dy += step;
        }
    }

    /// Dashed centre line: 10px wide segments, one twentieth of the height
    /// tall, starting 10px down. Odd offsets are skipped.
    pub fn net(&self, ctx: &mut Context, color: Color) {
        let height = self.height as u32;
        let segment = (height / 20).max(1);
        for top in (10..height).step_by(segment as usize) {
            if top % 2 == 1 {
                continue;
            }
            let bottom = (top + segment).min(height) as f32;
            let top = top as f32;
            self.fill_rect(ctx, self.width / 2.0 - 5.0, top, 10.0, bottom - top, color);
        }
    }

    /// Text whose horizontal centre is `cx` and whose top row is at `y`.
    pub fn text_centered(&self, ctx: &mut Context, cx: f32, y: f32, text: String, style: Style) {
        let span = text.chars().count() as f32 * self.column;
        let x = (cx - span / 2.0).clamp(0.0, self.width);
        ctx.print(x as f64, self.flip(y), Span::styled(text, style));
    }
}
