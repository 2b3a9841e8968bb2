pub mod court;

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::Canvas;

use crate::game::Pong;

use court::Court;

/// Draws one frame: court, net, paddles, ball, scores and an optional banner.
pub fn render(frame: &mut Frame, pong: &Pong, banner: Option<&str>) {
    let cfg = pong.config();
    let area = frame.area();
    let court = Court::new(cfg.width, cfg.height, area);

    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(cfg.background)
        .x_bounds([0.0, cfg.width as f64])
        .y_bounds([0.0, cfg.height as f64])
        .paint(|ctx| {
            court.net(ctx, cfg.foreground);

            for paddle in [&pong.left, &pong.right] {
                court.fill_rect(
                    ctx,
                    paddle.x,
                    paddle.y,
                    paddle.width,
                    paddle.height,
                    paddle.color,
                );
            }
            let ball = &pong.ball;
            court.fill_circle(ctx, ball.x, ball.y, ball.radius, ball.color);

            ctx.layer();
            let score_style = Style::default()
                .fg(cfg.foreground)
                .add_modifier(Modifier::BOLD);
            let left_x = cfg.width / 4.0;
            let right_x = cfg.width * 3.0 / 4.0;
            court.text_centered(ctx, left_x, 20.0, pong.left_score.to_string(), score_style);
            court.text_centered(ctx, right_x, 20.0, pong.right_score.to_string(), score_style);

            if let Some(message) = banner {
                let (cx, cy) = (cfg.width / 2.0, cfg.height / 2.0);
                court.text_centered(ctx, cx, cy, message.to_owned(), score_style);
            }
        });

    frame.render_widget(canvas, area);
}
