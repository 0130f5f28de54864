//! Turns match state into immediate-mode draw commands.

use game_core::{Match, Rect, Side};

use crate::platform::{Color, Renderer};

// Dark theme
pub const BACKGROUND: Color = Color::rgb(15, 15, 25);
pub const PADDLE_COLOR: Color = Color::rgb(100, 200, 255);
pub const BALL_COLOR: Color = Color::rgb(255, 255, 255);
pub const TEXT_COLOR: Color = Color::rgb(200, 200, 220);
pub const ACCENT_COLOR: Color = Color::rgb(80, 180, 220);
const CENTER_LINE_COLOR: Color = Color::rgb(40, 50, 70);

const SCORE_TEXT_SIZE: u32 = 48;
const BANNER_TEXT_SIZE: u32 = 72;

/// Draw one frame of the match and present it
pub fn draw<R: Renderer>(renderer: &mut R, game: &Match) {
    let width = game.config.field_width;
    let height = game.config.field_height;

    renderer.clear(BACKGROUND);

    // Dashed center line
    let mut y = 0;
    while y < height {
        renderer.fill_rect(Rect::new(width / 2 - 2, y, 4, 15), CENTER_LINE_COLOR);
        y += 30;
    }

    for paddle in [&game.left_paddle, &game.right_paddle] {
        renderer.fill_rect(paddle.rect, PADDLE_COLOR);
        renderer.outline_rect(paddle.rect, 2, ACCENT_COLOR);
    }
    renderer.fill_ellipse(game.ball.rect, BALL_COLOR);

    renderer.draw_text(
        &game.score.left.to_string(),
        width / 4,
        20,
        SCORE_TEXT_SIZE,
        TEXT_COLOR,
    );
    renderer.draw_text(
        &game.score.right.to_string(),
        3 * width / 4,
        20,
        SCORE_TEXT_SIZE,
        TEXT_COLOR,
    );

    // The win banner is an overlay; the simulation underneath keeps going.
    if let Some(side) = game.winner() {
        let banner = match side {
            Side::Left => "Player 1 Wins!",
            Side::Right => "Player 2 Wins!",
        };
        renderer.draw_text(banner, width / 2, height / 2 - 40, BANNER_TEXT_SIZE, PADDLE_COLOR);
    }

    renderer.present();
}
