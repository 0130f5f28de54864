use glam::Vec2;

use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::paddle::Paddle;
use crate::side::Side;

/// Gap left between the ball and a paddle after a collision so the next
/// tick cannot re-collide against the same rectangle.
const ANTI_STICK_GAP: i32 = 2;

/// Maps the hit position fraction to a deflection in [-0.75, 0.75].
const DEFLECTION_SCALE: f32 = 1.5;

/// The ball: a rectangle plus a real-valued velocity
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    /// New ball at the playfield center, serving toward `toward`
    pub fn new(toward: Side, config: &GameConfig) -> Self {
        let mut ball = Self {
            rect: config.ball_spawn(),
            vel: Vec2::ZERO,
        };
        ball.reset(toward, config);
        ball
    }

    /// Recenter and serve toward the given side with zero vertical velocity
    pub fn reset(&mut self, toward: Side, config: &GameConfig) {
        self.rect = config.ball_spawn();
        self.vel = Vec2::new(config.ball_speed_initial * toward.sign(), 0.0);
    }

    /// Integrate one tick of motion.
    ///
    /// Velocity components are truncated toward zero before being added,
    /// which keeps the integration bit-for-bit deterministic.
    pub fn advance(&mut self) {
        self.rect.x += self.vel.x as i32;
        self.rect.y += self.vel.y as i32;
    }

    /// Bounce off the top/bottom walls. Clamps the ball back inside and
    /// reflects only the vertical velocity. Returns whether a bounce
    /// occurred.
    pub fn bounce_walls(&mut self, field_height: i32) -> bool {
        if self.rect.top() <= 0 {
            self.rect.set_top(0);
            self.vel.y = self.vel.y.abs();
            return true;
        }
        if self.rect.bottom() >= field_height {
            self.rect.set_bottom(field_height);
            self.vel.y = -self.vel.y.abs();
            return true;
        }
        false
    }

    /// Bounce off a paddle, deflecting by hit position. Returns whether a
    /// collision occurred.
    ///
    /// The hit position runs from 0 at the paddle's top edge to 1 at its
    /// bottom (slightly beyond at the corners). The new vertical velocity
    /// is that deflection times the ramped speed; the horizontal velocity
    /// only flips sign. Each hit adds a fixed speed increment, capped.
    pub fn collide_paddle(&mut self, paddle: &Paddle, config: &GameConfig) -> bool {
        if !self.rect.overlaps(&paddle.rect) {
            return false;
        }

        let hit_pos = (self.rect.center_y() - paddle.rect.top()) as f32 / paddle.rect.h as f32;
        let deflection = (hit_pos - 0.5) * DEFLECTION_SCALE;

        let speed = (self.vel.length() + config.ball_speed_increment).min(config.ball_speed_max);

        self.vel.x = -self.vel.x;
        self.vel.y = deflection * speed;

        // Nudge the ball just outside the paddle on the side it now
        // travels toward.
        if self.vel.x > 0.0 {
            self.rect.set_left(paddle.rect.right() + ANTI_STICK_GAP);
        } else {
            self.rect.set_right(paddle.rect.left() - ANTI_STICK_GAP);
        }

        true
    }

    /// True once the ball has fully exited past the left edge
    pub fn is_out_left(&self) -> bool {
        self.rect.right() < 0
    }

    /// True once the ball has fully exited past the right edge
    pub fn is_out_right(&self, field_width: i32) -> bool {
        self.rect.left() > field_width
    }
}
