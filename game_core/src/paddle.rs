use crate::geometry::Rect;

/// A player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(spawn: Rect) -> Self {
        Self { rect: spawn }
    }

    /// Move vertically by `dy`, clamped to the playfield
    pub fn shift(&mut self, dy: i32, field_height: i32) {
        self.rect.y = (self.rect.y + dy).clamp(0, field_height - self.rect.h);
    }
}
