//! Seams to the presentation layer: input, drawing, and frame pacing.
//!
//! The game loop only ever talks to these traits; concrete windowing or
//! graphics backends implement them.

use std::time::Duration;

use game_core::Rect;

/// The logical keys the simulation cares about. Anything else the
/// backend receives is simply not representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// RGB color for draw commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Key state and the quit signal, polled once per tick
pub trait InputSource {
    /// Whether the logical key is currently held down
    fn is_down(&self, key: Key) -> bool;

    /// Whether the user asked to quit (window close etc.). Polled once at
    /// the start of every frame.
    fn quit_requested(&mut self) -> bool;
}

/// Immediate-mode draw surface. Nothing is retained between frames;
/// `present` flushes the commands drawn since the last call.
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn outline_rect(&mut self, rect: Rect, line_width: u32, color: Color);
    /// Fill the ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);
    /// Draw text horizontally centered on `center_x`, top edge at `top_y`
    fn draw_text(&mut self, text: &str, center_x: i32, top_y: i32, size: u32, color: Color);
    fn present(&mut self);
}

/// Wall-clock frame pacing
pub trait FrameClock {
    /// Block until the current frame has lasted `1 / target_hz` seconds.
    /// Returns the elapsed frame time; the simulation never consumes it.
    fn tick(&mut self, target_hz: u32) -> Duration;
}
