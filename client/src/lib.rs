pub mod platform;
pub mod runner;
pub mod scene;

pub use platform::{Color, FrameClock, InputSource, Key, Renderer};
pub use runner::run;
