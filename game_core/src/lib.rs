pub mod ball;
pub mod config;
pub mod game;
pub mod geometry;
pub mod paddle;
pub mod params;
pub mod side;

pub use ball::Ball;
pub use config::{ConfigError, GameConfig};
pub use game::{Events, Inputs, Match, Score};
pub use geometry::Rect;
pub use paddle::Paddle;
pub use params::Params;
pub use side::{Side, SideError};
