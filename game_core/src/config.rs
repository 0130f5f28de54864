use thiserror::Error;

use crate::geometry::Rect;
use crate::params::Params;
use crate::side::Side;

/// Errors for geometrically or numerically invalid configurations
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("playfield must have positive dimensions, got {width}x{height}")]
    InvalidPlayfield { width: i32, height: i32 },
    #[error("paddle must have positive dimensions, got {width}x{height}")]
    InvalidPaddle { width: i32, height: i32 },
    #[error("paddle height {paddle} exceeds playfield height {field}")]
    PaddleTooTall { paddle: i32, field: i32 },
    #[error("ball size must be positive, got {0}")]
    InvalidBallSize(i32),
    #[error("speeds must be positive, got paddle {paddle} and ball {ball}")]
    InvalidSpeed { paddle: i32, ball: f32 },
    #[error("speed cap {cap} is below the initial ball speed {initial}")]
    SpeedCapTooLow { cap: f32, initial: f32 },
    #[error("winning score must be at least 1")]
    ZeroWinScore,
}

/// Game configuration
///
/// Every tuning constant as a named parameter, defaulting to the
/// reference scale in [`Params`]. Validated by [`Match::new`].
///
/// [`Match::new`]: crate::Match::new
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub field_width: i32,
    pub field_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub paddle_margin: i32,
    pub ball_size: i32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increment: f32,
    pub win_score: u32,
    pub serve_delay_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            win_score: Params::WIN_SCORE,
            serve_delay_ticks: Params::SERVE_DELAY_TICKS,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration for invalid geometry or speeds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(ConfigError::InvalidPlayfield {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.paddle_width <= 0 || self.paddle_height <= 0 {
            return Err(ConfigError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if self.ball_size <= 0 {
            return Err(ConfigError::InvalidBallSize(self.ball_size));
        }
        if self.paddle_speed <= 0 || self.ball_speed_initial <= 0.0 {
            return Err(ConfigError::InvalidSpeed {
                paddle: self.paddle_speed,
                ball: self.ball_speed_initial,
            });
        }
        if self.ball_speed_max < self.ball_speed_initial {
            return Err(ConfigError::SpeedCapTooLow {
                cap: self.ball_speed_max,
                initial: self.ball_speed_initial,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Spawn rectangle for the paddle on the given side, vertically centered
    pub fn paddle_spawn(&self, side: Side) -> Rect {
        let x = match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin - self.paddle_width,
        };
        Rect::new(
            x,
            self.field_height / 2 - self.paddle_height / 2,
            self.paddle_width,
            self.paddle_height,
        )
    }

    /// Spawn rectangle for the ball, centered on the playfield
    pub fn ball_spawn(&self) -> Rect {
        Rect::new(
            self.field_width / 2 - self.ball_size / 2,
            self.field_height / 2 - self.ball_size / 2,
            self.ball_size,
            self.ball_size,
        )
    }
}
