/// Reference-scale tuning parameters for the game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 8;
    pub const PADDLE_MARGIN: i32 = 30;

    // Ball
    pub const BALL_SIZE: i32 = 15;
    pub const BALL_SPEED_INITIAL: f32 = 7.0;
    pub const BALL_SPEED_MAX: f32 = 14.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.5;

    // Match
    pub const WIN_SCORE: u32 = 5;
    pub const SERVE_DELAY_TICKS: u32 = 30;

    // Loop
    pub const TICK_RATE: u32 = 60;
}
