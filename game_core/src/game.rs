use crate::ball::Ball;
use crate::config::{ConfigError, GameConfig};
use crate::paddle::Paddle;
use crate::side::Side;

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_to(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// The winning side, if either score has reached `win_score`
    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Held state of the four logical keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inputs {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// What happened during one simulation tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    /// Side that won a point this tick
    pub scored: Option<Side>,
}

/// One match: two paddles, the ball, scores, and the serve-delay countdown.
///
/// The simulation never freezes on a win; [`Match::winner`] is a display
/// query and scores can keep incrementing past the threshold.
#[derive(Debug, Clone)]
pub struct Match {
    pub config: GameConfig,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Remaining ticks of the frozen-ball pause after a point
    pub serve_delay: u32,
}

impl Match {
    /// Create a match from a validated configuration. The opening serve
    /// travels right.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let left_paddle = Paddle::new(config.paddle_spawn(Side::Left));
        let right_paddle = Paddle::new(config.paddle_spawn(Side::Right));
        let ball = Ball::new(Side::Right, &config);
        Ok(Self {
            config,
            left_paddle,
            right_paddle,
            ball,
            score: Score::new(),
            serve_delay: 0,
        })
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    /// Apply the held keys to the paddles.
    ///
    /// Paddles are always movable, including during the serve delay and
    /// after a win. Each key is applied as its own clamped move, so
    /// opposing keys held at a playfield edge behave like two sequential
    /// moves rather than cancelling out.
    pub fn apply_input(&mut self, inputs: &Inputs) {
        let speed = self.config.paddle_speed;
        let field_height = self.config.field_height;

        if inputs.left_up {
            self.left_paddle.shift(-speed, field_height);
        }
        if inputs.left_down {
            self.left_paddle.shift(speed, field_height);
        }
        if inputs.right_up {
            self.right_paddle.shift(-speed, field_height);
        }
        if inputs.right_down {
            self.right_paddle.shift(speed, field_height);
        }
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) -> Events {
        let mut events = Events::default();

        // Frozen-ball pause after a point.
        if self.serve_delay > 0 {
            self.serve_delay -= 1;
            return events;
        }

        self.ball.advance();
        events.ball_hit_wall = self.ball.bounce_walls(self.config.field_height);

        // Both paddles are tested every tick regardless of which way the
        // ball travels.
        let hit_left = self.ball.collide_paddle(&self.left_paddle, &self.config);
        let hit_right = self.ball.collide_paddle(&self.right_paddle, &self.config);
        events.ball_hit_paddle = hit_left || hit_right;

        if self.ball.is_out_left() {
            self.award_point(Side::Right, &mut events);
        }
        if self.ball.is_out_right(self.config.field_width) {
            self.award_point(Side::Left, &mut events);
        }

        events
    }

    /// Score a point, then serve toward the scorer's side after the delay.
    fn award_point(&mut self, to: Side, events: &mut Events) {
        self.score.point_to(to);
        events.scored = Some(to);
        self.ball.reset(to, &self.config);
        self.serve_delay = self.config.serve_delay_ticks;
    }

    /// The winning side once either score reaches the threshold. Purely a
    /// query: stepping past a win keeps simulating.
    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }
}
