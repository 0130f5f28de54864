//! The fixed-rate game loop: poll input, advance the match, draw, pace.

use game_core::{Inputs, Match, Params};
use tracing::{debug, info};

use crate::platform::{FrameClock, InputSource, Key, Renderer};
use crate::scene;

/// Read the held keys into one tick's worth of paddle input
fn read_inputs<I: InputSource>(input: &I) -> Inputs {
    Inputs {
        left_up: input.is_down(Key::LeftUp),
        left_down: input.is_down(Key::LeftDown),
        right_up: input.is_down(Key::RightUp),
        right_down: input.is_down(Key::RightDown),
    }
}

/// Drive the match at the fixed tick rate until quit is requested.
///
/// The quit frame is still drawn and paced before the loop exits, so the
/// presentation layer always sees a complete final frame.
pub fn run<I, R, C>(game: &mut Match, input: &mut I, renderer: &mut R, clock: &mut C)
where
    I: InputSource,
    R: Renderer,
    C: FrameClock,
{
    let mut running = true;
    while running {
        running = !input.quit_requested();

        if running {
            game.apply_input(&read_inputs(input));
            let events = game.step();

            if let Some(side) = events.scored {
                info!(
                    ?side,
                    left = game.score.left,
                    right = game.score.right,
                    "point scored"
                );
                if let Some(winner) = game.winner() {
                    info!(?winner, "match won");
                }
            }
        } else {
            debug!("quit requested, finishing final frame");
        }

        scene::draw(renderer, game);
        clock.tick(Params::TICK_RATE);
    }
}
