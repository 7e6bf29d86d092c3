//! Rally Pong entry point
//!
//! Headless demo: runs one round with a scripted follow-the-ball driver
//! standing in for the keyboard, then resets. Hosts with a real display wire
//! their own `Renderer`/`UiHost` implementations to [`GameLoop`] and call
//! `tick` from their frame callback instead.

use rally_pong::render::NullRenderer;
use rally_pong::ui::UiHost;
use rally_pong::{GameLoop, InputEvent, PaddleIntent, Tuning};

/// Prints score and overlay changes to stdout
struct ConsoleUi;

impl UiHost for ConsoleUi {
    fn show_score(&mut self, score: u32) {
        println!("Score: {score}");
    }
    fn show_game_over(&mut self) {
        println!("Game over");
    }
    fn hide_game_over(&mut self) {
        println!("Ready for the next round");
    }
}

/// Frame cap for the demo; a careful rally can otherwise go on forever
const MAX_FRAMES: u32 = 10_000;

fn main() {
    env_logger::init();
    log::info!("Rally Pong (headless demo) starting...");

    let mut game = GameLoop::new(Tuning::default(), NullRenderer, ConsoleUi);

    // First press starts the round; after that, chase the ball
    let mut held = PaddleIntent::MoveDown;
    game.handle_input(InputEvent::Press(held));

    let mut frames = 0u32;
    while frames < MAX_FRAMES {
        let wanted = if game.world().ball.pos.y < game.world().player.center_y() {
            PaddleIntent::MoveUp
        } else {
            PaddleIntent::MoveDown
        };
        if wanted != held {
            game.handle_input(InputEvent::Release(held));
            game.handle_input(InputEvent::Press(wanted));
            held = wanted;
        }

        frames += 1;
        if !game.tick() {
            break;
        }
    }

    log::info!(
        "demo finished after {frames} frames, returns this round: {}",
        game.world().score
    );
    game.restart();
}
