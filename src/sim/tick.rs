//! Per-tick simulation step
//!
//! Advances the world by exactly one tick. Deterministic: same world in, same
//! world out, no time source and no RNG.
//!
//! The ordering here is load-bearing. The next ball position is predicted
//! up front and committed last; wall reflection and the miss test read the
//! *predicted* position while the paddle overlap test reads the *current*
//! one. Unifying the two bases changes observable bounce timing on fast
//! balls, so don't.

use glam::Vec2;

use super::collision::overlaps;
use super::state::{Side, World};
use crate::consts::MAX_BOUNCE_ANGLE;

/// What one call to [`step`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// World is idle; nothing was touched
    Inactive,
    /// One tick applied, round still running
    Advanced {
        /// Paddle the ball reflected off this tick, if any
        bounced: Option<Side>,
    },
    /// The ball left the field; world deactivated, ball frozen
    RoundOver { score: u32 },
}

/// Advance the world by one tick
///
/// No-op when the world is inactive, so a stale scheduled callback can never
/// apply an extra step after a round ends.
pub fn step(world: &mut World) -> StepOutcome {
    if !world.active {
        return StepOutcome::Inactive;
    }

    // Predicted next ball position; committed at the end of the tick
    let next = world.ball.pos + world.ball.vel;
    let radius = world.ball.radius;

    // Tracking paddle teleports to the ball, unclamped
    world.computer.y = world.ball.pos.y - world.computer.height / 2.0;

    // Player velocity applies only while the move would stay on the field;
    // re-evaluated every tick, not just at the boundary crossing
    let player = &mut world.player;
    let can_move_up = player.y > 0.0 && player.vel_y < 0.0;
    let can_move_down = player.y < world.height - player.height && player.vel_y > 0.0;
    if can_move_up || can_move_down {
        player.y += player.vel_y;
    }

    // Wall reflection on the predicted Y, one tick before the edge would
    // visibly tunnel
    if next.y + radius > world.height || next.y - radius < 0.0 {
        world.ball.vel.y = -world.ball.vel.y;
    }

    // Which side's paddle matters this tick
    let side = if next.x < world.width / 2.0 {
        Side::Computer
    } else {
        Side::Player
    };

    // Overlap is tested on the current ball box (not the predicted one -
    // keeps collisions from over-triggering on fast balls)
    let mut bounced = None;
    let paddle = world.paddle(side);
    if overlaps(&world.ball, paddle) {
        let half_height = paddle.height / 2.0;
        // May slightly exceed [-1, 1] at box corners; accepted as-is
        let offset = (world.ball.pos.y - paddle.center_y()) / half_height;
        let angle = offset * MAX_BOUNCE_ANGLE;
        let direction = match side {
            Side::Computer => 1.0,
            Side::Player => -1.0,
        };

        // Speed first, then velocity, so speed == vel.length() holds the
        // moment the reflection lands
        world.ball.speed += world.tuning.speed_increment;
        world.ball.vel = Vec2::new(
            direction * world.ball.speed * angle.cos(),
            world.ball.speed * angle.sin(),
        );
        world.score += 1;
        bounced = Some(side);
        log::debug!(
            "return off {side:?} paddle: offset {offset:.2}, speed {:.1}, score {}",
            world.ball.speed,
            world.score
        );
    }

    // Miss: predicted position clearly past either horizontal edge with no
    // save registered this tick
    let past_left = next.x + radius < 0.0;
    let past_right = next.x - radius > world.width;
    if bounced.is_none() && (past_left || past_right) {
        world.active = false;
        log::info!("round over: score {}", world.score);
        return StepOutcome::RoundOver { score: world.score };
    }

    // Commit with the post-reflection velocity
    world.ball.pos += world.ball.vel;
    StepOutcome::Advanced { bounced }
}
