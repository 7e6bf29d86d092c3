//! Collision predicate for ball/paddle contact
//!
//! The ball is tested as its axis-aligned bounding square, not as a disc.
//! That matches the classic game's feel: contact registers at the corners a
//! touch earlier than a true circle test would.

use super::state::{Ball, Paddle};

/// Axis-aligned overlap test between the ball's bounding square and a paddle.
///
/// Pure and stateless; the tick calls this once per frame against the paddle
/// on the ball's side.
#[inline]
pub fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    let ball_left = ball.pos.x - ball.radius;
    let ball_right = ball.pos.x + ball.radius;
    let ball_top = ball.pos.y - ball.radius;
    let ball_bottom = ball.pos.y + ball.radius;

    let paddle_left = paddle.x;
    let paddle_right = paddle.x + paddle.width;
    let paddle_top = paddle.y;
    let paddle_bottom = paddle.y + paddle.height;

    ball_right > paddle_left
        && ball_left < paddle_right
        && ball_bottom > paddle_top
        && ball_top < paddle_bottom
}
