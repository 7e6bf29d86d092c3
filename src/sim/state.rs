//! World state and core simulation types
//!
//! All state the simulation reads or writes lives here, as one explicit
//! [`World`] value. No module-level mutable state anywhere.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// What drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Velocity set by input events, clamped to the field
    Human,
    /// Teleports to the ball's vertical position every tick, unclamped
    Tracking,
}

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left half (the tracking paddle)
    Computer,
    /// Right half (the human paddle)
    Player,
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed paddle reflections are recomputed from.
    ///
    /// Resynchronized with `vel` on every paddle reflection; never integrated.
    /// Non-decreasing while a round is active.
    pub speed: f32,
}

impl Ball {
    /// Ball at the field center with the launch velocity
    pub fn launched(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.field_center(),
            vel: tuning.launch_velocity,
            radius: tuning.ball_radius,
            speed: tuning.launch_speed,
        }
    }

    /// Re-center for a new round, reversing direction so serves alternate.
    /// Speed drops back to the launch value.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos = tuning.field_center();
        self.vel = -self.vel.signum() * tuning.launch_velocity.abs();
        self.speed = tuning.launch_speed;
    }
}

/// One paddle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Horizontal position, fixed per side
    pub x: f32,
    /// Top edge, mutable
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Per-tick vertical velocity. Only meaningful for `Human`; the tracking
    /// paddle teleports and carries none.
    pub vel_y: f32,
    /// Reserved for versus scoring; the round score lives on [`World`]
    pub score: u32,
    pub controller: Controller,
}

impl Paddle {
    /// Paddle for the given side, vertically centered
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        let (x, controller) = match side {
            Side::Computer => (0.0, Controller::Tracking),
            Side::Player => (
                tuning.field_width - tuning.paddle_width,
                Controller::Human,
            ),
        };
        Self {
            x,
            y: tuning.paddle_center_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            vel_y: 0.0,
            score: 0,
            controller,
        }
    }

    /// Vertical center of the paddle face
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Complete game state for one session
///
/// Created once at session start. Rounds cycle `active`, the ball, and the
/// round score; paddle positions carry over between rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Playfield dimensions, fixed for the session
    pub width: f32,
    pub height: f32,
    pub ball: Ball,
    pub player: Paddle,
    pub computer: Paddle,
    /// Successful paddle returns this round
    pub score: u32,
    /// Whether a round is in progress
    pub active: bool,
    /// Tuning the session was created with
    pub tuning: Tuning,
}

impl World {
    /// New world with the ball centered and both paddles at rest
    pub fn new(tuning: Tuning) -> Self {
        Self {
            width: tuning.field_width,
            height: tuning.field_height,
            ball: Ball::launched(&tuning),
            player: Paddle::new(Side::Player, &tuning),
            computer: Paddle::new(Side::Computer, &tuning),
            score: 0,
            active: false,
            tuning,
        }
    }

    /// Reset ball and round score for a new round. Paddles stay where they
    /// are and the world stays inactive until the next directional input.
    pub fn reset_round(&mut self) {
        self.ball.reset(&self.tuning);
        self.score = 0;
    }

    /// Paddle defending the given side
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Computer => &self.computer,
            Side::Player => &self.player,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_centered_and_idle() {
        let w = World::new(Tuning::default());
        assert!(!w.active);
        assert_eq!(w.ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(w.player.y, 150.0);
        assert_eq!(w.computer.y, 150.0);
        assert_eq!(w.player.x, 590.0);
        assert_eq!(w.computer.x, 0.0);
        assert_eq!(w.player.controller, Controller::Human);
        assert_eq!(w.computer.controller, Controller::Tracking);
    }

    #[test]
    fn reset_round_recenters_ball_and_reverses_serve() {
        let mut w = World::new(Tuning::default());
        w.ball.pos = Vec2::new(40.0, 90.0);
        w.ball.vel = Vec2::new(-6.0, 2.5);
        w.ball.speed = 9.3;
        w.score = 12;
        w.player.y = 37.0;

        w.reset_round();

        assert_eq!(w.ball.pos, Vec2::new(300.0, 200.0));
        // Serve direction flips relative to the last velocity
        assert_eq!(w.ball.vel, Vec2::new(5.0, -5.0));
        assert_eq!(w.ball.speed, 7.0);
        assert_eq!(w.score, 0);
        // Paddles carry over
        assert_eq!(w.player.y, 37.0);
    }
}
