//! Data-driven gameplay constants
//!
//! Every number the simulation cares about lives here so hosts can resize the
//! field or retune the feel without touching the core. The defaults reproduce
//! the classic 600x400 game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants for one session
///
/// Fixed for the lifetime of a [`World`](crate::sim::World); constructed once
/// and passed in at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield width
    pub field_width: f32,
    /// Playfield height
    pub field_height: f32,
    /// Ball radius
    pub ball_radius: f32,
    /// Velocity the ball launches with when a round starts
    pub launch_velocity: Vec2,
    /// Scalar speed the first paddle reflection is computed from
    pub launch_speed: f32,
    /// Speed added on every successful paddle return
    pub speed_increment: f32,
    /// Paddle dimensions (both paddles)
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Player paddle speed while an input direction is held (units per tick)
    pub player_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ball_radius: BALL_RADIUS,
            launch_velocity: Vec2::new(BALL_LAUNCH_VX, BALL_LAUNCH_VY),
            launch_speed: BALL_LAUNCH_SPEED,
            speed_increment: SPEED_INCREMENT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            player_speed: PLAYER_SPEED,
        }
    }
}

impl Tuning {
    /// Center of the playfield (ball spawn point)
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Vertical position that centers a paddle on the field
    pub fn paddle_center_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_field() {
        let t = Tuning::default();
        assert_eq!(t.field_center(), Vec2::new(300.0, 200.0));
        assert_eq!(t.paddle_center_y(), 150.0);
    }

    #[test]
    fn tuning_round_trips_through_json() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
