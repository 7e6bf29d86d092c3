//! Rally Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, world state)
//! - `game`: Idle/Active game loop driving the simulation
//! - `render`: Renderer trait (drawing is the host's job)
//! - `ui`: Score / game-over surface traits
//! - `tuning`: Data-driven gameplay constants

pub mod game;
pub mod render;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::{GameLoop, InputEvent, PaddleIntent};
pub use tuning::Tuning;

/// Default gameplay constants (see [`tuning::Tuning`] for the configurable form)
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Velocity the ball launches with at round start
    pub const BALL_LAUNCH_VX: f32 = 5.0;
    pub const BALL_LAUNCH_VY: f32 = 5.0;
    /// Scalar speed used to recompute velocity on paddle reflection
    pub const BALL_LAUNCH_SPEED: f32 = 7.0;
    /// Speed gained per successful paddle return
    pub const SPEED_INCREMENT: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle speed while a key is held (units per tick)
    pub const PLAYER_SPEED: f32 = 6.0;

    /// Maximum reflection angle off a paddle (radians)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
}
