//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no time source
//! - No rendering or platform dependencies
//! - One tick is atomic: the renderer never observes a partial update

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use state::{Ball, Controller, Paddle, Side, World};
pub use tick::{StepOutcome, step};
