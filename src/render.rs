//! Renderer seam
//!
//! Drawing is the host's job (canvas, terminal, test harness). The simulation
//! only promises that the world it hands over is never mid-tick.

use crate::sim::World;

/// Draws the current world: two paddle rectangles and the ball disc.
///
/// No physics responsibility; implementations read, never write.
pub trait Renderer {
    fn render(&mut self, world: &World);
}

/// Renderer that draws nothing. Used by tests and the headless demo.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _world: &World) {}
}
