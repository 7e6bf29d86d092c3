//! UI host seam
//!
//! Score display and the game-over overlay live outside the core. Restart
//! requests come back in as calls to [`GameLoop::restart`](crate::GameLoop).

/// Surface the game pushes score and overlay changes to.
pub trait UiHost {
    /// Show the final score for the round that just ended
    fn show_score(&mut self, score: u32);
    /// Show the game-over overlay
    fn show_game_over(&mut self);
    /// Hide the game-over overlay (on restart)
    fn hide_game_over(&mut self);
}

/// UI host that displays nothing. Used by tests and the headless demo.
#[derive(Debug, Default)]
pub struct NullUi;

impl UiHost for NullUi {
    fn show_score(&mut self, _score: u32) {}
    fn show_game_over(&mut self) {}
    fn hide_game_over(&mut self) {}
}
