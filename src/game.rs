//! Game loop and Idle/Active state machine
//!
//! Owns the world and mediates between the input source, the simulation, the
//! renderer, and the UI host. Scheduling is cooperative: the host calls
//! [`GameLoop::tick`] once per frame for as long as it returns `true`, so the
//! callback chain self-terminates when a round ends. The inactive guard in
//! the simulation step makes one stale in-flight callback harmless too.

use crate::render::Renderer;
use crate::sim::{self, StepOutcome, World};
use crate::tuning::Tuning;
use crate::ui::UiHost;

/// Discrete paddle intent from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleIntent {
    MoveUp,
    MoveDown,
}

impl PaddleIntent {
    /// Per-tick player velocity this intent maps to
    fn velocity(self, speed: f32) -> f32 {
        match self {
            PaddleIntent::MoveUp => -speed,
            PaddleIntent::MoveDown => speed,
        }
    }
}

/// Key press/release events, delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press(PaddleIntent),
    Release(PaddleIntent),
}

/// Drives the simulation while a round is active
pub struct GameLoop<R, U> {
    world: World,
    renderer: R,
    ui: U,
}

impl<R: Renderer, U: UiHost> GameLoop<R, U> {
    pub fn new(tuning: Tuning, renderer: R, ui: U) -> Self {
        Self {
            world: World::new(tuning),
            renderer,
            ui,
        }
    }

    /// Current world state (read-only; the renderer gets the same view)
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Whether a round is in progress
    pub fn is_active(&self) -> bool {
        self.world.active
    }

    /// UI host, for hosts that need to poke at it between frames
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Apply one input event.
    ///
    /// The first directional press while idle starts the round, with that
    /// press already applied as the paddle velocity before the first tick.
    /// Input only ever touches the player's velocity intent and the
    /// Idle -> Active trigger.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press(intent) => {
                self.world.player.vel_y = intent.velocity(self.world.tuning.player_speed);
                if !self.world.active {
                    self.world.active = true;
                    log::info!("round started");
                }
            }
            InputEvent::Release(intent) => {
                // Stop only if the released direction is the active one, so
                // releasing an old key doesn't cancel a newer press
                let active_vel = intent.velocity(self.world.tuning.player_speed);
                if self.world.player.vel_y == active_vel {
                    self.world.player.vel_y = 0.0;
                }
            }
        }
    }

    /// Run one frame: one simulation step, then one render.
    ///
    /// Returns whether another frame should be scheduled. Safe to call while
    /// idle; the step is a guarded no-op and the world is re-rendered as-is.
    pub fn tick(&mut self) -> bool {
        match sim::step(&mut self.world) {
            StepOutcome::Inactive | StepOutcome::Advanced { .. } => {}
            StepOutcome::RoundOver { score } => {
                self.ui.show_score(score);
                self.ui.show_game_over();
            }
        }
        self.renderer.render(&self.world);
        self.world.active
    }

    /// Restart after a round: reset ball and round score, hide the overlay.
    ///
    /// Does not activate; the next directional press does that.
    pub fn restart(&mut self) {
        self.world.reset_round();
        self.ui.hide_game_over();
        log::info!("round reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullRenderer;
    use crate::sim::Side;
    use glam::Vec2;

    /// Records UI calls in order
    #[derive(Debug, Default)]
    struct RecordingUi {
        calls: Vec<String>,
    }

    impl UiHost for RecordingUi {
        fn show_score(&mut self, score: u32) {
            self.calls.push(format!("score:{score}"));
        }
        fn show_game_over(&mut self) {
            self.calls.push("game_over".into());
        }
        fn hide_game_over(&mut self) {
            self.calls.push("hide".into());
        }
    }

    fn game() -> GameLoop<NullRenderer, RecordingUi> {
        GameLoop::new(Tuning::default(), NullRenderer, RecordingUi::default())
    }

    #[test]
    fn first_press_activates_and_sets_velocity() {
        let mut g = game();
        assert!(!g.is_active());
        g.handle_input(InputEvent::Press(PaddleIntent::MoveUp));
        assert!(g.is_active());
        assert_eq!(g.world().player.vel_y, -6.0);
    }

    #[test]
    fn press_while_active_only_changes_velocity() {
        let mut g = game();
        g.handle_input(InputEvent::Press(PaddleIntent::MoveUp));
        g.handle_input(InputEvent::Press(PaddleIntent::MoveDown));
        assert!(g.is_active());
        assert_eq!(g.world().player.vel_y, 6.0);
    }

    #[test]
    fn release_of_active_direction_stops_paddle() {
        let mut g = game();
        g.handle_input(InputEvent::Press(PaddleIntent::MoveDown));
        g.handle_input(InputEvent::Release(PaddleIntent::MoveDown));
        assert_eq!(g.world().player.vel_y, 0.0);
    }

    #[test]
    fn release_of_stale_direction_is_ignored() {
        let mut g = game();
        g.handle_input(InputEvent::Press(PaddleIntent::MoveUp));
        g.handle_input(InputEvent::Press(PaddleIntent::MoveDown));
        // Up key comes back up after down was pressed; keep moving down
        g.handle_input(InputEvent::Release(PaddleIntent::MoveUp));
        assert_eq!(g.world().player.vel_y, 6.0);
    }

    #[test]
    fn idle_tick_is_a_no_op_and_unschedules() {
        let mut g = game();
        let before = g.world().ball.pos;
        assert!(!g.tick());
        assert_eq!(g.world().ball.pos, before);
        assert!(g.ui_mut().calls.is_empty());
    }

    fn play_round_to_miss(g: &mut GameLoop<NullRenderer, RecordingUi>) {
        g.handle_input(InputEvent::Press(PaddleIntent::MoveUp));
        g.handle_input(InputEvent::Release(PaddleIntent::MoveUp));
        for _ in 0..500 {
            if !g.tick() {
                return;
            }
        }
        panic!("round never ended");
    }

    #[test]
    fn round_end_notifies_ui_once_and_stops_scheduling() {
        let mut g = game();
        play_round_to_miss(&mut g);

        assert!(!g.is_active());
        // The player never moves off center and the serve drifts below its
        // reach, so the round ends without a single return
        assert_eq!(g.ui_mut().calls, vec!["score:0", "game_over"]);

        // Stale callback after the round: guard holds, no duplicate UI calls
        let frozen = g.world().ball.pos;
        assert!(!g.tick());
        assert_eq!(g.world().ball.pos, frozen);
        assert_eq!(g.ui_mut().calls.len(), 2);
    }

    #[test]
    fn restart_resets_round_but_stays_idle() {
        let mut g = game();
        play_round_to_miss(&mut g);
        let player_y = g.world().player.y;

        g.restart();

        assert!(!g.is_active());
        assert_eq!(g.world().ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(g.world().score, 0);
        // Paddle positions carry over across rounds
        assert_eq!(g.world().player.y, player_y);
        assert_eq!(g.ui_mut().calls.last().unwrap(), "hide");

        // Next directional input starts the new round
        g.handle_input(InputEvent::Press(PaddleIntent::MoveDown));
        assert!(g.is_active());
    }

    #[test]
    fn computer_side_is_tracking_controlled() {
        let g = game();
        assert_eq!(
            g.world().paddle(Side::Computer).controller,
            crate::sim::Controller::Tracking
        );
    }
}
