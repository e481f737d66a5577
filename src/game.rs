//! Frame driver
//!
//! `Game` owns the simulation state and the pending input. The platform layer
//! forwards input signals as they arrive and calls `frame` once per display
//! refresh for as long as `frame` asks for another one.

use crate::renderer::{Assets, Surface, draw_frame};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Input signals delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Space or tap: start when idle, jump when running
    Action,
    /// Start / restart buttons
    Start,
    /// Jump only
    Jump,
}

/// Result of one update-then-render pass
#[derive(Debug, Default)]
pub struct FrameOutcome {
    pub events: Vec<GameEvent>,
    /// Whether the caller must schedule another frame
    pub reschedule: bool,
}

pub struct Game {
    pub state: GameState,
    input: TickInput,
    /// A frame is scheduled with the display and will run `frame`
    frame_pending: bool,
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: GameState::new(tuning),
            input: TickInput::default(),
            frame_pending: false,
        }
    }

    /// Record a signal for the next tick
    ///
    /// Returns true when no frame is scheduled and this signal can start a
    /// session; the caller must then schedule one.
    pub fn push_signal(&mut self, signal: Signal) -> bool {
        match signal {
            Signal::Action => self.input.action = true,
            Signal::Start => self.input.start = true,
            Signal::Jump => self.input.jump = true,
        }

        let starts = matches!(signal, Signal::Action | Signal::Start);
        if starts && !self.frame_pending && !self.state.is_running() {
            self.frame_pending = true;
            return true;
        }
        false
    }

    /// Run one update-then-render pass at timestamp `now_ms`
    pub fn frame<S: Surface>(&mut self, now_ms: f64, surface: &mut S, assets: &Assets) -> FrameOutcome {
        self.frame_pending = false;

        let input = std::mem::take(&mut self.input);
        let events = tick(&mut self.state, &input, now_ms);

        self.render(surface, assets);

        let reschedule = self.state.is_running();
        self.frame_pending = reschedule;
        FrameOutcome { events, reschedule }
    }

    /// Paint the current state without advancing it
    pub fn render<S: Surface>(&self, surface: &mut S, assets: &Assets) {
        draw_frame(surface, &self.state, assets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PLAYER_GROUND_Y, PLAYER_X};
    use crate::renderer::tests::RecordingSurface;
    use crate::sim::{Obstacle, Phase};

    #[test]
    fn test_start_signal_requests_a_frame_once() {
        let mut game = Game::new(Tuning::default());
        assert!(game.push_signal(Signal::Action));
        // Already scheduled
        assert!(!game.push_signal(Signal::Start));
    }

    #[test]
    fn test_jump_while_idle_requests_nothing() {
        let mut game = Game::new(Tuning::default());
        assert!(!game.push_signal(Signal::Jump));

        let mut surface = RecordingSurface::default();
        let outcome = game.frame(0.0, &mut surface, &Assets::default());
        assert!(outcome.events.is_empty());
        assert!(!outcome.reschedule);
        assert!(!game.state.is_running());
    }

    #[test]
    fn test_jump_before_start_is_not_carried_into_session() {
        let mut game = Game::new(Tuning::default());
        let assets = Assets::default();
        let mut surface = RecordingSurface::default();

        assert!(!game.push_signal(Signal::Jump));
        assert!(game.push_signal(Signal::Start));
        let outcome = game.frame(0.0, &mut surface, &assets);
        assert_eq!(outcome.events, vec![GameEvent::SessionStarted]);
        assert!(game.state.player.grounded);

        // Nothing pending: the player stays on the ground line
        game.frame(16.0, &mut surface, &assets);
        assert!(game.state.player.grounded);
        assert_eq!(game.state.player.pos.y, PLAYER_GROUND_Y);
    }

    #[test]
    fn test_loop_runs_until_session_ends() {
        let mut game = Game::new(Tuning::default());
        let assets = Assets::default();
        let mut surface = RecordingSurface::default();

        game.push_signal(Signal::Start);
        let outcome = game.frame(0.0, &mut surface, &assets);
        assert_eq!(outcome.events, vec![GameEvent::SessionStarted]);
        assert!(outcome.reschedule);
        // Signals while running never ask for an extra frame
        assert!(!game.push_signal(Signal::Action));

        game.state.lives = 1;
        game.state.score = 8;
        game.state.obstacles.push(Obstacle::at(PLAYER_X));
        let outcome = game.frame(16.0, &mut surface, &assets);
        assert_eq!(
            outcome.events,
            vec![GameEvent::SessionEnded { final_score: 8 }]
        );
        assert!(!outcome.reschedule);
        assert_eq!(
            game.state.phase,
            Phase::Idle {
                final_score: Some(8)
            }
        );

        // Restart is allowed to schedule again
        assert!(game.push_signal(Signal::Start));
        let outcome = game.frame(5_000.0, &mut surface, &assets);
        assert!(outcome.reschedule);
        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.lives, 3);
    }

    #[test]
    fn test_signals_are_consumed_once() {
        let mut game = Game::new(Tuning::default());
        let assets = Assets::default();
        let mut surface = RecordingSurface::default();

        game.push_signal(Signal::Start);
        game.frame(0.0, &mut surface, &assets);

        game.push_signal(Signal::Jump);
        game.frame(16.0, &mut surface, &assets);
        assert!(!game.state.player.grounded);

        // No new jump is queued while airborne; the player keeps falling
        for i in 2..200 {
            game.frame(i as f64 * 16.0, &mut surface, &assets);
            if game.state.player.grounded {
                break;
            }
        }
        assert!(game.state.player.grounded);
    }

    #[test]
    fn test_every_frame_renders() {
        let mut game = Game::new(Tuning::default());
        let mut surface = RecordingSurface::default();
        game.push_signal(Signal::Start);
        game.frame(0.0, &mut surface, &Assets::default());
        assert_eq!(surface.texts(), vec!["Score: 0", "Lives: 3"]);
    }
}
