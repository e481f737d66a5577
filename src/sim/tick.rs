//! Per-frame simulation step
//!
//! One call to `tick` is one frame: input, difficulty, physics, banner,
//! spawning, obstacle scrolling, collisions and scoring, in that order.

use super::collision::overlaps;
use super::difficulty::ramp;
use super::spawner::{advance, prune};
use super::state::{GameEvent, GameState};
use crate::consts::MILESTONE_EVERY;

/// Edge-triggered input sampled at the start of a tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary action (space, tap): start when idle, jump when running
    pub action: bool,
    /// Explicit start/restart (buttons): ignored while running
    pub start: bool,
    /// Explicit jump: ignored while idle
    pub jump: bool,
}

/// Advance the game by one frame at timestamp `now_ms`
///
/// Returns the events the frame produced, in the order they happened.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if !state.is_running() {
        if input.action || input.start {
            state.start_session();
            log::info!("Session started");
            events.push(GameEvent::SessionStarted);
        } else {
            return events;
        }
    } else if input.action || input.jump {
        state.player.jump(state.tuning.jump_impulse);
    }

    let dt_ms = state.clock.delta(now_ms);
    state.frames += 1;

    state.speed = ramp(state.speed, state.score, dt_ms, &state.tuning);

    state.player.step(state.tuning.gravity);

    // Before scoring, so a milestone reached this frame starts at elapsed 0
    let banner_duration = state.tuning.banner_duration_ms;
    state.banner.advance(dt_ms, banner_duration);

    state.maybe_spawn(now_ms);

    advance(&mut state.obstacles, state.speed);

    let player_rect = state.player.rect();
    if state
        .obstacles
        .iter()
        .any(|o| overlaps(&player_rect, &o.rect()))
    {
        handle_collision(state, &mut events);
        return events;
    }

    let passed = prune(&mut state.obstacles);
    for _ in 0..passed {
        state.score += 1;
        events.push(GameEvent::ObstaclePassed { score: state.score });

        if state.score % MILESTONE_EVERY == 0 {
            state.banner.trigger();
            log::debug!("Milestone reached at {}", state.score);
            events.push(GameEvent::Milestone { score: state.score });
        }
    }

    events
}

/// Lose a life, ending the session on the last one
fn handle_collision(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.lives > 1 {
        state.lives -= 1;
        state.reset_round();
        log::info!("Life lost, {} remaining", state.lives);
        events.push(GameEvent::LifeLost { lives: state.lives });
    } else {
        state.lives = 0;
        state.end_session();
        log::info!("Session over, final score {}", state.score);
        events.push(GameEvent::SessionEnded {
            final_score: state.score,
        });
    }
}
