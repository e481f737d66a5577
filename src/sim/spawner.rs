//! Obstacle spawning, scrolling and removal

use super::state::{GameState, Obstacle};
use crate::consts::FIELD_WIDTH;

impl GameState {
    /// Spawn one obstacle at the right edge if the spawn interval has elapsed
    pub fn maybe_spawn(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_spawn_ms > self.tuning.spawn_interval_ms {
            self.obstacles.push(Obstacle::at(FIELD_WIDTH));
            self.last_spawn_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Move every obstacle left by `speed` units (one frame's worth)
pub fn advance(obstacles: &mut [Obstacle], speed: f32) {
    for obstacle in obstacles {
        obstacle.pos.x -= speed;
    }
}

/// Remove obstacles that have fully left the field, returning how many
pub fn prune(obstacles: &mut Vec<Obstacle>) -> u32 {
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_off_screen());
    (before - obstacles.len()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::OBSTACLE_WIDTH;
    use crate::tuning::Tuning;

    #[test]
    fn test_spawn_gate() {
        let mut state = GameState::new(Tuning::default());
        state.start_session();

        // last_spawn_ms starts at 0, so nothing until 1500 ms have passed
        assert!(!state.maybe_spawn(1000.0));
        assert!(!state.maybe_spawn(1500.0));
        assert!(state.maybe_spawn(1500.5));
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, FIELD_WIDTH);
        assert_eq!(state.last_spawn_ms, 1500.5);

        assert!(!state.maybe_spawn(2900.0));
        assert!(state.maybe_spawn(3100.0));
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_advance_linear() {
        let mut obstacles = vec![Obstacle::at(FIELD_WIDTH)];
        let speed = 3.7;
        for _ in 0..25 {
            advance(&mut obstacles, speed);
        }
        let expected = FIELD_WIDTH - 25.0 * speed;
        assert!((obstacles[0].pos.x - expected).abs() < 1e-3);
    }

    #[test]
    fn test_prune_counts_each_exit_once() {
        let mut obstacles = vec![
            Obstacle::at(-OBSTACLE_WIDTH - 1.0),
            Obstacle::at(10.0),
            Obstacle::at(-OBSTACLE_WIDTH - 5.0),
            Obstacle::at(300.0),
        ];
        assert_eq!(prune(&mut obstacles), 2);
        assert_eq!(obstacles.len(), 2);
        // Spawn order is preserved
        assert_eq!(obstacles[0].pos.x, 10.0);
        assert_eq!(obstacles[1].pos.x, 300.0);
        // Already pruned obstacles are never counted again
        assert_eq!(prune(&mut obstacles), 0);
    }
}
