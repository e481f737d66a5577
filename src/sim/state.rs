//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`; there is no
//! module-level state anywhere in the simulation.

use glam::Vec2;

use super::banner::Banner;
use super::clock::FrameClock;
use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a start signal. Carries the score of the session that
    /// just ended, if any.
    Idle { final_score: Option<u32> },
    /// Physics, spawning and scoring are active
    Running,
}

/// Notifications produced by a tick for whoever owns the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A session began; start and game-over chrome should be hidden
    SessionStarted,
    /// An obstacle left the field and was scored
    ObstaclePassed { score: u32 },
    /// Score reached a positive multiple of the milestone step
    Milestone { score: u32 },
    /// A non-fatal collision; `lives` is what remains
    LifeLost { lives: u8 },
    /// The last life was lost
    SessionEnded { final_score: u32 },
}

/// The player's character
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub dy: f32,
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, PLAYER_GROUND_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            dy: 0.0,
            grounded: true,
        }
    }
}

impl Player {
    /// Top edge of the player when standing on the ground
    #[inline]
    pub fn ground_y(&self) -> f32 {
        FIELD_HEIGHT - self.size.y - GROUND_MARGIN
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Put the player back on the ground at rest
    pub fn reset(&mut self) {
        self.pos.y = self.ground_y();
        self.dy = 0.0;
        self.grounded = true;
    }
}

/// A fence scrolling toward the player
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// New obstacle standing on the ground at `x`
    pub fn at(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, OBSTACLE_GROUND_Y),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// True once the right edge has passed the left boundary
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance values in effect
    pub tuning: Tuning,
    pub phase: Phase,
    pub score: u32,
    pub lives: u8,
    /// Obstacle displacement per frame
    pub speed: f32,
    /// Timestamp (ms) of the last spawn; 0 means "spawn as soon as allowed"
    pub last_spawn_ms: f64,
    /// Frames simulated in the current session
    pub frames: u64,
    /// Source of frame deltas; reset so a session's first frame has delta 0
    pub clock: FrameClock,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub banner: Banner,
}

impl GameState {
    /// Create an idle game waiting for its first start signal
    pub fn new(tuning: Tuning) -> Self {
        let speed = tuning.base_speed;
        Self {
            tuning,
            phase: Phase::Idle { final_score: None },
            score: 0,
            lives: STARTING_LIVES,
            speed,
            last_spawn_ms: 0.0,
            frames: 0,
            clock: FrameClock::default(),
            player: Player::default(),
            obstacles: Vec::new(),
            banner: Banner::default(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Reset every session field and enter `Running`
    pub fn start_session(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.frames = 0;
        self.clock.reset();
        self.banner = Banner::default();
        self.reset_round();
        self.phase = Phase::Running;
    }

    /// Soft reset after a lost life: player and obstacles only
    pub fn reset_round(&mut self) {
        self.player.reset();
        self.obstacles.clear();
        self.speed = self.tuning.base_speed;
        self.last_spawn_ms = 0.0;
    }

    /// Leave `Running`, surfacing the score reached
    pub fn end_session(&mut self) {
        self.phase = Phase::Idle {
            final_score: Some(self.score),
        };
    }
}
