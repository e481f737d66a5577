//! Cow Hop - a single-screen endless runner
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, obstacles, collisions, session state)
//! - `renderer`: Draws a frame onto any 2D `Surface`, with flat-colour fallbacks
//! - `game`: Frame driver tying input, clock and simulation together
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, Signal};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical field dimensions (the canvas is scaled for display elsewhere)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 320.0;

    /// Distance from the bottom of the field to the walkable surface
    pub const GROUND_MARGIN: f32 = 20.0;
    /// Fences sit slightly higher than the cow's feet
    pub const FENCE_Y_OFFSET: f32 = 8.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 70.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_HEIGHT: f32 = 60.0;

    /// Lives at the start of every session
    pub const STARTING_LIVES: u8 = 3;

    /// A milestone banner is shown every this many points
    pub const MILESTONE_EVERY: u32 = 20;

    /// Player ground line (top edge of the player when standing)
    pub const PLAYER_GROUND_Y: f32 = FIELD_HEIGHT - PLAYER_HEIGHT - GROUND_MARGIN;
    /// Obstacle ground line (top edge of every obstacle)
    pub const OBSTACLE_GROUND_Y: f32 =
        FIELD_HEIGHT - OBSTACLE_HEIGHT - GROUND_MARGIN - FENCE_Y_OFFSET;
}
