//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Time only enters through the timestamp handed to `tick`
//! - Input only enters through `TickInput`
//! - Obstacles are processed in spawn order

pub mod banner;
pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use banner::{BANNER_TEXT, Banner};
pub use clock::FrameClock;
pub use collision::{Rect, overlaps};
pub use state::{GameEvent, GameState, Obstacle, Phase, Player};
pub use tick::{TickInput, tick};
