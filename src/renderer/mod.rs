//! 2D rendering module
//!
//! The renderer only reads `GameState` and paints it onto a `Surface` in
//! logical field units. Images are optional: anything not loaded yet is drawn
//! as a flat rectangle in its fallback colour.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{BANNER_TEXT, GameState, Rect};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

/// The three images the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Player,
    Obstacle,
    Background,
}

impl AssetId {
    pub const ALL: [AssetId; 3] = [AssetId::Player, AssetId::Obstacle, AssetId::Background];

    /// Path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            AssetId::Player => "images/cow.png",
            AssetId::Obstacle => "images/fence.png",
            AssetId::Background => "images/background.png",
        }
    }

    /// Flat colour used until the image is ready
    pub fn fallback_color(&self) -> &'static str {
        match self {
            AssetId::Player => "#fffde7",
            AssetId::Obstacle => "#6d4c41",
            AssetId::Background => "#4caf50",
        }
    }
}

/// Loading state of a single image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetState {
    #[default]
    Pending,
    Ready,
}

/// Readiness of every image, filled in by whoever loads them
#[derive(Debug, Clone, Default)]
pub struct Assets {
    player: AssetState,
    obstacle: AssetState,
    background: AssetState,
}

impl Assets {
    pub fn state(&self, id: AssetId) -> AssetState {
        match id {
            AssetId::Player => self.player,
            AssetId::Obstacle => self.obstacle,
            AssetId::Background => self.background,
        }
    }

    pub fn set(&mut self, id: AssetId, state: AssetState) {
        match id {
            AssetId::Player => self.player = state,
            AssetId::Obstacle => self.obstacle = state,
            AssetId::Background => self.background = state,
        }
    }

    #[inline]
    pub fn is_ready(&self, id: AssetId) -> bool {
        self.state(id) == AssetState::Ready
    }
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Text styling for `Surface::fill_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    pub color: &'static str,
    pub align: TextAlign,
}

/// HUD text (score and lives)
pub const HUD_TEXT: TextStyle = TextStyle {
    font: "20px Arial",
    color: "#5a3e1b",
    align: TextAlign::Left,
};

/// Milestone banner text
pub const BANNER_STYLE: TextStyle = TextStyle {
    font: "bold 48px Arial",
    color: "#3e6a2f",
    align: TextAlign::Center,
};

/// Anything the game can be painted on
pub trait Surface {
    /// Erase the whole field
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    /// Draw a loaded image stretched over `rect`
    fn draw_image(&mut self, asset: AssetId, rect: Rect);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}

/// Draw an image if it's ready, otherwise its flat fallback
fn draw_sprite<S: Surface>(surface: &mut S, assets: &Assets, id: AssetId, rect: Rect) {
    if assets.is_ready(id) {
        surface.draw_image(id, rect);
    } else {
        surface.fill_rect(rect, id.fallback_color());
    }
}

/// Paint one frame: background, player, obstacles, HUD, banner
pub fn draw_frame<S: Surface>(surface: &mut S, state: &GameState, assets: &Assets) {
    surface.clear();

    let field = Rect::new(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT);
    draw_sprite(surface, assets, AssetId::Background, field);

    draw_sprite(surface, assets, AssetId::Player, state.player.rect());

    for obstacle in &state.obstacles {
        draw_sprite(surface, assets, AssetId::Obstacle, obstacle.rect());
    }

    surface.fill_text(&format!("Score: {}", state.score), 10.0, 30.0, &HUD_TEXT);
    surface.fill_text(&format!("Lives: {}", state.lives), 10.0, 60.0, &HUD_TEXT);

    if state.banner.visible {
        surface.fill_text(
            BANNER_TEXT,
            FIELD_WIDTH / 2.0,
            FIELD_HEIGHT / 2.0,
            &BANNER_STYLE,
        );
    }
}
