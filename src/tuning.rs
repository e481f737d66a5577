//! Game balance tuning
//!
//! Every gameplay constant that affects feel lives here. Read from
//! LocalStorage so balance can be tweaked without a rebuild.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while reading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration added to vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_impulse: f32,

    // === Obstacles ===
    /// Milliseconds that must pass between two spawns
    pub spawn_interval_ms: f64,
    /// Obstacle speed at the start of every life (units per frame)
    pub base_speed: f32,

    // === Difficulty ramp ===
    /// Score at which the late regime takes over
    pub late_regime_score: u32,
    /// Speed cap while score is below `late_regime_score`
    pub early_max_speed: f32,
    /// Speed cap once score reaches `late_regime_score`
    pub late_max_speed: f32,
    /// Speed gained per millisecond in the early regime
    pub early_speed_rate: f32,
    /// Speed gained per millisecond in the late regime
    pub late_speed_rate: f32,

    // === Banner ===
    /// How long the milestone banner stays up
    pub banner_duration_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.55,
            jump_impulse: -17.0,

            spawn_interval_ms: 1500.0,
            base_speed: 3.0,

            late_regime_score: 20,
            early_max_speed: 5.0,
            late_max_speed: 7.0,
            early_speed_rate: 0.0003,
            late_speed_rate: 0.001,

            banner_duration_ms: 2000.0,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "cow_hop_tuning";

    /// Parse a tuning document; missing fields take their default value
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.gravity > 0.0) {
            return invalid("gravity", "must be positive");
        }
        if !(self.jump_impulse < 0.0) {
            return invalid("jump_impulse", "must be negative (upward)");
        }
        if !(self.spawn_interval_ms > 0.0) {
            return invalid("spawn_interval_ms", "must be positive");
        }
        if !(self.base_speed > 0.0) {
            return invalid("base_speed", "must be positive");
        }
        if self.early_max_speed < self.base_speed {
            return invalid("early_max_speed", "must not be below base_speed");
        }
        if self.late_max_speed < self.early_max_speed {
            return invalid("late_max_speed", "must not be below early_max_speed");
        }
        if self.early_speed_rate < 0.0 || self.late_speed_rate < 0.0 {
            return invalid("speed_rate", "must not be negative");
        }
        if !(self.banner_duration_ms >= 0.0) {
            return invalid("banner_duration_ms", "must not be negative");
        }
        Ok(())
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native builds have no storage
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
