//! Data-driven game balance
//!
//! Every gameplay constant lives here so balance can be tweaked from a JSON
//! document without recompiling. Missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tuning document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Character ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_impulse: f32,

    // === Scrolling ===
    /// Scroll speed at the start of a run (units/s)
    pub base_scroll_speed: f32,
    /// Scroll speed gained per second of survival
    pub scroll_ramp: f32,
    /// Optional ceiling for very long runs (None = unbounded)
    pub max_scroll_speed: Option<f32>,

    // === Score ===
    /// Score gained per second of survival
    pub score_rate: f32,
    /// Minimum seconds between two milestone cues
    pub milestone_debounce_secs: f32,

    // === Spawning (milliseconds) ===
    /// Interval before the first obstacle of a run
    pub initial_spawn_interval_ms: f32,
    pub spawn_base_min_ms: f32,
    pub spawn_base_range_ms: f32,
    /// Largest reduction the score can apply to the interval
    pub spawn_difficulty_cap_ms: f32,
    /// Interval reduction per point of score
    pub spawn_difficulty_factor: f32,
    /// The interval never drops below this
    pub spawn_floor_ms: f32,

    // === Obstacles ===
    pub obstacle_base_width: f32,
    pub obstacle_base_height: f32,
    pub obstacle_scale_min: f32,
    pub obstacle_scale_max: f32,

    // === Autopilot ===
    /// How far ahead (in seconds of scrolling) the autopilot jumps
    pub autopilot_lead_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1400.0,
            jump_impulse: -520.0,

            base_scroll_speed: 300.0,
            scroll_ramp: 6.0,
            max_scroll_speed: None,

            score_rate: 60.0,
            milestone_debounce_secs: 0.9,

            initial_spawn_interval_ms: 1500.0,
            spawn_base_min_ms: 900.0,
            spawn_base_range_ms: 1200.0,
            spawn_difficulty_cap_ms: 700.0,
            spawn_difficulty_factor: 3.0,
            spawn_floor_ms: 650.0,

            obstacle_base_width: 24.0,
            obstacle_base_height: 34.0,
            obstacle_scale_min: 0.9,
            obstacle_scale_max: 2.1,

            autopilot_lead_secs: 0.24,
        }
    }
}

impl Tuning {
    /// Parse a tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a tuning document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
