//! Dino Run - An endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, spawning, collisions, run state)
//! - `renderer`: Canvas 2D presentation of simulation snapshots
//! - `platform`: Browser input mapping
//! - `persistence`: Key/value storage for the best score and preferences
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod highscore;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscore::HighScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size (the canvas is scaled by CSS)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 200.0;
    /// Ground line, measured from the top of the playfield
    pub const GROUND_Y: f32 = PLAYFIELD_HEIGHT - 30.0;

    /// Longest frame the simulation will integrate in one step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.040;
    /// Reference update rate used by the native demo loop
    pub const DEMO_DT: f32 = 1.0 / 60.0;

    /// Obstacles are created this far past the right edge
    pub const SPAWN_OFFSET: f32 = 20.0;
    /// Obstacles are dropped once their right edge is this far past x=0
    pub const DESPAWN_MARGIN: f32 = 50.0;

    /// Character defaults
    pub const CHARACTER_X: f32 = 60.0;
    pub const CHARACTER_WIDTH: f32 = 44.0;
    pub const CHARACTER_HEIGHT: f32 = 44.0;
    /// Hitbox inset from the sprite box (left, top, right, bottom)
    pub const HITBOX_INSET: [f32; 4] = [6.0, 6.0, 6.0, 0.0];

    /// Animation
    pub const RUN_FRAME_COUNT: u8 = 2;
    pub const RUN_FRAME_MS: f32 = 120.0;
    /// Frame shown while airborne
    pub const AIR_FRAME: u8 = 0;

    /// Score milestones
    pub const MILESTONE_STEP: u64 = 100;
}
