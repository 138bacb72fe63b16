//! Presentation
//!
//! Draws `Frame` snapshots onto a 2D canvas. Shapes are procedural; nothing
//! here feeds back into the simulation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

/// Spacing of the scrolling ground dashes
pub const DASH_PERIOD: f32 = 24.0;
/// Length of each ground dash
pub const DASH_LENGTH: f32 = 12.0;

/// Colors as CSS strings
#[derive(Debug, Clone)]
pub struct Palette {
    pub sky: &'static str,
    pub ground: &'static str,
    pub ground_dash: &'static str,
    pub character: &'static str,
    pub obstacle: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky: "#fff",
            ground: "#e9e9e9",
            ground_dash: "#d1d1d1",
            character: "#222",
            obstacle: "#6a6a6a",
        }
    }
}

/// Horizontal offset of the ground dashes at `time_ms`, in `[0, DASH_PERIOD)`
pub fn ground_dash_offset(time_ms: f64) -> f32 {
    ((time_ms / 6.0) % DASH_PERIOD as f64) as f32
}
