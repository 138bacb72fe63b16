//! Frame clock
//!
//! Turns host timestamps into a clamped per-frame delta. A stalled frame
//! (background tab, debugger) is integrated as at most `MAX_FRAME_DT`, so the
//! character can't tunnel through an obstacle and the score can't jump.

use crate::consts::MAX_FRAME_DT;

/// Clamp a raw delta (seconds) into `[0, MAX_FRAME_DT]`
#[inline]
pub fn clamp_dt(raw_secs: f32) -> f32 {
    if !raw_secs.is_finite() || raw_secs <= 0.0 {
        return 0.0;
    }
    raw_secs.min(MAX_FRAME_DT)
}

/// Measures time between host frames
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous frame (ms)
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Restart measuring from `now_ms` (called when a run starts)
    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Seconds since the previous call, clamped
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => clamp_dt(((now_ms - last) / 1000.0) as f32),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}
