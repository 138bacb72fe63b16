//! Score and difficulty controller
//!
//! Score and scroll speed both grow with survival time. Crossing a multiple of
//! `MILESTONE_STEP` raises a milestone, debounced on the controller's own
//! clock so a burst of crossings (e.g. after a clamped hitch) plays one cue.

use serde::{Deserialize, Serialize};

use crate::consts::MILESTONE_STEP;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Unfloored score
    pub score: f32,
    /// Obstacle scroll speed (units/s)
    pub scroll_speed: f32,
    /// Seconds of running time seen by this controller
    pub clock: f32,
    /// Controller time of the last milestone cue
    pub last_milestone_at: Option<f32>,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0.0,
            scroll_speed: tuning.base_scroll_speed,
            clock: 0.0,
            last_milestone_at: None,
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Score as shown to the player
    #[inline]
    pub fn floored_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    /// Advance by `dt`; returns the milestone reached if its cue should fire
    pub fn update(&mut self, dt: f32, tuning: &Tuning) -> Option<u64> {
        let before = self.floored_score() / MILESTONE_STEP;

        self.clock += dt;
        self.score += dt * tuning.score_rate;
        self.scroll_speed += dt * tuning.scroll_ramp;
        if let Some(cap) = tuning.max_scroll_speed {
            // A cap below the base speed must not pull the speed down
            self.scroll_speed = self.scroll_speed.min(cap.max(tuning.base_scroll_speed));
        }

        let after = self.floored_score() / MILESTONE_STEP;
        if after <= before {
            return None;
        }

        let ready = self
            .last_milestone_at
            .is_none_or(|at| self.clock - at >= tuning.milestone_debounce_secs);
        if !ready {
            return None;
        }
        self.last_milestone_at = Some(self.clock);
        Some(after * MILESTONE_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rates() {
        let tuning = Tuning::default();
        let mut d = Difficulty::new(&tuning);
        for _ in 0..100 {
            d.update(0.01, &tuning);
        }
        assert!((d.score - 60.0).abs() < 0.01);
        assert!((d.scroll_speed - 306.0).abs() < 0.01);
    }

    #[test]
    fn test_milestone_fires_on_crossing() {
        let tuning = Tuning::default();
        let mut d = Difficulty::new(&tuning);
        d.score = 99.5;
        assert_eq!(d.update(0.016, &tuning), Some(100));
        // Still in the same hundred: nothing
        assert_eq!(d.update(0.016, &tuning), None);
    }

    #[test]
    fn test_milestone_debounced() {
        let tuning = Tuning::default();
        let mut d = Difficulty::new(&tuning);
        d.score = 99.9;
        assert_eq!(d.update(0.01, &tuning), Some(100));

        // Crossing 200 only 0.5s later is swallowed
        d.score = 199.9;
        d.clock += 0.49;
        assert_eq!(d.update(0.01, &tuning), None);

        // 300 after the window has passed fires again
        d.score = 299.9;
        d.clock += 0.5;
        assert_eq!(d.update(0.01, &tuning), Some(300));
    }

    #[test]
    fn test_burst_fires_once() {
        let tuning = Tuning {
            score_rate: 6000.0,
            ..Tuning::default()
        };
        let mut d = Difficulty::new(&tuning);
        // One 40ms step crosses 100 and 200
        assert_eq!(d.update(0.04, &tuning), Some(200));
        assert_eq!(d.update(0.04, &tuning), None);
    }

    #[test]
    fn test_speed_cap() {
        let tuning = Tuning {
            max_scroll_speed: Some(301.0),
            ..Tuning::default()
        };
        let mut d = Difficulty::new(&tuning);
        for _ in 0..100 {
            d.update(0.04, &tuning);
        }
        assert_eq!(d.scroll_speed, 301.0);
    }

    proptest! {
        #[test]
        fn prop_score_and_speed_never_decrease(dts in prop::collection::vec(0.0f32..0.04, 1..300)) {
            let tuning = Tuning::default();
            let mut d = Difficulty::new(&tuning);
            for dt in dts {
                let (score, speed) = (d.score, d.scroll_speed);
                d.update(dt, &tuning);
                prop_assert!(d.score >= score);
                prop_assert!(d.scroll_speed >= speed);
            }
        }
    }
}
