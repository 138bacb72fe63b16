//! Obstacle spawn scheduling
//!
//! An accumulator counts up to the current interval. Each spawn draws a fresh
//! random interval, shortened as the score grows but never below the floor.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use crate::consts::{PLAYFIELD_WIDTH, SPAWN_OFFSET};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnScheduler {
    /// Time since the last spawn (ms)
    pub elapsed_ms: f32,
    /// Time to wait before the next spawn (ms)
    pub interval_ms: f32,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            elapsed_ms: 0.0,
            interval_ms: tuning.initial_spawn_interval_ms,
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Advance the accumulator; returns a new obstacle when one is due
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        score: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Obstacle> {
        self.elapsed_ms += dt * 1000.0;
        if self.elapsed_ms < self.interval_ms {
            return None;
        }

        self.elapsed_ms = 0.0;
        self.interval_ms = next_interval(tuning, score, rng.random::<f32>());
        Some(spawn_obstacle(tuning, rng.random::<f32>()))
    }
}

/// Interval before the next spawn (ms), for a uniform `draw` in [0, 1)
pub fn next_interval(tuning: &Tuning, score: f32, draw: f32) -> f32 {
    let random = tuning.spawn_base_min_ms + draw * tuning.spawn_base_range_ms;
    let difficulty = (score.max(0.0) * tuning.spawn_difficulty_factor)
        .min(tuning.spawn_difficulty_cap_ms);
    (random - difficulty).max(tuning.spawn_floor_ms)
}

/// Build an obstacle just past the right edge, scaled by a uniform `draw` in [0, 1)
pub fn spawn_obstacle(tuning: &Tuning, draw: f32) -> Obstacle {
    let scale =
        tuning.obstacle_scale_min + draw * (tuning.obstacle_scale_max - tuning.obstacle_scale_min);
    let width = (tuning.obstacle_base_width * scale).round();
    let height = (tuning.obstacle_base_height * scale).round();
    Obstacle::on_ground(PLAYFIELD_WIDTH + SPAWN_OFFSET, width, height)
}
