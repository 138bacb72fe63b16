//! Per-frame simulation step
//!
//! Order within a step: character physics, obstacle scroll/prune, spawning,
//! collision, then score and difficulty. A collision ends the step.

use super::collision::first_hit;
use super::state::{GameEvent, GameState, RunPhase};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a run, or jump while running (key, tap, click)
    pub trigger: bool,
    /// Start a run only if one isn't in progress
    pub restart: bool,
    /// Flip the mute preference
    pub toggle_mute: bool,
    /// Demo mode - jump automatically
    pub autopilot: bool,
}

/// Advance the game by `dt` seconds (already clamped by the frame clock)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.toggle_mute {
        state.toggle_mute();
    }
    if input.restart {
        state.restart();
    }
    if input.trigger {
        state.trigger();
    }

    // Idle and Ended are frozen
    if state.phase != RunPhase::Running {
        return;
    }

    if input.autopilot && should_autojump(state) {
        state.trigger();
    }

    state.character.update(dt);

    let speed = state.difficulty.scroll_speed;
    state.obstacles.advance(dt, speed);

    let score = state.difficulty.score;
    if let Some(obstacle) = state
        .spawner
        .update(dt, score, &state.tuning, &mut state.rng)
    {
        log::debug!(
            "Spawned {}x{} obstacle, next in {:.0}ms",
            obstacle.size.x,
            obstacle.size.y,
            state.spawner.interval_ms
        );
        state.obstacles.push(obstacle);
    }

    let hitbox = state.character.hitbox();
    let boxes = state.obstacles.hitboxes();
    if first_hit(&hitbox, &boxes).is_some() {
        state.end();
        return;
    }

    if let Some(milestone) = state.difficulty.update(dt, &state.tuning) {
        log::debug!("Milestone {}", milestone);
        state.push_event(GameEvent::Milestone(milestone));
    }
}

/// Jump when the nearest obstacle ahead is about to reach the hitbox
fn should_autojump(state: &GameState) -> bool {
    if !state.character.grounded {
        return false;
    }
    let front = state.character.hitbox().right();
    let lead = state.difficulty.scroll_speed * state.tuning.autopilot_lead_secs;
    state
        .obstacles
        .iter()
        .map(|o| o.pos.x - front)
        .filter(|gap| *gap >= 0.0)
        .any(|gap| gap <= lead)
}
