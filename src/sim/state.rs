//! Game state and run lifecycle
//!
//! Everything the simulation mutates lives in one owned `GameState`, so the
//! whole game can be driven (and tested) without a browser.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::character::Character;
use super::collision::Aabb;
use super::difficulty::Difficulty;
use super::obstacle::ObstacleField;
use super::spawn::SpawnScheduler;
use crate::highscore::HighScore;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for the first start trigger
    Idle,
    /// Active gameplay
    Running,
    /// Run ended by a collision, waiting for a restart
    Ended,
}

/// Things the host reacts to (audio cues, HUD, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began
    Started,
    /// The character left the ground
    Jump,
    /// Score crossed a multiple of 100
    Milestone(u64),
    /// The character hit an obstacle
    Collision,
    /// The final score beat the stored best
    NewHighScore(u64),
    /// The run is over
    GameOver { score: u64, new_high_score: bool },
    /// Mute preference flipped
    MuteChanged(bool),
}

/// Read-only view handed to the presentation layer each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub phase: RunPhase,
    pub character: Aabb,
    pub character_frame: u8,
    pub obstacles: Vec<Aabb>,
    pub score: u64,
    pub high_score: u64,
    pub muted: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the spawn RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: RunPhase,
    pub character: Character,
    pub obstacles: ObstacleField,
    pub spawner: SpawnScheduler,
    pub difficulty: Difficulty,
    pub high_score: HighScore,
    pub settings: Settings,
    /// Runs started since launch
    pub runs: u32,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game in the Idle phase with default tuning
    pub fn new(seed: u64, high_score: HighScore, settings: Settings) -> Self {
        Self::with_tuning(seed, Tuning::default(), high_score, settings)
    }

    pub fn with_tuning(seed: u64, tuning: Tuning, high_score: HighScore, settings: Settings) -> Self {
        Self {
            seed,
            character: Character::new(tuning.gravity, tuning.jump_impulse),
            obstacles: ObstacleField::new(),
            spawner: SpawnScheduler::new(&tuning),
            difficulty: Difficulty::new(&tuning),
            tuning,
            phase: RunPhase::Idle,
            high_score,
            settings,
            runs: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// The single player action: starts a run, or jumps while running
    pub fn trigger(&mut self) {
        match self.phase {
            RunPhase::Idle | RunPhase::Ended => self.start(),
            RunPhase::Running => {
                if self.character.jump() {
                    self.events.push(GameEvent::Jump);
                }
            }
        }
    }

    /// Explicit restart key: only acts outside a run
    pub fn restart(&mut self) {
        match self.phase {
            RunPhase::Idle | RunPhase::Ended => self.start(),
            RunPhase::Running => {}
        }
    }

    /// Reset all run state and begin running
    pub fn start(&mut self) {
        self.character.reset();
        self.obstacles.clear();
        self.spawner.reset(&self.tuning);
        self.difficulty.reset(&self.tuning);
        self.phase = RunPhase::Running;
        self.runs += 1;
        self.events.push(GameEvent::Started);
        log::info!("Run {} started", self.runs);
    }

    /// Stop the run after a collision and settle the score
    pub fn end(&mut self) {
        if self.phase != RunPhase::Running {
            return;
        }
        self.phase = RunPhase::Ended;
        let score = self.difficulty.floored_score();
        let new_high_score = self.high_score.submit(score);

        self.events.push(GameEvent::Collision);
        if new_high_score {
            self.events.push(GameEvent::NewHighScore(score));
            log::info!("New high score: {}", score);
        }
        self.events.push(GameEvent::GameOver {
            score,
            new_high_score,
        });
        log::info!("Game over - score {}", score);
    }

    pub fn toggle_mute(&mut self) {
        let muted = self.settings.toggle_mute();
        self.events.push(GameEvent::MuteChanged(muted));
        log::debug!("Muted: {}", muted);
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot for rendering
    pub fn snapshot(&self) -> Frame {
        Frame {
            phase: self.phase,
            character: self.character.sprite_box(),
            character_frame: self.character.frame,
            obstacles: self.obstacles.hitboxes(),
            score: self.difficulty.floored_score(),
            high_score: self.high_score.best,
            muted: self.settings.muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Obstacle;

    fn game() -> GameState {
        GameState::new(1, HighScore::default(), Settings::default())
    }

    #[test]
    fn test_starts_idle() {
        let mut state = game();
        assert_eq!(state.phase, RunPhase::Idle);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_trigger_dispatch() {
        let mut state = game();
        state.trigger();
        assert_eq!(state.phase, RunPhase::Running);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);

        state.trigger();
        assert_eq!(state.phase, RunPhase::Running);
        assert!(!state.character.grounded);
        assert_eq!(state.drain_events(), vec![GameEvent::Jump]);

        // Airborne: silent no-op
        state.trigger();
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = game();
        state.restart();
        assert_eq!(state.phase, RunPhase::Running);
        state.difficulty.score = 42.0;
        state.restart();
        assert_eq!(state.difficulty.score, 42.0);
        assert_eq!(state.runs, 1);
    }

    #[test]
    fn test_reset_is_identical_from_idle_and_ended() {
        let mut from_idle = game();
        from_idle.start();

        let mut from_ended = game();
        from_ended.start();
        from_ended.character.jump();
        from_ended.character.update(0.1);
        from_ended.character.frame = 1;
        from_ended.obstacles.push(Obstacle::on_ground(300.0, 30.0, 40.0));
        from_ended.difficulty.score = 512.0;
        from_ended.difficulty.scroll_speed = 420.0;
        from_ended.difficulty.last_milestone_at = Some(3.0);
        from_ended.spawner.elapsed_ms = 321.0;
        from_ended.spawner.interval_ms = 700.0;
        from_ended.end();
        assert_eq!(from_ended.phase, RunPhase::Ended);
        from_ended.start();

        assert_eq!(from_idle.phase, from_ended.phase);
        assert_eq!(from_idle.character, from_ended.character);
        assert_eq!(from_idle.obstacles, from_ended.obstacles);
        assert_eq!(from_idle.spawner, from_ended.spawner);
        assert_eq!(from_idle.difficulty, from_ended.difficulty);
        assert!(from_ended.obstacles.is_empty());
        assert_eq!(from_ended.difficulty.score, 0.0);
        assert_eq!(from_ended.difficulty.scroll_speed, 300.0);
        assert_eq!(from_ended.spawner.interval_ms, 1500.0);
        assert!(from_ended.character.grounded);
        assert_eq!(from_ended.character.vel_y, 0.0);
    }

    #[test]
    fn test_new_high_score_recorded() {
        let mut state = GameState::new(1, HighScore::new(50), Settings::default());
        state.start();
        state.difficulty.score = 75.6;
        state.drain_events();
        state.end();

        assert_eq!(state.high_score.best, 75);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::Collision,
                GameEvent::NewHighScore(75),
                GameEvent::GameOver {
                    score: 75,
                    new_high_score: true
                },
            ]
        );
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let mut state = GameState::new(1, HighScore::new(50), Settings::default());
        state.start();
        state.difficulty.score = 30.0;
        state.drain_events();
        state.end();

        assert_eq!(state.high_score.best, 50);
        let events = state.drain_events();
        assert!(!events.iter().any(|e| matches!(e, GameEvent::NewHighScore(_))));
        assert!(events.contains(&GameEvent::GameOver {
            score: 30,
            new_high_score: false
        }));
    }

    #[test]
    fn test_end_only_from_running() {
        let mut state = game();
        state.end();
        assert_eq!(state.phase, RunPhase::Idle);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_toggle_mute() {
        let mut state = game();
        state.toggle_mute();
        assert!(state.settings.muted);
        state.toggle_mute();
        assert!(!state.settings.muted);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::MuteChanged(true), GameEvent::MuteChanged(false)]
        );
    }

    #[test]
    fn test_snapshot() {
        let mut state = GameState::new(1, HighScore::new(12), Settings::default());
        state.start();
        state.obstacles.push(Obstacle::on_ground(500.0, 24.0, 34.0));
        state.difficulty.score = 9.7;

        let frame = state.snapshot();
        assert_eq!(frame.phase, RunPhase::Running);
        assert_eq!(frame.score, 9);
        assert_eq!(frame.high_score, 12);
        assert_eq!(frame.obstacles.len(), 1);
        assert_eq!(frame.character, state.character.sprite_box());
    }
}
