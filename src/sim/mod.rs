//! Simulation module
//!
//! All gameplay logic lives here. No rendering, audio or platform code:
//! - Variable timestep, clamped by the frame clock
//! - Seeded RNG only
//! - One owned `GameState`, mutated by `tick` and the input actions

pub mod character;
pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod obstacle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use character::Character;
pub use clock::{FrameClock, clamp_dt};
pub use collision::{Aabb, first_hit, intersects};
pub use difficulty::Difficulty;
pub use obstacle::{Obstacle, ObstacleField};
pub use spawn::{SpawnScheduler, next_interval, spawn_obstacle};
pub use state::{Frame, GameEvent, GameState, RunPhase};
pub use tick::{TickInput, tick};
