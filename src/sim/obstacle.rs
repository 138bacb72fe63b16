//! Obstacles and the scrolling field that holds them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// A ground obstacle. Size is fixed at spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// Place an obstacle of the given size on the ground at `x`
    pub fn on_ground(x: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, GROUND_Y - height),
            size: Vec2::new(width, height),
        }
    }

    /// Obstacles collide with their full drawn box
    pub fn hitbox(&self) -> Aabb {
        Aabb {
            min: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// True once the obstacle has scrolled fully past the despawn margin
    #[inline]
    pub fn is_gone(&self) -> bool {
        self.right() < -DESPAWN_MARGIN
    }
}

/// Live obstacles, in spawn order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Scroll every obstacle left and drop the ones that left the screen
    pub fn advance(&mut self, dt: f32, scroll_speed: f32) {
        let dx = scroll_speed * dt;
        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= dx;
        }
        self.obstacles.retain(|o| !o.is_gone());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn hitboxes(&self) -> Vec<Aabb> {
        self.obstacles.iter().map(Obstacle::hitbox).collect()
    }
}
