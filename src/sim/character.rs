//! The player character
//!
//! Vertical-only kinematics: the character stays at a fixed x while the world
//! scrolls past. Animation state is cosmetic and never touches the hitbox.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Top-left corner of the sprite box
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    pub size: Vec2,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub grounded: bool,
    /// Current run-cycle frame (presentation only)
    pub frame: u8,
    pub frame_timer_ms: f32,
}

impl Character {
    pub fn new(gravity: f32, jump_impulse: f32) -> Self {
        let size = Vec2::new(CHARACTER_WIDTH, CHARACTER_HEIGHT);
        Self {
            pos: Vec2::new(CHARACTER_X, GROUND_Y - size.y),
            vel_y: 0.0,
            size,
            gravity,
            jump_impulse,
            grounded: true,
            frame: 0,
            frame_timer_ms: 0.0,
        }
    }

    /// y of the top edge when standing on the ground
    #[inline]
    pub fn rest_y(&self) -> f32 {
        GROUND_Y - self.size.y
    }

    /// Put the character back on the ground, at rest
    pub fn reset(&mut self) {
        self.pos = Vec2::new(CHARACTER_X, self.rest_y());
        self.vel_y = 0.0;
        self.grounded = true;
        self.frame = 0;
        self.frame_timer_ms = 0.0;
    }

    /// Advance physics and animation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.apply_gravity(dt);
        self.integrate(dt);
        self.clamp_to_ground();
        self.animate(dt);
    }

    pub fn apply_gravity(&mut self, dt: f32) {
        self.vel_y += self.gravity * dt;
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos.y += self.vel_y * dt;
    }

    pub fn clamp_to_ground(&mut self) {
        let rest = self.rest_y();
        if self.pos.y >= rest {
            self.pos.y = rest;
            self.vel_y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }

    /// Cycle the run frames while grounded, hold the air pose otherwise
    pub fn animate(&mut self, dt: f32) {
        if self.grounded {
            self.frame_timer_ms += dt * 1000.0;
            if self.frame_timer_ms > RUN_FRAME_MS {
                self.frame = (self.frame + 1) % RUN_FRAME_COUNT;
                self.frame_timer_ms = 0.0;
            }
        } else {
            self.frame = AIR_FRAME;
        }
    }

    /// Start a jump. Returns false (and does nothing) while airborne.
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel_y = self.jump_impulse;
        self.grounded = false;
        true
    }

    /// Full box used for drawing
    pub fn sprite_box(&self) -> Aabb {
        Aabb {
            min: self.pos,
            size: self.size,
        }
    }

    /// Collision box, inset so sprite padding can't cause unfair hits
    pub fn hitbox(&self) -> Aabb {
        self.sprite_box().inset(HITBOX_INSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn character() -> Character {
        Character::new(1400.0, -520.0)
    }

    #[test]
    fn test_starts_grounded() {
        let c = character();
        assert!(c.grounded);
        assert_eq!(c.pos.y, GROUND_Y - CHARACTER_HEIGHT);
        assert_eq!(c.vel_y, 0.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut c = character();
        assert!(c.jump());
        assert_eq!(c.vel_y, -520.0);
        assert!(!c.grounded);
    }

    #[test]
    fn test_jump_while_airborne_is_ignored() {
        let mut c = character();
        c.jump();
        c.update(0.05);
        let vel = c.vel_y;
        assert!(!c.jump());
        assert_eq!(c.vel_y, vel);
    }

    #[test]
    fn test_jump_lands() {
        let mut c = character();
        c.jump();
        let mut peak = c.pos.y;
        for _ in 0..120 {
            c.update(1.0 / 60.0);
            peak = peak.min(c.pos.y);
        }
        assert!(c.grounded);
        assert_eq!(c.pos.y, c.rest_y());
        assert_eq!(c.vel_y, 0.0);
        // Apex is v²/2g above the ground (~96 units), minus integration error
        assert!(c.rest_y() - peak > 85.0);
    }

    #[test]
    fn test_run_animation_cycles() {
        let mut c = character();
        assert_eq!(c.frame, 0);
        for _ in 0..8 {
            c.update(1.0 / 60.0);
        }
        // 133ms elapsed, one frame change
        assert_eq!(c.frame, 1);
        assert_eq!(c.frame_timer_ms, 0.0);
    }

    #[test]
    fn test_air_pose() {
        let mut c = character();
        c.frame = 1;
        c.jump();
        c.update(1.0 / 60.0);
        assert_eq!(c.frame, AIR_FRAME);
    }

    #[test]
    fn test_animation_does_not_move_hitbox() {
        let mut c = character();
        let before = c.hitbox();
        c.frame = 1;
        c.frame_timer_ms = 50.0;
        assert_eq!(c.hitbox(), before);
    }

    proptest! {
        #[test]
        fn prop_ground_invariant(steps in prop::collection::vec((0.0f32..0.04, any::<bool>()), 1..200)) {
            let mut c = character();
            for (dt, press) in steps {
                if press {
                    c.jump();
                }
                c.update(dt);
                prop_assert!(c.pos.y <= c.rest_y());
                prop_assert_eq!(c.grounded, c.pos.y == c.rest_y());
                if c.grounded {
                    prop_assert_eq!(c.vel_y, 0.0);
                }
            }
        }
    }
}
