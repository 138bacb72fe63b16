//! Axis-aligned collision detection
//!
//! Screen space: x grows to the right, y grows downward, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Shrink the box by `[left, top, right, bottom]`
    pub fn inset(&self, inset: [f32; 4]) -> Self {
        let [l, t, r, b] = inset;
        Self::new(
            self.min.x + l,
            self.min.y + t,
            self.size.x - l - r,
            self.size.y - t - b,
        )
    }
}

/// Overlap test. Touching edges count as a hit.
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    !(a.right() < b.left() || a.left() > b.right() || a.bottom() < b.top() || a.top() > b.bottom())
}

/// Index of the first box overlapping `hitbox`, if any
pub fn first_hit<'a>(hitbox: &Aabb, boxes: impl IntoIterator<Item = &'a Aabb>) -> Option<usize> {
    boxes.into_iter().position(|b| intersects(hitbox, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_corner_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(9.0, 9.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_separated() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(20.0, 0.0, 10.0, 10.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_touching_edges() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_inset() {
        let sprite = Aabb::new(60.0, 126.0, 44.0, 44.0);
        let hitbox = sprite.inset([6.0, 6.0, 6.0, 0.0]);
        assert_eq!(hitbox, Aabb::new(66.0, 132.0, 32.0, 38.0));
        assert_eq!(hitbox.bottom(), sprite.bottom());
    }

    #[test]
    fn test_first_hit() {
        let hitbox = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let boxes = [
            Aabb::new(50.0, 0.0, 5.0, 5.0),
            Aabb::new(5.0, 5.0, 5.0, 5.0),
            Aabb::new(8.0, 0.0, 5.0, 5.0),
        ];
        assert_eq!(first_hit(&hitbox, &boxes), Some(1));
        assert_eq!(first_hit(&hitbox, &boxes[..1]), None);
    }

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Aabb::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersects_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn prop_box_overlaps_itself(a in arb_box()) {
            prop_assert!(intersects(&a, &a));
        }
    }
}
