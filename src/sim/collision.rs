//! Axis-aligned collision geometry
//!
//! Avatar and obstacles are plain rectangles. Collisions are tested on
//! inset hitboxes so near misses read as misses on screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, top-left origin (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Midpoint of the bottom edge
    #[inline]
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.bottom())
    }

    /// Overlap test with strict inequalities: boxes that only share an edge
    /// do not collide.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Shrink the box by per-side margins
    pub fn inset(&self, inset: &Inset) -> Aabb {
        Aabb {
            x: self.x + inset.left,
            y: self.y + inset.top,
            w: self.w - inset.left - inset.right,
            h: self.h - inset.top - inset.bottom,
        }
    }
}

/// Per-side hitbox margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inset {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Inset {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Whether a `w` x `h` box keeps a positive area after insetting
    pub fn fits(&self, w: f32, h: f32) -> bool {
        let sides = [self.left, self.top, self.right, self.bottom];
        sides.iter().all(|s| s.is_finite() && *s >= 0.0)
            && w - self.left - self.right > 0.0
            && h - self.top - self.bottom > 0.0
    }
}
