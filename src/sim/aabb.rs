//! Axis-aligned bounding boxes
//!
//! Screen-space rectangles: `pos` is the top-left corner and +y points down,
//! so `top()` is the smallest y and `bottom()` the largest.

use glam::Vec2;

/// An axis-aligned rectangle derived from an entity's position and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True if the boxes overlap with positive area on both axes.
    ///
    /// Boxes that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if this box's bottom edge is within `tolerance` of `other`'s top
    #[inline]
    pub fn bottom_near_top_of(&self, other: &Aabb, tolerance: f32) -> bool {
        (self.bottom() - other.top()).abs() <= tolerance
    }
}
