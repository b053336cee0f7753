//! Axis-aligned rectangle geometry
//!
//! Everything in the game is a 64x64 AABB in the 800x480 world, so overlap
//! testing is the whole of collision detection.

/// An axis-aligned bounding box in world units.
///
/// Origin is the bottom-left corner, matching the world's y-up convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (x + width)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge (y + height)
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// True if the two rectangles intersect with positive area.
    ///
    /// Edge-touching rectangles do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}
