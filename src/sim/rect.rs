//! Integer axis-aligned rectangles
//!
//! Positions are floating point, but hitboxes and draw positions snap to whole
//! pixels, the same way sprites land on screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with its top-left corner at (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size centered on `center` (rounded to pixels)
    pub fn centered_at(center: Vec2, width: i32, height: i32) -> Self {
        Self {
            x: (center.x - width as f32 / 2.0).round() as i32,
            y: (center.y - height as f32 / 2.0).round() as i32,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Overlapping region, if any
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Copy shifted by a (rounded) offset
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect {
            x: self.x + offset.x.round() as i32,
            y: self.y + offset.y.round() as i32,
            ..*self
        }
    }

    /// True when the whole rectangle lies inside `[0, width] x [0, height]`
    pub fn is_within(&self, width: i32, height: i32) -> bool {
        self.left() >= 0 && self.top() >= 0 && self.right() <= width && self.bottom() <= height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn test_intersection_region() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(6, 3, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(6, 3, 4, 7)));
        assert_eq!(a.intersection(&Rect::new(20, 20, 1, 1)), None);
    }

    #[test]
    fn test_centered_round_trip() {
        let r = Rect::centered_at(Vec2::new(100.0, 50.0), 40, 20);
        assert_eq!(r, Rect::new(80, 40, 40, 20));
        assert_eq!(r.center(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_is_within() {
        assert!(Rect::new(0, 0, 800, 600).is_within(800, 600));
        assert!(!Rect::new(-1, 0, 10, 10).is_within(800, 600));
        assert!(!Rect::new(795, 0, 10, 10).is_within(800, 600));
    }
}
