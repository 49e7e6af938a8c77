//! Geometry primitives for level solids and wheel proxies
//!
//! Screen space throughout: x grows right, y grows downward. A `Rect`'s
//! `top` is therefore its smallest y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One edge of a collidable outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub finish: Vec2,
}

impl Segment {
    pub const fn new(start: Vec2, finish: Vec2) -> Self {
        Self { start, finish }
    }

    /// Vector from `start` to `finish`
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.finish - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Unit perpendicular `(-dy, dx)`, zero for a degenerate segment
    pub fn perpendicular(&self) -> Vec2 {
        let d = self.direction();
        Vec2::new(-d.y, d.x).normalize_or_zero()
    }
}

/// Anything a circle can be tested against edge by edge
pub trait Boundable {
    /// Outline edges, in test order
    fn edges(&self) -> Vec<Segment>;
    /// Whether a point lies inside (or on) the shape
    fn contains_point(&self, point: Vec2) -> bool;
    /// Interior reference point, used to orient normals away from the shape
    fn centroid(&self) -> Vec2;
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from its top-left corner and size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, origin.x + size.x, origin.y + size.y)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn top_edge(&self) -> Segment {
        Segment::new(Vec2::new(self.left, self.top), Vec2::new(self.right, self.top))
    }

    pub fn right_edge(&self) -> Segment {
        Segment::new(Vec2::new(self.right, self.top), Vec2::new(self.right, self.bottom))
    }

    pub fn bottom_edge(&self) -> Segment {
        Segment::new(Vec2::new(self.right, self.bottom), Vec2::new(self.left, self.bottom))
    }

    pub fn left_edge(&self) -> Segment {
        Segment::new(Vec2::new(self.left, self.bottom), Vec2::new(self.left, self.top))
    }

    /// Euclidean distance from a point to the rectangle (0 inside)
    pub fn distance_to_point(&self, point: Vec2) -> f32 {
        let dx = (self.left - point.x).max(0.0).max(point.x - self.right);
        let dy = (self.top - point.y).max(0.0).max(point.y - self.bottom);
        Vec2::new(dx, dy).length()
    }
}

impl Boundable for Rect {
    fn edges(&self) -> Vec<Segment> {
        vec![
            self.top_edge(),
            self.right_edge(),
            self.bottom_edge(),
            self.left_edge(),
        ]
    }

    fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    fn centroid(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }
}

/// Circular collision proxy
///
/// A wheel's circle is built from the wheel's current position on demand, so
/// it can never drift from the body it bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive, got {radius}");
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_trace_outline() {
        let rect = Rect::new(0.0, 10.0, 100.0, 60.0);
        let edges = rect.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].start, Vec2::new(0.0, 10.0));
        assert_eq!(edges[0].finish, Vec2::new(100.0, 10.0));
        // Each edge starts where the previous one finished
        for i in 0..4 {
            assert_eq!(edges[i].finish, edges[(i + 1) % 4].start);
        }
    }

    #[test]
    fn test_rect_contains_point_includes_boundary() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(5.0, 5.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 0.0)));
        assert!(!rect.contains_point(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_rect_distance_to_point() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect.distance_to_point(Vec2::new(5.0, 5.0)), 0.0);
        assert!((rect.distance_to_point(Vec2::new(5.0, -4.0)) - 4.0).abs() < 1e-6);
        assert!((rect.distance_to_point(Vec2::new(13.0, 14.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_origin_size() {
        let rect = Rect::from_origin_size(Vec2::new(2.0, 3.0), Vec2::new(4.0, 5.0));
        assert_eq!(rect, Rect::new(2.0, 3.0, 6.0, 8.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 5.0);
    }

    #[test]
    fn test_degenerate_segment_perpendicular_is_zero() {
        let seg = Segment::new(Vec2::ONE, Vec2::ONE);
        assert_eq!(seg.perpendicular(), Vec2::ZERO);
    }
}
