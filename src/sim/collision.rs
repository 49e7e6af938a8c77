//! Collision detection between circles and straight-edged geometry
//!
//! Everything reduces to one question: where is the closest point on a segment
//! to the circle's center? The boolean test and the manifold test share that
//! projection, so they always agree.

use glam::Vec2;

use super::manifold::Manifold;
use super::shapes::{Boundable, Circle, Segment};
use super::vector::VectorExt;

/// Below this the circle center is treated as lying on the segment
const ON_SEGMENT_EPSILON: f32 = 1e-6;

/// Closest point on segment `a -> b` to `point`
///
/// The center is projected onto the segment direction and clamped to the
/// endpoints. A zero-length segment collapses to `a`.
pub fn closest_point_on_segment(a: Vec2, b: Vec2, point: Vec2) -> Vec2 {
    let mut ba = b - a;
    let len = ba.length();
    ba.normalise();

    let u = (point - a).dot(ba);
    if u <= 0.0 {
        a
    } else if u >= len {
        b
    } else {
        a + ba * u
    }
}

/// Whether a circle overlaps segment `a -> b` (touching counts)
pub fn circle_segment_collides(center: Vec2, radius: f32, segment: &Segment) -> bool {
    let closest = closest_point_on_segment(segment.start, segment.finish, center);
    (center - closest).length_squared() <= radius * radius
}

/// Full manifold for a circle against segment `a -> b`
///
/// The normal points from the closest point on the segment toward the circle
/// center. When the center sits on the segment that direction is undefined, so
/// the segment perpendicular `(-dy, dx)` is used, flipped to face away from
/// `interior` when one is given.
pub fn circle_segment_manifold(
    center: Vec2,
    radius: f32,
    segment: &Segment,
    interior: Option<Vec2>,
) -> Manifold {
    let closest = closest_point_on_segment(segment.start, segment.finish, center);
    let offset = center - closest;
    let dist_sq = offset.length_squared();

    if dist_sq > radius * radius {
        return Manifold::miss();
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > ON_SEGMENT_EPSILON {
        offset / dist
    } else {
        facing_away(segment_normal(segment), closest, interior)
    };

    Manifold::hit(normal, radius - dist, closest)
}

/// Segment perpendicular, or straight up (screen space) for a degenerate segment
fn segment_normal(segment: &Segment) -> Vec2 {
    let perp = segment.perpendicular();
    if perp == Vec2::ZERO { Vec2::NEG_Y } else { perp }
}

fn facing_away(normal: Vec2, from: Vec2, interior: Option<Vec2>) -> Vec2 {
    match interior {
        Some(inside) if normal.dot(inside - from) > 0.0 => -normal,
        _ => normal,
    }
}

impl Circle {
    /// Whether this circle overlaps a single segment
    pub fn collides_with_segment(&self, segment: &Segment) -> bool {
        circle_segment_collides(self.center, self.radius, segment)
    }

    /// Manifold for this circle against a single segment
    pub fn collision_test_segment(&self, segment: &Segment) -> Manifold {
        circle_segment_manifold(self.center, self.radius, segment, None)
    }

    /// Whether this circle overlaps a composite shape
    ///
    /// A center inside the shape is an immediate hit; otherwise the edges are
    /// tested in order and the first overlap wins.
    pub fn collides_with<B: Boundable + ?Sized>(&self, shape: &B) -> bool {
        if shape.contains_point(self.center) {
            return true;
        }
        shape
            .edges()
            .iter()
            .any(|edge| self.collides_with_segment(edge))
    }

    /// Manifold for this circle against a composite shape
    ///
    /// From outside, the first edge that reports an overlap wins; there is no
    /// search for the deepest edge. A center inside the shape is pushed out
    /// through the nearest edge, with depth `radius + distance to that edge`.
    pub fn collision_test<B: Boundable + ?Sized>(&self, shape: &B) -> Manifold {
        let edges = shape.edges();
        let interior = shape.centroid();

        if shape.contains_point(self.center) {
            return self.interior_manifold(&edges, interior);
        }

        edges
            .iter()
            .map(|edge| circle_segment_manifold(self.center, self.radius, edge, Some(interior)))
            .find(Manifold::collided)
            .unwrap_or_else(Manifold::miss)
    }

    fn interior_manifold(&self, edges: &[Segment], interior: Vec2) -> Manifold {
        let nearest = edges
            .iter()
            .map(|edge| {
                let closest = closest_point_on_segment(edge.start, edge.finish, self.center);
                (edge, closest, (self.center - closest).length())
            })
            .min_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

        match nearest {
            Some((edge, closest, dist)) => {
                let normal = facing_away(segment_normal(edge), closest, Some(interior));
                Manifold::hit(normal, self.radius + dist, closest)
            }
            None => Manifold::miss(),
        }
    }
}
