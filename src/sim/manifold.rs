//! Collision test results

use glam::Vec2;

/// Result of a circle-vs-geometry test
///
/// Built once by the collision routines and read by contact response. When
/// `collided()` is false there is no normal and the depth is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Manifold {
    collided: bool,
    /// Unit normal pointing from the geometry toward the circle center
    normal: Option<Vec2>,
    /// How far the circle overlaps the geometry
    penetration: f32,
    /// Closest point on the geometry to the circle center
    contact: Vec2,
}

impl Manifold {
    pub fn miss() -> Self {
        Self {
            collided: false,
            normal: None,
            penetration: 0.0,
            contact: Vec2::ZERO,
        }
    }

    pub fn hit(normal: Vec2, penetration: f32, contact: Vec2) -> Self {
        debug_assert!(
            (normal.length() - 1.0).abs() < 1e-3,
            "manifold normal must be unit length, got {normal}"
        );
        Self {
            collided: true,
            normal: Some(normal),
            penetration,
            contact,
        }
    }

    #[inline]
    pub fn collided(&self) -> bool {
        self.collided
    }

    #[inline]
    pub fn normal(&self) -> Option<Vec2> {
        self.normal
    }

    #[inline]
    pub fn penetration(&self) -> f32 {
        self.penetration
    }

    #[inline]
    pub fn contact(&self) -> Vec2 {
        self.contact
    }
}

impl Default for Manifold {
    fn default() -> Self {
        Self::miss()
    }
}
