//! 2D vector operations used by the integrator
//!
//! `Vector2D` is glam's `Vec2`. Addition, magnitude and dot product are glam's
//! own `+=`, `length()` and `dot()`; the in-place helpers the wheel step leans
//! on live in [`VectorExt`].

use glam::Vec2;

pub type Vector2D = Vec2;

/// In-place vector helpers for the hot integration loop
pub trait VectorExt {
    /// `self += v * scalar`
    fn mult_add(&mut self, v: Vec2, scalar: f32);
    /// Scale to unit length in place. A zero vector stays zero.
    fn normalise(&mut self);
    /// Rotate counter-clockwise (in y-up terms) by `radians` in place
    fn rotate_by(&mut self, radians: f32);
    /// Signed angle of the vector, atan2(y, x)
    fn heading(&self) -> f32;
    fn added(&self, other: Vec2) -> Vec2;
    fn subtracted(&self, other: Vec2) -> Vec2;
}

impl VectorExt for Vec2 {
    #[inline]
    fn mult_add(&mut self, v: Vec2, scalar: f32) {
        *self += v * scalar;
    }

    #[inline]
    fn normalise(&mut self) {
        *self = self.normalize_or_zero();
    }

    #[inline]
    fn rotate_by(&mut self, radians: f32) {
        *self = Vec2::from_angle(radians).rotate(*self);
    }

    #[inline]
    fn heading(&self) -> f32 {
        self.to_angle()
    }

    #[inline]
    fn added(&self, other: Vec2) -> Vec2 {
        *self + other
    }

    #[inline]
    fn subtracted(&self, other: Vec2) -> Vec2 {
        *self - other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    fn close(a: Vec2, b: Vec2, eps: f32) -> bool {
        (a - b).length() <= eps
    }

    #[test]
    fn test_mult_add() {
        let mut v = Vec2::new(1.0, 2.0);
        v.mult_add(Vec2::new(3.0, -1.0), 0.5);
        assert!(close(v, Vec2::new(2.5, 1.5), 1e-6));
    }

    #[test]
    fn test_normalise_zero_vector_stays_zero() {
        let mut v = Vec2::ZERO;
        v.normalise();
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut v = Vec2::new(1.0, 0.0);
        v.rotate_by(FRAC_PI_2);
        assert!(close(v, Vec2::new(0.0, 1.0), 1e-6));
    }

    #[test]
    fn test_heading() {
        assert!((Vec2::new(0.0, 2.0).heading() - FRAC_PI_2).abs() < 1e-6);
        assert!((Vec2::new(-1.0, 0.0).heading().abs() - std::f32::consts::PI).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_rotate_zero_is_identity(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let mut v = Vec2::new(x, y);
            v.rotate_by(0.0);
            prop_assert_eq!(v, Vec2::new(x, y));
        }

        #[test]
        fn prop_rotate_full_turn(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let original = Vec2::new(x, y);
            let mut v = original;
            v.rotate_by(TAU);
            prop_assert!(close(v, original, 1e-3 * original.length().max(1.0)));
        }

        #[test]
        fn prop_rotate_round_trip(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            theta in -10.0f32..10.0,
        ) {
            let original = Vec2::new(x, y);
            let mut v = original;
            v.rotate_by(theta);
            v.rotate_by(-theta);
            prop_assert!(close(v, original, 1e-3 * original.length().max(1.0)));
        }

        #[test]
        fn prop_normalise_is_unit_and_idempotent(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            prop_assume!(Vec2::new(x, y).length() > 1e-3);
            let mut v = Vec2::new(x, y);
            v.normalise();
            prop_assert!((v.length() - 1.0).abs() < 1e-5);
            let once = v;
            v.normalise();
            prop_assert!(close(v, once, 1e-6));
        }
    }
}
