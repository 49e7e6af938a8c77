//! Level geometry queries
//!
//! The wheel only ever asks the level two questions, so that is the whole
//! seam. `Level` is the stock implementation: a list of solid rectangles.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::shapes::{Circle, Rect};

/// Read-only geometry queries the physics core makes each frame
pub trait LevelQuery {
    /// Whether a circle overlaps any ground solid
    fn intersects_ground(&self, circle: &Circle) -> bool;

    /// The solid closest to `point`
    ///
    /// Only called after `intersects_ground` returned true, so implementations
    /// may return `None` when nothing is near; callers treat that as a broken
    /// contract rather than a recoverable condition.
    fn nearest_solid(&self, point: Vec2) -> Option<Rect>;
}

/// Static level made of axis-aligned solids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    pub solids: Vec<Rect>,
}

impl Level {
    pub fn new(solids: Vec<Rect>) -> Self {
        Self { solids }
    }

    /// A single flat ground slab whose top surface is at `ground_top`
    pub fn flat(ground_top: f32, width: f32, depth: f32) -> Self {
        Self::new(vec![Rect::new(0.0, ground_top, width, ground_top + depth)])
    }

    /// Stepped terrain from a seed
    ///
    /// `count` tiles of `tile_width` each, with tops varying by up to
    /// `max_step` above `ground_top`. Same seed, same level.
    pub fn generate(seed: u64, ground_top: f32, tile_width: f32, count: usize, max_step: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let depth = max_step.max(1.0) * 2.0 + 100.0;

        let solids = (0..count)
            .map(|i| {
                let left = i as f32 * tile_width;
                // First tile stays flat so the bike has somewhere to land
                let lift = if i == 0 || max_step <= 0.0 {
                    0.0
                } else {
                    rng.random_range(0.0..max_step)
                };
                Rect::new(left, ground_top - lift, left + tile_width, ground_top + depth)
            })
            .collect::<Vec<_>>();

        log::info!(
            "Generated level: seed={}, tiles={}, width={}",
            seed,
            solids.len(),
            count as f32 * tile_width
        );

        Self::new(solids)
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}

impl LevelQuery for Level {
    fn intersects_ground(&self, circle: &Circle) -> bool {
        self.solids.iter().any(|solid| circle.collides_with(solid))
    }

    fn nearest_solid(&self, point: Vec2) -> Option<Rect> {
        // Ties go to the first solid in the list
        self.solids
            .iter()
            .map(|solid| (solid, solid.distance_to_point(point)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(solid, _)| *solid)
    }
}
