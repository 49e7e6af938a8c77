//! Frame-stepped bike simulation
//!
//! All physics lives here:
//! - One `update(dt)` per frame, strictly before drawing
//! - Level geometry is read-only and queried synchronously
//! - No rendering or platform dependencies beyond the `View` seam

pub mod bike;
pub mod collision;
pub mod level;
pub mod manifold;
pub mod shapes;
pub mod state;
pub mod tick;
pub mod vector;
pub mod wheel;

pub use bike::Bike;
pub use collision::{circle_segment_collides, circle_segment_manifold, closest_point_on_segment};
pub use level::{Level, LevelQuery};
pub use manifold::Manifold;
pub use shapes::{Boundable, Circle, Rect, Segment};
pub use state::{BikeSnapshot, GameState, WheelSnapshot};
pub use tick::{Stepper, TickInput, tick};
pub use vector::{Vector2D, VectorExt};
pub use wheel::{ContactState, Wheel};
