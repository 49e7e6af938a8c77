//! Drawing seam
//!
//! The physics core never renders. It hands circles, lines and debug text to a
//! `View`, which the game's real renderer implements. `CommandList` is a
//! recording view for headless runs and tests.

pub mod commands;

pub use commands::{CommandList, DrawCommand};

use glam::Vec2;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// How a circle is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid,
    Outline,
}

/// Rendering collaborator
pub trait View {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, fill: Fill);
    fn draw_line(&mut self, start: Vec2, finish: Vec2, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color);
}

/// Colors for bike elements
pub mod colors {
    use super::Color;

    pub const WHEEL: Color = [0.427, 0.427, 0.427, 1.0]; // #6d6d6d
    pub const WHEEL_SPOKE: Color = [1.0, 0.914, 0.380, 1.0]; // #ffe961
    pub const BOUNDING_CIRCLE: Color = [1.0, 0.153, 0.612, 1.0]; // #ff279c
    pub const DEBUG_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}
