//! Recording view

use glam::Vec2;

use super::{Color, Fill, View};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        fill: Fill,
    },
    Line {
        start: Vec2,
        finish: Vec2,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        color: Color,
    },
}

/// A `View` that stores every call in order
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded text lines, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl View for CommandList {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, fill: Fill) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            fill,
        });
    }

    fn draw_line(&mut self, start: Vec2, finish: Vec2, color: Color) {
        self.commands.push(DrawCommand::Line {
            start,
            finish,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }
}
