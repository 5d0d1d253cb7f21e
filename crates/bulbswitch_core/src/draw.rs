//! Draw surfaces
//!
//! Widgets issue drawing commands against a [`DrawContext`]; the platform
//! canvas, an exporter, or a test recorder implements it.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::path::Path;

/// A drawing surface handed to widgets once per frame
pub trait DrawContext {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a path with a solid color
    fn stroke_path(&mut self, path: &Path, color: Color, width: f32);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// A recorded drawing command
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokePath {
        path: Path,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
}

/// A [`DrawContext`] that records every command in order
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// First stroked path, if any
    pub fn stroked_path(&self) -> Option<&Path> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::StrokePath { path, .. } => Some(path),
            _ => None,
        })
    }

    /// Center of the first filled circle, if any
    pub fn circle_center(&self) -> Option<Point> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::FillCircle { center, .. } => Some(*center),
            _ => None,
        })
    }
}

impl DrawContext for RecordingContext {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}
