//! SVG export surface

use anyhow::{Context, Result};
use bulbswitch_core::{Color, DrawContext, Path, PathCommand, Point, Rect};
use std::fmt::Write as _;
use std::fs;

/// A [`DrawContext`] that renders a frame to an SVG document
#[derive(Debug)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Drop everything drawn so far
    pub fn clear(&mut self) {
        self.body.clear();
    }

    /// The complete SVG document
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    pub fn write_to(&self, path: &std::path::Path) -> Result<()> {
        fs::write(path, self.finish())
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn paint(attr: &str, color: Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    let mut out = format!("{attr}=\"#{r:02x}{g:02x}{b:02x}\"");
    if a != 255 {
        let _ = write!(out, " {attr}-opacity=\"{:.3}\"", f32::from(a) / 255.0);
    }
    out
}

fn path_data(path: &Path) -> String {
    let mut d = String::new();
    for command in path.commands() {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match command {
            PathCommand::MoveTo(Point { x, y }) => write!(d, "M{x:.2},{y:.2}"),
            PathCommand::LineTo(Point { x, y }) => write!(d, "L{x:.2},{y:.2}"),
            PathCommand::Close => write!(d, "Z"),
        };
    }
    d
}

impl DrawContext for SvgSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            paint("fill", color)
        );
    }

    fn stroke_path(&mut self, path: &Path, color: Color, width: f32) {
        if path.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" fill=\"none\" {} stroke-width=\"{:.2}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            path_data(path),
            paint("stroke", color),
            width
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
            center.x,
            center.y,
            radius,
            paint("fill", color)
        );
    }
}
