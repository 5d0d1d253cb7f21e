//! String geometry and drawing
//!
//! While grabbed the string is a straight segment from the bulb to the
//! contact point. Otherwise it hangs as a sine curve whose node sits at the
//! free end, scaled by the current wave amplitude:
//!
//! ```text
//! x(y) = anchor_x + amplitude * sin(2π * (length - y) / length),  0 <= y <= length
//! ```

use std::f32::consts::TAU;

use bulbswitch_core::{Color, DrawContext, Path, PathBuilder, Point};

use crate::config::StringConfig;

/// Upper bound on curve samples per frame
pub const MAX_SAMPLES: usize = 2048;

/// The string's geometry for one frame
#[derive(Clone, Debug, PartialEq)]
pub enum StringShape {
    /// Pulled taut to the contact point
    Straight { from: Point, to: Point },
    /// Hanging curve, anchor first, free end last
    Wave { points: Vec<Point> },
    /// No visible length; everything sits at the anchor
    Collapsed(Point),
}

impl StringShape {
    /// Where the string ends
    pub fn end(&self) -> Point {
        match self {
            StringShape::Straight { to, .. } => *to,
            StringShape::Wave { points } => points.last().copied().unwrap_or(Point::ZERO),
            StringShape::Collapsed(at) => *at,
        }
    }
}

/// Computes and draws the string
#[derive(Clone, Debug)]
pub struct StringRenderer {
    anchor_x: f32,
    sample_step: f32,
    stroke_width: f32,
    circle_radius: f32,
    line_color: Color,
    circle_color: Color,
}

impl StringRenderer {
    pub fn from_config(config: &StringConfig) -> Self {
        Self {
            anchor_x: config.bulb_center_x,
            sample_step: config.sample_step,
            stroke_width: config.stroke_width,
            circle_radius: config.circle_radius,
            line_color: config.line_color,
            circle_color: config.circle_color,
        }
    }

    /// Top of the string, under the bulb
    pub fn anchor(&self) -> Point {
        Point::new(self.anchor_x, 0.0)
    }

    /// Geometry for the given state. `touch` is the contact point while the
    /// string is grabbed.
    pub fn shape(&self, touch: Option<Point>, length: f32, amplitude: f32) -> StringShape {
        if let Some(to) = touch {
            return StringShape::Straight {
                from: self.anchor(),
                to,
            };
        }

        if !length.is_finite() || length <= 0.0 {
            return StringShape::Collapsed(self.anchor());
        }

        let amplitude = if amplitude.is_finite() { amplitude } else { 0.0 };
        let step = self.effective_step(length);
        let mut points = Vec::with_capacity((length / step) as usize + 2);
        points.push(self.anchor());

        let mut i = 1;
        loop {
            let y = i as f32 * step;
            if y >= length {
                break;
            }
            let phase = TAU * (length - y) / length;
            points.push(Point::new(self.anchor_x + amplitude * phase.sin(), y));
            i += 1;
        }

        points.push(Point::new(self.anchor_x, length));
        StringShape::Wave { points }
    }

    fn effective_step(&self, length: f32) -> f32 {
        let step = if self.sample_step > 0.0 && self.sample_step.is_finite() {
            self.sample_step
        } else {
            length
        };
        step.max(length / MAX_SAMPLES as f32)
    }

    /// Endpoint marker position
    pub fn marker(&self, touch: Option<Point>, length: f32) -> Point {
        match touch {
            Some(p) => p,
            None if length.is_finite() && length > 0.0 => Point::new(self.anchor_x, length),
            None => self.anchor(),
        }
    }

    /// Path to stroke for a shape
    pub fn path(shape: &StringShape) -> Path {
        match shape {
            StringShape::Straight { from, to } => PathBuilder::new()
                .move_to(from.x, from.y)
                .line_to(to.x, to.y)
                .build(),
            StringShape::Wave { points } => match points.split_first() {
                Some((first, rest)) => PathBuilder::new()
                    .move_to(first.x, first.y)
                    .polyline(rest.iter().copied())
                    .build(),
                None => Path::new(),
            },
            StringShape::Collapsed(at) => PathBuilder::new().move_to(at.x, at.y).build(),
        }
    }

    /// Draw the string then its endpoint marker
    pub fn render(
        &self,
        ctx: &mut dyn DrawContext,
        touch: Option<Point>,
        length: f32,
        amplitude: f32,
    ) {
        let shape = self.shape(touch, length, amplitude);
        let path = Self::path(&shape);
        ctx.stroke_path(&path, self.line_color, self.stroke_width);
        ctx.fill_circle(
            self.marker(touch, length),
            self.circle_radius,
            self.circle_color,
        );
    }
}
