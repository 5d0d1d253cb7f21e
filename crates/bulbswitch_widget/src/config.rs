//! Pull-string configuration
//!
//! Geometry, keyframe sequences and visual style for one switch instance.
//! A config is fixed once the widget is built.

use bulbswitch_animation::Easing;
use bulbswitch_core::{Color, Point};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Which way a wave keyframe swings the string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum SwingDirection {
    /// Positive x
    Right,
    /// Negative x
    Left,
}

impl SwingDirection {
    pub fn sign(self) -> f32 {
        match self {
            SwingDirection::Right => 1.0,
            SwingDirection::Left => -1.0,
        }
    }
}

impl TryFrom<i32> for SwingDirection {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(SwingDirection::Right),
            -1 => Ok(SwingDirection::Left),
            other => Err(ConfigError::InvalidDirection(other)),
        }
    }
}

impl From<SwingDirection> for i32 {
    fn from(direction: SwingDirection) -> Self {
        match direction {
            SwingDirection::Right => 1,
            SwingDirection::Left => -1,
        }
    }
}

/// One swing of the release wave: out to `amplitude` in `direction`, then back
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveKeyframe {
    pub amplitude: f32,
    pub direction: SwingDirection,
}

impl WaveKeyframe {
    pub const fn new(amplitude: f32, direction: SwingDirection) -> Self {
        Self {
            amplitude,
            direction,
        }
    }

    /// Signed horizontal extreme of this swing
    pub fn peak(&self) -> f32 {
        self.amplitude * self.direction.sign()
    }
}

/// Pull-string configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringConfig {
    /// Touch position before the first gesture
    pub initial_touch_position: Point,
    /// X coordinate of the bulb the string hangs from
    pub bulb_center_x: f32,
    /// Resting string length before the first release
    pub initial_length: f32,
    /// Swings played after release, usually decreasing in amplitude
    pub wave_sequence: Vec<WaveKeyframe>,
    /// Lengths visited after release; the last one is the new resting length
    pub length_sequence: Vec<f32>,
    /// Max per-axis distance from the string end that grabs it
    pub touch_threshold: f32,
    pub stroke_width: f32,
    pub circle_radius: f32,
    pub line_color: Color,
    pub circle_color: Color,
    /// Duration of each keyframe segment
    pub step_duration_ms: f32,
    /// Vertical distance between samples of the wave curve
    pub sample_step: f32,
    pub easing: Easing,
}

impl Default for StringConfig {
    fn default() -> Self {
        Self {
            initial_touch_position: Point::new(100.0, 100.0),
            bulb_center_x: 100.0,
            initial_length: 100.0,
            wave_sequence: vec![
                WaveKeyframe::new(60.0, SwingDirection::Right),
                WaveKeyframe::new(40.0, SwingDirection::Left),
                WaveKeyframe::new(20.0, SwingDirection::Right),
                WaveKeyframe::new(10.0, SwingDirection::Left),
            ],
            length_sequence: vec![60.0, 100.0, 80.0, 100.0, 80.0, 100.0],
            touch_threshold: 50.0,
            stroke_width: 3.0,
            circle_radius: 4.0,
            line_color: Color::BLACK,
            circle_color: Color::BLACK,
            step_duration_ms: 100.0,
            sample_step: 5.0,
            easing: Easing::Linear,
        }
    }
}

impl StringConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bulb anchor x coordinate
    pub fn with_bulb_center_x(mut self, x: f32) -> Self {
        self.bulb_center_x = x;
        self
    }

    /// Set the resting length before the first release
    pub fn with_initial_length(mut self, length: f32) -> Self {
        self.initial_length = length;
        self
    }

    /// Set the wave keyframes
    pub fn with_wave_sequence(mut self, sequence: impl IntoIterator<Item = WaveKeyframe>) -> Self {
        self.wave_sequence = sequence.into_iter().collect();
        self
    }

    /// Set the length keyframes
    pub fn with_length_sequence(mut self, sequence: impl IntoIterator<Item = f32>) -> Self {
        self.length_sequence = sequence.into_iter().collect();
        self
    }

    /// Set the grab threshold
    pub fn with_touch_threshold(mut self, threshold: f32) -> Self {
        self.touch_threshold = threshold;
        self
    }

    /// Set the keyframe segment duration
    pub fn with_step_duration_ms(mut self, ms: f32) -> Self {
        self.step_duration_ms = ms;
        self
    }

    /// Set the wave sampling interval
    pub fn with_sample_step(mut self, step: f32) -> Self {
        self.sample_step = step;
        self
    }

    /// Set the string and marker colors
    pub fn with_colors(mut self, line: Color, circle: Color) -> Self {
        self.line_color = line;
        self.circle_color = circle;
        self
    }

    /// Set the segment easing
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Where the string ends when it hangs straight at `length`
    pub fn resting_endpoint(&self, length: f32) -> Point {
        Point::new(self.bulb_center_x, length)
    }

    /// Check the config for values the widget cannot draw or animate
    ///
    /// Empty sequences are accepted: that half of the release animation
    /// simply completes at once.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("initial_touch_position.x", self.initial_touch_position.x),
            ("initial_touch_position.y", self.initial_touch_position.y),
            ("bulb_center_x", self.bulb_center_x),
            ("initial_length", self.initial_length),
            ("touch_threshold", self.touch_threshold),
            ("stroke_width", self.stroke_width),
            ("circle_radius", self.circle_radius),
            ("step_duration_ms", self.step_duration_ms),
            ("sample_step", self.sample_step),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if self.wave_sequence.iter().any(|k| !k.amplitude.is_finite()) {
            return Err(ConfigError::NonFinite {
                field: "wave_sequence",
            });
        }
        if self.length_sequence.iter().any(|l| !l.is_finite()) {
            return Err(ConfigError::NonFinite {
                field: "length_sequence",
            });
        }

        if self.touch_threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.touch_threshold));
        }
        for (field, value) in [
            ("stroke_width", self.stroke_width),
            ("circle_radius", self.circle_radius),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeSize { field, value });
            }
        }
        if self.step_duration_ms <= 0.0 {
            return Err(ConfigError::InvalidStepDuration(self.step_duration_ms));
        }
        if self.sample_step <= 0.0 {
            return Err(ConfigError::InvalidSampleStep(self.sample_step));
        }

        if self.initial_length < 0.0 {
            return Err(ConfigError::NegativeLength {
                location: "initial_length".to_owned(),
                value: self.initial_length,
            });
        }
        if let Some((index, &value)) = self
            .length_sequence
            .iter()
            .enumerate()
            .find(|(_, l)| **l < 0.0)
        {
            return Err(ConfigError::NegativeLength {
                location: format!("length_sequence[{index}]"),
                value,
            });
        }

        Ok(())
    }
}
