//! Easing curves
//!
//! Every polynomial curve is one power `p` used in one of three shapes:
//! accelerating (`t^p`), decelerating (the mirror image) or both, joined at
//! the halfway point. `Swing` follows half a cosine period, which matches the
//! way a hanging string slows at each turning point.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Named easing curve, as written in config files
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    Swing,
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

fn power_curve(shape: Shape, power: i32, t: f32) -> f32 {
    let rise = |x: f32| x.powi(power);
    match shape {
        Shape::In => rise(t),
        Shape::Out => 1.0 - rise(1.0 - t),
        Shape::InOut if t < 0.5 => rise(2.0 * t) / 2.0,
        Shape::InOut => 1.0 - rise(2.0 - 2.0 * t) / 2.0,
    }
}

impl Easing {
    /// Map progress in `[0, 1]` onto the curve. Out-of-range progress is
    /// clamped; both ends map exactly onto 0 and 1.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => power_curve(Shape::In, 3, t),
            Easing::EaseOut => power_curve(Shape::Out, 3, t),
            Easing::EaseInOut => power_curve(Shape::InOut, 3, t),
            Easing::EaseInQuad => power_curve(Shape::In, 2, t),
            Easing::EaseOutQuad => power_curve(Shape::Out, 2, t),
            Easing::EaseInOutQuad => power_curve(Shape::InOut, 2, t),
            Easing::Swing if t >= 1.0 => 1.0,
            Easing::Swing => (1.0 - (PI * t).cos()) / 2.0,
        }
    }

    /// Eased value between `from` and `to`
    pub fn interpolate(&self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.apply(t)
    }
}
