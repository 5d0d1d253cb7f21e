//! Single-segment interpolation

use crate::easing::Easing;

/// An eased interpolation from one value to another over a fixed duration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    finished: bool,
    easing: Easing,
}

impl Tween {
    /// A non-positive duration makes the tween finish on its first advance.
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            finished: false,
            easing,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Progress through the tween (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.finished {
            1.0
        } else if self.duration_ms <= 0.0 {
            0.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// Current interpolated value; exactly `to` once finished
    pub fn value(&self) -> f32 {
        if self.finished {
            return self.to;
        }
        self.easing.interpolate(self.from, self.to, self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt_ms`, returning the time left over past the end
    pub fn advance(&mut self, dt_ms: f32) -> f32 {
        if self.finished {
            return dt_ms.max(0.0);
        }
        let dt_ms = dt_ms.max(0.0);
        let remaining = self.duration_ms - self.elapsed_ms;
        if dt_ms >= remaining {
            self.elapsed_ms = self.duration_ms;
            self.finished = true;
            dt_ms - remaining
        } else {
            self.elapsed_ms += dt_ms;
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_interpolation() {
        let mut tween = Tween::new(100.0, 60.0, 100.0, Easing::Linear);
        assert_eq!(tween.value(), 100.0);

        assert_eq!(tween.advance(25.0), 0.0);
        assert!((tween.value() - 90.0).abs() < 1e-4);
        assert!(!tween.is_finished());

        assert_eq!(tween.advance(75.0), 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 60.0);
    }

    #[test]
    fn test_overshoot_returns_leftover() {
        let mut tween = Tween::new(0.0, 1.0, 100.0, Easing::Linear);
        tween.advance(90.0);
        let leftover = tween.advance(16.0);
        assert!((leftover - 6.0).abs() < 1e-4);
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_advance() {
        let mut tween = Tween::new(5.0, 7.0, 0.0, Easing::Linear);
        assert!(!tween.is_finished());
        assert_eq!(tween.value(), 5.0);
        assert_eq!(tween.advance(0.0), 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 7.0);
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut tween = Tween::new(0.0, 10.0, 100.0, Easing::Linear);
        tween.advance(50.0);
        tween.advance(-20.0);
        assert!((tween.value() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_finished_tween_passes_time_through() {
        let mut tween = Tween::new(0.0, 10.0, 10.0, Easing::Linear);
        tween.advance(10.0);
        assert_eq!(tween.advance(4.0), 4.0);
    }
}
