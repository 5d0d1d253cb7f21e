//! Frame clock
//!
//! Turns wall-clock frame boundaries into tick deltas for animations.

use std::time::{Duration, Instant};

/// Deltas longer than this are clamped so a stalled frame does not
/// fast-forward an animation past most of its keyframes.
const DEFAULT_MAX_DT_MS: f32 = 100.0;

/// Measures time between frames
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    target_fps: u32,
    max_dt_ms: f32,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            last_frame: Instant::now(),
            target_fps: target_fps.max(1),
            max_dt_ms: DEFAULT_MAX_DT_MS,
        }
    }

    pub fn set_max_dt_ms(&mut self, max_dt_ms: f32) {
        self.max_dt_ms = max_dt_ms.max(0.0);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Duration of one frame at the target rate
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps))
    }

    /// Milliseconds since the previous call (or since creation), clamped
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        dt.min(self.max_dt_ms)
    }

    /// Time left in the current frame budget
    pub fn remaining_in_frame(&self) -> Duration {
        self.frame_budget()
            .saturating_sub(self.last_frame.elapsed())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}
