//! Keyframe tracks
//!
//! A track visits an ordered list of target values. Each segment tweens from
//! the value the track currently holds, so a track restarted mid-flight
//! continues smoothly from wherever it was left.

use crate::easing::Easing;
use crate::tween::Tween;

/// Default duration of a single keyframe segment
pub const DEFAULT_SEGMENT_MS: f32 = 100.0;

/// A sequence of target values reached one after another
#[derive(Clone, Debug)]
pub struct KeyframeTrack {
    targets: Vec<f32>,
    segment_ms: f32,
    easing: Easing,
    /// Index of the target the active tween is heading to
    index: usize,
    tween: Option<Tween>,
    value: f32,
    playing: bool,
}

impl KeyframeTrack {
    /// Create a new builder
    pub fn builder() -> KeyframeTrackBuilder {
        KeyframeTrackBuilder::new()
    }

    /// Start from the currently held value
    pub fn start(&mut self) {
        self.start_from(self.value);
    }

    /// Start the sequence from `value`
    ///
    /// An empty track finishes immediately and keeps `value`.
    pub fn start_from(&mut self, value: f32) {
        self.value = value;
        self.index = 0;
        self.tween = self
            .targets
            .first()
            .map(|&target| Tween::new(value, target, self.segment_ms, self.easing));
        self.playing = self.tween.is_some();
    }

    /// Abandon the sequence, holding the current value
    pub fn stop(&mut self) {
        self.tween = None;
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current value; defined whether or not the track is playing
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Stop and jump to `value`
    pub fn snap_to(&mut self, value: f32) {
        self.stop();
        self.value = value;
    }

    /// Index of the keyframe currently being approached
    pub fn current_keyframe(&self) -> Option<usize> {
        self.playing.then_some(self.index)
    }

    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    /// Duration of a full run through every keyframe
    pub fn duration_ms(&self) -> f32 {
        self.targets.len() as f32 * self.segment_ms
    }

    /// Advance by delta time (in milliseconds)
    ///
    /// Time left over when a segment ends flows into the next one, so the
    /// total running time does not depend on frame size.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        let mut dt = dt_ms;
        while let Some(tween) = self.tween.as_mut() {
            let leftover = tween.advance(dt);
            self.value = tween.value();
            if !tween.is_finished() {
                return;
            }

            self.index += 1;
            match self.targets.get(self.index) {
                Some(&target) => {
                    self.tween = Some(Tween::new(self.value, target, self.segment_ms, self.easing));
                    dt = leftover;
                }
                None => {
                    tracing::trace!(value = self.value, "keyframe track finished");
                    self.tween = None;
                    self.playing = false;
                }
            }
        }
    }
}

/// Builder for [`KeyframeTrack`]
///
/// ```rust
/// use bulbswitch_animation::{Easing, KeyframeTrack};
///
/// let mut track = KeyframeTrack::builder()
///     .initial(100.0)
///     .target(60.0)
///     .target(100.0)
///     .segment_ms(100.0)
///     .ease(Easing::Linear)
///     .build();
///
/// track.start();
/// track.tick(150.0);
/// assert!((track.value() - 80.0).abs() < 1e-3);
/// ```
#[derive(Clone, Debug)]
pub struct KeyframeTrackBuilder {
    targets: Vec<f32>,
    segment_ms: f32,
    easing: Easing,
    initial: f32,
}

impl Default for KeyframeTrackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyframeTrackBuilder {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            segment_ms: DEFAULT_SEGMENT_MS,
            easing: Easing::Linear,
            initial: 0.0,
        }
    }

    /// Append one target value
    pub fn target(mut self, value: f32) -> Self {
        self.targets.push(value);
        self
    }

    /// Append several target values
    pub fn targets(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.targets.extend(values);
        self
    }

    /// Duration of each segment
    pub fn segment_ms(mut self, ms: f32) -> Self {
        self.segment_ms = ms;
        self
    }

    /// Easing applied to every segment
    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Value held before the first start
    pub fn initial(mut self, value: f32) -> Self {
        self.initial = value;
        self
    }

    pub fn build(self) -> KeyframeTrack {
        KeyframeTrack {
            targets: self.targets,
            segment_ms: self.segment_ms.max(0.0),
            easing: self.easing,
            index: 0,
            tween: None,
            value: self.initial,
            playing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(initial: f32, targets: &[f32]) -> KeyframeTrack {
        KeyframeTrack::builder()
            .initial(initial)
            .targets(targets.iter().copied())
            .build()
    }

    #[test]
    fn test_visits_targets_in_order() {
        let mut track = track(100.0, &[60.0, 100.0]);
        track.start();
        assert!(track.is_playing());
        assert_eq!(track.current_keyframe(), Some(0));

        track.tick(50.0);
        assert!((track.value() - 80.0).abs() < 1e-4);

        track.tick(50.0);
        assert_eq!(track.value(), 60.0);
        assert_eq!(track.current_keyframe(), Some(1));

        track.tick(50.0);
        assert!((track.value() - 80.0).abs() < 1e-4);

        track.tick(50.0);
        assert_eq!(track.value(), 100.0);
        assert!(!track.is_playing());
    }

    #[test]
    fn test_leftover_time_carries_into_next_segment() {
        let mut track = track(0.0, &[10.0, 0.0]);
        track.start();
        track.tick(130.0);
        // 100ms to reach 10, then 30ms of the way back down
        assert!((track.value() - 7.0).abs() < 1e-4);
        track.tick(70.0);
        assert_eq!(track.value(), 0.0);
        assert!(!track.is_playing());
    }

    #[test]
    fn test_single_large_tick_completes_everything() {
        let mut track = track(100.0, &[60.0, 100.0, 80.0, 100.0]);
        track.start();
        track.tick(10_000.0);
        assert!(!track.is_playing());
        assert_eq!(track.value(), 100.0);
    }

    #[test]
    fn test_empty_track_finishes_immediately() {
        let mut track = track(42.0, &[]);
        track.start();
        assert!(!track.is_playing());
        assert_eq!(track.value(), 42.0);
        assert_eq!(track.duration_ms(), 0.0);
    }

    #[test]
    fn test_stop_holds_value_and_restart_continues_from_it() {
        let mut track = track(100.0, &[60.0, 100.0]);
        track.start();
        track.tick(50.0);
        track.stop();
        assert!(!track.is_playing());
        let held = track.value();
        assert!((held - 80.0).abs() < 1e-4);

        track.tick(50.0);
        assert_eq!(track.value(), held);

        track.start();
        track.tick(50.0);
        // Halfway from 80 toward 60
        assert!((track.value() - 70.0).abs() < 1e-4);
    }

    #[test]
    fn test_snap_to() {
        let mut track = track(0.0, &[60.0, 0.0]);
        track.start();
        track.tick(33.0);
        track.snap_to(0.0);
        assert_eq!(track.value(), 0.0);
        assert!(!track.is_playing());
    }

    #[test]
    fn test_zero_segment_duration_jumps_to_last_target() {
        let mut track = KeyframeTrack::builder()
            .targets([1.0, 2.0, 3.0])
            .segment_ms(0.0)
            .build();
        track.start();
        track.tick(0.0);
        assert_eq!(track.value(), 3.0);
        assert!(!track.is_playing());
    }
}
