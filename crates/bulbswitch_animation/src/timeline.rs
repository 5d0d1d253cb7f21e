//! Timeline orchestration for multiple keyframe tracks
//!
//! All tracks of a timeline start together and advance on the same tick.
//! The timeline finishes when the last of them does, and reports that
//! transition exactly once.

use slotmap::{new_key_type, SlotMap};

use crate::keyframe::KeyframeTrack;

new_key_type! {
    pub struct TimelineEntryId;
}

/// Lifecycle of a timeline run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimelineState {
    /// Never started, or stopped before finishing
    #[default]
    Idle,
    Playing,
    /// Every track ran to completion
    Finished,
}

/// A set of tracks played concurrently and joined on completion
#[derive(Debug, Default)]
pub struct Timeline {
    entries: SlotMap<TimelineEntryId, KeyframeTrack>,
    elapsed_ms: f32,
    state: TimelineState,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track to the timeline
    pub fn add(&mut self, track: KeyframeTrack) -> TimelineEntryId {
        self.entries.insert(track)
    }

    /// Start every track from the value it currently holds
    pub fn start(&mut self) {
        for (_, track) in self.entries.iter_mut() {
            track.start();
        }
        self.elapsed_ms = 0.0;
        self.state = TimelineState::Playing;
        tracing::trace!(tracks = self.entries.len(), "timeline started");
    }

    /// Abandon the run; tracks hold their current values
    pub fn stop(&mut self) {
        for (_, track) in self.entries.iter_mut() {
            track.stop();
        }
        if self.state == TimelineState::Playing {
            tracing::trace!(elapsed_ms = self.elapsed_ms, "timeline stopped");
        }
        self.state = TimelineState::Idle;
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == TimelineState::Playing
    }

    /// Time since the current run started
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Number of tracks still running
    pub fn active_count(&self) -> usize {
        self.entries.values().filter(|t| t.is_playing()).count()
    }

    /// Advance all tracks. Returns `true` on the tick where the last track
    /// finishes, and never again for the same run.
    ///
    /// A run whose tracks are all empty completes on its first tick.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.state != TimelineState::Playing {
            return false;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        for (_, track) in self.entries.iter_mut() {
            track.tick(dt_ms);
        }

        if self.active_count() == 0 {
            self.state = TimelineState::Finished;
            tracing::trace!(elapsed_ms = self.elapsed_ms, "timeline finished");
            return true;
        }
        false
    }

    /// Get the current value for a track
    pub fn value(&self, id: TimelineEntryId) -> Option<f32> {
        self.entries.get(id).map(KeyframeTrack::value)
    }

    pub fn track(&self, id: TimelineEntryId) -> Option<&KeyframeTrack> {
        self.entries.get(id)
    }

    pub fn track_mut(&mut self, id: TimelineEntryId) -> Option<&mut KeyframeTrack> {
        self.entries.get_mut(id)
    }

    /// Longest track duration
    pub fn duration_ms(&self) -> f32 {
        self.entries
            .values()
            .map(KeyframeTrack::duration_ms)
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tracks(short: &[f32], long: &[f32]) -> (Timeline, TimelineEntryId, TimelineEntryId) {
        let mut timeline = Timeline::new();
        let a = timeline.add(KeyframeTrack::builder().targets(short.iter().copied()).build());
        let b = timeline.add(KeyframeTrack::builder().targets(long.iter().copied()).build());
        (timeline, a, b)
    }

    #[test]
    fn test_waits_for_slowest_track() {
        let (mut timeline, a, b) = two_tracks(&[1.0], &[1.0, 2.0, 3.0]);
        timeline.start();
        assert_eq!(timeline.duration_ms(), 300.0);

        assert!(!timeline.tick(100.0));
        assert!(!timeline.track(a).unwrap().is_playing());
        assert_eq!(timeline.active_count(), 1);

        assert!(!timeline.tick(100.0));
        assert!(timeline.tick(100.0));
        assert_eq!(timeline.state(), TimelineState::Finished);
        assert_eq!(timeline.value(a), Some(1.0));
        assert_eq!(timeline.value(b), Some(3.0));
    }

    #[test]
    fn test_completion_reported_once() {
        let (mut timeline, _, _) = two_tracks(&[1.0], &[2.0]);
        timeline.start();
        assert!(timeline.tick(500.0));
        assert!(!timeline.tick(16.0));
        assert!(!timeline.tick(16.0));
    }

    #[test]
    fn test_stop_prevents_completion() {
        let (mut timeline, a, _) = two_tracks(&[10.0], &[10.0]);
        timeline.start();
        timeline.tick(50.0);
        timeline.stop();
        assert_eq!(timeline.state(), TimelineState::Idle);
        assert!(!timeline.tick(1_000.0));
        assert_eq!(timeline.value(a), Some(5.0));
    }

    #[test]
    fn test_empty_tracks_complete_on_first_tick() {
        let (mut timeline, _, _) = two_tracks(&[], &[]);
        timeline.start();
        assert!(timeline.is_playing());
        assert!(timeline.tick(0.0));
    }

    #[test]
    fn test_elapsed_tracks_run_time() {
        let (mut timeline, _, _) = two_tracks(&[1.0], &[1.0]);
        assert!(!timeline.tick(10.0));
        assert_eq!(timeline.elapsed_ms(), 0.0);
        timeline.start();
        timeline.tick(40.0);
        assert_eq!(timeline.elapsed_ms(), 40.0);
    }
}
