//! Release animation
//!
//! After a release the string runs two keyframe tracks side by side: the
//! length bounces through the configured lengths while the wave amplitude
//! swings out and back for every wave keyframe. The run completes once both
//! tracks have finished.

use bulbswitch_animation::{KeyframeTrack, Timeline, TimelineEntryId};

use crate::config::StringConfig;

/// Drives the animated length and wave amplitude of the string
#[derive(Debug)]
pub struct ReleaseSequencer {
    timeline: Timeline,
    length: TimelineEntryId,
    wave: TimelineEntryId,
    /// Length held when no run is in flight
    settled_length: f32,
    /// Completed runs, for diagnostics
    completed: u64,
}

impl ReleaseSequencer {
    pub fn new(config: &StringConfig) -> Self {
        let length_track = KeyframeTrack::builder()
            .initial(config.initial_length)
            .targets(config.length_sequence.iter().copied())
            .segment_ms(config.step_duration_ms)
            .ease(config.easing)
            .build();

        let wave_track = KeyframeTrack::builder()
            .initial(0.0)
            .targets(config.wave_sequence.iter().flat_map(|k| [k.peak(), 0.0]))
            .segment_ms(config.step_duration_ms)
            .ease(config.easing)
            .build();

        let mut timeline = Timeline::new();
        let length = timeline.add(length_track);
        let wave = timeline.add(wave_track);

        Self {
            timeline,
            length,
            wave,
            settled_length: config.initial_length,
            completed: 0,
        }
    }

    /// Start a run from the current length and amplitude
    pub fn start(&mut self) {
        self.timeline.start();
        tracing::debug!(
            length = self.length(),
            amplitude = self.amplitude(),
            duration_ms = self.timeline.duration_ms(),
            "release animation started"
        );
    }

    /// Abandon a run in flight. Returns whether one was interrupted.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.timeline.is_playing();
        self.timeline.stop();
        if was_running {
            self.settled_length = self.length();
            tracing::debug!(
                elapsed_ms = self.timeline.elapsed_ms(),
                "release animation cancelled"
            );
        }
        was_running
    }

    /// Advance the run. Returns `true` exactly once, on the tick where both
    /// tracks have finished.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.timeline.tick(dt_ms) {
            return false;
        }
        self.completed += 1;
        self.settled_length = self.length();
        tracing::debug!(
            elapsed_ms = self.timeline.elapsed_ms(),
            length = self.length(),
            runs = self.completed,
            "release animation finished"
        );
        true
    }

    /// Force the wave amplitude to exactly zero
    pub fn settle_wave(&mut self) {
        if let Some(track) = self.timeline.track_mut(self.wave) {
            track.snap_to(0.0);
        }
    }

    pub fn amplitude(&self) -> f32 {
        self.timeline.value(self.wave).unwrap_or(0.0)
    }

    pub fn length(&self) -> f32 {
        self.timeline.value(self.length).unwrap_or(0.0)
    }

    /// Length at the end of the last run, or where a cancelled run stopped.
    /// Unchanged while a run is in flight.
    pub fn settled_length(&self) -> f32 {
        self.settled_length
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_playing()
    }

    /// Time since the current or last run started
    pub fn elapsed_ms(&self) -> f32 {
        self.timeline.elapsed_ms()
    }

    /// Number of runs that reached completion
    pub fn completed_runs(&self) -> u64 {
        self.completed
    }
}
