//! Bulbswitch Animation System
//!
//! Scripted, time-driven interpolation for widget animations.
//!
//! # Features
//!
//! - **Tweens**: a single eased interpolation between two values
//! - **Keyframe Tracks**: ordered target values, each reached by a tween that
//!   starts from wherever the value currently is
//! - **Timelines**: several tracks advanced by one tick and joined, reporting
//!   completion once every track has finished
//! - **Frame Clock**: converts wall-clock frames into bounded tick deltas
//!
//! Everything is stepped explicitly with `tick(dt_ms)`; nothing runs on its
//! own thread.

pub mod easing;
pub mod keyframe;
pub mod scheduler;
pub mod timeline;
pub mod tween;

pub use easing::Easing;
pub use keyframe::{KeyframeTrack, KeyframeTrackBuilder};
pub use scheduler::FrameClock;
pub use timeline::{Timeline, TimelineEntryId, TimelineState};
pub use tween::Tween;
