//! Bulbswitch Widget
//!
//! A pull-string light switch: a string hangs from a bulb, the user drags its
//! free end, and on release the string swings back to rest through a damped
//! wave while its length bounces through a scripted sequence.
//!
//! The widget is frame driven. The host feeds it pointer events, calls
//! `tick` once per frame with the elapsed time, and hands it a draw surface:
//!
//! ```rust
//! use bulbswitch_core::{PointerEvent, RecordingContext};
//! use bulbswitch_widget::{BulbSwitch, StringConfig, Widget};
//!
//! let mut switch = BulbSwitch::new(StringConfig::default(), ());
//! assert!(switch.handle_event(&PointerEvent::down(100.0, 100.0)));
//! switch.handle_event(&PointerEvent::moved(130.0, 160.0));
//! switch.handle_event(&PointerEvent::up(130.0, 160.0));
//!
//! for _ in 0..120 {
//!     switch.tick(1000.0 / 60.0);
//! }
//! assert_eq!(switch.amplitude(), 0.0);
//!
//! let mut ctx = RecordingContext::new();
//! switch.render(&mut ctx);
//! assert_eq!(ctx.commands().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod gesture;
pub mod listener;
pub mod renderer;
pub mod sequencer;
pub mod switch;
pub mod widget;

pub use config::{StringConfig, SwingDirection, WaveKeyframe};
pub use error::ConfigError;
pub use gesture::{GestureTracker, GestureUpdate};
pub use listener::{SwitchCallbacks, SwitchListener};
pub use renderer::{StringRenderer, StringShape};
pub use sequencer::ReleaseSequencer;
pub use switch::BulbSwitch;
pub use widget::Widget;
