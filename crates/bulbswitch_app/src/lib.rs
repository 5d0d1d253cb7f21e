//! Bulbswitch host
//!
//! Runs the pull-string switch without a window: pointer input comes from a
//! gesture script, frames are ticked at a fixed rate, and the canvas can be
//! exported as SVG. Releasing the string flips the light/dark theme.

pub mod config;
pub mod script;
pub mod simulate;
pub mod svg;
pub mod toggle;

pub use config::{AppConfig, HostConfig};
pub use script::{GestureScript, ScriptCursor, ScriptError, TimedEvent};
pub use simulate::{SimulateOptions, Simulation, Summary};
pub use svg::SvgSurface;
pub use toggle::ThemeToggle;
