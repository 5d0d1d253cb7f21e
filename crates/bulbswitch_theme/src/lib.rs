//! Bulbswitch Theme
//!
//! The light/dark scheme the pull-string switch toggles, with the colors
//! each scheme uses for the background and the bulb.
//!
//! Switching schemes cross-fades the background over a short tween; the
//! bulb color changes at once.
//!
//! ```rust
//! use bulbswitch_theme::{ColorScheme, ThemeState};
//!
//! let mut theme = ThemeState::new(ColorScheme::Light);
//! theme.toggle();
//! assert_eq!(theme.scheme(), ColorScheme::Dark);
//!
//! while theme.tick(16.0) {}
//! assert_eq!(theme.background(), theme.palette().background);
//! ```

pub mod palette;
pub mod state;

pub use palette::{ColorScheme, ThemePalette};
pub use state::{ThemeState, DEFAULT_TRANSITION_MS};
