//! Theme state
//!
//! Holds the active scheme and its palette. A scheme change starts a
//! background cross-fade that the host advances with [`ThemeState::tick`];
//! a change mid-fade starts over from the color currently shown.

use bulbswitch_animation::{Easing, Tween};
use bulbswitch_core::Color;

use crate::palette::{ColorScheme, ThemePalette};

/// Default duration of the background cross-fade
pub const DEFAULT_TRANSITION_MS: f32 = 300.0;

#[derive(Clone, Copy, Debug)]
struct BackgroundFade {
    from: Color,
    to: Color,
    progress: Tween,
}

impl BackgroundFade {
    fn color(&self) -> Color {
        self.from.lerp(self.to, self.progress.value())
    }
}

/// The active color scheme and its palettes
#[derive(Clone, Debug)]
pub struct ThemeState {
    scheme: ColorScheme,
    light: ThemePalette,
    dark: ThemePalette,
    transition_ms: f32,
    fade: Option<BackgroundFade>,
}

impl ThemeState {
    /// Create with the built-in palettes
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            light: ThemePalette::light(),
            dark: ThemePalette::dark(),
            transition_ms: DEFAULT_TRANSITION_MS,
            fade: None,
        }
    }

    /// Replace both palettes
    pub fn with_palettes(mut self, light: ThemePalette, dark: ThemePalette) -> Self {
        self.light = light;
        self.dark = dark;
        self
    }

    /// Set the cross-fade duration; zero switches instantly
    pub fn with_transition_ms(mut self, ms: f32) -> Self {
        self.transition_ms = ms.max(0.0);
        self
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    /// Palette of the active scheme
    pub fn palette(&self) -> ThemePalette {
        match self.scheme {
            ColorScheme::Light => self.light,
            ColorScheme::Dark => self.dark,
        }
    }

    /// Background color to paint this frame
    pub fn background(&self) -> Color {
        match self.fade {
            Some(fade) => fade.color(),
            None => self.palette().background,
        }
    }

    /// Switch scheme, fading the background from what is currently shown
    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        if self.scheme == scheme {
            return;
        }
        tracing::debug!("ThemeState::set_scheme - switching from {} to {}", self.scheme, scheme);

        let from = self.background();
        self.scheme = scheme;
        let to = self.palette().background;

        self.fade = (self.transition_ms > 0.0).then(|| BackgroundFade {
            from,
            to,
            progress: Tween::new(0.0, 1.0, self.transition_ms, Easing::EaseInOut),
        });
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) {
        self.set_scheme(self.scheme.toggle());
    }

    /// Advance the cross-fade. Returns whether it is still running.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(fade) = self.fade.as_mut() else {
            return false;
        };
        fade.progress.advance(dt_ms);
        if fade.progress.is_finished() {
            tracing::trace!(scheme = %self.scheme, "theme transition finished");
            self.fade = None;
            return false;
        }
        true
    }

    pub fn is_transitioning(&self) -> bool {
        self.fade.is_some()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}
