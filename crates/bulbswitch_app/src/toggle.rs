//! Switch listener that flips the app theme

use bulbswitch_core::Point;
use bulbswitch_theme::{ColorScheme, ThemeState};
use bulbswitch_widget::SwitchListener;
use tracing::info;

/// Toggles the color scheme on every release and counts callbacks
#[derive(Debug, Default)]
pub struct ThemeToggle {
    theme: ThemeState,
    pulls: u32,
    releases: u32,
    completions: u32,
}

impl ThemeToggle {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            theme: ThemeState::new(scheme),
            ..Default::default()
        }
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeState {
        &mut self.theme
    }

    pub fn pulls(&self) -> u32 {
        self.pulls
    }

    pub fn releases(&self) -> u32 {
        self.releases
    }

    /// Release animations that ran to completion
    pub fn completions(&self) -> u32 {
        self.completions
    }
}

impl SwitchListener for ThemeToggle {
    fn on_pull(&mut self, position: Point) {
        self.pulls += 1;
        info!(x = position.x, y = position.y, "pull started");
    }

    fn on_release(&mut self, position: Point) {
        self.releases += 1;
        self.theme.toggle();
        info!(
            x = position.x,
            y = position.y,
            scheme = %self.theme.scheme(),
            "string released"
        );
    }

    fn on_end_release(&mut self) {
        self.completions += 1;
        info!(completions = self.completions, "release animation ended");
    }
}
