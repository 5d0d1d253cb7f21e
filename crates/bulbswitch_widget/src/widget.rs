//! Base widget trait

use bulbswitch_core::{DrawContext, PointerEvent};

/// A frame-driven widget
pub trait Widget {
    /// Handle a pointer event. Returns whether the widget claimed it.
    fn handle_event(&mut self, event: &PointerEvent) -> bool;

    /// Advance animations by delta time (in milliseconds)
    fn tick(&mut self, dt_ms: f32);

    /// Draw the current state
    fn render(&self, ctx: &mut dyn DrawContext);

    /// Whether the widget still needs ticks to settle
    fn is_animating(&self) -> bool {
        false
    }
}
