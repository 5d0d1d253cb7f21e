//! Pull-string switch widget
//!
//! Ties the gesture tracker, release sequencer and renderer together and
//! reports pulls to a [`SwitchListener`].

use bulbswitch_core::{DrawContext, Point, PointerEvent};

use crate::config::StringConfig;
use crate::error::Result;
use crate::gesture::{GestureTracker, GestureUpdate};
use crate::listener::SwitchListener;
use crate::renderer::StringRenderer;
use crate::sequencer::ReleaseSequencer;
use crate::widget::Widget;

/// Pull-string light switch
pub struct BulbSwitch<L = ()> {
    config: StringConfig,
    gesture: GestureTracker,
    sequencer: ReleaseSequencer,
    renderer: StringRenderer,
    listener: L,
}

impl<L: SwitchListener> BulbSwitch<L> {
    /// Create a switch. The config is used as given; see [`Self::try_new`].
    pub fn new(config: StringConfig, listener: L) -> Self {
        Self {
            gesture: GestureTracker::new(config.initial_touch_position, config.touch_threshold),
            sequencer: ReleaseSequencer::new(&config),
            renderer: StringRenderer::from_config(&config),
            config,
            listener,
        }
    }

    /// Create a switch after validating the config
    pub fn try_new(config: StringConfig, listener: L) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config, listener))
    }

    pub fn config(&self) -> &StringConfig {
        &self.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consume the switch, returning its listener
    pub fn into_listener(self) -> L {
        self.listener
    }

    pub fn is_touching(&self) -> bool {
        self.gesture.is_touching()
    }

    /// Last recorded contact position
    pub fn touch_position(&self) -> Point {
        self.gesture.position()
    }

    /// Current wave amplitude
    pub fn amplitude(&self) -> f32 {
        self.sequencer.amplitude()
    }

    /// Current string length
    pub fn length(&self) -> f32 {
        self.sequencer.length()
    }

    /// Where a press must land (within the threshold) to grab the string.
    /// Follows the settled length, so it does not move during a release run.
    pub fn resting_endpoint(&self) -> Point {
        self.config.resting_endpoint(self.sequencer.settled_length())
    }

    pub fn renderer(&self) -> &StringRenderer {
        &self.renderer
    }
}

impl<L: SwitchListener> Widget for BulbSwitch<L> {
    fn handle_event(&mut self, event: &PointerEvent) -> bool {
        let endpoint = self.resting_endpoint();
        match self.gesture.handle(event, endpoint) {
            GestureUpdate::Ignored => false,
            GestureUpdate::Pulled(position) => {
                if self.sequencer.cancel() {
                    tracing::debug!("pull interrupted release animation");
                }
                tracing::debug!(x = position.x, y = position.y, "string pulled");
                self.listener.on_pull(position);
                true
            }
            GestureUpdate::Moved(_) => true,
            GestureUpdate::Released(position) => {
                tracing::debug!(x = position.x, y = position.y, "string released");
                self.listener.on_release(position);
                self.sequencer.start();
                true
            }
        }
    }

    fn tick(&mut self, dt_ms: f32) {
        if self.sequencer.tick(dt_ms) {
            self.listener.on_end_release();
            self.sequencer.settle_wave();
        }
    }

    fn render(&self, ctx: &mut dyn DrawContext) {
        let touch = self.is_touching().then(|| self.touch_position());
        self.renderer
            .render(ctx, touch, self.sequencer.length(), self.sequencer.amplitude());
    }

    fn is_animating(&self) -> bool {
        self.sequencer.is_animating()
    }
}

impl<L> std::fmt::Debug for BulbSwitch<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BulbSwitch")
            .field("gesture", &self.gesture)
            .field("sequencer", &self.sequencer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use bulbswitch_core::{DrawCommand, RecordingContext};

    #[derive(Debug, Default, PartialEq)]
    struct Counts {
        pulls: u32,
        releases: u32,
        ends: u32,
    }

    impl SwitchListener for Counts {
        fn on_pull(&mut self, _: Point) {
            self.pulls += 1;
        }

        fn on_release(&mut self, _: Point) {
            self.releases += 1;
        }

        fn on_end_release(&mut self) {
            self.ends += 1;
        }
    }

    #[test]
    fn test_switch_creation() {
        let switch = BulbSwitch::new(StringConfig::default(), Counts::default());
        assert!(!switch.is_touching());
        assert!(!switch.is_animating());
        assert_eq!(switch.length(), 100.0);
        assert_eq!(switch.amplitude(), 0.0);
        assert_eq!(switch.touch_position(), Point::new(100.0, 100.0));
        assert_eq!(switch.resting_endpoint(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_idle_until_first_release() {
        let mut switch = BulbSwitch::new(StringConfig::default(), Counts::default());
        for _ in 0..100 {
            switch.tick(10.0);
        }
        assert!(!switch.is_animating());
        assert_eq!(*switch.listener(), Counts::default());
        assert_eq!(switch.length(), 100.0);
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let config = StringConfig::default().with_step_duration_ms(0.0);
        let err = BulbSwitch::try_new(config, ()).unwrap_err();
        assert_eq!(err, ConfigError::InvalidStepDuration(0.0));
    }

    #[test]
    fn test_full_cycle() {
        let mut switch = BulbSwitch::new(StringConfig::default(), Counts::default());

        assert!(switch.handle_event(&PointerEvent::down(110.0, 90.0)));
        assert!(switch.is_touching());
        assert!(switch.handle_event(&PointerEvent::moved(120.0, 200.0)));
        assert!(switch.handle_event(&PointerEvent::up(120.0, 200.0)));
        assert!(!switch.is_touching());
        assert!(switch.is_animating());
        assert_eq!(
            *switch.listener(),
            Counts {
                pulls: 1,
                releases: 1,
                ends: 0
            }
        );

        for _ in 0..79 {
            switch.tick(10.0);
        }
        assert_eq!(switch.listener().ends, 0);
        switch.tick(10.0);
        assert_eq!(switch.listener().ends, 1);
        assert!(!switch.is_animating());
        assert_eq!(switch.amplitude(), 0.0);
        assert_eq!(switch.length(), 100.0);

        for _ in 0..10 {
            switch.tick(10.0);
        }
        assert_eq!(switch.listener().ends, 1);
    }

    #[test]
    fn test_ignored_press_has_no_effect() {
        let mut switch = BulbSwitch::new(StringConfig::default(), Counts::default());
        assert!(!switch.handle_event(&PointerEvent::down(300.0, 100.0)));
        assert!(!switch.handle_event(&PointerEvent::up(300.0, 100.0)));
        assert_eq!(*switch.listener(), Counts::default());
        assert!(!switch.is_animating());
    }

    #[test]
    fn test_render_while_touching() {
        let mut switch = BulbSwitch::new(StringConfig::default(), ());
        switch.handle_event(&PointerEvent::down(100.0, 100.0));
        switch.handle_event(&PointerEvent::moved(150.0, 120.0));

        let mut ctx = RecordingContext::new();
        switch.render(&mut ctx);
        let points: Vec<Point> = ctx.stroked_path().unwrap().points().collect();
        assert_eq!(points, vec![Point::new(100.0, 0.0), Point::new(150.0, 120.0)]);
        assert_eq!(ctx.circle_center(), Some(Point::new(150.0, 120.0)));
        assert!(matches!(ctx.commands()[0], DrawCommand::StrokePath { .. }));
    }

    #[test]
    fn test_grab_at_rest_point_during_release() {
        let config = StringConfig::default().with_length_sequence([300.0, 100.0]);
        let mut switch = BulbSwitch::new(config, Counts::default());
        switch.handle_event(&PointerEvent::down(100.0, 100.0));
        switch.handle_event(&PointerEvent::up(100.0, 100.0));

        for _ in 0..8 {
            switch.tick(10.0);
        }
        assert!((switch.length() - 260.0).abs() < 1e-3);
        assert_eq!(switch.resting_endpoint(), Point::new(100.0, 100.0));

        assert!(switch.handle_event(&PointerEvent::down(100.0, 100.0)));
        assert!(switch.is_touching());
        assert_eq!(switch.listener().pulls, 2);
    }

    #[test]
    fn test_into_listener() {
        let mut switch = BulbSwitch::new(StringConfig::default(), Counts::default());
        switch.handle_event(&PointerEvent::down(100.0, 100.0));
        assert_eq!(switch.into_listener().pulls, 1);
    }
}
