//! Gesture tracking for the string's free end
//!
//! A press only grabs the string when it lands within the touch threshold
//! of the resting endpoint on both axes. While grabbed, moves update the
//! tracked position and the release reports the last one.

use bulbswitch_core::events::event_types;
use bulbswitch_core::fsm::StateMachine;
use bulbswitch_core::{Point, PointerEvent, PointerKind};

/// Gesture states
pub mod states {
    pub const IDLE: u32 = 0;
    pub const TOUCHING: u32 = 1;
}

/// What a pointer event did to the gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureUpdate {
    /// Not claimed: outside the threshold, or no gesture in progress
    Ignored,
    /// The string was grabbed at this position
    Pulled(Point),
    /// The grabbed end moved here
    Moved(Point),
    /// The string was let go at this position
    Released(Point),
}

impl GestureUpdate {
    pub fn is_claimed(&self) -> bool {
        !matches!(self, GestureUpdate::Ignored)
    }
}

/// Single-contact press/drag/release tracker
#[derive(Clone, Debug)]
pub struct GestureTracker {
    fsm: StateMachine,
    position: Point,
    threshold: f32,
}

impl GestureTracker {
    pub fn new(initial_position: Point, threshold: f32) -> Self {
        Self {
            fsm: Self::create_fsm(),
            position: initial_position,
            threshold,
        }
    }

    fn create_fsm() -> StateMachine {
        StateMachine::builder(states::IDLE)
            .on(states::IDLE, event_types::POINTER_DOWN, states::TOUCHING)
            .on(states::TOUCHING, event_types::POINTER_MOVE, states::TOUCHING)
            .on(states::TOUCHING, event_types::POINTER_UP, states::IDLE)
            .build()
    }

    pub fn is_touching(&self) -> bool {
        self.fsm.is_in(states::TOUCHING)
    }

    /// Last recorded contact position
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed one pointer change. `resting_endpoint` is where the string's
    /// free end currently hangs.
    pub fn handle(&mut self, event: &PointerEvent, resting_endpoint: Point) -> GestureUpdate {
        if self.is_touching() {
            return self.handle_touching(event);
        }

        if event.kind != PointerKind::Down || event.is_release() {
            return GestureUpdate::Ignored;
        }
        if !event.position.within_box(resting_endpoint, self.threshold) {
            tracing::trace!(
                x = event.position.x,
                y = event.position.y,
                "press outside string threshold"
            );
            return GestureUpdate::Ignored;
        }

        self.fsm.send(event_types::POINTER_DOWN);
        self.position = event.position;
        GestureUpdate::Pulled(self.position)
    }

    fn handle_touching(&mut self, event: &PointerEvent) -> GestureUpdate {
        // Only the pressed state matters once grabbed; a stray second down
        // from the same contact is just another move.
        if event.is_release() {
            self.fsm.send(event_types::POINTER_UP);
            self.position = event.position;
            return GestureUpdate::Released(self.position);
        }

        self.fsm.send(event_types::POINTER_MOVE);
        self.position = event.position;
        GestureUpdate::Moved(self.position)
    }

    /// Drop any gesture in progress without reporting a release
    pub fn reset(&mut self) {
        self.fsm.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const END: Point = Point::new(100.0, 100.0);

    fn tracker() -> GestureTracker {
        GestureTracker::new(END, 50.0)
    }

    #[test]
    fn test_press_within_threshold_grabs() {
        let mut tracker = tracker();
        let update = tracker.handle(&PointerEvent::down(140.0, 60.0), END);
        assert_eq!(update, GestureUpdate::Pulled(Point::new(140.0, 60.0)));
        assert!(tracker.is_touching());
    }

    #[test]
    fn test_threshold_is_inclusive_per_axis() {
        let mut tracker = tracker();
        // Euclidean distance ~70.7 but each axis is exactly 50
        let update = tracker.handle(&PointerEvent::down(150.0, 150.0), END);
        assert!(update.is_claimed());
    }

    #[test]
    fn test_press_outside_threshold_is_ignored() {
        let mut tracker = tracker();
        assert_eq!(
            tracker.handle(&PointerEvent::down(151.0, 100.0), END),
            GestureUpdate::Ignored
        );
        assert_eq!(
            tracker.handle(&PointerEvent::down(100.0, 49.0), END),
            GestureUpdate::Ignored
        );
        assert!(!tracker.is_touching());
        assert_eq!(tracker.position(), END);

        // The rest of the ignored gesture stays ignored
        assert_eq!(
            tracker.handle(&PointerEvent::moved(100.0, 100.0), END),
            GestureUpdate::Ignored
        );
        assert_eq!(
            tracker.handle(&PointerEvent::up(100.0, 100.0), END),
            GestureUpdate::Ignored
        );
    }

    #[test]
    fn test_drag_and_release() {
        let mut tracker = tracker();
        tracker.handle(&PointerEvent::down(100.0, 100.0), END);

        assert_eq!(
            tracker.handle(&PointerEvent::moved(120.0, 180.0), END),
            GestureUpdate::Moved(Point::new(120.0, 180.0))
        );
        // Far from the endpoint is fine once grabbed
        assert_eq!(
            tracker.handle(&PointerEvent::moved(400.0, 300.0), END),
            GestureUpdate::Moved(Point::new(400.0, 300.0))
        );
        assert_eq!(
            tracker.handle(&PointerEvent::up(410.0, 310.0), END),
            GestureUpdate::Released(Point::new(410.0, 310.0))
        );
        assert!(!tracker.is_touching());
        assert_eq!(tracker.position(), Point::new(410.0, 310.0));
    }

    #[test]
    fn test_release_is_driven_by_pressed_flag() {
        let mut tracker = tracker();
        tracker.handle(&PointerEvent::down(100.0, 100.0), END);

        let mut lifted = PointerEvent::moved(90.0, 130.0);
        lifted.pressed = false;
        assert_eq!(
            tracker.handle(&lifted, END),
            GestureUpdate::Released(Point::new(90.0, 130.0))
        );
    }

    #[test]
    fn test_repeated_down_while_touching_moves() {
        let mut tracker = tracker();
        tracker.handle(&PointerEvent::down(100.0, 100.0), END);
        assert_eq!(
            tracker.handle(&PointerEvent::down(300.0, 300.0), END),
            GestureUpdate::Moved(Point::new(300.0, 300.0))
        );
        assert!(tracker.is_touching());
    }

    #[test]
    fn test_endpoint_follows_caller() {
        let mut tracker = tracker();
        let short = Point::new(100.0, 40.0);
        assert!(!tracker
            .handle(&PointerEvent::down(100.0, 100.0), short)
            .is_claimed());
        assert!(tracker
            .handle(&PointerEvent::down(100.0, 60.0), short)
            .is_claimed());
    }

    #[test]
    fn test_reset_drops_gesture() {
        let mut tracker = tracker();
        tracker.handle(&PointerEvent::down(100.0, 100.0), END);
        tracker.reset();
        assert!(!tracker.is_touching());
        assert_eq!(
            tracker.handle(&PointerEvent::up(100.0, 100.0), END),
            GestureUpdate::Ignored
        );
    }
}
