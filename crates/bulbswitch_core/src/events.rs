//! Pointer input
//!
//! Widgets consume a single logical contact: the platform layer reduces
//! mouse, pen and touch input to a stream of down/move/up events.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Event identifiers, shared with the state machine runtime
pub mod event_types {
    use crate::fsm::EventId;

    pub const POINTER_DOWN: EventId = 1;
    pub const POINTER_UP: EventId = 2;
    pub const POINTER_MOVE: EventId = 3;
}

/// Kind of pointer change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

impl PointerKind {
    pub fn event_type(self) -> crate::fsm::EventId {
        match self {
            PointerKind::Down => event_types::POINTER_DOWN,
            PointerKind::Move => event_types::POINTER_MOVE,
            PointerKind::Up => event_types::POINTER_UP,
        }
    }
}

/// A pointer change with its position and pressed state
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    /// Whether the contact is still pressed after this change
    pub pressed: bool,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            position: Point::new(x, y),
            pressed: true,
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Point::new(x, y),
            pressed: true,
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Point::new(x, y),
            pressed: false,
        }
    }

    /// True when this change leaves no contact pressed
    pub fn is_release(&self) -> bool {
        !self.pressed
    }
}
