//! Scripted pointer input
//!
//! A gesture script is a JSON array of timed pointer changes:
//!
//! ```json
//! [
//!   { "at_ms": 0,   "kind": "down", "x": 100, "y": 100 },
//!   { "at_ms": 120, "kind": "move", "x": 130, "y": 180 },
//!   { "at_ms": 200, "kind": "up",   "x": 130, "y": 180 }
//! ]
//! ```
//!
//! `pressed` may be given explicitly; otherwise it is false for `up` and
//! true for everything else.

use anyhow::{Context, Result};
use bulbswitch_core::{Point, PointerEvent, PointerKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Reasons a gesture script is rejected
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("malformed script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("event {index} has a negative timestamp ({at_ms}ms)")]
    NegativeTime { index: usize, at_ms: f32 },

    #[error("event {index} has a non-finite timestamp or position")]
    NonFinite { index: usize },

    #[error("event {index} at {at_ms}ms comes before the previous event at {previous_ms}ms")]
    OutOfOrder {
        index: usize,
        at_ms: f32,
        previous_ms: f32,
    },
}

/// One pointer change at a point in time
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub at_ms: f32,
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed: Option<bool>,
}

impl TimedEvent {
    pub fn new(at_ms: f32, kind: PointerKind, position: Point) -> Self {
        Self {
            at_ms,
            kind,
            x: position.x,
            y: position.y,
            pressed: None,
        }
    }

    pub fn to_pointer_event(&self) -> PointerEvent {
        PointerEvent {
            kind: self.kind,
            position: Point::new(self.x, self.y),
            pressed: self.pressed.unwrap_or(self.kind != PointerKind::Up),
        }
    }
}

/// A validated, time-ordered list of pointer changes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureScript {
    events: Vec<TimedEvent>,
}

impl GestureScript {
    /// Validate events: finite, non-negative and in time order
    pub fn new(events: Vec<TimedEvent>) -> Result<Self, ScriptError> {
        let mut previous_ms = 0.0f32;
        for (index, event) in events.iter().enumerate() {
            if !(event.at_ms.is_finite() && event.x.is_finite() && event.y.is_finite()) {
                return Err(ScriptError::NonFinite { index });
            }
            if event.at_ms < 0.0 {
                return Err(ScriptError::NegativeTime {
                    index,
                    at_ms: event.at_ms,
                });
            }
            if event.at_ms < previous_ms {
                return Err(ScriptError::OutOfOrder {
                    index,
                    at_ms: event.at_ms,
                    previous_ms,
                });
            }
            previous_ms = event.at_ms;
        }
        Ok(Self { events })
    }

    pub fn from_json(text: &str) -> Result<Self, ScriptError> {
        let events: Vec<TimedEvent> = serde_json::from_str(text)?;
        Self::new(events)
    }

    /// Load a script file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid script {}", path.display()))
    }

    /// Grab the string at `endpoint`, drag it down and to the right, let go
    pub fn default_pull(endpoint: Point) -> Self {
        let drag = |t: f32| Point::new(endpoint.x + 30.0 * t, endpoint.y + 80.0 * t);
        let mut events = vec![TimedEvent::new(100.0, PointerKind::Down, endpoint)];
        events.extend((1..=6).map(|step| {
            let t = step as f32 / 6.0;
            TimedEvent::new(100.0 + 50.0 * step as f32, PointerKind::Move, drag(t))
        }));
        events.push(TimedEvent::new(450.0, PointerKind::Up, drag(1.0)));
        Self { events }
    }

    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Timestamp of the last event
    pub fn duration_ms(&self) -> f32 {
        self.events.last().map_or(0.0, |e| e.at_ms)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.events).context("Failed to serialize script")
    }
}

/// Hands out script events as simulated time passes
#[derive(Debug)]
pub struct ScriptCursor<'a> {
    events: &'a [TimedEvent],
    next: usize,
}

impl<'a> ScriptCursor<'a> {
    pub fn new(script: &'a GestureScript) -> Self {
        Self {
            events: script.events(),
            next: 0,
        }
    }

    /// Events due at or before `now_ms` that have not been handed out yet
    pub fn due(&mut self, now_ms: f32) -> &'a [TimedEvent] {
        let start = self.next;
        while self
            .events
            .get(self.next)
            .is_some_and(|e| e.at_ms <= now_ms)
        {
            self.next += 1;
        }
        &self.events[start..self.next]
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = GestureScript::from_json(
            r#"[
                { "at_ms": 0, "kind": "down", "x": 100, "y": 100 },
                { "at_ms": 50, "kind": "move", "x": 120, "y": 150 },
                { "at_ms": 80, "kind": "move", "x": 125, "y": 160, "pressed": false }
            ]"#,
        )
        .unwrap();

        assert_eq!(script.events().len(), 3);
        assert_eq!(script.duration_ms(), 80.0);
        assert!(script.events()[1].to_pointer_event().pressed);
        let last = script.events()[2].to_pointer_event();
        assert!(last.is_release());
        assert_eq!(last.position, Point::new(125.0, 160.0));
    }

    #[test]
    fn test_up_defaults_to_released() {
        let event = TimedEvent::new(0.0, PointerKind::Up, Point::ZERO);
        assert!(event.to_pointer_event().is_release());
    }

    #[test]
    fn test_rejects_out_of_order() {
        let err = GestureScript::from_json(
            r#"[
                { "at_ms": 100, "kind": "down", "x": 0, "y": 0 },
                { "at_ms": 50, "kind": "up", "x": 0, "y": 0 }
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScriptError::OutOfOrder { index: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_negative_time() {
        let err = GestureScript::new(vec![TimedEvent::new(
            -1.0,
            PointerKind::Down,
            Point::ZERO,
        )])
        .unwrap_err();
        assert!(matches!(err, ScriptError::NegativeTime { index: 0, .. }));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = GestureScript::from_json(r#"[{ "at_ms": 0, "kind": "hover" }]"#).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn test_default_pull_shape() {
        let script = GestureScript::default_pull(Point::new(100.0, 100.0));
        let events = script.events();
        assert_eq!(events.first().map(|e| e.kind), Some(PointerKind::Down));
        assert_eq!(events.last().map(|e| e.kind), Some(PointerKind::Up));
        assert_eq!(
            events.last().map(|e| Point::new(e.x, e.y)),
            Some(Point::new(130.0, 180.0))
        );
        // Still a valid script
        assert!(GestureScript::new(events.to_vec()).is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let script = GestureScript::default_pull(Point::new(50.0, 60.0));
        let text = script.to_json().unwrap();
        assert_eq!(GestureScript::from_json(&text).unwrap(), script);
    }

    #[test]
    fn test_cursor_hands_out_events_once() {
        let script = GestureScript::default_pull(Point::new(100.0, 100.0));
        let mut cursor = ScriptCursor::new(&script);

        assert!(cursor.due(99.0).is_empty());
        assert_eq!(cursor.due(100.0).len(), 1);
        assert_eq!(cursor.due(100.0).len(), 0);
        assert_eq!(cursor.due(260.0).len(), 3);
        assert!(!cursor.is_done());
        assert_eq!(cursor.due(10_000.0).len(), 4);
        assert!(cursor.is_done());
    }
}
