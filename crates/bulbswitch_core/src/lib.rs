//! Bulbswitch Core
//!
//! Foundational types shared by the bulbswitch crates:
//!
//! - **Geometry**: points and rectangles in surface coordinates (y grows down)
//! - **Colors**: RGBA colors with hex parsing for config files
//! - **Paths**: polyline/path building for stroked shapes
//! - **Draw surfaces**: the [`DrawContext`] trait a platform canvas implements,
//!   plus a [`RecordingContext`] that captures commands for tests and export
//! - **Pointer events**: the single-contact down/move/up stream widgets consume
//! - **State machines**: small flat FSMs for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use bulbswitch_core::{Color, DrawContext, PathBuilder, Point, RecordingContext};
//!
//! let mut ctx = RecordingContext::new();
//! let path = PathBuilder::new().move_to(0.0, 0.0).line_to(10.0, 20.0).build();
//! ctx.stroke_path(&path, Color::BLACK, 3.0);
//! ctx.fill_circle(Point::new(10.0, 20.0), 4.0, Color::BLACK);
//! assert_eq!(ctx.commands().len(), 2);
//! ```

pub mod color;
pub mod draw;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod path;

pub use color::{Color, ParseColorError};
pub use draw::{DrawCommand, DrawContext, RecordingContext};
pub use events::{event_types, PointerEvent, PointerKind};
pub use fsm::{EventId, StateId, StateMachine, Transition};
pub use geometry::{Point, Rect};
pub use path::{Path, PathBuilder, PathCommand};
