//! A time-sliced turtle graphics engine
//!
//! Every drawing command becomes a task on a queue. A scheduler spends wall
//! clock (or caller supplied) time on the queue, animating motion at the
//! turtle's speed, and finished tasks are committed to a [`surface::Surface`]
//! supplied by the host. Composite moves like `goto`, `home` and stepped ovals
//! break themselves down into primitive tasks when they come up, and
//! recorded sequences can be replayed by any turtle in the process.
//!
//! ```rust
//! use turtle_engine::prelude::*;
//!
//! let mut turtle = Turtle::recording(400, 400, CoordMode::Display);
//! turtle.animate_off().fd(100.0).rt(90.0).fd(50.0);
//! turtle.advance(0.0);
//! let (x, y) = turtle.position();
//! assert!((x - 100.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);
//! ```

/// Defaults for new turtles, loadable from RON.
pub mod config;

/// Cursor shapes and hotspots.
pub mod cursor;

pub mod errors;

/// Font descriptor parsing and validation.
pub mod font;

/// Angle and ellipse helpers plus the coordinate modes.
pub mod geometry;

/// The process wide registry of recorded task sequences.
pub mod records;

/// The drawing surface boundary, and an in-memory surface.
pub mod surface;

/// Tasks: what they are built from and how each one runs.
pub mod task;

/// The turtle itself, its style stack and its scheduler.
pub mod turtle;

/// Everything a typical host needs in one import.
pub mod prelude {
    pub use crate::config::TurtleConfig;
    pub use crate::cursor::{Cursor, CursorShape};
    pub use crate::errors::TurtleError;
    pub use crate::geometry::CoordMode;
    pub use crate::records::{clear_records, has_record};
    pub use crate::surface::{DrawOp, LineCap, RecordingSurface, Surface, TextAlign};
    pub use crate::task::{Tint, Turning};
    pub use crate::turtle::{CursorPose, PopFlags, Turtle};
}
