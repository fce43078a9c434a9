//! Units of work for the turtle's queue.
//!
//! Every [`Task`] is built from an [`Op`], which holds nothing but the
//! arguments the caller supplied. Anything derived from the turtle (start
//! position, captured pen, ellipse centre, ...) is worked out the first time
//! the task reaches the head of the queue and kept separately, so a record
//! can replay its ops against whatever state the turtle is in at the time.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use kurbo::Vec2;

use crate::cursor::Cursor;
use crate::surface::{LineCap, Surface, TextAlign};
use crate::turtle::{PopFlags, Turtle};

pub mod composite;
pub mod marker;
pub mod motion;
pub mod queue;
pub mod stamp;

pub use queue::TaskQueue;

use marker::FillRun;
use motion::{ArcRun, MoveRun, TurnRun};
use stamp::{ArrowRun, DotRun, WriteRun};

/// Where a task is in its life. Only the head of the queue is ever anything
/// but `Waiting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Waiting,
    Ready,
    Done,
}

/// Which way to turn. `Nearest` picks the shortest way round and is only
/// meaningful for turns to an absolute heading.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turning {
    Left,
    Nearest,
    #[default]
    Right,
}

impl Turning {
    /// -1 for left, +1 for right, 0 for nearest. Right is clockwise on a
    /// y-down screen.
    pub fn sign(&self) -> f64 {
        match self {
            Turning::Left => -1.0,
            Turning::Nearest => 0.0,
            Turning::Right => 1.0,
        }
    }

    pub fn opposite(&self) -> Turning {
        match self {
            Turning::Left => Turning::Right,
            Turning::Nearest => Turning::Nearest,
            Turning::Right => Turning::Left,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Absolute,
    Relative,
}

/// A colour for a stamp, or "whatever the turtle is using when the stamp is
/// made".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub enum Tint {
    #[default]
    Current,
    Color(String),
}

impl Tint {
    pub fn resolve(&self, current: &str) -> String {
        match self {
            Tint::Current => current.to_string(),
            Tint::Color(color) => color.clone(),
        }
    }
}

impl From<&str> for Tint {
    fn from(color: &str) -> Self {
        if color.eq_ignore_ascii_case("current") {
            Tint::Current
        } else {
            Tint::Color(color.to_string())
        }
    }
}

/// A single turtle attribute to overwrite when the task runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// Radians, pen space.
    Heading(f64),
    PenDown(bool),
    PenSize(f64),
    Dash(Vec<f64>),
    DashOffset(f64),
    Cap(LineCap),
    PenColor(String),
    FillColor(String),
    Cursor(Cursor),
    Visible(bool),
    Tilt(Option<f64>),
    LinearSpeed(f64),
    AngularSpeed(f64),
    Animate(bool),
    Font(String),
}

impl Attribute {
    pub fn apply(&self, turtle: &mut Turtle) {
        let style = &mut turtle.style;
        match self {
            Attribute::Heading(a) => turtle.heading = *a,
            Attribute::PenDown(down) => style.pen_down = *down,
            Attribute::PenSize(size) => style.pen_size = *size,
            Attribute::Dash(dash) => style.dash = dash.clone(),
            Attribute::DashOffset(offset) => style.dash_offset = *offset,
            Attribute::Cap(cap) => style.cap = *cap,
            Attribute::PenColor(color) => style.pen_color = color.clone(),
            Attribute::FillColor(color) => style.fill_color = color.clone(),
            Attribute::Cursor(cursor) => turtle.cursor = *cursor,
            Attribute::Visible(visible) => style.visible = *visible,
            Attribute::Tilt(tilt) => style.tilt = *tilt,
            Attribute::LinearSpeed(speed) => style.linear_speed = *speed,
            Attribute::AngularSpeed(speed) => style.angular_speed = *speed,
            Attribute::Animate(animate) => style.animate = *animate,
            Attribute::Font(font) => turtle.font = font.clone(),
        }
    }
}

/// The closure signature for [`Op::DoFunction`]: the turtle running the
/// task, plus whatever data was queued alongside the closure.
pub type Action = dyn Fn(&mut Turtle, &[ron::Value]) + Send + Sync;

/// A user callback. Clones share the same closure.
#[derive(Clone)]
pub struct Callback(Arc<Action>);

impl Callback {
    pub fn new<F>(action: F) -> Callback
    where
        F: Fn(&mut Turtle, &[ron::Value]) + Send + Sync + 'static,
    {
        Callback(Arc::new(action))
    }

    pub fn call(&self, turtle: &mut Turtle, data: &[ron::Value]) {
        (self.0)(turtle, data)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Callback")
    }
}

/// Construction arguments for every kind of task. Angles are radians and
/// coordinates are whatever the caller passed in; nothing here depends on
/// turtle state.
#[derive(Debug, Clone)]
pub enum Op {
    Set(Attribute),
    /// Turn by `angle`, or with `Turning::Nearest` turn to face `angle`.
    Turn {
        angle: f64,
        turning: Turning,
    },
    /// Negative distances move backwards.
    Move {
        distance: f64,
    },
    Arc {
        ra: f64,
        rb: f64,
        extent: f64,
        turning: Turning,
    },
    Oval {
        ra: f64,
        rb: f64,
        extent: f64,
        turning: Turning,
        steps: u32,
    },
    Bend {
        distance: f64,
        height: f64,
        side: Turning,
        keep_heading: bool,
        steps: u32,
    },
    Home,
    GoTo {
        placement: Placement,
        x: f64,
        y: f64,
    },
    /// Jump without drawing. Non-finite components keep the current
    /// coordinate.
    Teleport {
        placement: Placement,
        x: f64,
        y: f64,
        fill_gap: bool,
    },
    Dot {
        size: f64,
        fill: Tint,
        border_weight: f64,
        border: Tint,
    },
    Arrow {
        size: f64,
        fill: Tint,
        border_weight: f64,
        border: Tint,
    },
    Write {
        text: String,
        align: TextAlign,
        advance: bool,
        font: Option<String>,
    },
    PushPen,
    PopPen(PopFlags),
    BeginFill,
    EndFill {
        close: bool,
    },
    BeginPoly,
    EndPoly(String),
    BeginRecord,
    EndRecord(String),
    DoRecord(String),
    Clear,
    Reset,
    Snapshot(String),
    /// Milliseconds.
    Sleep(f64),
    DoFunction {
        callback: Callback,
        data: Vec<ron::Value>,
    },
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Set(_) => "set",
            Op::Turn { .. } => "turn",
            Op::Move { .. } => "move",
            Op::Arc { .. } => "arc",
            Op::Oval { .. } => "oval",
            Op::Bend { .. } => "bend",
            Op::Home => "home",
            Op::GoTo { .. } => "goto",
            Op::Teleport { .. } => "teleport",
            Op::Dot { .. } => "dot",
            Op::Arrow { .. } => "arrow",
            Op::Write { .. } => "write",
            Op::PushPen => "push_pen",
            Op::PopPen(_) => "pop_pen",
            Op::BeginFill => "begin_fill",
            Op::EndFill { .. } => "end_fill",
            Op::BeginPoly => "begin_poly",
            Op::EndPoly(_) => "end_poly",
            Op::BeginRecord => "begin_record",
            Op::EndRecord(_) => "end_record",
            Op::DoRecord(_) => "do_record",
            Op::Clear => "clear",
            Op::Reset => "reset",
            Op::Snapshot(_) => "snapshot",
            Op::Sleep(_) => "sleep",
            Op::DoFunction { .. } => "do_function",
        }
    }
}

/// Outcome of advancing a task by some time budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Progress {
    /// Still going, the whole budget was used.
    Running,
    /// Finished with this much of the budget left over.
    Done(f64),
}

/// State derived when a task starts.
#[derive(Debug, Clone, Default)]
pub(crate) enum Run {
    #[default]
    Idle,
    Instant,
    Turn(TurnRun),
    Move(MoveRun),
    Arc(ArcRun),
    Sleep(f64),
    Fill(FillRun),
    Dot(DotRun),
    Arrow(ArrowRun),
    Write(WriteRun),
}

impl Run {
    fn advance(&mut self, turtle: &mut Turtle, time: f64) -> Progress {
        match self {
            Run::Turn(run) => run.advance(turtle, time),
            Run::Move(run) => run.advance(turtle, time),
            Run::Arc(run) => run.advance(turtle, time),
            Run::Sleep(remaining) => {
                if !turtle.style.animate || time >= *remaining {
                    let left = if turtle.style.animate {
                        time - *remaining
                    } else {
                        time
                    };
                    *remaining = 0.0;
                    Progress::Done(left)
                } else {
                    *remaining -= time;
                    Progress::Running
                }
            }
            _ => Progress::Done(time),
        }
    }

    fn render(&self, surface: &mut dyn Surface, offset: Vec2) {
        match self {
            Run::Move(run) => run.render(surface, offset),
            Run::Arc(run) => run.render(surface, offset),
            Run::Fill(run) => run.render(surface, offset),
            Run::Dot(run) => run.render(surface, offset),
            Run::Arrow(run) => run.render(surface, offset),
            Run::Write(run) => run.render(surface, offset),
            _ => (),
        }
    }
}

/// # Task
///
/// One queued unit of work: an [`Op`] plus its lifecycle status and the
/// state it derived when it started.
#[derive(Debug, Clone)]
pub struct Task {
    status: Status,
    op: Op,
    run: Run,
}

impl Task {
    pub fn new(op: Op) -> Task {
        Task {
            status: Status::Waiting,
            op,
            run: Run::Idle,
        }
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// Spend up to `time` milliseconds on this task and return what is left.
    /// The first call derives the task's runtime state from the turtle.
    pub fn perform(&mut self, turtle: &mut Turtle, time: f64) -> f64 {
        if self.status == Status::Waiting {
            self.run = self.start(turtle);
            self.status = Status::Ready;
        }
        match self.run.advance(turtle, time) {
            Progress::Running => 0.0,
            Progress::Done(left) => {
                self.status = Status::Done;
                left
            }
        }
    }

    /// Draw whatever this task has produced so far, shifted by
    /// (`off_x`, `off_y`). Unstarted tasks draw nothing.
    pub fn render(&self, surface: &mut dyn Surface, off_x: f64, off_y: f64) {
        self.run.render(surface, Vec2::new(off_x, off_y));
    }

    fn start(&self, turtle: &mut Turtle) -> Run {
        match &self.op {
            Op::Set(attribute) => {
                turtle.record(&self.op);
                attribute.apply(turtle);
                Run::Instant
            }
            Op::Turn { angle, turning } => {
                turtle.record(&self.op);
                Run::Turn(TurnRun::start(*angle, *turning, turtle))
            }
            Op::Move { distance } => {
                turtle.record(&self.op);
                Run::Move(MoveRun::start(*distance, turtle))
            }
            Op::Arc {
                ra,
                rb,
                extent,
                turning,
            } => {
                turtle.record(&self.op);
                Run::Arc(ArcRun::start(*ra, *rb, *extent, *turning, turtle))
            }
            Op::Oval {
                ra,
                rb,
                extent,
                turning,
                steps,
            } => {
                composite::oval(*ra, *rb, *extent, *turning, *steps, turtle);
                Run::Instant
            }
            Op::Bend {
                distance,
                height,
                side,
                keep_heading,
                steps,
            } => {
                composite::bend(*distance, *height, *side, *keep_heading, *steps, turtle);
                Run::Instant
            }
            Op::Home => {
                composite::home(turtle);
                Run::Instant
            }
            Op::GoTo { placement, x, y } => {
                composite::goto(*placement, *x, *y, turtle);
                Run::Instant
            }
            Op::Teleport {
                placement,
                x,
                y,
                fill_gap,
            } => {
                if composite::teleport(*placement, *x, *y, *fill_gap, turtle) {
                    turtle.record(&self.op);
                }
                Run::Instant
            }
            Op::Dot {
                size,
                fill,
                border_weight,
                border,
            } => {
                turtle.record(&self.op);
                Run::Dot(DotRun::start(*size, fill, *border_weight, border, turtle))
            }
            Op::Arrow {
                size,
                fill,
                border_weight,
                border,
            } => {
                turtle.record(&self.op);
                Run::Arrow(ArrowRun::start(*size, fill, *border_weight, border, turtle))
            }
            Op::Write {
                text,
                align,
                advance,
                font,
            } => {
                turtle.record(&self.op);
                Run::Write(WriteRun::start(text, *align, *advance, font.as_deref(), turtle))
            }
            Op::PushPen => {
                turtle.record(&self.op);
                turtle.push_pen_state();
                Run::Instant
            }
            Op::PopPen(flags) => {
                turtle.record(&self.op);
                turtle.pop_pen_state(*flags);
                Run::Instant
            }
            Op::BeginFill => {
                turtle.record(&self.op);
                marker::begin_fill(turtle);
                Run::Instant
            }
            Op::EndFill { close } => {
                turtle.record(&self.op);
                Run::Fill(FillRun::start(*close, turtle))
            }
            Op::BeginPoly => {
                turtle.record(&self.op);
                marker::begin_poly(turtle);
                Run::Instant
            }
            Op::EndPoly(id) => {
                turtle.record(&self.op);
                marker::end_poly(id, turtle);
                Run::Instant
            }
            Op::BeginRecord => {
                marker::begin_record(turtle);
                Run::Instant
            }
            Op::EndRecord(id) => {
                marker::end_record(id, turtle);
                Run::Instant
            }
            Op::DoRecord(id) => {
                marker::replay(id, turtle);
                Run::Instant
            }
            Op::Clear => {
                turtle.record(&self.op);
                turtle.surface.clear();
                Run::Instant
            }
            Op::Reset => {
                turtle.record(&self.op);
                turtle.reset_state();
                Run::Instant
            }
            Op::Snapshot(id) => {
                turtle.record(&self.op);
                marker::snapshot(id, turtle);
                Run::Instant
            }
            Op::Sleep(ms) => {
                turtle.record(&self.op);
                Run::Sleep(ms.max(0.0))
            }
            Op::DoFunction { callback, data } => {
                turtle.record(&self.op);
                callback.call(turtle, data);
                Run::Instant
            }
        }
    }
}
