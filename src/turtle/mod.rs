use geo_types::LineString;
use kurbo::Point;
use log::warn;
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::rc::Rc;

use crate::config::TurtleConfig;
use crate::cursor::{Cursor, CursorShape};
use crate::font::FontDescriptor;
use crate::geometry::{degrees, norm_angle, radians, CoordMode};
use crate::surface::{LineCap, RecordingSurface, Surface, TextAlign};
use crate::task::{Attribute, Callback, Op, Placement, Task, TaskQueue, Tint, Turning};

pub mod fill;
pub mod scheduler;
pub mod state;

use fill::{Segment, Shape, Verb};
use scheduler::Clock;
pub use state::{PenSnapshot, PopFlags, Style};

/// Where and how the host should draw the cursor icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPose {
    pub cursor: Cursor,
    /// Pen space, relative to the middle of the surface.
    pub at: Point,
    /// Radians, pen space.
    pub rotation: f64,
}

/// # Turtle
///
/// A pen with a position, a heading and a style, driven through a queue of
/// tasks. Commands like [`Turtle::fd`] only queue work; nothing moves until
/// the scheduler ([`Turtle::update`] or [`Turtle::advance`]) spends time on
/// the queue. Finished work is drawn onto the turtle's [`Surface`].
///
/// Angles passed to commands are in degrees unless [`Turtle::use_radians`]
/// was called, and positions are in the caller's coordinates for the
/// turtle's [`CoordMode`].
///
/// # Example
///
/// ```rust
/// use turtle_engine::prelude::*;
///
/// let mut turtle = Turtle::recording(200, 200, CoordMode::Display);
/// turtle.animate_off()
///     .fd(100.0)
///     .rt(90.0)
///     .fd(50.0);
/// turtle.advance(0.0);
/// let (x, y) = turtle.position();
/// assert!((x - 100.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);
/// ```
pub struct Turtle {
    pub(crate) surface: Box<dyn Surface>,
    pub(crate) mode: CoordMode,
    pub(crate) config: TurtleConfig,
    pub(crate) degrees: bool,
    pub(crate) x: f64,
    pub(crate) y: f64,
    /// Radians in [0, 2π), pen space.
    pub(crate) heading: f64,
    pub(crate) style: Style,
    pub(crate) font: String,
    pub(crate) cursor: Cursor,
    pub(crate) queue: TaskQueue,
    /// Tasks the running task wants spliced in right after itself.
    pub(crate) pending: Vec<Task>,
    pub(crate) stack: Vec<PenSnapshot>,
    pub(crate) fill: Option<Vec<Segment>>,
    /// Screen space points since `begin_poly`.
    pub(crate) poly: Option<Vec<(f64, f64)>>,
    pub(crate) polygons: HashMap<String, LineString<f64>>,
    pub(crate) snapshots: HashMap<String, Rc<dyn Surface>>,
    pub(crate) record: Option<Vec<Op>>,
    pub(crate) clock: Clock,
}

impl Turtle {
    pub fn new(surface: Box<dyn Surface>, mode: CoordMode) -> Turtle {
        Turtle::with_config(surface, mode, TurtleConfig::default())
    }

    pub fn with_config(surface: Box<dyn Surface>, mode: CoordMode, config: TurtleConfig) -> Turtle {
        let font = match config.font.parse::<FontDescriptor>() {
            Ok(font) => font.to_string(),
            Err(err) => {
                warn!("{}, using the default font", err);
                FontDescriptor::default().to_string()
            }
        };
        let mut turtle = Turtle {
            surface,
            mode,
            degrees: config.degrees,
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            style: Style::from_config(&config),
            font,
            cursor: Cursor::default(),
            queue: TaskQueue::new(),
            pending: vec![],
            stack: vec![],
            fill: None,
            poly: None,
            polygons: HashMap::new(),
            snapshots: HashMap::new(),
            record: None,
            clock: Clock::new(config.update_interval_ms),
            config,
        };
        turtle.reset_state();
        turtle
    }

    /// A turtle drawing onto an in-memory [`RecordingSurface`].
    pub fn recording(width: u32, height: u32, mode: CoordMode) -> Turtle {
        Turtle::new(Box::new(RecordingSurface::new(width, height)), mode)
    }

    /// A new turtle on `surface` that starts where this one is, with the
    /// same style, mode and settings, but no queued work, trackers or
    /// stored polygons and snapshots.
    pub fn spawn(&self, surface: Box<dyn Surface>) -> Turtle {
        let mut turtle = Turtle::with_config(surface, self.mode, self.config.clone());
        turtle.degrees = self.degrees;
        turtle.x = self.x;
        turtle.y = self.y;
        turtle.heading = self.heading;
        turtle.style = self.style.clone();
        turtle.font = self.font.clone();
        turtle.cursor = self.cursor;
        turtle.clock.interval_ms = self.clock.interval_ms;
        turtle.clock.auto_start = self.clock.auto_start;
        turtle
    }

    // Task plumbing

    fn add(&mut self, op: Op) -> &mut Self {
        self.queue.push(Task::new(op));
        if self.clock.auto_start && !self.clock.active {
            self.start_clock();
        }
        self
    }

    /// Queue `ops` to run straight after the task currently running.
    pub(crate) fn inject(&mut self, ops: Vec<Op>) {
        self.pending.extend(ops.into_iter().map(Task::new));
    }

    pub(crate) fn record(&mut self, op: &Op) {
        if let Some(record) = &mut self.record {
            record.push(op.clone());
        }
    }

    pub(crate) fn track_fill(&mut self, segment: Segment) {
        if let Some(fill) = &mut self.fill {
            fill.push(segment);
        }
    }

    /// A jump encloses area but never leaves ink.
    pub(crate) fn track_gap(&mut self, x: f64, y: f64) {
        self.track_fill(Segment::new(
            Verb::Connect,
            Verb::Move,
            Shape::Point(Point::new(x, y)),
        ));
    }

    pub(crate) fn track_poly(&mut self, x: f64, y: f64) {
        let point = self.mode.pen_to_screen(x, y, 0.0, 0.0);
        if let Some(poly) = &mut self.poly {
            poly.push(point);
        }
    }

    /// Back to a blank sheet: stops the scheduler and throws away the queue,
    /// the style stack, the drawing, all trackers and stored polygons and
    /// snapshots. Mode, angle units, cursor, font and update interval are
    /// kept.
    pub(crate) fn reset_state(&mut self) {
        self.stop_clock();
        self.clock.auto_start = false;
        self.queue.clear();
        self.pending.clear();
        self.stack.clear();
        self.surface.clear();
        self.style = Style::from_config(&self.config);
        self.x = 0.0;
        self.y = 0.0;
        self.heading = 0.0;
        self.fill = None;
        self.poly = None;
        self.record = None;
        self.polygons.clear();
        self.snapshots.clear();
    }

    /// An angle in the caller's units, as radians in [0, 2π).
    fn fix(&self, a: f64) -> f64 {
        norm_angle(self.to_radians(a))
    }

    fn to_radians(&self, a: f64) -> f64 {
        if self.degrees {
            radians(a)
        } else {
            a
        }
    }

    fn from_radians(&self, a: f64) -> f64 {
        if self.degrees {
            degrees(a)
        } else {
            a
        }
    }

    fn full_turn(&self) -> f64 {
        if self.degrees {
            360.0
        } else {
            TAU
        }
    }

    // Movement

    /// Jump to a new x. With `fill_gap` an active fill carries on across the jump.
    pub fn x(&mut self, nx: f64, fill_gap: bool) -> &mut Self {
        self.add(Op::Teleport {
            placement: Placement::Absolute,
            x: nx,
            y: f64::NAN,
            fill_gap,
        })
    }

    pub fn y(&mut self, ny: f64, fill_gap: bool) -> &mut Self {
        self.add(Op::Teleport {
            placement: Placement::Absolute,
            x: f64::NAN,
            y: ny,
            fill_gap,
        })
    }

    pub fn xy(&mut self, nx: f64, ny: f64, fill_gap: bool) -> &mut Self {
        self.add(Op::Teleport {
            placement: Placement::Absolute,
            x: nx,
            y: ny,
            fill_gap,
        })
    }

    pub fn dxy(&mut self, dx: f64, dy: f64, fill_gap: bool) -> &mut Self {
        self.add(Op::Teleport {
            placement: Placement::Relative,
            x: dx,
            y: dy,
            fill_gap,
        })
    }

    /// Face a heading straight away, without turning.
    pub fn face(&mut self, a: f64) -> &mut Self {
        let a = self.fix(a);
        self.add(Op::Set(Attribute::Heading(a)))
    }

    pub fn fd(&mut self, d: f64) -> &mut Self {
        self.add(Op::Move { distance: d })
    }

    pub fn forward(&mut self, d: f64) -> &mut Self {
        self.fd(d)
    }

    pub fn bk(&mut self, d: f64) -> &mut Self {
        self.add(Op::Move { distance: -d })
    }

    pub fn back(&mut self, d: f64) -> &mut Self {
        self.bk(d)
    }

    /// Travel `d` along the heading on an arc bulging `h` out to `side`.
    /// With `keep_heading` the turtle ends facing the way it started. A
    /// non-zero `steps` hops between points instead of curving smoothly.
    pub fn bend(&mut self, d: f64, h: f64, side: Turning, keep_heading: bool, steps: u32) -> &mut Self {
        self.add(Op::Bend {
            distance: d,
            height: h,
            side,
            keep_heading,
            steps,
        })
    }

    pub fn lt(&mut self, a: f64) -> &mut Self {
        let a = self.fix(a);
        self.add(Op::Turn {
            angle: a,
            turning: Turning::Left,
        })
    }

    pub fn left(&mut self, a: f64) -> &mut Self {
        self.lt(a)
    }

    pub fn rt(&mut self, a: f64) -> &mut Self {
        let a = self.fix(a);
        self.add(Op::Turn {
            angle: a,
            turning: Turning::Right,
        })
    }

    pub fn right(&mut self, a: f64) -> &mut Self {
        self.rt(a)
    }

    /// Turn the short way round to face `a`.
    pub fn head(&mut self, a: f64) -> &mut Self {
        let a = self.fix(a);
        self.add(Op::Turn {
            angle: a,
            turning: Turning::Nearest,
        })
    }

    pub fn home(&mut self) -> &mut Self {
        self.add(Op::Home)
    }

    pub fn goto(&mut self, x: f64, y: f64) -> &mut Self {
        self.add(Op::GoTo {
            placement: Placement::Absolute,
            x,
            y,
        })
    }

    pub fn goby(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.add(Op::GoTo {
            placement: Placement::Relative,
            x: dx,
            y: dy,
        })
    }

    /// Stamp a dot. A size of zero or less picks one from the pen size.
    pub fn dot(
        &mut self,
        size: f64,
        fill: impl Into<Tint>,
        border_weight: f64,
        border: impl Into<Tint>,
    ) -> &mut Self {
        self.add(Op::Dot {
            size,
            fill: fill.into(),
            border_weight,
            border: border.into(),
        })
    }

    pub fn arrow(
        &mut self,
        size: f64,
        fill: impl Into<Tint>,
        border_weight: f64,
        border: impl Into<Tint>,
    ) -> &mut Self {
        self.add(Op::Arrow {
            size,
            fill: fill.into(),
            border_weight,
            border: border.into(),
        })
    }

    pub fn circle(&mut self, radius: f64, extent: f64, turning: Turning, steps: u32) -> &mut Self {
        self.oval(radius, radius, extent, turning, steps)
    }

    /// Follow an ellipse with radius `ra` along the heading and `rb` across
    /// it. An extent of zero goes all the way round.
    pub fn oval(&mut self, ra: f64, rb: f64, extent: f64, turning: Turning, steps: u32) -> &mut Self {
        let extent = if extent == 0.0 {
            TAU
        } else {
            self.to_radians(extent).abs()
        };
        if steps == 0 {
            self.add(Op::Arc {
                ra,
                rb,
                extent,
                turning,
            })
        } else {
            self.add(Op::Oval {
                ra,
                rb,
                extent,
                turning,
                steps,
            })
        }
    }

    pub fn sleep(&mut self, ms: f64) -> &mut Self {
        self.add(Op::Sleep(ms))
    }

    /// Write `text` at the pen, across the heading. With `advance` the pen
    /// moves past left or centre aligned text.
    pub fn write(&mut self, text: &str, align: TextAlign, advance: bool, font: Option<&str>) -> &mut Self {
        let font = font.and_then(|font| match font.parse::<FontDescriptor>() {
            Ok(_) => Some(font.to_string()),
            Err(err) => {
                warn!("{}, writing with the current font", err);
                None
            }
        });
        self.add(Op::Write {
            text: text.to_string(),
            align,
            advance,
            font,
        })
    }

    pub fn font(&mut self, descriptor: &str) -> &mut Self {
        match descriptor.parse::<FontDescriptor>() {
            Ok(_) => self.add(Op::Set(Attribute::Font(descriptor.to_string()))),
            Err(err) => {
                warn!("{}, ignoring font change", err);
                self
            }
        }
    }

    // Pen attributes

    pub fn up(&mut self) -> &mut Self {
        self.add(Op::Set(Attribute::PenDown(false)))
    }

    pub fn pu(&mut self) -> &mut Self {
        self.up()
    }

    pub fn down(&mut self) -> &mut Self {
        self.add(Op::Set(Attribute::PenDown(true)))
    }

    pub fn pd(&mut self) -> &mut Self {
        self.down()
    }

    pub fn pensize(&mut self, width: f64) -> &mut Self {
        self.add(Op::Set(Attribute::PenSize(width)))
    }

    /// Dash pattern as alternating dash and gap lengths; empty for solid.
    pub fn dash(&mut self, pattern: &[f64], offset: f64) -> &mut Self {
        self.add(Op::Set(Attribute::Dash(pattern.to_vec())));
        self.add(Op::Set(Attribute::DashOffset(offset)))
    }

    pub fn cap(&mut self, cap: LineCap) -> &mut Self {
        self.add(Op::Set(Attribute::Cap(cap)))
    }

    pub fn pencolor(&mut self, color: &str) -> &mut Self {
        self.add(Op::Set(Attribute::PenColor(color.to_string())))
    }

    pub fn fillcolor(&mut self, color: &str) -> &mut Self {
        self.add(Op::Set(Attribute::FillColor(color.to_string())))
    }

    pub fn push_pen(&mut self) -> &mut Self {
        self.add(Op::PushPen)
    }

    pub fn pop_pen(&mut self, flags: PopFlags) -> &mut Self {
        self.add(Op::PopPen(flags))
    }

    // Turtle control

    /// Switch cursor when the task runs. Unknown names are ignored.
    pub fn cursor(&mut self, name: &str) -> &mut Self {
        match name.parse::<CursorShape>() {
            Ok(shape) => self.add(Op::Set(Attribute::Cursor(Cursor::new(shape)))),
            Err(err) => {
                warn!("{}, keeping the current cursor", err);
                self
            }
        }
    }

    pub fn st(&mut self) -> &mut Self {
        self.add(Op::Set(Attribute::Visible(true)))
    }

    pub fn show(&mut self) -> &mut Self {
        self.st()
    }

    pub fn ht(&mut self) -> &mut Self {
        self.add(Op::Set(Attribute::Visible(false)))
    }

    pub fn hide(&mut self) -> &mut Self {
        self.ht()
    }

    /// Point the cursor at a fixed angle. A non-finite angle goes back to
    /// following the heading.
    pub fn tilt(&mut self, a: f64) -> &mut Self {
        let tilt = if a.is_finite() { Some(self.fix(a)) } else { None };
        self.add(Op::Set(Attribute::Tilt(tilt)))
    }

    /// Linear speed in pixels per second and angular speed per second in the
    /// current angle units. Values that are not positive are ignored.
    pub fn speed(&mut self, linear: f64, angular: f64) -> &mut Self {
        if linear.is_finite() && linear > 0.0 {
            self.add(Op::Set(Attribute::LinearSpeed(linear)));
        }
        if angular.is_finite() && angular > 0.0 {
            let angular = self.to_radians(angular);
            self.add(Op::Set(Attribute::AngularSpeed(angular)));
        }
        self
    }

    pub fn begin_fill(&mut self) -> &mut Self {
        self.add(Op::BeginFill)
    }

    pub fn end_fill(&mut self, close: bool) -> &mut Self {
        self.add(Op::EndFill { close })
    }

    pub fn begin_poly(&mut self) -> &mut Self {
        self.add(Op::BeginPoly)
    }

    pub fn end_poly(&mut self, id: &str) -> &mut Self {
        self.add(Op::EndPoly(id.to_string()))
    }

    pub fn begin_record(&mut self) -> &mut Self {
        self.add(Op::BeginRecord)
    }

    pub fn end_record(&mut self, id: &str) -> &mut Self {
        self.add(Op::EndRecord(id.to_string()))
    }

    /// Replay a stored record from wherever the turtle is when this task runs.
    pub fn replay(&mut self, id: &str) -> &mut Self {
        self.add(Op::DoRecord(id.to_string()))
    }

    /// Run `action` when this task comes up, with `data` passed along.
    pub fn call<F>(&mut self, action: F, data: Vec<ron::Value>) -> &mut Self
    where
        F: Fn(&mut Turtle, &[ron::Value]) + Send + Sync + 'static,
    {
        self.add(Op::DoFunction {
            callback: Callback::new(action),
            data,
        })
    }

    pub fn animate_on(&mut self) -> &mut Self {
        self.add(Op::Set(Attribute::Animate(true)))
    }

    pub fn animate_off(&mut self) -> &mut Self {
        self.add(Op::Set(Attribute::Animate(false)))
    }

    pub fn clear(&mut self) -> &mut Self {
        self.add(Op::Clear)
    }

    pub fn reset(&mut self) -> &mut Self {
        self.add(Op::Reset)
    }

    pub fn snapshot(&mut self, id: &str) -> &mut Self {
        self.add(Op::Snapshot(id.to_string()))
    }

    // Immediate, not queued

    pub fn use_degrees(&mut self) -> &mut Self {
        self.degrees = true;
        self
    }

    pub fn use_radians(&mut self) -> &mut Self {
        self.degrees = false;
        self
    }

    pub fn show_turtle(&mut self) -> &mut Self {
        self.style.visible = true;
        self
    }

    pub fn hide_turtle(&mut self) -> &mut Self {
        self.style.visible = false;
        self
    }

    pub fn do_clear(&mut self) -> &mut Self {
        self.surface.clear();
        self
    }

    pub fn do_reset(&mut self) -> &mut Self {
        self.reset_state();
        self
    }

    pub fn set_xyh(&mut self, x: f64, y: f64, a: f64) -> &mut Self {
        self.set_xy(x, y);
        self.set_heading(a)
    }

    /// Ignored unless both coordinates are finite.
    pub fn set_xy(&mut self, x: f64, y: f64) -> &mut Self {
        if x.is_finite() && y.is_finite() {
            (self.x, self.y) = self.mode.public_to_pen(x, y);
        }
        self
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        if x.is_finite() {
            match self.mode {
                CoordMode::Logo => self.y = x,
                _ => self.x = x,
            }
        }
        self
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        if y.is_finite() {
            match self.mode {
                CoordMode::Logo => self.x = y,
                _ => self.y = y,
            }
        }
        self
    }

    pub fn set_heading(&mut self, a: f64) -> &mut Self {
        self.heading = self.fix(a);
        self
    }

    pub fn set_pen_size(&mut self, width: f64) -> &mut Self {
        self.style.pen_size = width;
        self
    }

    pub fn set_dash(&mut self, pattern: &[f64]) -> &mut Self {
        self.style.dash = pattern.to_vec();
        self
    }

    pub fn set_pen_color(&mut self, color: &str) -> &mut Self {
        self.style.pen_color = color.to_string();
        self
    }

    pub fn set_cap(&mut self, cap: LineCap) -> &mut Self {
        self.style.cap = cap;
        self
    }

    pub fn set_fill_color(&mut self, color: &str) -> &mut Self {
        self.style.fill_color = color.to_string();
        self
    }

    /// NaN leaves a speed unchanged. Angular speed is in the current units.
    pub fn set_speed(&mut self, linear: f64, angular: f64) -> &mut Self {
        if !linear.is_nan() {
            self.style.linear_speed = linear;
        }
        if !angular.is_nan() {
            self.style.angular_speed = self.to_radians(angular);
        }
        self
    }

    pub fn set_cursor(&mut self, name: &str) -> &mut Self {
        match name.parse::<CursorShape>() {
            Ok(shape) => self.cursor = Cursor::new(shape),
            Err(err) => warn!("{}, keeping the current cursor", err),
        }
        self
    }

    // Queries

    /// Position in the caller's coordinates.
    pub fn position(&self) -> (f64, f64) {
        self.mode.pen_to_public(self.x, self.y)
    }

    pub fn xcor(&self) -> f64 {
        self.position().0
    }

    pub fn ycor(&self) -> f64 {
        self.position().1
    }

    /// Heading in the current angle units.
    pub fn heading(&self) -> f64 {
        self.from_radians(self.heading)
    }

    /// Position on a screen whose origin sits at (cx, cy).
    pub fn screen_position(&self, cx: f64, cy: f64) -> (f64, f64) {
        self.mode.pen_to_screen(self.x, self.y, cx, cy)
    }

    pub fn screen_heading(&self) -> f64 {
        self.mode.mode_to_screen_angle(self.heading(), self.full_turn())
    }

    /// Screen point (x, y), with the origin at (cx, cy), in the caller's coordinates.
    pub fn mode_position(&self, x: f64, y: f64, cx: f64, cy: f64) -> (f64, f64) {
        self.mode.screen_to_mode(x, y, cx, cy)
    }

    pub fn mode_heading(&self, screen_angle: f64) -> f64 {
        self.mode.screen_to_mode_angle(screen_angle, self.full_turn())
    }

    pub fn pen_size(&self) -> f64 {
        self.style.pen_size
    }

    pub fn dash_pattern(&self) -> &[f64] {
        &self.style.dash
    }

    pub fn dash_offset(&self) -> f64 {
        self.style.dash_offset
    }

    pub fn pen_color(&self) -> &str {
        &self.style.pen_color
    }

    pub fn line_cap(&self) -> LineCap {
        self.style.cap
    }

    pub fn fill_color(&self) -> &str {
        &self.style.fill_color
    }

    /// Linear speed in pixels per second, angular in the current units.
    pub fn speeds(&self) -> (f64, f64) {
        (
            self.style.linear_speed,
            self.from_radians(self.style.angular_speed),
        )
    }

    pub fn current_font(&self) -> &str {
        &self.font
    }

    pub fn tilt_angle(&self) -> Option<f64> {
        self.style.tilt.map(|tilt| self.from_radians(tilt))
    }

    /// Screen space points stored by `end_poly(id)`.
    pub fn polygon(&self, id: &str) -> Option<&LineString<f64>> {
        self.polygons.get(id)
    }

    /// The snapshot stored as `id`, or a fresh copy of the drawing so far.
    pub fn snapshot_of(&self, id: &str) -> Rc<dyn Surface> {
        match self.snapshots.get(id) {
            Some(snapshot) => snapshot.clone(),
            None => self.surface.snapshot(self.mode),
        }
    }

    pub fn active_cursor(&self) -> Cursor {
        self.cursor
    }

    /// How the host should draw the cursor this frame, if it is visible.
    pub fn cursor_pose(&self) -> Option<CursorPose> {
        if !self.style.visible {
            return None;
        }
        Some(CursorPose {
            cursor: self.cursor,
            at: Point::new(self.x, self.y),
            rotation: self.style.tilt.unwrap_or(self.heading),
        })
    }

    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }

    /// The turtle's surface as its concrete type.
    pub fn surface_as<T: 'static>(&self) -> Option<&T> {
        self.surface.as_any().downcast_ref::<T>()
    }

    pub fn mode(&self) -> CoordMode {
        self.mode
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    pub fn has_tasks(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn task_count(&self) -> usize {
        self.queue.len()
    }

    pub fn style_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_animating(&self) -> bool {
        self.style.animate
    }

    pub fn is_visible(&self) -> bool {
        self.style.visible
    }

    pub fn is_pen_down(&self) -> bool {
        self.style.pen_down
    }

    pub fn is_filling(&self) -> bool {
        self.fill.is_some()
    }

    pub fn is_recording(&self) -> bool {
        self.record.is_some()
    }

    pub fn uses_degrees(&self) -> bool {
        self.degrees
    }

    pub fn width(&self) -> u32 {
        self.surface.size().0
    }

    pub fn height(&self) -> u32 {
        self.surface.size().1
    }

    pub fn aspect(&self) -> f64 {
        let (w, h) = self.surface.size();
        w as f64 / h as f64
    }
}
