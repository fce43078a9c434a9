//! Boundary markers: fill, polygon and record sessions, plus snapshots.
use kurbo::{Point, Vec2};
use log::{debug, warn};

use crate::records;
use crate::surface::{PenStroke, Surface};
use crate::turtle::fill::{build_path, Outline, Segment, Shape, Verb};
use crate::turtle::Turtle;

pub fn begin_fill(turtle: &mut Turtle) {
    let here = Point::new(turtle.x, turtle.y);
    turtle.fill = Some(vec![Segment::new(
        Verb::Move,
        Verb::Move,
        Shape::Point(here),
    )]);
}

/// A finished fill, baked when the `EndFill` task commits.
#[derive(Debug, Clone)]
pub struct FillRun {
    segments: Vec<Segment>,
    fill_color: String,
    pen: PenStroke,
    pen_down: bool,
}

impl FillRun {
    pub fn start(close: bool, turtle: &mut Turtle) -> FillRun {
        let mut segments = turtle.fill.take().unwrap_or_default();
        if close {
            if let Some(first) = segments.first() {
                let home = first.shape.end();
                segments.push(Segment::traced(turtle.style.pen_down, Shape::Point(home)));
            }
        }
        FillRun {
            segments,
            fill_color: turtle.style.fill_color.clone(),
            pen: turtle.style.pen_stroke(),
            pen_down: turtle.style.pen_down,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, offset: Vec2) {
        if self.segments.is_empty() {
            return;
        }
        surface.fill(
            &build_path(&self.segments, Outline::Fill, offset),
            &self.fill_color,
        );
        if self.pen_down {
            surface.stroke(
                &build_path(&self.segments, Outline::Stroke, offset),
                &self.pen,
            );
        }
    }
}

pub fn begin_poly(turtle: &mut Turtle) {
    turtle.poly = Some(vec![]);
    turtle.track_poly(turtle.x, turtle.y);
}

/// Store the tracked points under `id`. Tracking carries on if the id is
/// empty.
pub fn end_poly(id: &str, turtle: &mut Turtle) {
    if id.is_empty() {
        warn!("Ignoring end_poly without a polygon name");
        return;
    }
    let points = turtle.poly.take().unwrap_or_default();
    turtle.polygons.insert(id.to_string(), points.into());
}

pub fn begin_record(turtle: &mut Turtle) {
    turtle.record = Some(vec![]);
}

/// Hand the recorded ops to the shared registry. A name that is already
/// taken keeps its first recording.
pub fn end_record(id: &str, turtle: &mut Turtle) {
    let ops = turtle.record.take().unwrap_or_default();
    if id.is_empty() {
        warn!("Discarding a recording without a name");
    } else if records::store_record(id, ops) {
        debug!("Stored record '{}'", id);
    } else {
        debug!("Record '{}' already exists, keeping the first one", id);
    }
}

pub fn replay(id: &str, turtle: &mut Turtle) {
    match records::fetch_record(id) {
        Some(ops) => {
            debug!("Replaying record '{}' ({} ops)", id, ops.len());
            turtle.inject(ops);
        }
        None => warn!("No record named '{}'", id),
    }
}

pub fn snapshot(id: &str, turtle: &mut Turtle) {
    if id.is_empty() {
        warn!("Ignoring snapshot without a name");
        return;
    }
    let copy = turtle.surface.snapshot(turtle.mode);
    turtle.snapshots.insert(id.to_string(), copy);
}
