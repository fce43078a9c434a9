//! Fill tracking. Between `begin_fill` and `end_fill` each finished motion
//! leaves a [`Segment`] behind. A segment knows how to extend the fill
//! outline and, separately, the stroked outline: a pen-up motion still
//! encloses area but must not leave ink.
use kurbo::{Affine, Arc, BezPath, Point, Vec2};

/// Flattening tolerance for elliptical segments, in pixels.
const ARC_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Jump to the end of the segment.
    Move,
    /// Trace the segment.
    Connect,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Point(Point),
    /// A slice of an ellipse, angles in radians.
    Ellipse {
        centre: Point,
        radii: Vec2,
        rotation: f64,
        start: f64,
        sweep: f64,
    },
}

impl Shape {
    fn arc(&self) -> Option<Arc> {
        match *self {
            Shape::Point(_) => None,
            Shape::Ellipse {
                centre,
                radii,
                rotation,
                start,
                sweep,
            } => Some(Arc {
                center: centre,
                radii,
                start_angle: start,
                sweep_angle: sweep,
                x_rotation: rotation,
            }),
        }
    }

    fn point_at(&self, angle: f64) -> Point {
        match *self {
            Shape::Point(p) => p,
            Shape::Ellipse {
                centre,
                radii,
                rotation,
                ..
            } => {
                let (x, y) = crate::geometry::point_on_ellipse(
                    centre.x, centre.y, radii.x, radii.y, rotation, angle,
                );
                Point::new(x, y)
            }
        }
    }

    pub fn start(&self) -> Point {
        match *self {
            Shape::Point(p) => p,
            Shape::Ellipse { start, .. } => self.point_at(start),
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Shape::Point(p) => p,
            Shape::Ellipse { start, sweep, .. } => self.point_at(start + sweep),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub fill: Verb,
    pub stroke: Verb,
    pub shape: Shape,
}

impl Segment {
    pub fn new(fill: Verb, stroke: Verb, shape: Shape) -> Segment {
        Segment {
            fill,
            stroke,
            shape,
        }
    }

    /// A segment the stroke only traces while the pen is down.
    pub fn traced(pen_down: bool, shape: Shape) -> Segment {
        let stroke = if pen_down { Verb::Connect } else { Verb::Move };
        Segment::new(Verb::Connect, stroke, shape)
    }
}

/// Which of a segment's two verbs to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outline {
    Fill,
    Stroke,
}

/// Assemble the fill or stroke outline for a run of segments, shifted by
/// `offset`.
pub fn build_path(segments: &[Segment], outline: Outline, offset: Vec2) -> BezPath {
    let mut path = BezPath::new();
    for segment in segments {
        let verb = match outline {
            Outline::Fill => segment.fill,
            Outline::Stroke => segment.stroke,
        };
        match (verb, segment.shape.arc()) {
            (Verb::Move, _) => path.move_to(segment.shape.end()),
            (Verb::Connect, None) => connect(&mut path, segment.shape.end()),
            (Verb::Connect, Some(arc)) => {
                connect(&mut path, segment.shape.start());
                for el in arc.append_iter(ARC_TOLERANCE) {
                    path.push(el);
                }
            }
        }
    }
    Affine::translate(offset) * path
}

fn connect(path: &mut BezPath, to: Point) {
    if path.elements().is_empty() {
        path.move_to(to);
    } else {
        path.line_to(to);
    }
}
