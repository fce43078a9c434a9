//! Stamps left at the pen position without moving it (text may advance it).
use kurbo::{Affine, BezPath, Circle, Point, Shape, Vec2};
use std::f64::consts::{FRAC_PI_2, PI};

use super::Tint;
use crate::geometry::CoordMode;
use crate::surface::{LineCap, PenStroke, Surface, TextAlign, TextRun};
use crate::turtle::Turtle;

/// Flattening tolerance for dots.
const DOT_TOLERANCE: f64 = 0.1;

/// Border outline for a stamp. Weight above zero is used as given, zero
/// borrows the pen size and anything below zero means no border.
fn border_pen(weight: f64, border: &Tint, turtle: &Turtle) -> Option<PenStroke> {
    let width = if weight > 0.0 {
        weight
    } else if weight == 0.0 {
        turtle.style.pen_size
    } else {
        return None;
    };
    Some(PenStroke {
        color: border.resolve(&turtle.style.pen_color),
        width,
        cap: LineCap::Butt,
        dash: vec![],
        dash_offset: 0.0,
    })
}

fn fill_and_outline(surface: &mut dyn Surface, path: &BezPath, fill: &str, border: &Option<PenStroke>) {
    surface.fill(path, fill);
    if let Some(pen) = border {
        surface.stroke(path, pen);
    }
}

#[derive(Debug, Clone)]
pub struct DotRun {
    centre: Point,
    radius: f64,
    fill: String,
    border: Option<PenStroke>,
    pen_down: bool,
}

impl DotRun {
    pub fn start(size: f64, fill: &Tint, border_weight: f64, border: &Tint, turtle: &Turtle) -> DotRun {
        let pen_size = turtle.style.pen_size;
        DotRun {
            centre: Point::new(turtle.x, turtle.y),
            radius: if size > 0.0 {
                size
            } else {
                (2.0 * pen_size).max(pen_size + 4.0)
            },
            fill: fill.resolve(&turtle.style.fill_color),
            border: border_pen(border_weight, border, turtle),
            pen_down: turtle.style.pen_down,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, offset: Vec2) {
        if !self.pen_down {
            return;
        }
        let path = Circle::new(self.centre + offset, self.radius).to_path(DOT_TOLERANCE);
        fill_and_outline(surface, &path, &self.fill, &self.border);
    }
}

/// A triangular arrow head with its tip at the pen, pointing along the heading.
#[derive(Debug, Clone)]
pub struct ArrowRun {
    tip: Point,
    heading: f64,
    size: f64,
    fill: String,
    border: Option<PenStroke>,
    pen_down: bool,
}

impl ArrowRun {
    pub fn start(size: f64, fill: &Tint, border_weight: f64, border: &Tint, turtle: &Turtle) -> ArrowRun {
        ArrowRun {
            tip: Point::new(turtle.x, turtle.y),
            heading: turtle.heading,
            size,
            fill: fill.resolve(&turtle.style.fill_color),
            border: border_pen(border_weight, border, turtle),
            pen_down: turtle.style.pen_down,
        }
    }

    fn outline(&self) -> BezPath {
        let (xp, yp) = (-self.size * (PI / 6.0).cos(), self.size * (PI / 6.0).sin());
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((xp, yp));
        path.line_to((xp, -yp));
        path.close_path();
        Affine::translate(self.tip.to_vec2()) * Affine::rotate(self.heading) * path
    }

    pub fn render(&self, surface: &mut dyn Surface, offset: Vec2) {
        if !self.pen_down {
            return;
        }
        let path = Affine::translate(offset) * self.outline();
        fill_and_outline(surface, &path, &self.fill, &self.border);
    }
}

/// Text laid perpendicular to the heading, drawn in the fill colour.
#[derive(Debug, Clone)]
pub struct WriteRun {
    run: TextRun,
    pen_down: bool,
}

impl WriteRun {
    pub fn start(
        text: &str,
        align: TextAlign,
        advance: bool,
        font: Option<&str>,
        turtle: &mut Turtle,
    ) -> WriteRun {
        let font = font.unwrap_or(turtle.font.as_str()).to_string();
        let (sx, sy, heading) = (turtle.x, turtle.y, turtle.heading);
        let standard = turtle.mode == CoordMode::Standard;
        let mut rotation = heading + FRAC_PI_2;
        if standard {
            rotation -= PI;
        }
        let run = TextRun {
            text: text.to_string(),
            origin: Point::new(sx, sy),
            rotation,
            align,
            font,
            color: turtle.style.fill_color.clone(),
            mirrored: standard,
        };
        if advance && align != TextAlign::Right {
            let mut width = turtle.surface.measure_text(&run.text, &run.font);
            if align == TextAlign::Center {
                width /= 2.0;
            }
            let (dx, dy) = (width * heading.sin(), width * heading.cos());
            if standard {
                turtle.x = sx + dx;
                turtle.y = sy - dy;
            } else {
                turtle.x = sx - dx;
                turtle.y = sy + dy;
            }
        }
        WriteRun {
            run,
            pen_down: turtle.style.pen_down,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, offset: Vec2) {
        if !self.pen_down {
            return;
        }
        let mut run = self.run.clone();
        run.origin += offset;
        surface.text(&run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn test_dot_defaults() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        turtle.style.pen_size = 3.0;
        let run = DotRun::start(0.0, &Tint::Current, 0.0, &Tint::Current, &turtle);
        assert_eq!(run.radius, 7.0);
        assert_eq!(run.fill, "white");
        let border = run.border.clone().unwrap();
        assert_eq!((border.color.as_str(), border.width), ("black", 3.0));

        turtle.style.pen_size = 10.0;
        let run = DotRun::start(-1.0, &Tint::from("red"), -1.0, &Tint::Current, &turtle);
        assert_eq!(run.radius, 20.0);
        assert_eq!(run.fill, "red");
        assert!(run.border.is_none());
    }

    #[test]
    fn test_dot_draws_only_with_pen_down() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        let mut surface = RecordingSurface::new(100, 100);
        let run = DotRun::start(5.0, &Tint::Current, 1.0, &Tint::Current, &turtle);
        run.render(&mut surface, Vec2::ZERO);
        assert_eq!(surface.ops().len(), 2);

        turtle.style.pen_down = false;
        let run = DotRun::start(5.0, &Tint::Current, 1.0, &Tint::Current, &turtle);
        run.render(&mut surface, Vec2::ZERO);
        assert_eq!(surface.ops().len(), 2);
    }

    #[test]
    fn test_arrow_points_along_heading() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        turtle.heading = FRAC_PI_2;
        let run = ArrowRun::start(10.0, &Tint::Current, -1.0, &Tint::Current, &turtle);
        let bbox = run.outline().bounding_box();
        // Pointing down the screen, the body trails upwards from the tip
        assert!(bbox.y1.abs() < 1e-9);
        assert!((bbox.y0 + 10.0 * (PI / 6.0).cos()).abs() < 1e-9);
        assert!((bbox.x1 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_write_advances_along_text() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        turtle.heading = -FRAC_PI_2;
        // Four glyphs of a 20px font measure 40px, and heading up the
        // screen the text runs to the right
        let run = WriteRun::start("abcd", TextAlign::Left, true, Some("400 20px serif"), &mut turtle);
        assert!((turtle.x - 40.0).abs() < 1e-9);
        assert!(turtle.y.abs() < 1e-9);
        assert_eq!(run.run.font, "400 20px serif");

        let mut surface = RecordingSurface::new(100, 100);
        run.render(&mut surface, Vec2::new(50.0, 50.0));
        match &surface.ops()[0] {
            DrawOp::Text(text) => assert_eq!(text.origin, Point::new(50.0, 50.0)),
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_write_right_aligned_stays_put() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Standard);
        let run = WriteRun::start("abcd", TextAlign::Right, true, None, &mut turtle);
        assert_eq!((turtle.x, turtle.y), (0.0, 0.0));
        assert!(run.run.mirrored);
        assert_eq!(run.run.font, "400 normal 14px sans-serif");
    }
}
