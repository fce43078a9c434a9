//! The three tasks that animate: turning on the spot, moving in a straight
//! line and following an elliptical arc.
use kurbo::{Affine, Arc, BezPath, Point, Vec2};
use log::error;
use std::f64::consts::{FRAC_PI_2, TAU};

use super::{Progress, Turning};
use crate::geometry::{lerp, norm_angle, perimeter, point_on_ellipse, turn_direction, unlerp};
use crate::surface::{PenStroke, Surface};
use crate::turtle::fill::{Segment, Shape};
use crate::turtle::Turtle;

/// Longest stretch of arc, in pixels, between two polygon samples.
pub const MAX_ARC_LEN: f64 = 20.0;

/// Flattening tolerance when an arc is drawn.
const ARC_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct TurnRun {
    sa: f64,
    ea: f64,
    range: f64,
    /// Radians per second.
    speed: f64,
    t: f64,
}

impl TurnRun {
    pub fn start(angle: f64, turning: Turning, turtle: &Turtle) -> TurnRun {
        let mut sa = norm_angle(turtle.heading);
        let mut dir = turning.sign();
        let mut ea = if dir == 0.0 {
            norm_angle(angle)
        } else {
            norm_angle(sa + dir * angle)
        };
        if dir == 0.0 {
            dir = turn_direction(sa, ea);
        }
        if dir < 0.0 && ea > sa {
            sa += TAU;
        } else if dir > 0.0 && sa > ea {
            ea += TAU;
        }
        TurnRun {
            sa,
            ea,
            range: ea - sa,
            speed: turtle.style.angular_speed,
            t: 0.0,
        }
    }

    pub fn advance(&mut self, turtle: &mut Turtle, time: f64) -> Progress {
        if turtle.style.animate && self.range != 0.0 && self.speed > 0.0 {
            self.t += (self.speed * time / 1000.0 / self.range).abs();
            if self.t >= 1.0 {
                turtle.heading = norm_angle(self.ea);
                Progress::Done((self.t - 1.0) * self.range.abs() * 1000.0 / self.speed)
            } else {
                turtle.heading = norm_angle(lerp(self.t, self.sa, self.ea));
                Progress::Running
            }
        } else {
            turtle.heading = norm_angle(self.ea);
            Progress::Done(time)
        }
    }
}

#[derive(Debug, Clone)]
pub struct MoveRun {
    pen: PenStroke,
    pen_down: bool,
    from: Point,
    to: Point,
    at: Point,
    length: f64,
    t: f64,
}

impl MoveRun {
    pub fn start(distance: f64, turtle: &Turtle) -> MoveRun {
        let from = Point::new(turtle.x, turtle.y);
        let to = from + Vec2::from_angle(turtle.heading) * distance;
        MoveRun {
            pen: turtle.style.pen_stroke(),
            pen_down: turtle.style.pen_down,
            from,
            to,
            at: from,
            length: distance.abs(),
            t: 0.0,
        }
    }

    pub fn advance(&mut self, turtle: &mut Turtle, time: f64) -> Progress {
        let speed = turtle.style.linear_speed;
        let progress = if turtle.style.animate && self.length > 0.0 && speed > 0.0 {
            self.t += speed * time * 0.001 / self.length;
            if self.t >= 1.0 {
                self.at = self.to;
                Progress::Done((self.t - 1.0) * self.length * 1000.0 / speed)
            } else {
                self.at = self.from.lerp(self.to, self.t);
                Progress::Running
            }
        } else {
            self.at = self.to;
            Progress::Done(time)
        };
        turtle.x = self.at.x;
        turtle.y = self.at.y;
        if let Progress::Done(_) = progress {
            turtle.track_fill(Segment::traced(turtle.style.pen_down, Shape::Point(self.to)));
            turtle.track_poly(self.to.x, self.to.y);
        }
        progress
    }

    pub fn render(&self, surface: &mut dyn Surface, offset: Vec2) {
        if !self.pen_down {
            return;
        }
        let mut path = BezPath::new();
        path.move_to(self.from);
        path.line_to(self.at);
        surface.stroke(&(Affine::translate(offset) * path), &self.pen);
    }
}

/// Travel along an ellipse whose `a` radius lies along the heading at the
/// start and whose centre sits `b` away on the turning side.
#[derive(Debug, Clone)]
pub struct ArcRun {
    pen: PenStroke,
    pen_down: bool,
    centre: Point,
    a: f64,
    b: f64,
    /// Heading at the start, which is also the ellipse's rotation.
    rotation: f64,
    extent: f64,
    turn: f64,
    perimeter: f64,
    /// Radians per second around the ellipse.
    speed: f64,
    sa: f64,
    ea: f64,
    ca: f64,
}

impl ArcRun {
    pub fn start(ra: f64, rb: f64, extent: f64, turning: Turning, turtle: &Turtle) -> ArcRun {
        let (a, b) = (ra.abs(), rb.abs());
        let turn = turning.sign();
        let heading = turtle.heading;
        let centre = Point::new(
            turtle.x - turn * b * heading.sin(),
            turtle.y + turn * b * heading.cos(),
        );
        let perimeter = perimeter(a, b);
        let speed = turtle.style.linear_speed * TAU / perimeter;
        let sa = match turning {
            Turning::Left => FRAC_PI_2,
            Turning::Right => 3.0 * FRAC_PI_2,
            Turning::Nearest => {
                error!("Illegal turn direction for an arc, expected left or right");
                0.0
            }
        };
        let ea = sa + turn * extent;
        ArcRun {
            pen: turtle.style.pen_stroke(),
            pen_down: turtle.style.pen_down,
            centre,
            a,
            b,
            rotation: heading,
            extent,
            turn,
            perimeter,
            speed,
            sa,
            ea,
            ca: sa,
        }
    }

    fn animates(&self, turtle: &Turtle) -> bool {
        turtle.style.animate && self.extent > 0.0 && self.speed.is_finite() && self.speed > 0.0
    }

    pub fn advance(&mut self, turtle: &mut Turtle, time: f64) -> Progress {
        if self.turn == 0.0 {
            return Progress::Done(time);
        }
        let progress = if self.animates(turtle) {
            self.ca += time * self.speed / 1000.0 * self.turn;
            let t = unlerp(self.ca, self.sa, self.ea);
            if t >= 1.0 {
                self.ca = self.ea;
                Progress::Done((t - 1.0) * self.extent * 1000.0 / self.speed)
            } else {
                Progress::Running
            }
        } else {
            self.ca = self.ea;
            Progress::Done(time)
        };
        let (x, y) = point_on_ellipse(
            self.centre.x,
            self.centre.y,
            self.a,
            self.b,
            self.rotation,
            self.ca,
        );
        turtle.x = x;
        turtle.y = y;
        turtle.heading = norm_angle(self.ca + self.rotation + self.turn * FRAC_PI_2);
        if let Progress::Done(_) = progress {
            turtle.track_fill(Segment::traced(turtle.style.pen_down, self.shape()));
            if turtle.poly.is_some() {
                for (px, py) in self.samples() {
                    turtle.track_poly(px, py);
                }
            }
        }
        progress
    }

    fn shape(&self) -> Shape {
        Shape::Ellipse {
            centre: self.centre,
            radii: Vec2::new(self.a, self.b),
            rotation: self.rotation,
            start: self.sa,
            sweep: self.ca - self.sa,
        }
    }

    /// Evenly spaced points along the finished arc, no further than
    /// [`MAX_ARC_LEN`] apart, excluding the start point.
    fn samples(&self) -> Vec<(f64, f64)> {
        let count = (self.perimeter * self.extent / (MAX_ARC_LEN * TAU)).ceil();
        if !(count >= 1.0) {
            return vec![];
        }
        let step = self.extent / count;
        (1..=count as usize)
            .map(|i| {
                let angle = self.sa + i as f64 * step * self.turn;
                point_on_ellipse(
                    self.centre.x,
                    self.centre.y,
                    self.a,
                    self.b,
                    self.rotation,
                    angle,
                )
            })
            .collect()
    }

    pub fn render(&self, surface: &mut dyn Surface, offset: Vec2) {
        if !self.pen_down || self.turn == 0.0 {
            return;
        }
        let arc = Arc {
            center: self.centre,
            radii: Vec2::new(self.a, self.b),
            start_angle: self.sa,
            sweep_angle: self.ca - self.sa,
            x_rotation: self.rotation,
        };
        let mut path = BezPath::new();
        path.move_to(self.shape().start());
        for el in arc.append_iter(ARC_TOLERANCE) {
            path.push(el);
        }
        surface.stroke(&(Affine::translate(offset) * path), &self.pen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CoordMode;
    use crate::surface::{DrawOp, RecordingSurface};
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn turtle() -> Turtle {
        Turtle::recording(400, 400, CoordMode::Display)
    }

    #[test]
    fn test_turn_takes_time_at_angular_speed() {
        let mut turtle = turtle();
        // 5π rad/s, so a quarter turn takes 100ms
        let mut run = TurnRun::start(FRAC_PI_2, Turning::Right, &turtle);
        assert_eq!(run.advance(&mut turtle, 50.0), Progress::Running);
        assert!((turtle.heading - PI / 4.0).abs() < 1e-9);
        match run.advance(&mut turtle, 80.0) {
            Progress::Done(left) => assert!((left - 30.0).abs() < 1e-6),
            other => panic!("Turn should have finished, got {:?}", other),
        }
        assert!((turtle.heading - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_left_turn_leftover_is_positive() {
        let mut turtle = turtle();
        let mut run = TurnRun::start(FRAC_PI_2, Turning::Left, &turtle);
        match run.advance(&mut turtle, 150.0) {
            Progress::Done(left) => assert!((left - 50.0).abs() < 1e-6),
            other => panic!("Turn should have finished, got {:?}", other),
        }
        assert!((turtle.heading - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_move_backwards() {
        let mut turtle = turtle();
        let mut run = MoveRun::start(-30.0, &turtle);
        // 200px/s covers 30px in 150ms whichever way we face
        assert_eq!(run.advance(&mut turtle, 100.0), Progress::Running);
        assert!((turtle.x + 20.0).abs() < 1e-9);
        match run.advance(&mut turtle, 100.0) {
            Progress::Done(left) => assert!((left - 50.0).abs() < 1e-6),
            other => panic!("Move should have finished, got {:?}", other),
        }
        assert_eq!((turtle.x, turtle.y), (-30.0, 0.0));
    }

    #[test]
    fn test_zero_move_is_instant() {
        let mut turtle = turtle();
        let mut run = MoveRun::start(0.0, &turtle);
        assert_eq!(run.advance(&mut turtle, 20.0), Progress::Done(20.0));
    }

    #[test]
    fn test_move_renders_partial_line() {
        let mut turtle = turtle();
        let mut run = MoveRun::start(100.0, &turtle);
        run.advance(&mut turtle, 250.0);
        let mut surface = RecordingSurface::new(400, 400);
        run.render(&mut surface, Vec2::new(200.0, 200.0));
        match &surface.ops()[0] {
            DrawOp::Stroke(path, pen) => {
                let els = path.elements();
                assert_eq!(els[0], kurbo::PathEl::MoveTo(Point::new(200.0, 200.0)));
                assert_eq!(els[1], kurbo::PathEl::LineTo(Point::new(250.0, 200.0)));
                assert_eq!(pen.color, "black");
            }
            other => panic!("Expected a stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_right_half_circle() {
        let mut turtle = turtle();
        turtle.style.animate = false;
        let mut run = ArcRun::start(50.0, 50.0, PI, Turning::Right, &turtle);
        assert_eq!(run.advance(&mut turtle, 5.0), Progress::Done(5.0));
        // Centre is below us on a y-down screen, half way round is 100px down
        assert!(turtle.x.abs() < 1e-9);
        assert!((turtle.y - 100.0).abs() < 1e-9);
        assert!((turtle.heading - PI).abs() < 1e-9);
    }

    #[test]
    fn test_left_quarter_arc_timing() {
        let mut turtle = turtle();
        let mut run = ArcRun::start(100.0, 100.0, FRAC_PI_2, Turning::Left, &turtle);
        // Quarter of a 100px circle is 50π px, at 200px/s that's 250π ms
        let needed = 250.0 * PI;
        assert_eq!(run.advance(&mut turtle, needed / 2.0), Progress::Running);
        match run.advance(&mut turtle, needed / 2.0 + 10.0) {
            Progress::Done(left) => assert!((left - 10.0).abs() < 1e-6),
            other => panic!("Arc should have finished, got {:?}", other),
        }
        assert!((turtle.x - 100.0).abs() < 1e-9);
        assert!((turtle.y + 100.0).abs() < 1e-9);
        assert!((turtle.heading - 3.0 * FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_arc_is_degenerate() {
        let mut turtle = turtle();
        let mut run = ArcRun::start(10.0, 10.0, PI, Turning::Nearest, &turtle);
        assert_eq!(run.advance(&mut turtle, 7.0), Progress::Done(7.0));
        assert_eq!((turtle.x, turtle.y, turtle.heading), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_arc_samples_spacing() {
        let turtle = turtle();
        let mut run = ArcRun::start(100.0, 100.0, TAU, Turning::Right, &turtle);
        run.ca = run.ea;
        let samples = run.samples();
        // 200π px of circle in chunks of at most 20px
        assert_eq!(samples.len(), 32);
        let (x, y) = samples[samples.len() - 1];
        assert!(x.abs() < 1e-9 && y.abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn turns_end_on_target(start in 0.0f64..TAU, angle in 0.0f64..TAU, which in 0usize..3) {
            let mut turtle = turtle();
            turtle.heading = start;
            let turning = [Turning::Left, Turning::Nearest, Turning::Right][which];
            let mut run = TurnRun::start(angle, turning, &turtle);
            let mut spins = 0;
            while let Progress::Running = run.advance(&mut turtle, 16.0) {
                spins += 1;
                prop_assert!(spins < 1000);
            }
            let target = match turning {
                Turning::Nearest => norm_angle(angle),
                _ => norm_angle(start + turning.sign() * angle),
            };
            prop_assert!(turtle.heading >= 0.0 && turtle.heading < TAU);
            let miss = crate::geometry::wrap_signed(turtle.heading - target).abs();
            prop_assert!(miss < 1e-9);
        }
    }
}
