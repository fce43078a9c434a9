//! Tasks that never animate themselves. Each one works out a short run of
//! primitive ops from the turtle's current state and has them spliced in
//! straight after itself, handing on its whole time budget.
use log::{error, warn};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{Op, Placement, Turning};
use crate::geometry::{distance, norm_angle, point_on_ellipse};
use crate::turtle::Turtle;

/// Turn to face home, walk there, then face heading 0.
pub fn home(turtle: &mut Turtle) {
    let dist = distance(turtle.x, turtle.y, 0.0, 0.0);
    let mut ops = vec![];
    if dist > 0.0 {
        ops.push(Op::Turn {
            angle: norm_angle((-turtle.y).atan2(-turtle.x)),
            turning: Turning::Nearest,
        });
        ops.push(Op::Move { distance: dist });
    }
    ops.push(Op::Turn {
        angle: 0.0,
        turning: Turning::Nearest,
    });
    turtle.inject(ops);
}

/// Resolve a caller's (x, y) into a pen space target. Absolute components
/// that are not finite keep the current coordinate; relative ones add nothing.
pub fn target(turtle: &Turtle, placement: Placement, x: f64, y: f64) -> (f64, f64) {
    let (px, py) = turtle.mode.public_to_pen(x, y);
    if !(px.is_finite() && py.is_finite()) {
        warn!("Replacing non-finite coordinates ({}, {})", x, y);
    }
    match placement {
        Placement::Absolute => (
            if px.is_finite() { px } else { turtle.x },
            if py.is_finite() { py } else { turtle.y },
        ),
        Placement::Relative => (
            turtle.x + if px.is_finite() { px } else { 0.0 },
            turtle.y + if py.is_finite() { py } else { 0.0 },
        ),
    }
}

/// Turn towards the target and walk there.
pub fn goto(placement: Placement, x: f64, y: f64, turtle: &mut Turtle) {
    let (ex, ey) = target(turtle, placement, x, y);
    let angle = norm_angle((ey - turtle.y).atan2(ex - turtle.x));
    let dist = distance(turtle.x, turtle.y, ex, ey);
    turtle.inject(vec![
        Op::Turn {
            angle,
            turning: Turning::Nearest,
        },
        Op::Move { distance: dist },
    ]);
}

/// Jump to a new position. While filling without `fill_gap` the current
/// fill is closed off and a new one started at the destination, which takes
/// three queued ops; otherwise the jump happens right here and this returns
/// true.
pub fn teleport(placement: Placement, x: f64, y: f64, fill_gap: bool, turtle: &mut Turtle) -> bool {
    if turtle.is_filling() && !fill_gap {
        turtle.inject(vec![
            Op::EndFill { close: false },
            Op::Teleport {
                placement,
                x,
                y,
                fill_gap: true,
            },
            Op::BeginFill,
        ]);
        return false;
    }
    let (ex, ey) = target(turtle, placement, x, y);
    turtle.x = ex;
    turtle.y = ey;
    turtle.track_gap(ex, ey);
    turtle.track_poly(ex, ey);
    true
}

/// Hop between `steps` points on an ellipse, then face the way a smooth arc
/// would have left us facing.
pub fn oval(ra: f64, rb: f64, extent: f64, turning: Turning, steps: u32, turtle: &mut Turtle) {
    let (a, b) = (ra.abs(), rb.abs());
    let turn = turning.sign();
    let sa = match turning {
        Turning::Left => FRAC_PI_2,
        Turning::Right => 3.0 * FRAC_PI_2,
        Turning::Nearest => {
            error!("Illegal turn direction for an oval, expected left or right");
            return;
        }
    };
    let steps = steps.max(1);
    let heading = turtle.heading;
    let cx = turtle.x - turn * b * heading.sin();
    let cy = turtle.y + turn * b * heading.cos();
    let delta = extent / steps as f64;
    let mut ops: Vec<Op> = (1..=steps)
        .map(|i| {
            let angle = sa + turn * delta * i as f64;
            let (ex, ey) = point_on_ellipse(cx, cy, a, b, heading, angle);
            let (x, y) = turtle.mode.pen_to_public(ex, ey);
            Op::GoTo {
                placement: Placement::Absolute,
                x,
                y,
            }
        })
        .collect();
    ops.push(Op::Turn {
        angle: norm_angle(heading + turn * extent),
        turning: Turning::Nearest,
    });
    turtle.inject(ops);
}

/// The circular arc that leaves us `distance` ahead along the current
/// heading, bulging `height` out to `side`. A flat bend is a plain move.
pub fn bend(
    distance: f64,
    height: f64,
    side: Turning,
    keep_heading: bool,
    steps: u32,
    turtle: &mut Turtle,
) {
    if height == 0.0 {
        turtle.inject(vec![Op::Move { distance }]);
        return;
    }
    let sign = side.sign();
    if sign == 0.0 {
        error!("Illegal turn direction for a bend, expected left or right");
        return;
    }
    let (x0, y0, heading) = (turtle.x, turtle.y, turtle.heading);
    let (x1, y1) = (x0 + distance * heading.cos(), y0 + distance * heading.sin());
    let (mx, my) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let len = crate::geometry::distance(x0, y0, x1, y1);
    if len == 0.0 {
        turtle.inject(vec![Op::Move { distance }]);
        return;
    }
    // Unit normal to the chord
    let (perp_x, perp_y) = (-(y1 - y0) / len, (x1 - x0) / len);
    let half_chord = distance / 2.0;
    let radius = (half_chord * half_chord / height + height) / 2.0;
    let r_h = radius - height;
    let mut extent = 2.0 * (half_chord / r_h).atan();
    if extent < 0.0 {
        extent += TAU;
    }
    let acx = mx - perp_x * sign * r_h;
    let acy = my - perp_y * sign * r_h;
    let start_angle = (y0 - acy).atan2(x0 - acx);

    let mut ops = vec![Op::Turn {
        angle: norm_angle(start_angle - sign * PI / 2.0),
        turning: Turning::Nearest,
    }];
    let turning = side.opposite();
    if steps == 0 {
        ops.push(Op::Arc {
            ra: radius,
            rb: radius,
            extent,
            turning,
        });
    } else {
        ops.push(Op::Oval {
            ra: radius,
            rb: radius,
            extent,
            turning,
            steps,
        });
    }
    if keep_heading {
        ops.push(Op::Turn {
            angle: heading,
            turning: Turning::Nearest,
        });
    }
    turtle.inject(ops);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CoordMode;

    fn pending_names(turtle: &Turtle) -> Vec<&'static str> {
        turtle.pending.iter().map(|task| task.op().name()).collect()
    }

    #[test]
    fn test_home_from_origin_only_turns() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        home(&mut turtle);
        assert_eq!(pending_names(&turtle), vec!["turn"]);
    }

    #[test]
    fn test_home_decomposes() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        turtle.x = 30.0;
        turtle.y = 40.0;
        home(&mut turtle);
        assert_eq!(pending_names(&turtle), vec!["turn", "move", "turn"]);
        match turtle.pending[1].op() {
            Op::Move { distance } => assert!((distance - 50.0).abs() < 1e-9),
            other => panic!("Expected a move, got {:?}", other),
        }
    }

    #[test]
    fn test_logo_goto_swaps_axes() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Logo);
        goto(Placement::Absolute, 0.0, 10.0, &mut turtle);
        match turtle.pending[0].op() {
            // Public y is pen x in logo mode, so this is straight along pen +x
            Op::Turn { angle, .. } => assert!(angle.abs() < 1e-12),
            other => panic!("Expected a turn, got {:?}", other),
        }
    }

    #[test]
    fn test_target_replaces_bad_numbers() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        turtle.x = 5.0;
        turtle.y = 6.0;
        assert_eq!(target(&turtle, Placement::Absolute, f64::NAN, 1.0), (5.0, 1.0));
        assert_eq!(target(&turtle, Placement::Relative, 2.0, f64::INFINITY), (7.0, 6.0));
    }

    #[test]
    fn test_flat_bend_is_a_move() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        bend(20.0, 0.0, Turning::Right, true, 0, &mut turtle);
        assert_eq!(pending_names(&turtle), vec!["move"]);
    }

    #[test]
    fn test_semicircle_bend() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        // Height equal to half the chord is a semicircle
        bend(20.0, 10.0, Turning::Right, false, 0, &mut turtle);
        assert_eq!(pending_names(&turtle), vec!["turn", "arc"]);
        match turtle.pending[1].op() {
            Op::Arc {
                ra, extent, turning, ..
            } => {
                assert!((ra - 10.0).abs() < 1e-9);
                assert!((extent - PI).abs() < 1e-9);
                assert_eq!(*turning, Turning::Left);
            }
            other => panic!("Expected an arc, got {:?}", other),
        }
    }

    #[test]
    fn test_oval_steps() {
        let mut turtle = Turtle::recording(100, 100, CoordMode::Display);
        oval(10.0, 10.0, TAU, Turning::Right, 4, &mut turtle);
        assert_eq!(
            pending_names(&turtle),
            vec!["goto", "goto", "goto", "goto", "turn"]
        );
        match turtle.pending[1].op() {
            Op::GoTo { x, y, .. } => {
                assert!(x.abs() < 1e-9);
                assert!((y - 20.0).abs() < 1e-9);
            }
            other => panic!("Expected a goto, got {:?}", other),
        }
    }
}
