//! Small, stateless helpers for the angle and ellipse math that the motion
//! tasks share. Everything here works in radians and pen space.
use std::f64::consts::{PI, TAU};

pub mod mode;

pub use mode::CoordMode;

/// Helper function to convert degrees to radians
pub fn radians(deg: f64) -> f64 {
    PI * (deg / 180.0)
}

/// And back again
pub fn degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wraps an angle into `[0, modulus)`. Used with TAU for radians and 360 for degrees.
pub fn norm_angle_mod(angle: f64, modulus: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(modulus);
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if wrapped >= modulus {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an angle in radians into `[0, 2π)`.
pub fn norm_angle(angle: f64) -> f64 {
    norm_angle_mod(angle, TAU)
}

/// Linear interpolation, t=0 gives v0 and t=1 gives v1.
pub fn lerp(t: f64, v0: f64, v1: f64) -> f64 {
    v0 + t * (v1 - v0)
}

/// Inverse of lerp: where does v sit between v0 and v1?
pub fn unlerp(v: f64, v0: f64, v1: f64) -> f64 {
    (v - v0) / (v1 - v0)
}

pub fn distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
}

/// Approximate perimeter of an ellipse with semi-axes a and b (Ramanujan's
/// second approximation). Exact for circles.
pub fn perimeter(a: f64, b: f64) -> f64 {
    if a + b == 0.0 {
        return 0.0;
    }
    let h = (a - b).powi(2) / (a + b).powi(2);
    PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
}

/// Point at parametric angle `angle` on an ellipse centred on (cx, cy) with
/// semi-axes ra, rb, the whole ellipse rotated by `rotation`.
pub fn point_on_ellipse(cx: f64, cy: f64, ra: f64, rb: f64, rotation: f64, angle: f64) -> (f64, f64) {
    let (px, py) = (ra * angle.cos(), rb * angle.sin());
    let (sin_r, cos_r) = rotation.sin_cos();
    (cx + px * cos_r - py * sin_r, cy + py * cos_r + px * sin_r)
}

/// Direction of the shortest turn from heading `sa` to heading `ea`.
///
/// The difference is wrapped into (-π, π] so an exact half turn comes back
/// as +1. Returns 0 when the headings already agree.
pub fn turn_direction(sa: f64, ea: f64) -> f64 {
    let delta = wrap_signed(norm_angle(ea) - norm_angle(sa));
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Wraps a difference of two normalised angles into (-π, π].
pub fn wrap_signed(delta: f64) -> f64 {
    if delta > -PI && delta <= PI {
        delta
    } else if delta > PI {
        delta - TAU
    } else {
        delta + TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_norm_angle() {
        assert!((norm_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
        assert!(norm_angle(TAU).abs() < 1e-12);
        assert!((norm_angle(5.0 * PI) - PI).abs() < 1e-9);
        assert_eq!(norm_angle_mod(-90.0, 360.0), 270.0);
        assert_eq!(norm_angle(f64::NAN), 0.0);
    }

    #[test]
    fn test_perimeter_of_circle() {
        assert!((perimeter(10.0, 10.0) - TAU * 10.0).abs() < 1e-9);
        assert_eq!(perimeter(0.0, 0.0), 0.0);
        // A flat ellipse degenerates to a line walked twice
        assert!((perimeter(10.0, 0.0) - 40.0).abs() < 0.1);
    }

    #[test]
    fn test_point_on_ellipse() {
        let (x, y) = point_on_ellipse(5.0, 5.0, 10.0, 4.0, 0.0, PI / 2.0);
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - 9.0).abs() < 1e-9);
        let (x, y) = point_on_ellipse(0.0, 0.0, 10.0, 4.0, PI / 2.0, 0.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_half_turn_goes_right() {
        assert_eq!(turn_direction(0.0, PI), 1.0);
        assert_eq!(turn_direction(PI, 0.0), 1.0);
        assert_eq!(turn_direction(1.0, 1.0), 0.0);
        assert_eq!(turn_direction(0.0, 3.0 * PI / 2.0), -1.0);
    }

    proptest! {
        #[test]
        fn shortest_turn_never_exceeds_half_circle(sa in 0.0f64..TAU, ea in 0.0f64..TAU) {
            let dir = turn_direction(sa, ea);
            let delta = wrap_signed(ea - sa);
            prop_assert!(delta.abs() <= PI + 1e-12);
            if delta != 0.0 {
                prop_assert_eq!(dir, delta.signum());
            } else {
                prop_assert_eq!(dir, 0.0);
            }
            // Walking dir * |delta| from sa lands on ea
            let end = norm_angle(sa + dir * delta.abs());
            let miss = wrap_signed(end - norm_angle(ea)).abs();
            prop_assert!(miss < 1e-9);
        }
    }
}
