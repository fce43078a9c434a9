//! Coordinate modes. Each mode fixes how pen space maps onto what the caller
//! sees (public coordinates), onto the screen, and how headings read.
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use super::norm_angle_mod;

/// The three turtle coordinate conventions.
///
/// * `Display`: screen convention, y grows downwards, heading 0 points right.
/// * `Standard`: y grows upwards, heading 0 points right.
/// * `Logo`: y grows upwards, heading 0 points up, x and y are swapped in pen space.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordMode {
    #[default]
    Display,
    Standard,
    Logo,
}

impl CoordMode {
    /// Pen space to the caller's coordinates.
    pub fn pen_to_public(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            CoordMode::Logo => (y, x),
            _ => (x, y),
        }
    }

    /// Caller's coordinates back to pen space. Swapping is its own inverse.
    pub fn public_to_pen(&self, x: f64, y: f64) -> (f64, f64) {
        self.pen_to_public(x, y)
    }

    /// Pen space to screen space, with (cx, cy) as the screen position of the origin.
    pub fn pen_to_screen(&self, x: f64, y: f64, cx: f64, cy: f64) -> (f64, f64) {
        let (px, py) = self.pen_to_public(x, y);
        Self::apply(&self.public_to_screen_matrix(cx, cy), px, py)
    }

    /// Screen space to the caller's coordinates, relative to an origin at (cx, cy).
    pub fn screen_to_mode(&self, x: f64, y: f64, cx: f64, cy: f64) -> (f64, f64) {
        Self::apply(&self.screen_to_public_matrix(cx, cy), x, y)
    }

    /// Heading as the caller reads it converted to a screen heading.
    /// `full_turn` is 360 for degrees or 2π for radians.
    pub fn mode_to_screen_angle(&self, angle: f64, full_turn: f64) -> f64 {
        match self {
            CoordMode::Display => norm_angle_mod(angle, full_turn),
            CoordMode::Standard => norm_angle_mod(full_turn - angle, full_turn),
            CoordMode::Logo => norm_angle_mod(angle - full_turn / 4.0, full_turn),
        }
    }

    /// Screen heading converted to the caller's heading.
    pub fn screen_to_mode_angle(&self, angle: f64, full_turn: f64) -> f64 {
        match self {
            CoordMode::Display => norm_angle_mod(angle, full_turn),
            CoordMode::Standard => norm_angle_mod(full_turn - angle, full_turn),
            CoordMode::Logo => norm_angle_mod(angle + full_turn / 4.0, full_turn),
        }
    }

    /// Rotation to apply to a pen-space drawing so it reads correctly on screen.
    pub fn screen_rotation(&self) -> f64 {
        match self {
            CoordMode::Logo => -FRAC_PI_2,
            _ => 0.0,
        }
    }

    /// True when the y axis points up on screen and drawings must be mirrored.
    pub fn flips_y(&self) -> bool {
        matches!(self, CoordMode::Standard)
    }

    fn public_to_screen_matrix(&self, cx: f64, cy: f64) -> Affine2<f64> {
        let sy = match self {
            CoordMode::Display => 1.0,
            _ => -1.0,
        };
        Affine2::from_matrix_unchecked(Matrix3::new(1.0, 0.0, cx, 0.0, sy, cy, 0.0, 0.0, 1.0))
    }

    fn screen_to_public_matrix(&self, cx: f64, cy: f64) -> Affine2<f64> {
        match self {
            CoordMode::Display => Affine2::from_matrix_unchecked(Matrix3::new(
                1.0, 0.0, -cx, 0.0, 1.0, -cy, 0.0, 0.0, 1.0,
            )),
            _ => Affine2::from_matrix_unchecked(Matrix3::new(
                1.0, 0.0, -cx, 0.0, -1.0, cy, 0.0, 0.0, 1.0,
            )),
        }
    }

    fn apply(affine: &Affine2<f64>, x: f64, y: f64) -> (f64, f64) {
        let out = affine * NPoint2::new(x, y);
        (out.x, out.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_display_is_identity() {
        let mode = CoordMode::Display;
        assert!(close(mode.pen_to_screen(3.0, 4.0, 0.0, 0.0), (3.0, 4.0)));
        assert!(close(mode.pen_to_screen(3.0, 4.0, 10.0, 20.0), (13.0, 24.0)));
        assert!(close(mode.screen_to_mode(13.0, 24.0, 10.0, 20.0), (3.0, 4.0)));
    }

    #[test]
    fn test_standard_flips_y() {
        let mode = CoordMode::Standard;
        assert!(close(mode.pen_to_public(3.0, 4.0), (3.0, 4.0)));
        assert!(close(mode.pen_to_screen(3.0, 4.0, 10.0, 20.0), (13.0, 16.0)));
        assert!(close(mode.screen_to_mode(13.0, 16.0, 10.0, 20.0), (3.0, 4.0)));
        assert_eq!(mode.mode_to_screen_angle(90.0, 360.0), 270.0);
        assert_eq!(mode.screen_to_mode_angle(270.0, 360.0), 90.0);
    }

    #[test]
    fn test_logo_swaps_and_rotates() {
        let mode = CoordMode::Logo;
        assert!(close(mode.pen_to_public(3.0, 4.0), (4.0, 3.0)));
        assert!(close(mode.pen_to_screen(3.0, 4.0, 10.0, 20.0), (14.0, 17.0)));
        assert!(close(mode.screen_to_mode(14.0, 17.0, 10.0, 20.0), (4.0, 3.0)));
        assert_eq!(mode.mode_to_screen_angle(0.0, 360.0), 270.0);
        assert_eq!(mode.screen_to_mode_angle(270.0, 360.0), 0.0);
    }

    #[test]
    fn test_angle_round_trip() {
        for mode in [CoordMode::Display, CoordMode::Standard, CoordMode::Logo] {
            for a in [0.0, 45.0, 90.0, 180.0, 300.0] {
                let back = mode.screen_to_mode_angle(mode.mode_to_screen_angle(a, 360.0), 360.0);
                assert!((back - a).abs() < 1e-9, "{:?} {}", mode, a);
            }
        }
    }
}
