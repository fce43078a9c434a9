//! Cursor shapes. The images themselves belong to whoever composites the
//! turtle onto the screen; the engine only tracks which one is active and
//! where its hotspot sits.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TurtleError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    Arrow,
    Ball,
    #[default]
    Dart,
    Diamond,
    Hexagon,
    Star,
    Triangle,
    Turtle,
}

impl CursorShape {
    pub const ALL: [CursorShape; 8] = [
        CursorShape::Arrow,
        CursorShape::Ball,
        CursorShape::Dart,
        CursorShape::Diamond,
        CursorShape::Hexagon,
        CursorShape::Star,
        CursorShape::Triangle,
        CursorShape::Turtle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CursorShape::Arrow => "arrow",
            CursorShape::Ball => "ball",
            CursorShape::Dart => "dart",
            CursorShape::Diamond => "diamond",
            CursorShape::Hexagon => "hexagon",
            CursorShape::Star => "star",
            CursorShape::Triangle => "triangle",
            CursorShape::Turtle => "turtle",
        }
    }
}

impl fmt::Display for CursorShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CursorShape {
    type Err = TurtleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CursorShape::ALL
            .iter()
            .find(|shape| shape.name() == wanted)
            .copied()
            .ok_or_else(|| TurtleError::UnknownCursor(s.to_string()))
    }
}

/// The active cursor: a shape plus its hotspot, normalised to the image
/// bounds so (0.5, 0.5) is the middle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub shape: CursorShape,
    pub hotspot: (f64, f64),
}

impl Cursor {
    pub fn new(shape: CursorShape) -> Cursor {
        Cursor {
            shape,
            hotspot: (0.5, 0.5),
        }
    }

    pub fn with_hotspot(mut self, hx: f64, hy: f64) -> Cursor {
        self.hotspot = (hx.clamp(0.0, 1.0), hy.clamp(0.0, 1.0));
        self
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::new(CursorShape::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("Turtle".parse::<CursorShape>(), Ok(CursorShape::Turtle));
        for shape in CursorShape::ALL {
            assert_eq!(shape.to_string().parse::<CursorShape>(), Ok(shape));
        }
        assert_eq!(
            "squid".parse::<CursorShape>(),
            Err(TurtleError::UnknownCursor("squid".to_string()))
        );
    }

    #[test]
    fn test_hotspot_is_clamped() {
        let cursor = Cursor::new(CursorShape::Arrow).with_hotspot(-1.0, 0.25);
        assert_eq!(cursor.hotspot, (0.0, 0.25));
        assert_eq!(Cursor::default().shape, CursorShape::Dart);
    }
}
