//! The rendering adapter boundary. Tasks never touch pixels; they describe
//! finished (or in-progress) strokes, fills and text to a [`Surface`], which
//! is whatever 2D drawing context the host provides.
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::errors::TurtleError;
use crate::geometry::CoordMode;

pub mod recording;

pub use recording::{DrawOp, RecordingSurface};

/// Line end style.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    Square,
    #[default]
    Round,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineCap::Butt => write!(f, "butt"),
            LineCap::Square => write!(f, "square"),
            LineCap::Round => write!(f, "round"),
        }
    }
}

/// Horizontal text anchoring for [`crate::turtle::Turtle::write`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for TextAlign {
    type Err = TurtleError;

    /// Unknown alignments read as left, like the canvas default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "right" => TextAlign::Right,
            "center" | "centre" => TextAlign::Center,
            _ => TextAlign::Left,
        })
    }
}

/// Everything a surface needs to stroke a path the way the pen was set up
/// when the stroke started.
#[derive(Debug, Clone, PartialEq)]
pub struct PenStroke {
    pub color: String,
    pub width: f64,
    pub cap: LineCap,
    pub dash: Vec<f64>,
    pub dash_offset: f64,
}

/// A single line of text, already positioned in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub origin: Point,
    /// Rotation of the baseline, radians.
    pub rotation: f64,
    pub align: TextAlign,
    pub font: String,
    pub color: String,
    /// Drawn mirrored top to bottom (Standard mode surfaces are y-up).
    pub mirrored: bool,
}

/// # Surface
///
/// A drawing context able to take committed turtle output. Coordinates are
/// pen space shifted by whatever offset the caller of a task's `render` passed,
/// so the backing store receives them centred on its own middle.
///
/// Colours are opaque strings; the surface is expected to understand CSS
/// colour syntax. The engine never parses them.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Wipe everything drawn so far.
    fn clear(&mut self);

    /// Stroke an open or closed path.
    fn stroke(&mut self, path: &BezPath, pen: &PenStroke);

    /// Fill the region enclosed by a path.
    fn fill(&mut self, path: &BezPath, color: &str);

    fn text(&mut self, run: &TextRun);

    /// Advance width of `text` when drawn in `font`.
    fn measure_text(&self, text: &str, font: &str) -> f64;

    /// A copy of the current contents, turned the right way up for `mode`.
    fn snapshot(&self, mode: CoordMode) -> Rc<dyn Surface>;

    /// For hosts that need their concrete surface back.
    fn as_any(&self) -> &dyn Any;
}
