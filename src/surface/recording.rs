//! An in-memory [`Surface`] that remembers every draw call. Handy as a
//! backing store for headless turtles, and it can hand the drawing over as an
//! SVG document.
use kurbo::{Affine, BezPath, PathEl, Vec2};
use log::debug;
use std::any::Any;
use std::rc::Rc;
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

use super::{PenStroke, Surface, TextRun};
use crate::font::FontDescriptor;
use crate::geometry::CoordMode;

/// Glyphs are assumed to be this fraction of the font size wide when measuring.
const GLYPH_ASPECT: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Stroke(BezPath, PenStroke),
    Fill(BezPath, String),
    Text(TextRun),
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> RecordingSurface {
        RecordingSurface {
            width,
            height,
            ops: vec![],
        }
    }

    /// Everything drawn since the last clear, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Export strokes and fills as an SVG document sized to the surface.
    /// Text runs are left out; they need a font engine to become paths.
    pub fn to_svg(&self) -> Document {
        let mut doc = Document::new()
            .set("viewBox", (0, 0, self.width, self.height))
            .set("width", self.width)
            .set("height", self.height);
        for (id, op) in self.ops.iter().enumerate() {
            match op {
                DrawOp::Stroke(path, pen) => {
                    let mut node = Path::new()
                        .set("id", format!("stroke-{}", id))
                        .set("d", Self::path_data(path))
                        .set("fill", "none")
                        .set("stroke", pen.color.clone())
                        .set("stroke-width", pen.width)
                        .set("stroke-linecap", pen.cap.to_string());
                    if !pen.dash.is_empty() {
                        let dash: Vec<String> = pen.dash.iter().map(|d| d.to_string()).collect();
                        node = node
                            .set("stroke-dasharray", dash.join(" "))
                            .set("stroke-dashoffset", pen.dash_offset);
                    }
                    doc = doc.add(node);
                }
                DrawOp::Fill(path, color) => {
                    doc = doc.add(
                        Path::new()
                            .set("id", format!("fill-{}", id))
                            .set("d", Self::path_data(path))
                            .set("fill", color.clone())
                            .set("stroke", "none"),
                    );
                }
                DrawOp::Text(run) => debug!("Leaving text '{}' out of svg export", run.text),
            }
        }
        doc
    }

    fn path_data(path: &BezPath) -> Data {
        let mut data = Data::new();
        for el in path.iter() {
            data = match el {
                PathEl::MoveTo(p) => data.move_to((p.x, p.y)),
                PathEl::LineTo(p) => data.line_to((p.x, p.y)),
                PathEl::QuadTo(p1, p2) => data.quadratic_curve_to((p1.x, p1.y, p2.x, p2.y)),
                PathEl::CurveTo(p1, p2, p3) => {
                    data.cubic_curve_to((p1.x, p1.y, p2.x, p2.y, p3.x, p3.y))
                }
                PathEl::ClosePath => data.close(),
            };
        }
        data
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn stroke(&mut self, path: &BezPath, pen: &PenStroke) {
        self.ops.push(DrawOp::Stroke(path.clone(), pen.clone()));
    }

    fn fill(&mut self, path: &BezPath, color: &str) {
        self.ops.push(DrawOp::Fill(path.clone(), color.to_string()));
    }

    fn text(&mut self, run: &TextRun) {
        self.ops.push(DrawOp::Text(run.clone()));
    }

    fn measure_text(&self, text: &str, font: &str) -> f64 {
        let size = font
            .parse::<FontDescriptor>()
            .map(|font| font.size_px())
            .unwrap_or_else(|_| FontDescriptor::default().size_px());
        text.chars().count() as f64 * size * GLYPH_ASPECT
    }

    /// The copy is re-oriented about the surface centre so it reads the same
    /// way the turtle's mode displays it.
    fn snapshot(&self, mode: CoordMode) -> Rc<dyn Surface> {
        let centre = Vec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0);
        let orient = match mode {
            CoordMode::Logo => Affine::rotate(mode.screen_rotation()),
            CoordMode::Standard => Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, 0.0]),
            CoordMode::Display => Affine::new([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]),
        };
        let xform = Affine::translate(centre) * orient * Affine::translate(-centre);
        let ops = self
            .ops
            .iter()
            .map(|op| match op {
                DrawOp::Stroke(path, pen) => DrawOp::Stroke(xform * path.clone(), pen.clone()),
                DrawOp::Fill(path, color) => DrawOp::Fill(xform * path.clone(), color.clone()),
                DrawOp::Text(run) => {
                    let mut run = run.clone();
                    run.origin = xform * run.origin;
                    run.rotation += mode.screen_rotation();
                    run.mirrored ^= mode.flips_y();
                    DrawOp::Text(run)
                }
            })
            .collect();
        Rc::new(RecordingSurface {
            width: self.width,
            height: self.height,
            ops,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
