use bitflags::bitflags;

use super::Turtle;
use crate::config::TurtleConfig;
use crate::surface::{LineCap, PenStroke};

bitflags! {
    /// What a pop restores from the style stack.
    pub struct PopFlags: u8 {
        const STYLE = 0b01;
        const POSITION = 0b10;
        const STYLE_POSITION = Self::STYLE.bits | Self::POSITION.bits;
    }
}

impl Default for PopFlags {
    fn default() -> Self {
        PopFlags::STYLE_POSITION
    }
}

/// Every visual and behavioural attribute the style stack saves. Position
/// and heading are kept apart so they can be restored on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub pen_down: bool,
    pub pen_size: f64,
    pub dash: Vec<f64>,
    pub dash_offset: f64,
    pub cap: LineCap,
    pub pen_color: String,
    pub fill_color: String,
    pub animate: bool,
    pub visible: bool,
    /// Cursor rotation override, radians. `None` follows the heading.
    pub tilt: Option<f64>,
    /// Pixels per second.
    pub linear_speed: f64,
    /// Radians per second.
    pub angular_speed: f64,
}

impl Style {
    pub fn from_config(config: &TurtleConfig) -> Style {
        Style {
            pen_down: true,
            pen_size: config.pen_size,
            dash: vec![],
            dash_offset: 0.0,
            cap: LineCap::Round,
            pen_color: config.pen_color.clone(),
            fill_color: config.fill_color.clone(),
            animate: true,
            visible: true,
            tilt: None,
            linear_speed: config.linear_speed,
            angular_speed: config.angular_speed,
        }
    }

    /// The stroke settings as they stand right now.
    pub fn pen_stroke(&self) -> PenStroke {
        PenStroke {
            color: self.pen_color.clone(),
            width: self.pen_size,
            cap: self.cap,
            dash: self.dash.clone(),
            dash_offset: self.dash_offset,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::from_config(&TurtleConfig::default())
    }
}

/// One entry on the style stack.
#[derive(Debug, Clone, PartialEq)]
pub struct PenSnapshot {
    pub style: Style,
    /// x, y and heading in pen space.
    pub position: (f64, f64, f64),
}

impl Turtle {
    pub(crate) fn push_pen_state(&mut self) {
        self.stack.push(PenSnapshot {
            style: self.style.clone(),
            position: (self.x, self.y, self.heading),
        });
    }

    /// Popping an empty stack does nothing.
    pub(crate) fn pop_pen_state(&mut self, flags: PopFlags) {
        if let Some(saved) = self.stack.pop() {
            if flags.contains(PopFlags::STYLE) {
                self.style = saved.style;
            }
            if flags.contains(PopFlags::POSITION) {
                (self.x, self.y, self.heading) = saved.position;
            }
        }
    }
}
