use std::f64::consts::PI;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::errors::TurtleError;

/// # TurtleConfig
///
/// The defaults a turtle starts with and returns to on `reset`. Every field
/// has a default, so a RON document only needs to name the fields it changes:
///
/// ```
/// use turtle_engine::config::TurtleConfig;
/// let config = TurtleConfig::from_ron_str("(pen_color: \"red\", pen_size: 4.0)").unwrap();
/// assert_eq!(config.pen_color, "red");
/// assert_eq!(config.linear_speed, 200.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TurtleConfig {
    /// Pixels per second.
    pub linear_speed: f64,
    /// Radians per second.
    pub angular_speed: f64,
    pub pen_color: String,
    pub fill_color: String,
    pub pen_size: f64,
    pub update_interval_ms: u64,
    pub font: String,
    /// Angles passed to commands are degrees (otherwise radians).
    pub degrees: bool,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            linear_speed: 200.0,
            angular_speed: 5.0 * PI,
            pen_color: "black".to_string(),
            fill_color: "white".to_string(),
            pen_size: 2.0,
            update_interval_ms: 25,
            font: "400 normal 14px sans-serif".to_string(),
            degrees: true,
        }
    }
}

impl TurtleConfig {
    pub fn from_ron_str(text: &str) -> Result<TurtleConfig, TurtleError> {
        Ok(ron::from_str(text)?)
    }

    pub fn to_ron_string(&self) -> String {
        ron::to_string(self).expect("A plain struct of numbers and strings always serializes")
    }

    pub fn from_file(path: &PathBuf) -> Result<TurtleConfig> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        let config = TurtleConfig::from_ron_str(data.as_str())?;
        Ok(config)
    }
}
