//! Font descriptor strings, in the `"<weight> [style] <size><unit> <family>"`
//! form the text collaborators expect, e.g. `400 italic 14px "Noto Sans"`.
use std::fmt;
use std::str::FromStr;

use crate::errors::TurtleError;

const STYLES: [&str; 3] = ["normal", "italic", "oblique"];
const UNITS: [&str; 5] = ["px", "pt", "rem", "em", "%"];

#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub weight: u16,
    pub style: Option<String>,
    pub size: f64,
    pub unit: String,
    pub family: String,
}

impl FontDescriptor {
    /// Size converted to pixels, assuming a 16px root font.
    pub fn size_px(&self) -> f64 {
        match self.unit.as_str() {
            "pt" => self.size * 4.0 / 3.0,
            "em" | "rem" => self.size * 16.0,
            "%" => self.size * 0.16,
            _ => self.size,
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            weight: 400,
            style: Some("normal".to_string()),
            size: 14.0,
            unit: "px".to_string(),
            family: "sans-serif".to_string(),
        }
    }
}

impl FromStr for FontDescriptor {
    type Err = TurtleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |why: &str| TurtleError::InvalidFont(format!("'{}': {}", s, why));
        let mut rest = s.trim();

        let (weight, tail) = split_token(rest).ok_or_else(|| bad("empty"))?;
        let weight: u16 = weight.parse().map_err(|_| bad("weight is not a number"))?;
        if !(1..=1000).contains(&weight) {
            return Err(bad("weight must be between 1 and 1000"));
        }
        rest = tail;

        let (mut token, mut tail) = split_token(rest).ok_or_else(|| bad("missing size"))?;
        let style = if STYLES.contains(&token) {
            let style = token.to_string();
            (token, tail) = split_token(tail).ok_or_else(|| bad("missing size"))?;
            Some(style)
        } else {
            None
        };

        let unit = UNITS
            .iter()
            .find(|unit| token.ends_with(*unit))
            .ok_or_else(|| bad("size needs a unit"))?;
        let size: f64 = token[..token.len() - unit.len()]
            .parse()
            .map_err(|_| bad("size is not a number"))?;
        if !(size.is_finite() && size > 0.0) {
            return Err(bad("size must be positive"));
        }

        let family = tail.trim().trim_matches(|c| c == '"' || c == '\'');
        if family.is_empty() {
            return Err(bad("missing family"));
        }

        Ok(FontDescriptor {
            weight,
            style,
            size,
            unit: unit.to_string(),
            family: family.to_string(),
        })
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.weight)?;
        if let Some(style) = &self.style {
            write!(f, " {}", style)?;
        }
        write!(f, " {}{}", self.size, self.unit)?;
        if self.family.contains(' ') {
            write!(f, " \"{}\"", self.family)
        } else {
            write!(f, " {}", self.family)
        }
    }
}

fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(idx) => Some((&s[..idx], &s[idx..])),
        None => Some((s, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_fields() {
        let font: FontDescriptor = "400 normal 14px sans-serif".parse().unwrap();
        assert_eq!(font, FontDescriptor::default());
        assert_eq!(font.to_string(), "400 normal 14px sans-serif");
    }

    #[test]
    fn test_parse_quoted_family() {
        let font: FontDescriptor = "700 12pt \"Noto Sans Mono\"".parse().unwrap();
        assert_eq!(font.weight, 700);
        assert_eq!(font.style, None);
        assert_eq!(font.family, "Noto Sans Mono");
        assert!((font.size_px() - 16.0).abs() < 1e-9);
        assert_eq!(font.to_string(), "700 12pt \"Noto Sans Mono\"");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("".parse::<FontDescriptor>().is_err());
        assert!("bold 12px serif".parse::<FontDescriptor>().is_err());
        assert!("2000 12px serif".parse::<FontDescriptor>().is_err());
        assert!("400 italic twelve serif".parse::<FontDescriptor>().is_err());
        assert!("400 12px".parse::<FontDescriptor>().is_err());
    }
}
