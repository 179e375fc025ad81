//! Hex, RGB and HSL colour conversion

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, ToolError};

fn hex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex colour regex"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Self {
            h: (h * 360.0).round() as u16,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

/// A colour parsed from strict `#RRGGBB` notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    /// Lower-case canonical hex
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl Color {
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if !hex_regex().is_match(trimmed) {
            return Err(ToolError::InvalidColor(trimmed.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&trimmed[range], 16).map_err(|_| ToolError::InvalidColor(trimmed.to_string()))
        };
        Ok(Self::from_rgb(Rgb { r: channel(1..3)?, g: channel(3..5)?, b: channel(5..7)? }))
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b),
            rgb,
            hsl: Hsl::from(rgb),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HEX: {}", self.hex)?;
        writeln!(f, "RGB: {}", self.rgb)?;
        write!(f, "HSL: {}", self.hsl)
    }
}
