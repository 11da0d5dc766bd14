//! RGB colour type, hex parsing, and HSL derivation.

use std::fmt;
use std::str::FromStr;

use crate::error::{AnalyzerError, Result};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Parse a `#RRGGBB` hex string. The leading `#` is optional and
    /// digits are case-insensitive.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(AnalyzerError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RRGGBB format".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::new(r, g, b))
    }

    /// Uppercase `#RRGGBB` encoding.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// CSS functional notation, e.g. `rgb(255, 0, 0)`.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Hue/saturation/lightness of this colour.
    pub fn hsl(self) -> Hsl {
        Hsl::from(self)
    }
}

impl FromStr for Rgb {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| AnalyzerError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

/// HSL representation used for naming and statistics.
///
/// `hue` is a whole number of degrees in `[0, 360)`. `saturation` and
/// `lightness` are unrounded percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl From<Rgb> for Hsl {
    fn from(c: Rgb) -> Self {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);

        let l = (f64::from(max) + f64::from(min)) / 2.0 / 255.0;
        let delta = f64::from(max - min) / 255.0;

        // Grey axis (including pure black and white) has no chroma.
        let saturation = if max == min {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs()) * 100.0
        };

        Self {
            hue: hue_degrees(c, max, min),
            saturation,
            lightness: l * 100.0,
        }
    }
}

/// Six-sector hue in whole degrees, wrapped into `[0, 360)`.
fn hue_degrees(c: Rgb, max: u8, min: u8) -> f64 {
    if max == min {
        return 0.0;
    }

    let (r, g, b) = (f64::from(c.r), f64::from(c.g), f64::from(c.b));
    let delta = f64::from(max - min);

    let sector = if max == c.r {
        ((g - b) / delta) % 6.0
    } else if max == c.g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    // Halves round towards positive infinity, so -30.5 lands on 330 rather than 329.
    let hue = (sector * 60.0 + 0.5).floor();
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
