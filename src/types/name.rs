//! Canonical colour names.

use std::fmt;

use serde::Serialize;

/// Coarse human-readable colour family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ColorName {
    Black,
    White,
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
}

impl ColorName {
    /// All names, in classification order.
    pub const ALL: [ColorName; 11] = [
        ColorName::Black,
        ColorName::White,
        ColorName::Gray,
        ColorName::Red,
        ColorName::Orange,
        ColorName::Yellow,
        ColorName::Green,
        ColorName::Cyan,
        ColorName::Blue,
        ColorName::Purple,
        ColorName::Pink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorName::Black => "Black",
            ColorName::White => "White",
            ColorName::Gray => "Gray",
            ColorName::Red => "Red",
            ColorName::Orange => "Orange",
            ColorName::Yellow => "Yellow",
            ColorName::Green => "Green",
            ColorName::Cyan => "Cyan",
            ColorName::Blue => "Blue",
            ColorName::Purple => "Purple",
            ColorName::Pink => "Pink",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
