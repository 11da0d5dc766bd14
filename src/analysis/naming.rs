//! HSL threshold classification into canonical colour names.

use crate::types::{round2, ColorName, Hsl, Rgb};

/// Lightness below which everything reads as black.
const BLACK_BELOW: f64 = 20.0;

/// Lightness above which everything reads as white.
const WHITE_ABOVE: f64 = 85.0;

/// Saturation below which a colour reads as grey.
const GRAY_BELOW: f64 = 15.0;

/// Upper hue bound (exclusive, degrees) for each family, checked in order.
const HUE_RANGES: [(f64, ColorName); 8] = [
    (15.0, ColorName::Red),
    (45.0, ColorName::Orange),
    (75.0, ColorName::Yellow),
    (165.0, ColorName::Green),
    (195.0, ColorName::Cyan),
    (255.0, ColorName::Blue),
    (285.0, ColorName::Purple),
    (330.0, ColorName::Pink),
];

/// Name the colour family of an RGB triple.
pub fn name(colour: Rgb) -> ColorName {
    classify(colour.hsl())
}

/// Name the colour family of an HSL value.
///
/// Lightness and saturation gates run before hue, since hue is unstable
/// near the grey axis. Both are compared at two-decimal precision.
pub fn classify(hsl: Hsl) -> ColorName {
    let lightness = round2(hsl.lightness);
    let saturation = round2(hsl.saturation);

    if lightness < BLACK_BELOW {
        return ColorName::Black;
    }
    if lightness > WHITE_ABOVE {
        return ColorName::White;
    }
    if saturation < GRAY_BELOW {
        return ColorName::Gray;
    }

    HUE_RANGES
        .iter()
        .find(|(upper, _)| hsl.hue < *upper)
        .map_or(ColorName::Red, |&(_, name)| name)
}
