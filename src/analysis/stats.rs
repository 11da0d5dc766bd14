//! Aggregate statistics over ranked colours.

use std::collections::BTreeMap;

use crate::types::{round2, ColorBucket, ColorName, ColorStats};

use super::naming;

/// Summarize a set of buckets.
///
/// Saturation and lightness are plain means over the representative
/// colours, not weighted by pixel share. The distribution sums bucket
/// percentages per canonical name. Returns `None` for an empty set.
pub fn summarize(colors: &[ColorBucket], total_pixels: usize) -> Option<ColorStats> {
    if colors.is_empty() {
        return None;
    }

    let mut saturation = 0.0;
    let mut lightness = 0.0;
    let mut distribution: BTreeMap<ColorName, f64> = BTreeMap::new();

    for bucket in colors {
        let hsl = bucket.colour().hsl();
        saturation += hsl.saturation;
        lightness += hsl.lightness;

        let name = bucket.name.unwrap_or_else(|| naming::classify(hsl));
        *distribution.entry(name).or_insert(0.0) += bucket.percentage;
    }

    for share in distribution.values_mut() {
        *share = round2(*share);
    }

    let n = colors.len() as f64;
    Some(ColorStats {
        total_colors: colors.len(),
        total_pixels,
        processed_pixels: colors.iter().map(|c| c.count).sum(),
        color_distribution: distribution,
        average_saturation: round2(saturation / n),
        average_lightness: round2(lightness / n),
    })
}
