//! Ordering buckets by frequency and selecting the top N.

use std::cmp::Ordering;

use crate::error::{AnalyzerError, Result};
use crate::types::{round2, ColorBucket};

use super::histogram::Histogram;
use super::naming;

/// All buckets in rank order, plus how many of them form the top N.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    colors: Vec<ColorBucket>,
    top: usize,
}

impl Ranking {
    /// Every bucket, most frequent first.
    pub fn colors(&self) -> &[ColorBucket] {
        &self.colors
    }

    /// The first `min(N, distinct buckets)` entries.
    pub fn top(&self) -> &[ColorBucket] {
        &self.colors[..self.top]
    }

    /// The most frequent bucket, if any pixels were counted.
    pub fn dominant(&self) -> Option<&ColorBucket> {
        self.colors.first()
    }
}

/// Materialize and rank every bucket of `histogram`.
///
/// Buckets are ordered by count, descending. Equal counts keep the order
/// in which the histogram first saw them.
pub fn rank(histogram: &Histogram, top_n: usize, include_names: bool) -> Result<Ranking> {
    if top_n == 0 {
        return Err(AnalyzerError::validation(
            "top colours count must be at least 1",
            None,
        ));
    }

    let total = histogram.total();
    let mut ranked: Vec<(usize, ColorBucket)> = histogram
        .iter()
        .enumerate()
        .map(|(first_seen, (key, count))| {
            let colour = key.colour();
            let bucket = ColorBucket {
                rgb: colour.css(),
                hex: colour.to_hex(),
                r: colour.r,
                g: colour.g,
                b: colour.b,
                count,
                percentage: percentage(count, total),
                name: include_names.then(|| naming::name(colour)),
            };
            (first_seen, bucket)
        })
        .collect();

    ranked.sort_by(|(seen_a, a), (seen_b, b)| by_count_then_first_seen(a.count, *seen_a, b.count, *seen_b));

    let colors: Vec<ColorBucket> = ranked.into_iter().map(|(_, bucket)| bucket).collect();
    let top = top_n.min(colors.len());

    Ok(Ranking { colors, top })
}

fn by_count_then_first_seen(count_a: usize, seen_a: usize, count_b: usize, seen_b: usize) -> Ordering {
    count_b.cmp(&count_a).then(seen_a.cmp(&seen_b))
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}
