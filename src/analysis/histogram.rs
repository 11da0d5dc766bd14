//! Quantized colour histogram.
//!
//! Counts live in an insertion-ordered arena indexed by the packed bucket
//! key, so iteration always yields buckets in the order they were first
//! seen. The ranker relies on that order to break ties.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::error::{AnalyzerError, Result};
use crate::source::PixelBuffer;
use crate::types::Rgb;

use super::quantize::{quantize, BucketKey, QuantizationStep};

/// Pixel count per quantized colour, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    entries: Vec<(BucketKey, usize)>,
    index: HashMap<u32, usize>,
    total: usize,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` pixels to the bucket for `key`.
    pub fn add(&mut self, key: BucketKey, count: usize) {
        match self.index.get(&key.packed()) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(key.packed(), self.entries.len());
                self.entries.push((key, count));
            }
        }
        self.total += count;
    }

    /// Fold another histogram into this one. Keys not yet present are
    /// appended in `other`'s first-seen order.
    pub fn merge(&mut self, other: Histogram) {
        for (key, count) in other.entries {
            self.add(key, count);
        }
    }

    /// Count for a single bucket, zero if never seen.
    pub fn count(&self, key: BucketKey) -> usize {
        self.index
            .get(&key.packed())
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Buckets with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (BucketKey, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct buckets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Sweep the buffer once, counting each pixel's quantized RGB.
///
/// Channels beyond the third (alpha or otherwise) are ignored.
pub fn build(pixels: &PixelBuffer, step: QuantizationStep) -> Result<Histogram> {
    let stride = check_stride(pixels)?;
    Ok(sweep(pixels.data(), stride, step))
}

/// Like [`build`], but counts row-aligned shards in parallel and merges
/// them in ascending shard order. The result, including first-seen
/// order, is identical to the sequential sweep.
pub fn build_sharded(pixels: &PixelBuffer, step: QuantizationStep, shards: usize) -> Result<Histogram> {
    let stride = check_stride(pixels)?;

    let row_bytes = pixels.width() as usize * stride;
    let rows = pixels.height() as usize;
    if shards <= 1 || row_bytes == 0 || rows == 0 {
        return Ok(sweep(pixels.data(), stride, step));
    }

    let rows_per_shard = rows.div_ceil(shards);
    let partials: Vec<Histogram> = pixels
        .data()
        .par_chunks(rows_per_shard * row_bytes)
        .map(|chunk| sweep(chunk, stride, step))
        .collect();

    let mut histogram = Histogram::new();
    for partial in partials {
        histogram.merge(partial);
    }
    Ok(histogram)
}

fn check_stride(pixels: &PixelBuffer) -> Result<usize> {
    let stride = pixels.channels() as usize;
    if stride < 3 {
        return Err(AnalyzerError::validation(
            format!(
                "histogram needs at least 3 channels per pixel, image has {}",
                stride
            ),
            Some("Grayscale images have no separable RGB channels"),
        ));
    }
    Ok(stride)
}

fn sweep(data: &[u8], stride: usize, step: QuantizationStep) -> Histogram {
    let mut histogram = Histogram::new();
    for px in data.chunks_exact(stride) {
        histogram.add(quantize(Rgb::new(px[0], px[1], px[2]), step), 1);
    }
    histogram
}
