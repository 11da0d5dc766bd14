//! Uniform grid quantization of RGB triples.

use crate::error::{AnalyzerError, Result};
use crate::types::Rgb;

/// Bucket edge size. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantizationStep(u32);

impl QuantizationStep {
    /// Every colour is its own bucket.
    pub const EXACT: Self = Self(1);

    pub fn new(step: u32) -> Result<Self> {
        if step == 0 {
            return Err(AnalyzerError::validation(
                "colour quantization must be at least 1",
                Some("Use 1 for an exact histogram or a larger step to merge similar colours"),
            ));
        }
        Ok(Self(step))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// A quantized colour, usable as a hash key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketKey(Rgb);

impl BucketKey {
    /// Pack as `r << 16 | g << 8 | b`.
    pub fn packed(self) -> u32 {
        let Rgb { r, g, b } = self.0;
        u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b)
    }

    pub fn from_packed(packed: u32) -> Self {
        Self(Rgb::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8))
    }

    /// Representative colour of the bucket.
    pub fn colour(self) -> Rgb {
        self.0
    }
}

/// Snap each channel down to the nearest multiple of `step`.
pub fn quantize(colour: Rgb, step: QuantizationStep) -> BucketKey {
    BucketKey(Rgb::new(
        snap(colour.r, step.0),
        snap(colour.g, step.0),
        snap(colour.b, step.0),
    ))
}

#[inline]
fn snap(channel: u8, step: u32) -> u8 {
    // floor(c / step) * step <= c, so the result always fits in a u8
    (u32::from(channel) / step * step) as u8
}
