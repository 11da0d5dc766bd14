//! Report types produced by an analysis run.
//!
//! Every type here serializes with camelCase field names so the JSON
//! report matches what downstream tooling expects.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{ColorName, Rgb};

/// One quantized colour and its share of the image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorBucket {
    /// CSS notation of the quantized colour.
    pub rgb: String,

    /// Uppercase `#RRGGBB` of the quantized colour.
    pub hex: String,

    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// Number of pixels that fell into this bucket.
    pub count: usize,

    /// Share of all processed pixels, rounded to two decimals.
    pub percentage: f64,

    /// Canonical name, present when names were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ColorName>,
}

impl ColorBucket {
    /// Representative colour of the bucket.
    pub fn colour(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Metadata about the source image (pre-resize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Lowercase format name, e.g. `png` or `jpeg`.
    pub format: String,
    /// Channels per pixel in the decoded image.
    pub channels: u8,
    /// Size of the source file in bytes.
    pub byte_size: u64,
}

/// Aggregate statistics over a set of colour buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorStats {
    /// Number of buckets summarized.
    pub total_colors: usize,
    pub total_pixels: usize,
    pub processed_pixels: usize,
    /// Summed percentage per canonical name.
    pub color_distribution: BTreeMap<ColorName, f64>,
    /// Unweighted mean saturation of the representative colours.
    pub average_saturation: f64,
    /// Unweighted mean lightness of the representative colours.
    pub average_lightness: f64,
}

/// Final report for one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub success: bool,
    pub dominant_color: Option<ColorBucket>,
    pub top_colors: Vec<ColorBucket>,
    pub image_info: ImageInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_stats: Option<ColorStats>,
    pub processing_time_ms: u64,
}
