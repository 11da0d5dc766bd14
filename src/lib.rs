//! color-analyzer - Ranked colour histograms for images
//!
//! Decodes an image, snaps its pixels onto a uniform colour grid, counts
//! them, and reports the most frequent colours with names and statistics.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod server;
pub mod source;
pub mod types;

pub use analysis::{
    analyze, analyze_buffer, color_palette, dominant_color, name, quantize, BucketKey, Histogram,
    QuantizationStep, Ranking,
};
pub use config::AnalyzeOptions;
pub use error::{AnalyzerError, Result};
pub use source::{LoadedImage, PixelBuffer};
pub use types::{AnalysisResult, ColorBucket, ColorName, ColorStats, Hsl, ImageInfo, Rgb};
