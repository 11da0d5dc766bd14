//! End-to-end analysis: decode, count, rank, name, summarize.

use std::path::Path;
use std::time::Instant;

use crate::config::AnalyzeOptions;
use crate::error::Result;
use crate::source::{self, PixelBuffer};
use crate::types::{AnalysisResult, ColorBucket, ImageInfo};

use super::{histogram, rank, stats};

/// Analyze the image at `path`.
///
/// Options are validated before the file is touched.
pub fn analyze(path: &Path, options: &AnalyzeOptions) -> Result<AnalysisResult> {
    let started = Instant::now();
    options.validate()?;

    let loaded = source::load(path, options.max_dimension)?;
    assemble(&loaded.pixels, loaded.info, options, started)
}

/// Analyze an already-decoded buffer. `info` describes the source image.
pub fn analyze_buffer(
    pixels: &PixelBuffer,
    info: ImageInfo,
    options: &AnalyzeOptions,
) -> Result<AnalysisResult> {
    let started = Instant::now();
    options.validate()?;
    assemble(pixels, info, options, started)
}

/// The most frequent colour of the image, or `None` if it has no pixels.
pub fn dominant_color(path: &Path) -> Result<Option<ColorBucket>> {
    let options = AnalyzeOptions {
        top_colors_count: 1,
        ..Default::default()
    };
    Ok(analyze(path, &options)?.dominant_color)
}

/// The `count` most frequent colours of the image.
pub fn color_palette(path: &Path, count: usize) -> Result<Vec<ColorBucket>> {
    let options = AnalyzeOptions {
        top_colors_count: count,
        ..Default::default()
    };
    Ok(analyze(path, &options)?.top_colors)
}

fn assemble(
    pixels: &PixelBuffer,
    image_info: ImageInfo,
    options: &AnalyzeOptions,
    started: Instant,
) -> Result<AnalysisResult> {
    let step = options.step()?;
    let histogram = if options.shards > 1 {
        histogram::build_sharded(pixels, step, options.shards)?
    } else {
        histogram::build(pixels, step)?
    };

    let ranking = rank::rank(&histogram, options.top_colors_count, options.include_names)?;
    let color_stats = if options.include_stats {
        stats::summarize(ranking.colors(), histogram.total())
    } else {
        None
    };

    Ok(AnalysisResult {
        success: true,
        dominant_color: ranking.dominant().cloned(),
        top_colors: ranking.top().to_vec(),
        image_info,
        color_stats,
        processing_time_ms: started.elapsed().as_millis() as u64,
    })
}
