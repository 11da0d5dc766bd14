//! End-to-end tests: PNG on disk through the full pipeline.

use std::path::{Path, PathBuf};

use color_analyzer::cli::analyze::{render_simple, render_table};
use color_analyzer::cli::palette::render_palette;
use color_analyzer::output::Printer;
use color_analyzer::{
    analyze, color_palette, dominant_color, AnalyzeOptions, AnalyzerError, ColorName,
};
use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

fn save_rgb(dir: &TempDir, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.path().join(name);
    img.save(&path).unwrap();
    path
}

/// 4x4: top row red, the rest blue.
fn two_colour(dir: &TempDir) -> PathBuf {
    let mut img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 255]));
    for x in 0..4 {
        img.put_pixel(x, 0, Rgb([255, 0, 0]));
    }
    save_rgb(dir, "two.png", &img)
}

/// 32x32 gradient with many distinct colours.
fn gradient(dir: &TempDir) -> PathBuf {
    let img = RgbImage::from_fn(32, 32, |x, y| {
        Rgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
    });
    save_rgb(dir, "gradient.png", &img)
}

fn options(step: u32, top: usize) -> AnalyzeOptions {
    AnalyzeOptions {
        color_quantization: step,
        top_colors_count: top,
        ..Default::default()
    }
}

#[test]
fn uniform_red_is_one_bucket() {
    let dir = tempdir().unwrap();
    let path = save_rgb(&dir, "red.png", &RgbImage::from_pixel(20, 10, Rgb([255, 0, 0])));

    let result = analyze(&path, &AnalyzeOptions::default()).unwrap();
    let dominant = result.dominant_color.clone().unwrap();

    assert_eq!(result.top_colors.len(), 1);
    assert_eq!(dominant.count, 200);
    assert_eq!(dominant.percentage, 100.0);
    // 255 snaps down to 250 on a 10-wide grid
    assert_eq!(dominant.hex, "#FA0000");
    assert_eq!(dominant.name, Some(ColorName::Red));

    let stats = result.color_stats.unwrap();
    assert_eq!(stats.total_colors, 1);
    assert_eq!(stats.total_pixels, 200);
    assert_eq!(stats.color_distribution[&ColorName::Red], 100.0);
}

#[test]
fn uniform_red_on_dividing_grid_keeps_full_channel() {
    let dir = tempdir().unwrap();
    let path = save_rgb(&dir, "red.png", &RgbImage::from_pixel(5, 5, Rgb([255, 0, 0])));

    for step in [1, 5, 15, 51] {
        let result = analyze(&path, &options(step, 10)).unwrap();
        assert_eq!(result.dominant_color.unwrap().hex, "#FF0000");
    }
}

#[test]
fn near_black_is_black() {
    let dir = tempdir().unwrap();
    let path = save_rgb(&dir, "dark.png", &RgbImage::from_pixel(6, 6, Rgb([5, 5, 5])));

    let dominant = dominant_color(&path).unwrap().unwrap();
    assert_eq!(dominant.name, Some(ColorName::Black));
    assert_eq!(dominant.hex, "#000000");
}

#[test]
fn top_n_is_not_padded() {
    let dir = tempdir().unwrap();
    let path = two_colour(&dir);

    let result = analyze(&path, &options(10, 3)).unwrap();
    assert_eq!(result.top_colors.len(), 2);
    assert_eq!(result.top_colors[0].hex, "#0000FA");
    assert_eq!(result.top_colors[0].count, 12);
    assert_eq!(result.top_colors[1].hex, "#FA0000");
    assert_eq!(result.top_colors[1].count, 4);
}

#[test]
fn zero_quantization_fails_before_reading() {
    let err = analyze(Path::new("/nonexistent/never-read.png"), &options(0, 10)).unwrap_err();
    assert!(matches!(err, AnalyzerError::Validation { .. }));
}

#[test]
fn zero_top_count_fails() {
    let dir = tempdir().unwrap();
    let err = analyze(&two_colour(&dir), &options(10, 0)).unwrap_err();
    assert!(matches!(err, AnalyzerError::Validation { .. }));
}

#[test]
fn grayscale_image_fails_at_histogram() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gray.png");
    GrayImage::from_pixel(4, 4, Luma([128])).save(&path).unwrap();

    let err = analyze(&path, &AnalyzeOptions::default()).unwrap_err();
    match err {
        AnalyzerError::Validation { message, .. } => assert!(message.contains("channels")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = analyze(&dir.path().join("missing.png"), &AnalyzeOptions::default()).unwrap_err();
    assert!(matches!(err, AnalyzerError::Io { .. }));
}

#[test]
fn alpha_channel_is_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("alpha.png");
    let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 200, 0, 255]));
    img.put_pixel(0, 0, Rgba([0, 200, 0, 0]));
    img.put_pixel(1, 0, Rgba([0, 200, 0, 7]));
    img.save(&path).unwrap();

    let result = analyze(&path, &AnalyzeOptions::default()).unwrap();
    assert_eq!(result.image_info.channels, 4);
    assert_eq!(result.top_colors.len(), 1);
    assert_eq!(result.top_colors[0].count, 16);
}

#[test]
fn counts_cover_every_processed_pixel() {
    let dir = tempdir().unwrap();
    let path = gradient(&dir);

    let result = analyze(&path, &options(16, 10_000)).unwrap();
    let counted: usize = result.top_colors.iter().map(|c| c.count).sum();
    let stats = result.color_stats.unwrap();

    assert_eq!(counted, 32 * 32);
    assert_eq!(stats.total_pixels, 32 * 32);
    assert_eq!(stats.processed_pixels, 32 * 32);

    let pct: f64 = result.top_colors.iter().map(|c| c.percentage).sum();
    assert!((pct - 100.0).abs() <= 1.0);
    assert!(result
        .top_colors
        .iter()
        .all(|c| c.percentage >= 0.0 && c.percentage <= 100.0));
}

#[test]
fn top_len_is_min_of_n_and_distinct() {
    let dir = tempdir().unwrap();
    let path = gradient(&dir);

    let distinct = analyze(&path, &options(32, 10_000))
        .unwrap()
        .color_stats
        .unwrap()
        .total_colors;

    for n in [1, 2, 5, distinct, distinct + 3] {
        let result = analyze(&path, &options(32, n)).unwrap();
        assert_eq!(result.top_colors.len(), n.min(distinct));
    }
}

#[test]
fn ranking_is_deterministic_across_runs_and_shards() {
    let dir = tempdir().unwrap();
    let path = gradient(&dir);

    let first = analyze(&path, &options(8, 50)).unwrap();
    let again = analyze(&path, &options(8, 50)).unwrap();
    let sharded = analyze(
        &path,
        &AnalyzeOptions {
            shards: 3,
            ..options(8, 50)
        },
    )
    .unwrap();

    assert_eq!(first.top_colors, again.top_colors);
    assert_eq!(first.top_colors, sharded.top_colors);
}

#[test]
fn large_image_is_downsampled() {
    let dir = tempdir().unwrap();
    let path = save_rgb(&dir, "big.png", &RgbImage::from_pixel(400, 300, Rgb([0, 0, 255])));

    let result = analyze(&path, &AnalyzeOptions::default()).unwrap();
    assert_eq!(result.image_info.width, 400);
    assert_eq!(result.image_info.height, 300);
    assert_eq!(result.color_stats.unwrap().total_pixels, 200 * 150);
}

#[test]
fn palette_returns_top_colours() {
    let dir = tempdir().unwrap();
    let palette = color_palette(&two_colour(&dir), 1).unwrap();
    assert_eq!(palette.len(), 1);
    assert_eq!(palette[0].name, Some(ColorName::Blue));
}

#[test]
fn json_report_uses_camel_case() {
    let dir = tempdir().unwrap();
    let result = analyze(&two_colour(&dir), &options(10, 5)).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["dominantColor"]["rgb"], "rgb(0, 0, 250)");
    assert_eq!(json["dominantColor"]["name"], "Blue");
    assert_eq!(json["imageInfo"]["format"], "png");
    assert_eq!(json["imageInfo"]["width"], 4);
    assert!(json["imageInfo"]["byteSize"].as_u64().unwrap() > 0);
    assert_eq!(json["colorStats"]["totalColors"], 2);
    assert_eq!(json["colorStats"]["colorDistribution"]["Blue"], 75.0);
    assert_eq!(json["colorStats"]["colorDistribution"]["Red"], 25.0);
    assert!(json["processingTimeMs"].is_u64());
}

#[test]
fn simple_output() {
    let dir = tempdir().unwrap();
    let result = analyze(&two_colour(&dir), &options(10, 5)).unwrap();

    insta::assert_snapshot!(render_simple(&result), @r"
    Dominant Color:
      #0000FA - Blue
      Percentage: 75.00%

    Top Colors:
      1. #0000FA - Blue (75.00%)
      2. #FA0000 - Red (25.00%)
    ");
}

#[test]
fn table_output() {
    let dir = tempdir().unwrap();
    let mut result = analyze(&two_colour(&dir), &options(10, 5)).unwrap();
    result.processing_time_ms = 0;

    insta::assert_snapshot!(render_table(&result, &Printer::plain()), @r"
    Image Information:
      Dimensions: 4 × 4
      Format: png
      Processing Time: 0ms

    Dominant Color:
      #0000FA - Blue
      RGB: rgb(0, 0, 250)
      Percentage: 75.00%

    Top Colors:
      Rank  Color      Name         Percentage
      ────────────────────────────────────────
      1     #0000FA    Blue         75.00%
      2     #FA0000    Red          25.00%

    Total unique colors: 2
    ");
}

#[test]
fn palette_output() {
    let dir = tempdir().unwrap();
    let palette = color_palette(&two_colour(&dir), 5).unwrap();

    insta::assert_snapshot!(render_palette(&palette, &Printer::plain()), @r"
    #0000FA    Blue         75.00%
    #FA0000    Red          25.00%

    CSS Variables:
    --color-1: #0000FA;
    --color-2: #FA0000;
    ");
}
