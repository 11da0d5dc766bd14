//! Image decoding and downsampling.
//!
//! Decodes an image file with the `image` crate, shrinks it so the longer
//! side fits within a bound, and exposes the pixels as a flat buffer in
//! their native channel layout.

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};

use crate::error::{AnalyzerError, Result};
use crate::types::ImageInfo;

/// Flat, row-major pixel data with a fixed channel stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl PixelBuffer {
    /// Wrap raw channel data. The length must equal `width * height * channels`.
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Result<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if channels == 0 || data.len() != expected {
            return Err(AnalyzerError::validation(
                format!(
                    "Pixel buffer of {} bytes does not match {}x{} with {} channel(s)",
                    data.len(),
                    width,
                    height,
                    channels
                ),
                None,
            ));
        }

        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Convert a decoded image, keeping its channel count at 8 bits per channel.
    pub fn from_image(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let channels = img.color().channel_count();
        let data = match channels {
            1 => img.into_luma8().into_raw(),
            2 => img.into_luma_alpha8().into_raw(),
            3 => img.into_rgb8().into_raw(),
            _ => img.into_rgba8().into_raw(),
        };

        Self {
            data,
            width,
            height,
            channels: channels.min(4),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A decoded, possibly downsampled image plus its original metadata.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub pixels: PixelBuffer,
    pub info: ImageInfo,
}

/// Decode `path` and shrink it so neither side exceeds `max_dimension`.
pub fn load(path: &Path, max_dimension: u32) -> Result<LoadedImage> {
    let byte_size = fs::metadata(path)
        .map_err(|e| AnalyzerError::Io {
            path: path.to_path_buf(),
            message: format!("File not found or unreadable: {}", e),
        })?
        .len();

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| AnalyzerError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to open image: {}", e),
        })?;

    let format = reader.format().map(format_name).unwrap_or_else(|| "unknown".to_string());

    let img = reader.decode().map_err(|e| AnalyzerError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let info = ImageInfo {
        width: img.width(),
        height: img.height(),
        format,
        channels: img.color().channel_count(),
        byte_size,
    };

    let (width, height) = fit_within(info.width, info.height, max_dimension);
    let img = if (width, height) != (info.width, info.height) {
        img.resize_exact(width, height, FilterType::Lanczos3)
    } else {
        img
    };

    Ok(LoadedImage {
        pixels: PixelBuffer::from_image(img),
        info,
    })
}

/// Target dimensions that keep the aspect ratio with the longer side at most `max`.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let scaled = |side: u32, long: u32| -> u32 {
        let v = (f64::from(side) * f64::from(max) / f64::from(long)).round() as u32;
        v.max(1)
    };

    if width > height {
        (max, scaled(height, width))
    } else {
        (scaled(width, height), max)
    }
}

/// Lowercase display name for a detected format.
fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "png".to_string(),
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        ImageFormat::Tiff => "tiff".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    }
}
