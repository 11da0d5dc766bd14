//! Core domain types for color-analyzer.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Rgb` / `Hsl` - colour values and their HSL derivation
//! - `ColorName` - canonical colour families
//! - `ColorBucket`, `ColorStats`, `AnalysisResult` - report types

mod colour;
mod name;
mod report;

pub use colour::{round2, Hsl, Rgb};
pub use name::ColorName;
pub use report::{AnalysisResult, ColorBucket, ColorStats, ImageInfo};
