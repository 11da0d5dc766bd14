//! The colour histogram pipeline.
//!
//! Stages, leaves first:
//! - `quantize` - snap RGB triples onto a uniform grid
//! - `histogram` - count pixels per quantized colour
//! - `rank` - order buckets by frequency and take the top N
//! - `naming` - classify colours into canonical names
//! - `stats` - aggregate saturation, lightness, and name distribution
//! - `pipeline` - run the stages and assemble the report

pub mod histogram;
pub mod naming;
pub mod pipeline;
pub mod quantize;
pub mod rank;
pub mod stats;

pub use histogram::Histogram;
pub use naming::name;
pub use pipeline::{analyze, analyze_buffer, color_palette, dominant_color};
pub use quantize::{quantize, BucketKey, QuantizationStep};
pub use rank::{rank, Ranking};
pub use stats::summarize;
