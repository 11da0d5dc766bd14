pub mod analyze;
pub mod completions;
pub mod dominant;
pub mod palette;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::types::ColorBucket;

/// color-analyzer - Ranked colour histograms for images
#[derive(Parser, Debug)]
#[command(name = "color-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an image and report its colours
    Analyze(analyze::AnalyzeArgs),

    /// Show only the dominant colour of an image
    Dominant(dominant::DominantArgs),

    /// Extract a colour palette from an image
    Palette(palette::PaletteArgs),

    /// Serve the analyzer over HTTP
    Serve(serve::ServeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Display name of a bucket, `-` when unnamed.
fn name_of(bucket: &ColorBucket) -> &'static str {
    bucket.name.map_or("-", |n| n.as_str())
}

/// Join rendered lines, each terminated by a newline.
fn join_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
