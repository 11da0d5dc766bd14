use std::path::PathBuf;

use clap::Args;

use crate::analysis::color_palette;
use crate::error::{AnalyzerError, Result};
use crate::output::{colour_count, display_path, Printer};
use crate::types::ColorBucket;

use super::{join_lines, name_of};

/// Extract a colour palette from an image
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Image file to extract colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Number of colours in the palette
    #[arg(long, short, default_value = "5")]
    pub colors: usize,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;
    if !path.exists() {
        return Err(AnalyzerError::Io {
            path: path.clone(),
            message: "File not found".to_string(),
        });
    }

    let palette = color_palette(path, args.colors)?;
    printer.status(
        "Sampled",
        &format!("{} from {}", colour_count(palette.len()), display_path(path)),
    );

    print!("{}", render_palette(&palette, printer));
    Ok(())
}

/// Swatch lines followed by CSS custom properties.
pub fn render_palette(palette: &[ColorBucket], printer: &Printer) -> String {
    let swatches = palette.iter().map(|color| {
        format!(
            "{}{:<10} {:<12} {:.2}%",
            printer.swatch(color.colour(), 5),
            color.hex,
            name_of(color),
            color.percentage
        )
    });
    let variables = palette
        .iter()
        .enumerate()
        .map(|(i, color)| format!("--color-{}: {};", i + 1, color.hex));

    let lines: Vec<String> = swatches
        .chain([String::new(), printer.bold("CSS Variables:")])
        .chain(variables)
        .collect();
    join_lines(lines)
}
