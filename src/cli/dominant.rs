use std::path::PathBuf;

use clap::Args;

use crate::analysis::dominant_color;
use crate::error::{AnalyzerError, Result};
use crate::output::{display_path, Printer};

use super::name_of;

/// Show only the dominant colour of an image
#[derive(Args, Debug)]
pub struct DominantArgs {
    /// Image file to analyze
    #[arg(required = true)]
    pub file: PathBuf,
}

pub fn run(args: DominantArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;
    if !path.exists() {
        return Err(AnalyzerError::Io {
            path: path.clone(),
            message: "File not found".to_string(),
        });
    }

    match dominant_color(path)? {
        Some(dominant) => {
            println!(
                "{}{}",
                printer.swatch(dominant.colour(), 5),
                printer.bold(&format!("{} - {}", dominant.hex, name_of(&dominant)))
            );
            println!("RGB: {}", dominant.rgb);
            println!("Percentage: {:.2}%", dominant.percentage);
        }
        None => printer.warning("Empty", &format!("{} has no pixels", display_path(path))),
    }

    Ok(())
}
