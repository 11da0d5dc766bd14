//! Analyze command implementation.
//!
//! Runs the full pipeline on one image and prints the report as a table,
//! a short summary, or JSON.

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::analysis::analyze;
use crate::config::AnalyzeOptions;
use crate::error::{AnalyzerError, Result};
use crate::output::{colour_count, display_path, Printer};
use crate::types::AnalysisResult;

use super::{join_lines, name_of};

/// Number of colours shown when neither a flag nor a config file says otherwise.
const DEFAULT_TOP: usize = 5;

/// Report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Simple,
}

/// Analyze an image and report its colours
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Image file to analyze
    #[arg(required = true)]
    pub file: PathBuf,

    /// Number of top colours to show [default: 5]
    #[arg(long, short)]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Save the full JSON report to this file
    #[arg(long, short)]
    pub save: Option<PathBuf>,

    /// Quantization step (1 = exact colours)
    #[arg(long, short)]
    pub quantization: Option<u32>,

    /// Longest side the image is shrunk to before counting
    #[arg(long)]
    pub max_dimension: Option<u32>,

    /// Options file (YAML or JSON)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Resolve options: flags override the config file, which overrides defaults.
    pub fn options(&self) -> Result<AnalyzeOptions> {
        let base = AnalyzeOptions {
            top_colors_count: DEFAULT_TOP,
            ..Default::default()
        };
        let mut options = match &self.config {
            Some(path) => AnalyzeOptions::load_over(path, base)?,
            None => base,
        };

        if let Some(top) = self.top {
            options.top_colors_count = top;
        }
        if let Some(step) = self.quantization {
            options.color_quantization = step;
        }
        if let Some(max) = self.max_dimension {
            options.max_dimension = max;
        }
        Ok(options)
    }
}

pub fn run(args: AnalyzeArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;
    if !path.exists() {
        return Err(AnalyzerError::Io {
            path: path.clone(),
            message: "File not found".to_string(),
        });
    }

    let options = args.options()?;
    printer.status("Analyzing", &display_path(path));
    let result = analyze(path, &options)?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Simple => print!("{}", render_simple(&result)),
        OutputFormat::Table => print!("{}", render_table(&result, printer)),
    }

    if let Some(save) = &args.save {
        let json = serde_json::to_string_pretty(&result)?;
        fs::write(save, json).map_err(|e| AnalyzerError::Io {
            path: save.clone(),
            message: format!("Failed to save report: {}", e),
        })?;
        printer.status("Saved", &display_path(save));
    }

    printer.info(
        "Finished",
        &format!(
            "{} in {}ms",
            colour_count(result.top_colors.len()),
            result.processing_time_ms
        ),
    );

    Ok(())
}

/// Dominant colour and a numbered list of the top colours.
pub fn render_simple(result: &AnalysisResult) -> String {
    let mut lines = vec!["Dominant Color:".to_string()];
    match &result.dominant_color {
        Some(dominant) => {
            lines.push(format!("  {} - {}", dominant.hex, name_of(dominant)));
            lines.push(format!("  Percentage: {:.2}%", dominant.percentage));
        }
        None => lines.push("  (no pixels)".to_string()),
    }

    lines.push(String::new());
    lines.push("Top Colors:".to_string());
    lines.extend(result.top_colors.iter().enumerate().map(|(i, color)| {
        format!(
            "  {}. {} - {} ({:.2}%)",
            i + 1,
            color.hex,
            name_of(color),
            color.percentage
        )
    }));

    join_lines(lines)
}

/// Image details, dominant colour, and a ranked colour table.
pub fn render_table(result: &AnalysisResult, printer: &Printer) -> String {
    let info = &result.image_info;
    let mut lines = vec![
        printer.bold("Image Information:"),
        format!("  Dimensions: {} × {}", info.width, info.height),
        format!("  Format: {}", info.format),
        format!("  Processing Time: {}ms", result.processing_time_ms),
        String::new(),
        printer.bold("Dominant Color:"),
    ];

    match &result.dominant_color {
        Some(dominant) => lines.extend([
            format!(
                "  {}{} - {}",
                printer.swatch(dominant.colour(), 5),
                dominant.hex,
                name_of(dominant)
            ),
            format!("  RGB: {}", dominant.rgb),
            format!("  Percentage: {:.2}%", dominant.percentage),
        ]),
        None => lines.push(format!("  {}", printer.dim("(no pixels)"))),
    }

    lines.extend([
        String::new(),
        printer.bold("Top Colors:"),
        format!("  {}", printer.cyan("Rank  Color      Name         Percentage")),
        format!("  {}", printer.cyan(&"─".repeat(40))),
    ]);
    lines.extend(result.top_colors.iter().enumerate().map(|(i, color)| {
        format!(
            "  {:<5} {}{:<10} {:<12} {:.2}%",
            i + 1,
            printer.swatch(color.colour(), 3),
            color.hex,
            name_of(color),
            color.percentage
        )
    }));

    if let Some(stats) = &result.color_stats {
        lines.push(String::new());
        lines.push(format!("Total unique colors: {}", stats.total_colors));
    }

    join_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    fn write_two_colour_png(path: &std::path::Path) {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 255]));
        for x in 0..4 {
            img.put_pixel(x, 0, Rgb([255, 0, 0]));
        }
        img.save(path).unwrap();
    }

    fn args(file: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            file,
            top: None,
            output: OutputFormat::Json,
            save: None,
            quantization: None,
            max_dimension: None,
            config: None,
        }
    }

    #[test]
    fn test_options_default_top_is_five() {
        let opts = args(PathBuf::from("x.png")).options().unwrap();
        assert_eq!(opts.top_colors_count, 5);
        assert_eq!(opts.color_quantization, 10);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("analyzer.yaml");
        fs::write(&config, "topColorsCount: 8\ncolorQuantization: 20\n").unwrap();

        let mut a = args(PathBuf::from("x.png"));
        a.config = Some(config);
        a.quantization = Some(4);

        let opts = a.options().unwrap();
        assert_eq!(opts.top_colors_count, 8);
        assert_eq!(opts.color_quantization, 4);
    }

    #[test]
    fn test_config_without_top_keeps_cli_default() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("analyzer.yaml");
        fs::write(&config, "colorQuantization: 20\n").unwrap();

        let mut a = args(PathBuf::from("x.png"));
        a.config = Some(config);

        let opts = a.options().unwrap();
        assert_eq!(opts.top_colors_count, DEFAULT_TOP);
        assert_eq!(opts.color_quantization, 20);
    }

    #[test]
    fn test_run_saves_report() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("two.png");
        let report = dir.path().join("report.json");
        write_two_colour_png(&image);

        let mut a = args(image);
        a.save = Some(report.clone());
        run(a, &Printer::plain()).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(saved["success"], true);
        assert_eq!(saved["dominantColor"]["hex"], "#0000FA");
        assert_eq!(saved["topColors"].as_array().unwrap().len(), 2);
        assert_eq!(saved["colorStats"]["totalPixels"], 16);
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempdir().unwrap();
        let err = run(args(dir.path().join("missing.png")), &Printer::plain()).unwrap_err();
        assert!(matches!(err, AnalyzerError::Io { .. }));
    }

    #[test]
    fn test_run_unwritable_save_target() {
        let dir = tempdir().unwrap();
        let image = dir.path().join("two.png");
        write_two_colour_png(&image);

        let mut a = args(image);
        a.save = Some(dir.path().join("no-such-dir").join("report.json"));
        let err = run(a, &Printer::plain()).unwrap_err();
        assert!(matches!(err, AnalyzerError::Io { .. }));
    }
}
