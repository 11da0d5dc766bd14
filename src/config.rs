//! Analysis options and their configuration file.
//!
//! Options can come from a YAML (or JSON) file, with every missing key
//! taking its default and unknown keys ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::QuantizationStep;
use crate::error::{AnalyzerError, Result};

/// Tunable parameters for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzeOptions {
    /// Longest side, in pixels, the image is shrunk to before counting.
    pub max_dimension: u32,

    /// How many colours to report.
    pub top_colors_count: usize,

    /// Bucket edge size; 1 gives an exact histogram.
    pub color_quantization: u32,

    /// Attach a canonical name to each reported colour.
    pub include_names: bool,

    /// Include aggregate statistics in the report.
    pub include_stats: bool,

    /// Number of parallel histogram shards; 1 counts sequentially.
    pub shards: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            max_dimension: 200,
            top_colors_count: 10,
            color_quantization: 10,
            include_names: true,
            include_stats: true,
            shards: 1,
        }
    }
}

/// Keys present in an options file. Absent keys leave the base value alone.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OptionsFile {
    max_dimension: Option<u32>,
    top_colors_count: Option<usize>,
    color_quantization: Option<u32>,
    include_names: Option<bool>,
    include_stats: Option<bool>,
    shards: Option<usize>,
}

impl OptionsFile {
    fn apply(self, base: &mut AnalyzeOptions) {
        if let Some(v) = self.max_dimension {
            base.max_dimension = v;
        }
        if let Some(v) = self.top_colors_count {
            base.top_colors_count = v;
        }
        if let Some(v) = self.color_quantization {
            base.color_quantization = v;
        }
        if let Some(v) = self.include_names {
            base.include_names = v;
        }
        if let Some(v) = self.include_stats {
            base.include_stats = v;
        }
        if let Some(v) = self.shards {
            base.shards = v;
        }
    }
}

impl AnalyzeOptions {
    /// Load options from a YAML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_over(path, Self::default())
    }

    /// Load a YAML or JSON file on top of `base`; keys the file omits keep
    /// their value from `base`.
    pub fn load_over(path: &Path, base: Self) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse_over(&content, base)
    }

    /// Parse options from a YAML string. JSON is accepted as well.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_over(content, Self::default())
    }

    /// Parse options on top of `base`.
    pub fn parse_over(content: &str, mut base: Self) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(base);
        }

        let file: OptionsFile = serde_yaml::from_str(content).map_err(|e| AnalyzerError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Options are maxDimension, topColorsCount, colorQuantization, includeNames, includeStats, shards".to_string()),
        })?;
        file.apply(&mut base);
        Ok(base)
    }

    /// Reject values that would make the pipeline meaningless.
    pub fn validate(&self) -> Result<()> {
        QuantizationStep::new(self.color_quantization)?;

        if self.top_colors_count == 0 {
            return Err(AnalyzerError::validation(
                "top colours count must be at least 1",
                None,
            ));
        }
        if self.max_dimension == 0 {
            return Err(AnalyzerError::validation(
                "max dimension must be at least 1",
                None,
            ));
        }
        if self.shards == 0 {
            return Err(AnalyzerError::validation(
                "shards must be at least 1",
                Some("Use 1 to count pixels sequentially"),
            ));
        }
        Ok(())
    }

    /// Quantization step, validated.
    pub fn step(&self) -> Result<QuantizationStep> {
        QuantizationStep::new(self.color_quantization)
    }
}
