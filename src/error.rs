use miette::Diagnostic;
use thiserror::Error;

/// Main error type for colour analysis operations
#[derive(Error, Diagnostic, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    #[diagnostic(code(color_analyzer::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(color_analyzer::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image analysis failed: could not decode {path}: {message}")]
    #[diagnostic(code(color_analyzer::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(color_analyzer::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(color_analyzer::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to serialize report: {0}")]
    #[diagnostic(code(color_analyzer::serialize))]
    Serialize(#[from] serde_json::Error),
}

impl AnalyzerError {
    /// Shorthand for a validation error with an optional hint.
    pub(crate) fn validation(message: impl Into<String>, help: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            help: help.map(str::to_string),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
