//! Terminal output for the command line.
//!
//! Progress goes to stderr as right-aligned verb lines; stdout carries only
//! the report so it can be piped.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::types::Rgb;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const VERB_WIDTH: usize = 12;

/// Writes progress lines and styles report text.
///
/// Styling is on only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Never styles anything; used for tests and snapshots.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// `   Analyzing photo.jpg`, verb in green.
    pub fn status(&self, verb: &str, message: &str) {
        self.progress(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.progress(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.progress(YELLOW, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// `width` cells with `colour` as background, then a space. Empty when
    /// styling is off.
    pub fn swatch(&self, colour: Rgb, width: usize) -> String {
        if !self.color {
            return String::new();
        }
        let Rgb { r, g, b } = colour;
        format!("\x1b[48;2;{r};{g};{b}m{}{RESET} ", " ".repeat(width))
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn progress(&self, code: &str, verb: &str, message: &str) {
        let verb = format!("{verb:>VERB_WIDTH$}");
        let verb = if self.color {
            format!("{BOLD}{code}{verb}{RESET}")
        } else {
            verb
        };
        // Progress is best-effort; a closed stderr must not fail the run.
        let _ = writeln!(io::stderr().lock(), "{verb} {message}");
    }
}

/// "1 colour", "3 colours".
pub fn colour_count(n: usize) -> String {
    match n {
        1 => "1 colour".to_string(),
        n => format!("{n} colours"),
    }
}

/// `path` relative to the working directory when it lies beneath it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
