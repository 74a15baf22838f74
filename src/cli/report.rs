//! Plain-text validation reports.

use std::fmt::Display;

use crate::validation::Violation;

/// Marker for a passed check.
pub const PASS: &str = "✓";
/// Marker for a failed check.
pub const FAIL: &str = "✗";
/// Marker for something missing but tolerated.
pub const WARN: &str = "⚠";
/// Marker for informational lines.
pub const INFO: &str = "ℹ";

/// Line-oriented report accumulated by a command and printed at the end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line verbatim.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Appends an `=== title ===` banner.
    pub fn heading(&mut self, title: &str) {
        self.line(format!("=== {title} ==="));
    }

    /// Appends `marker text`.
    pub fn mark(&mut self, marker: &str, text: impl Display) {
        self.line(format!("{marker} {text}"));
    }

    /// Appends a `  - detail` line below the previous one.
    pub fn detail(&mut self, text: impl Display) {
        self.line(format!("  - {text}"));
    }

    /// Appends one detail line per violation, as `  - path: message`.
    pub fn violations(&mut self, violations: &[Violation]) {
        for violation in violations {
            self.detail(violation);
        }
    }

    /// Lines accumulated so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joins the report into the text printed on stdout.
    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}
