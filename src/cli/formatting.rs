//! Formatting utilities for CLI output.
//!
//! Styled text for help output and errors, plus plain rendering of
//! configuration values for the validation report.

use serde_json::Value;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a configuration value for a report line.
///
/// Strings are printed bare and sequences as a comma separated list of
/// their items. Objects only show their size.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use voidance_config::cli::formatting::format_value;
///
/// assert_eq!(format_value(&json!("drun")), "drun");
/// assert_eq!(format_value(&json!(["clock", "tray"])), "clock, tray");
/// ```
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => format!("{{{}}}", map.len()),
        other => other.to_string(),
    }
}
