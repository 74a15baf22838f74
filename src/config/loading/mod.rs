//! Reading configuration documents from disk.
//!
//! JSON and TOML files are parsed into a generic [`serde_json::Value`] tree
//! for validation. KDL files are only scanned for their top-level sections;
//! see [`KdlSummary`].

mod kdl;

use std::{fs, io::ErrorKind, path::Path};

use serde_json::Value;
use tracing::{debug, instrument};

pub use kdl::{KdlSection, KdlSummary};

use crate::error::{ConfigError, Result};

/// On-disk syntax of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON text.
    Json,
    /// TOML text, converted to the same tree as JSON.
    Toml,
    /// KDL text, only scanned for sections.
    Kdl,
}

impl DocumentFormat {
    /// Picks the format from the file extension, falling back to `fallback`.
    pub fn detect(path: &Path, fallback: DocumentFormat) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => DocumentFormat::Json,
            Some("toml") => DocumentFormat::Toml,
            Some("kdl") => DocumentFormat::Kdl,
            _ => fallback,
        }
    }

    /// Human-readable format name.
    pub fn name(self) -> &'static str {
        match self {
            DocumentFormat::Json => "JSON",
            DocumentFormat::Toml => "TOML",
            DocumentFormat::Kdl => "KDL",
        }
    }
}

/// A parsed configuration file.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// A structured tree ready for schema validation.
    Structured(Value),
    /// A KDL file that was only checked for its top-level sections.
    Kdl(KdlSummary),
}

/// Parses `content` as `format`.
///
/// # Errors
/// Returns [`ConfigError::ParseError`] if the text is not valid in its format.
pub fn parse_document(
    content: &str,
    format: DocumentFormat,
    path: Option<&Path>,
) -> Result<Document> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map(Document::Structured)
            .map_err(|e| ConfigError::parse(e, format.name(), path)),
        DocumentFormat::Toml => {
            let table: toml::Table =
                toml::from_str(content).map_err(|e| ConfigError::parse(e, format.name(), path))?;
            serde_json::to_value(table)
                .map(Document::Structured)
                .map_err(|e| ConfigError::Serialize(e.to_string()))
        }
        DocumentFormat::Kdl => Ok(Document::Kdl(KdlSummary::scan(content))),
    }
}

/// Reads and parses a configuration file.
///
/// Returns `Ok(None)` when the file does not exist, which callers treat as
/// "use the defaults" rather than as a failure.
///
/// # Errors
/// Returns [`ConfigError::IoError`] if the file exists but cannot be read and
/// [`ConfigError::ParseError`] if its content is malformed.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_document(path: &Path, fallback: DocumentFormat) -> Result<Option<Document>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Configuration file not found");
            return Ok(None);
        }
        Err(e) => return Err(ConfigError::io(e, path)),
    };

    let format = DocumentFormat::detect(path, fallback);
    debug!(format = format.name(), bytes = content.len(), "Parsing configuration file");

    parse_document(&content, format, Some(path)).map(Some)
}
