use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use super::generate_schema_page;
use crate::config::{SchemaEntry, SchemaRegistry};

/// Generates markdown reference pages for registered schemas.
///
/// Writes one `<name>.md` file per schema into the output directory.
pub struct DocsGenerator {
    output_dir: PathBuf,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs/config/schemas"),
        }
    }
}

impl DocsGenerator {
    /// Creates a new documentation generator with default output directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom output directory for generated documentation.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Generates documentation for every registered schema.
    ///
    /// Returns the paths written, in registry order.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::FileWrite` if the directory or a page cannot be
    /// written.
    pub fn generate_all(&self) -> Result<Vec<PathBuf>, DocsError> {
        self.ensure_output_dir()?;

        let written = SchemaRegistry::global()
            .entries()
            .iter()
            .map(|entry| self.generate_single_schema(entry))
            .collect::<Result<Vec<_>, _>>()?;

        info!(count = written.len(), "Generated schema documentation");
        Ok(written)
    }

    /// Generates documentation for a specific schema by name.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::InvalidSchemaName` if the schema doesn't exist.
    pub fn generate_schema_by_name(&self, name: &str) -> Result<PathBuf, DocsError> {
        let entry = SchemaRegistry::global()
            .entry(name)
            .map_err(|_| DocsError::InvalidSchemaName(name.to_string()))?;

        self.ensure_output_dir()?;
        self.generate_single_schema(entry)
    }

    /// Returns a list of all available schema names.
    pub fn list_schemas(&self) -> Vec<&'static str> {
        SchemaRegistry::global().names().collect()
    }

    fn ensure_output_dir(&self) -> Result<(), DocsError> {
        fs::create_dir_all(&self.output_dir).map_err(|err| {
            DocsError::FileWrite(format!("Failed to create output directory: {err}"))
        })
    }

    fn generate_single_schema(&self, entry: &SchemaEntry) -> Result<PathBuf, DocsError> {
        let content = generate_schema_page(entry)?;
        let filepath = Path::new(&self.output_dir).join(format!("{}.md", entry.name));

        fs::write(&filepath, content).map_err(|err| {
            DocsError::FileWrite(format!("Failed to write {}: {err}", filepath.display()))
        })?;

        info!(path = %filepath.display(), "Generated schema page");
        Ok(filepath)
    }
}

/// Errors that can occur during documentation generation.
#[derive(Error, Debug)]
pub enum DocsError {
    /// A directory or page could not be written.
    #[error("{0}")]
    FileWrite(String),

    /// No schema is registered under the requested name.
    #[error("unknown schema '{0}'")]
    InvalidSchemaName(String),

    /// A schema could not be converted to JSON.
    #[error("failed to convert schema '{schema}': {details}")]
    SchemaConversion {
        /// Name of the schema being converted
        schema: String,
        /// Conversion error details
        details: String,
    },
}
