//! Validation of JSON documents against [`SchemaNode`](crate::schema::SchemaNode) trees.
//!
//! The validator walks the schema and the input together, collecting every
//! [`Violation`] it finds. On success it returns the normalized document:
//! defaults filled in and ignored unknown keys dropped.

mod engine;
mod violation;

use serde_json::Value;

pub use engine::{ValidationOptions, ValidationResult, materialize, validate, validate_with};
pub use violation::{FieldPath, PathSegment, Violation, ViolationKind};

use crate::{error::ConfigError, schema::SchemaNode};

/// Builds the complete default document for the schema registered as `name`.
///
/// # Errors
///
/// Returns [`ConfigError::IncompleteDefaults`] when some required field has
/// neither a default nor a fully defaultable shape.
pub fn materialize_defaults(node: &SchemaNode, name: &str) -> crate::Result<Value> {
    materialize(node).map_err(|violations| ConfigError::IncompleteDefaults {
        schema: name.to_string(),
        violations,
    })
}

#[cfg(test)]
mod tests;
