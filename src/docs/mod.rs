//! Documentation generation for configuration schemas.
//!
//! Renders every registered schema as a markdown reference page, built from
//! its JSON Schema export.

mod generator;
mod markdown;
mod schema;

pub use generator::{DocsError, DocsGenerator};
pub use markdown::{generate_property_table, generate_schema_page};
pub use schema::{ObjectSection, PropertyInfo, extract_property_info, get_type, object_sections};
