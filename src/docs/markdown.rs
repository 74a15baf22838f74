use serde_json::Value;

use super::{PropertyInfo, extract_property_info, generator::DocsError, object_sections};
use crate::config::SchemaEntry;

const TABLE_HEADER: &str =
    "| Property | Type | Description | Default |\n|----------|------|-------------|---------|";

/// Generates a markdown table documenting configuration properties.
///
/// Creates a formatted table with property names, types, descriptions,
/// and default values for display in documentation.
pub fn generate_property_table(
    section_title: &str,
    config_path: &str,
    properties: Vec<PropertyInfo>,
) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let property_rows = properties
        .iter()
        .map(|prop| {
            format!(
                "| `{}` | `{}` | {} | `{}` |",
                prop.name, prop.type_name, prop.description, prop.default_value
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "## {}\n**Config path:** `{}`\n\n{}\n{}\n",
        section_title, config_path, TABLE_HEADER, property_rows
    )
}

/// Generates a complete markdown reference page for a registered schema.
///
/// Object schemas get one property table per nested object; discriminated
/// records list their variants instead.
///
/// # Errors
///
/// Returns `DocsError::SchemaConversion` if schema serialization fails.
pub fn generate_schema_page(entry: &SchemaEntry) -> Result<String, DocsError> {
    let schema = serde_json::to_value(entry.node.to_json_schema(entry.title)).map_err(|e| {
        DocsError::SchemaConversion {
            schema: entry.name.to_string(),
            details: e.to_string(),
        }
    })?;

    let mut content = generate_header(entry, &schema);

    match schema.get("oneOf").and_then(Value::as_array) {
        Some(variants) => content.push_str(&generate_variants(variants)),
        None => content.push_str(&generate_sections(&schema)),
    }

    Ok(content)
}

fn generate_header(entry: &SchemaEntry, schema: &Value) -> String {
    let description = schema
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();

    format!(
        "# {} Configuration\n\n{}\n\n**Schema name:** `{}`\n\n",
        entry.title, description, entry.name
    )
}

fn generate_sections(schema: &Value) -> String {
    let mut content = String::new();

    for section in object_sections(schema) {
        let properties = extract_property_info(section.schema);
        if properties.is_empty() {
            continue;
        }

        let (title, path) = if section.path.is_empty() {
            ("Top-level".to_string(), "<root>")
        } else {
            (section_title(&section.path), section.path.as_str())
        };

        content.push_str(&generate_property_table(&title, path, properties));
        content.push('\n');
    }

    content
}

fn generate_variants(variants: &[Value]) -> String {
    let rows = variants
        .iter()
        .map(|variant| {
            let name = variant.get("title").and_then(Value::as_str).unwrap_or("-");
            let tag = variant
                .pointer("/properties/service/const")
                .map_or_else(|| "-".to_string(), Value::to_string);
            format!("| `{name}` | `{tag}` |")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "## Variants\nSelected by the `service` field. Each variant is documented on its own page.\n\n\
         | Variant | Service |\n|---------|---------|\n{rows}\n"
    )
}

fn section_title(path: &str) -> String {
    let last = path.rsplit('.').next().unwrap_or(path);
    title_case(last.trim_end_matches("[]"))
}

fn title_case(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let mut chars = s.chars();
    chars
        .next()
        .unwrap_or_default()
        .to_uppercase()
        .chain(chars.as_str().chars())
        .collect()
}
