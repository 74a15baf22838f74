//! Schema parsing and property extraction utilities for JSON Schema documents.
//!
//! Works on the documents produced by
//! [`SchemaNode::to_json_schema`](crate::schema::SchemaNode::to_json_schema):
//! extracts one row per property and finds every nested object worth its own
//! table.

use serde_json::{Map, Value};

/// Represents information about a single property in a JSON Schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    /// The name of the property as defined in the schema.
    pub name: String,
    /// Short type label (e.g. "string", "array<string>", "integer or string").
    pub type_name: String,
    /// Human-readable description, followed by the allowed values of an enum.
    pub description: String,
    /// Default value, "required" for required fields without one, "-" otherwise.
    pub default_value: String,
}

/// An object schema nested somewhere inside a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSection<'a> {
    /// Dotted path from the document root; empty for the root itself.
    /// Array elements are written as `name[]` and record values as
    /// `name.<key>`.
    pub path: String,
    /// The object schema.
    pub schema: &'a Value,
}

/// Extracts property information from a JSON Schema object.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use voidance_config::docs::extract_property_info;
///
/// let schema = json!({
///     "properties": {
///         "term": {
///             "type": "string",
///             "description": "Terminal used for commands",
///             "default": "ghostty"
///         }
///     }
/// });
///
/// let properties = extract_property_info(&schema);
/// assert_eq!(properties[0].name, "term");
/// assert_eq!(properties[0].type_name, "string");
/// assert_eq!(properties[0].default_value, "\"ghostty\"");
/// ```
pub fn extract_property_info(schema: &Value) -> Vec<PropertyInfo> {
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|props| build_properties(props, &required))
        .unwrap_or_default()
}

/// Every object schema in `schema` that declares properties, depth first,
/// starting with `schema` itself.
pub fn object_sections(schema: &Value) -> Vec<ObjectSection<'_>> {
    let mut sections = Vec::new();
    collect_sections(schema, String::new(), &mut sections);
    sections
}

fn collect_sections<'a>(schema: &'a Value, path: String, sections: &mut Vec<ObjectSection<'a>>) {
    let Some(props) = schema.get("properties").and_then(Value::as_object) else {
        return;
    };
    sections.push(ObjectSection {
        path: path.clone(),
        schema,
    });

    for (name, property) in props {
        let child = if path.is_empty() {
            name.clone()
        } else {
            format!("{path}.{name}")
        };

        let items = property.get("items").filter(|items| items.is_object());
        let values = property
            .get("additionalProperties")
            .filter(|values| values.is_object());

        match (items, values) {
            (Some(items), _) => collect_sections(items, format!("{child}[]"), sections),
            (None, Some(values)) => collect_sections(values, format!("{child}.<key>"), sections),
            (None, None) => collect_sections(property, child, sections),
        }
    }
}

fn build_properties(props: &Map<String, Value>, required: &[&str]) -> Vec<PropertyInfo> {
    props
        .iter()
        .map(|(name, property)| PropertyInfo {
            name: name.clone(),
            type_name: get_type(property),
            description: get_description(property),
            default_value: get_default_value(property, required.contains(&name.as_str())),
        })
        .collect()
}

/// Short type label of a property schema.
pub fn get_type(property: &Value) -> String {
    if property.get("enum").is_some() {
        return "enum".to_string();
    }
    if let Some(constant) = property.get("const") {
        return format!("const {constant}");
    }
    if let Some(variants) = property.get("anyOf").and_then(Value::as_array) {
        return variants.iter().map(get_type).collect::<Vec<_>>().join(" or ");
    }
    if property.get("oneOf").is_some() {
        return "tagged union".to_string();
    }

    let base = property
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown");

    match (base, property.get("items"), property.get("additionalProperties")) {
        ("array", Some(items), _) if items.is_object() => format!("array<{}>", get_type(items)),
        ("array", _, _) if property.get("prefixItems").is_some() => "tuple".to_string(),
        ("object", _, Some(values)) if values.is_object() => {
            format!("record<{}>", get_type(values))
        }
        _ => base.to_string(),
    }
}

fn get_description(property: &Value) -> String {
    let description = property.get("description").and_then(Value::as_str);
    let values = property.get("enum").and_then(Value::as_array).map(|values| {
        values
            .iter()
            .map(|value| match value {
                Value::String(s) => format!("`{s}`"),
                other => format!("`{other}`"),
            })
            .collect::<Vec<_>>()
            .join(", ")
    });

    match (description, values) {
        (Some(description), Some(values)) => format!("{description}. One of: {values}"),
        (None, Some(values)) => format!("One of: {values}"),
        (Some(description), None) => description.to_string(),
        (None, None) => "No description provided".to_string(),
    }
}

fn get_default_value(property: &Value, required: bool) -> String {
    match property.get("default") {
        Some(Value::String(s)) => format!("\"{s}\""),
        Some(other) => other.to_string(),
        None if required => "required".to_string(),
        None => "-".to_string(),
    }
}
