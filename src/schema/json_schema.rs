//! Export of schema nodes as JSON Schema (draft 2020-12) documents.

use schemars::Schema;
use serde_json::{Map, Value, json};

use super::{NumberRules, Presence, SchemaKind, SchemaNode, UnknownKeys};

const DRAFT: &str = "https://json-schema.org/draft/2020-12/schema";

impl SchemaNode {
    /// Renders this node as a standalone JSON Schema document.
    pub fn to_json_schema(&self, title: &str) -> Schema {
        let mut root = Map::new();
        root.insert("$schema".to_string(), json!(DRAFT));
        root.insert("title".to_string(), json!(title));
        root.extend(node_to_map(self));

        Schema::from(root)
    }
}

fn node_to_map(node: &SchemaNode) -> Map<String, Value> {
    let mut map = Map::new();

    match node.kind() {
        SchemaKind::String(rules) => {
            map.insert("type".to_string(), json!("string"));
            if let Some(len) = rules.min_len {
                map.insert("minLength".to_string(), json!(len));
            }
            if let Some(pattern) = &rules.pattern {
                map.insert("pattern".to_string(), json!(pattern.as_str()));
            }
        }
        SchemaKind::Number(rules) => {
            map.insert("type".to_string(), json!("number"));
            insert_bounds(&mut map, rules);
        }
        SchemaKind::Integer(rules) => {
            map.insert("type".to_string(), json!("integer"));
            insert_bounds(&mut map, rules);
        }
        SchemaKind::Boolean => {
            map.insert("type".to_string(), json!("boolean"));
        }
        SchemaKind::Enumeration(values) => {
            map.insert("type".to_string(), json!("string"));
            map.insert("enum".to_string(), json!(values));
        }
        SchemaKind::Literal(value) => {
            map.insert("const".to_string(), value.clone());
        }
        SchemaKind::Tuple(items) => {
            let prefix: Vec<Value> = items.iter().map(|item| Value::Object(node_to_map(item))).collect();
            map.insert("type".to_string(), json!("array"));
            map.insert("prefixItems".to_string(), Value::Array(prefix));
            map.insert("items".to_string(), json!(false));
            map.insert("minItems".to_string(), json!(items.len()));
            map.insert("maxItems".to_string(), json!(items.len()));
        }
        SchemaKind::Sequence(rules) => {
            map.insert("type".to_string(), json!("array"));
            map.insert("items".to_string(), Value::Object(node_to_map(&rules.items)));
            if let Some(count) = rules.min_items {
                map.insert("minItems".to_string(), json!(count));
            }
        }
        SchemaKind::Mapping(values) => {
            map.insert("type".to_string(), json!("object"));
            map.insert(
                "additionalProperties".to_string(),
                Value::Object(node_to_map(values)),
            );
        }
        SchemaKind::Object(rules) => {
            let mut properties = Map::new();
            let mut required = Vec::new();

            for field in &rules.fields {
                properties.insert(field.name.clone(), Value::Object(node_to_map(&field.node)));
                if field.presence() == Presence::Required {
                    required.push(json!(field.name));
                }
            }

            map.insert("type".to_string(), json!("object"));
            map.insert("properties".to_string(), Value::Object(properties));
            if !required.is_empty() {
                map.insert("required".to_string(), Value::Array(required));
            }
            if rules.unknown_keys == UnknownKeys::Reject {
                map.insert("additionalProperties".to_string(), json!(false));
            }
        }
        SchemaKind::Union(variants) => {
            let any_of = variants.iter().map(|v| Value::Object(node_to_map(v))).collect();
            map.insert("anyOf".to_string(), Value::Array(any_of));
        }
        SchemaKind::Tagged(rules) => {
            let one_of = rules
                .variants
                .iter()
                .map(|variant| {
                    let mut schema = node_to_map(&variant.node);
                    schema.insert("title".to_string(), json!(variant.name));
                    Value::Object(schema)
                })
                .collect();
            map.insert("oneOf".to_string(), Value::Array(one_of));
        }
    }

    if let Some(default) = node.default_value() {
        map.insert("default".to_string(), default.clone());
    }
    if let Some(description) = node.description() {
        map.insert("description".to_string(), json!(description));
    }

    map
}

fn insert_bounds(map: &mut Map<String, Value>, rules: &NumberRules) {
    if let Some(min) = rules.min {
        map.insert("minimum".to_string(), bound(min));
    }
    if let Some(min) = rules.exclusive_min {
        map.insert("exclusiveMinimum".to_string(), bound(min));
    }
    if let Some(max) = rules.max {
        map.insert("maximum".to_string(), bound(max));
    }
    if let Some(step) = rules.multiple_of {
        map.insert("multipleOf".to_string(), bound(step));
    }
}

fn bound(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        json!(value as i64)
    } else {
        json!(value)
    }
}
