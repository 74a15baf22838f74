use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::{FieldPath, Violation, ViolationKind};
use crate::schema::{
    Field, NumberRules, ObjectRules, Presence, SchemaKind, SchemaNode, SequenceRules,
    StringRules, TaggedRules, UnknownKeys,
};

/// Outcome of validating one document: the normalized value with every
/// default filled in, or all violations found.
pub type ValidationResult = Result<Value, Vec<Violation>>;

/// Switches that change how strictly a document is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Treat every object as closed, rejecting undeclared keys everywhere.
    pub closed_world: bool,
}

/// Validates `input` against `node` with default options.
pub fn validate(node: &SchemaNode, input: &Value) -> ValidationResult {
    validate_with(node, input, ValidationOptions::default())
}

/// Validates `input` against `node`.
///
/// All violations are collected; the first one does not stop the walk.
/// On success the returned value contains every defaulted field and no
/// ignored unknown keys. The input is never modified.
#[instrument(level = "debug", skip_all, fields(closed_world = options.closed_world))]
pub fn validate_with(
    node: &SchemaNode,
    input: &Value,
    options: ValidationOptions,
) -> ValidationResult {
    let mut validator = Validator::new(options);
    let output = validator.check(node, input, &FieldPath::root());
    validator.finish(output)
}

/// Builds the complete default document of `node`.
///
/// Equivalent to validating an empty input: an explicit default on the root
/// is validated as is, objects are validated from `{}`, and any other root
/// without a default cannot be materialized.
pub fn materialize(node: &SchemaNode) -> ValidationResult {
    let root = FieldPath::root();
    let mut validator = Validator::new(ValidationOptions::default());

    let output = match (node.default_value(), node.kind()) {
        (Some(default), _) => validator.check(node, default, &root),
        (None, SchemaKind::Object(_) | SchemaKind::Mapping(_) | SchemaKind::Tagged(_)) => {
            validator.check(node, &Value::Object(Map::new()), &root)
        }
        (None, kind) => validator.report(
            &root,
            ViolationKind::MissingField,
            format!("{} has no default value", kind.name()),
        ),
    };

    validator.finish(output)
}

struct Validator {
    options: ValidationOptions,
    violations: Vec<Violation>,
}

impl Validator {
    fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            violations: Vec::new(),
        }
    }

    fn finish(self, output: Option<Value>) -> ValidationResult {
        match output {
            Some(value) if self.violations.is_empty() => Ok(value),
            _ => {
                debug!(count = self.violations.len(), "validation failed");
                Err(self.violations)
            }
        }
    }

    /// Records a violation. Always returns `None` so callers can bail with it.
    fn report(
        &mut self,
        path: &FieldPath,
        kind: ViolationKind,
        message: impl Into<String>,
    ) -> Option<Value> {
        self.violations.push(Violation {
            path: path.clone(),
            kind,
            message: message.into(),
        });
        None
    }

    fn mismatch(&mut self, path: &FieldPath, expected: &str, input: &Value) -> Option<Value> {
        self.report(
            path,
            ViolationKind::TypeMismatch,
            format!("expected {expected}, received {}", type_name(input)),
        )
    }

    fn check(&mut self, node: &SchemaNode, input: &Value, path: &FieldPath) -> Option<Value> {
        match node.kind() {
            SchemaKind::String(rules) => self.check_string(rules, input, path),
            SchemaKind::Number(rules) => self.check_number(rules, false, input, path),
            SchemaKind::Integer(rules) => self.check_number(rules, true, input, path),
            SchemaKind::Boolean => match input {
                Value::Bool(_) => Some(input.clone()),
                _ => self.mismatch(path, "boolean", input),
            },
            SchemaKind::Enumeration(values) => match input.as_str() {
                Some(value) if values.iter().any(|v| v == value) => Some(input.clone()),
                _ => self.report(
                    path,
                    ViolationKind::NotInEnumeration,
                    format!("invalid value {input}, expected one of: {}", values.join(", ")),
                ),
            },
            SchemaKind::Literal(expected) => {
                if input == expected {
                    Some(input.clone())
                } else {
                    self.report(
                        path,
                        ViolationKind::NotInEnumeration,
                        format!("invalid value {input}, expected {expected}"),
                    )
                }
            }
            SchemaKind::Tuple(items) => self.check_tuple(items, input, path),
            SchemaKind::Sequence(rules) => self.check_sequence(rules, input, path),
            SchemaKind::Mapping(values) => self.check_mapping(values, input, path),
            SchemaKind::Object(rules) => self.check_object(rules, input, path),
            SchemaKind::Union(variants) => self.check_union(variants, input, path),
            SchemaKind::Tagged(rules) => self.check_tagged(node, rules, input, path),
        }
    }

    fn check_string(
        &mut self,
        rules: &StringRules,
        input: &Value,
        path: &FieldPath,
    ) -> Option<Value> {
        let Some(value) = input.as_str() else {
            return self.mismatch(path, "string", input);
        };

        if let Some(min) = rules.min_len {
            let len = value.chars().count();
            if len < min {
                return self.report(
                    path,
                    ViolationKind::OutOfRange,
                    format!("must contain at least {min} character(s), found {len}"),
                );
            }
        }

        if let Some(pattern) = &rules.pattern {
            if !pattern.is_match(value) {
                return self.report(
                    path,
                    ViolationKind::InvalidFormat,
                    format!("\"{value}\" does not match pattern {}", pattern.as_str()),
                );
            }
        }

        Some(input.clone())
    }

    fn check_number(
        &mut self,
        rules: &NumberRules,
        integral: bool,
        input: &Value,
        path: &FieldPath,
    ) -> Option<Value> {
        let expected = if integral { "integer" } else { "number" };
        let Some(value) = input.as_f64() else {
            return self.mismatch(path, expected, input);
        };

        if integral && value.fract() != 0.0 {
            return self.mismatch(path, expected, input);
        }

        if let Some(min) = rules.min {
            if value < min {
                return self.report(
                    path,
                    ViolationKind::OutOfRange,
                    format!("must be greater than or equal to {min}, found {value}"),
                );
            }
        }

        if let Some(min) = rules.exclusive_min {
            if value <= min {
                return self.report(
                    path,
                    ViolationKind::OutOfRange,
                    format!("must be greater than {min}, found {value}"),
                );
            }
        }

        if let Some(max) = rules.max {
            if value > max {
                return self.report(
                    path,
                    ViolationKind::OutOfRange,
                    format!("must be less than or equal to {max}, found {value}"),
                );
            }
        }

        if let Some(step) = rules.multiple_of {
            if (value / step).fract() != 0.0 {
                return self.report(
                    path,
                    ViolationKind::InvalidFormat,
                    format!("must be a multiple of {step}, found {value}"),
                );
            }
        }

        Some(input.clone())
    }

    fn check_tuple(
        &mut self,
        items: &[SchemaNode],
        input: &Value,
        path: &FieldPath,
    ) -> Option<Value> {
        let Some(elements) = input.as_array() else {
            return self.mismatch(path, "array", input);
        };

        if elements.len() != items.len() {
            return self.report(
                path,
                ViolationKind::TypeMismatch,
                format!(
                    "expected tuple of {} element(s), received {}",
                    items.len(),
                    elements.len()
                ),
            );
        }

        let mut output = Vec::with_capacity(items.len());
        let mut valid = true;
        for (i, (item, element)) in items.iter().zip(elements).enumerate() {
            match self.check(item, element, &path.index(i)) {
                Some(value) => output.push(value),
                None => valid = false,
            }
        }

        valid.then_some(Value::Array(output))
    }

    fn check_sequence(
        &mut self,
        rules: &SequenceRules,
        input: &Value,
        path: &FieldPath,
    ) -> Option<Value> {
        let Some(elements) = input.as_array() else {
            return self.mismatch(path, "array", input);
        };

        let mut valid = true;
        if let Some(min) = rules.min_items {
            if elements.len() < min {
                self.report(
                    path,
                    ViolationKind::OutOfRange,
                    format!("must contain at least {min} element(s), found {}", elements.len()),
                );
                valid = false;
            }
        }

        let mut output = Vec::with_capacity(elements.len());
        for (i, element) in elements.iter().enumerate() {
            match self.check(&rules.items, element, &path.index(i)) {
                Some(value) => output.push(value),
                None => valid = false,
            }
        }

        valid.then_some(Value::Array(output))
    }

    fn check_mapping(
        &mut self,
        values: &SchemaNode,
        input: &Value,
        path: &FieldPath,
    ) -> Option<Value> {
        let Some(entries) = input.as_object() else {
            return self.mismatch(path, "object", input);
        };

        let mut output = Map::new();
        let mut valid = true;
        for (key, value) in entries {
            match self.check(values, value, &path.child(key)) {
                Some(value) => {
                    output.insert(key.clone(), value);
                }
                None => valid = false,
            }
        }

        valid.then_some(Value::Object(output))
    }

    fn check_object(
        &mut self,
        rules: &ObjectRules,
        input: &Value,
        path: &FieldPath,
    ) -> Option<Value> {
        let Some(entries) = input.as_object() else {
            return self.mismatch(path, "object", input);
        };

        let mut output = Map::new();
        let mut valid = true;

        for field in &rules.fields {
            let field_path = path.child(&field.name);
            let value = match entries.get(&field.name) {
                Some(value) => self.check(&field.node, value, &field_path),
                None => match self.resolve_missing(field, &field_path) {
                    Missing::Filled(value) => Some(value),
                    Missing::Absent => continue,
                    Missing::Failed => None,
                },
            };

            match value {
                Some(value) => {
                    output.insert(field.name.clone(), value);
                }
                None => valid = false,
            }
        }

        if self.options.closed_world || rules.unknown_keys == UnknownKeys::Reject {
            for key in entries.keys() {
                if !rules.fields.iter().any(|field| &field.name == key) {
                    self.report(
                        &path.child(key),
                        ViolationKind::UnknownField,
                        format!("unrecognized key '{key}'"),
                    );
                    valid = false;
                }
            }
        }

        valid.then_some(Value::Object(output))
    }

    fn resolve_missing(&mut self, field: &Field, path: &FieldPath) -> Missing {
        match field.presence() {
            Presence::Optional => Missing::Absent,
            Presence::Defaulted => {
                let Some(default) = field.node.default_value() else {
                    return Missing::Absent;
                };
                match self.check(&field.node, default, path) {
                    Some(value) => Missing::Filled(value),
                    None => Missing::Failed,
                }
            }
            Presence::Required => {
                if let Some(value) = self.materialize_nested(&field.node, path) {
                    return Missing::Filled(value);
                }
                self.report(
                    path,
                    ViolationKind::MissingField,
                    format!("required {} field is missing", field.node.kind().name()),
                );
                Missing::Failed
            }
        }
    }

    /// A missing required object whose fields all default is filled from `{}`.
    fn materialize_nested(&self, node: &SchemaNode, path: &FieldPath) -> Option<Value> {
        if !matches!(node.kind(), SchemaKind::Object(_)) {
            return None;
        }

        let mut nested = Validator::new(self.options);
        let value = nested.check(node, &Value::Object(Map::new()), path)?;
        nested.violations.is_empty().then_some(value)
    }

    fn check_union(
        &mut self,
        variants: &[SchemaNode],
        input: &Value,
        path: &FieldPath,
    ) -> Option<Value> {
        let mut closest: Option<Vec<Violation>> = None;

        for variant in variants {
            let mut attempt = Validator::new(self.options);
            if let Some(value) = attempt.check(variant, input, path) {
                return Some(value);
            }

            if attempt.is_shape_mismatch(path) {
                continue;
            }
            if closest
                .as_ref()
                .is_none_or(|best| attempt.violations.len() < best.len())
            {
                closest = Some(attempt.violations);
            }
        }

        match closest {
            Some(violations) => {
                self.violations.extend(violations);
                None
            }
            None => {
                let kinds: Vec<&str> = variants.iter().map(|v| v.kind().name()).collect();
                self.report(
                    path,
                    ViolationKind::NoMatchingVariant,
                    format!(
                        "expected one of: {}, received {}",
                        kinds.join(" | "),
                        type_name(input)
                    ),
                )
            }
        }
    }

    /// Whether the only failure is a type mismatch on the value itself.
    fn is_shape_mismatch(&self, path: &FieldPath) -> bool {
        matches!(
            self.violations.as_slice(),
            [violation] if &violation.path == path && violation.kind == ViolationKind::TypeMismatch
        )
    }

    fn check_tagged(
        &mut self,
        node: &SchemaNode,
        rules: &TaggedRules,
        input: &Value,
        path: &FieldPath,
    ) -> Option<Value> {
        let Some(entries) = input.as_object() else {
            return self.mismatch(path, "object", input);
        };

        if let Some(variant) = node.select_variant(input) {
            return self.check(&variant.node, input, path);
        }

        let accepted: Vec<&str> = rules.variants.iter().map(|v| v.tag_value.as_str()).collect();
        let message = match entries.get(&rules.tag) {
            Some(value) => format!(
                "no variant for {} = {value}, expected one of: {}",
                rules.tag,
                accepted.join(", ")
            ),
            None => format!(
                "missing discriminant '{}', expected one of: {}",
                rules.tag,
                accepted.join(", ")
            ),
        };

        self.report(
            &path.child(&rules.tag),
            ViolationKind::NoMatchingVariant,
            message,
        )
    }
}

enum Missing {
    Filled(Value),
    Absent,
    Failed,
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
