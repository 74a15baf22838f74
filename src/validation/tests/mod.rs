//! Unit tests for the validation engine
//!
//! Exercises every schema kind against conforming and malformed input.

#![allow(clippy::panic)]

use regex::Regex;
use serde_json::{Value, json};

use crate::{
    error::ConfigError,
    schema::{
        SchemaNode, array, boolean, integer, literal, number, object, one_of, record, string,
        tagged, tuple, union,
    },
    validation::{
        FieldPath, ValidationOptions, Violation, ViolationKind, materialize, materialize_defaults,
        validate, validate_with,
    },
};

fn violations(node: &SchemaNode, input: Value) -> Vec<Violation> {
    match validate(node, &input) {
        Ok(value) => panic!("expected violations, got {value}"),
        Err(violations) => violations,
    }
}

fn accepted(node: &SchemaNode, input: Value) -> Value {
    match validate(node, &input) {
        Ok(value) => value,
        Err(violations) => panic!("expected success, got {violations:?}"),
    }
}

fn paths(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(|v| v.path.to_string()).collect()
}

#[test]
fn field_path_rendering() {
    let path = FieldPath::root().child("settings").child("outputs").index(0).child("name");

    assert_eq!(path.to_string(), "settings.outputs.0.name");
    assert_eq!(FieldPath::root().to_string(), "<root>");
    assert!(FieldPath::root().is_root());
    assert_eq!(path.segments().len(), 4);
}

#[test]
fn violation_display_and_serialize() {
    let violation = Violation {
        path: FieldPath::root().child("timeouts").child("idle"),
        kind: ViolationKind::OutOfRange,
        message: "must be greater than or equal to 60, found 30".to_string(),
    };

    assert_eq!(
        violation.to_string(),
        "timeouts.idle: must be greater than or equal to 60, found 30"
    );
    assert_eq!(
        serde_json::to_value(&violation).unwrap_or_else(|e| panic!("{e}")),
        json!({
            "path": "timeouts.idle",
            "kind": "out_of_range",
            "message": "must be greater than or equal to 60, found 30"
        })
    );
}

#[test]
fn numeric_bounds_are_inclusive() {
    let node = integer().range(60.0, 3600.0);

    accepted(&node, json!(60));
    accepted(&node, json!(3600));

    let below = violations(&node, json!(59));
    assert_eq!(below.len(), 1);
    assert_eq!(below[0].kind, ViolationKind::OutOfRange);

    let above = violations(&node, json!(3601));
    assert_eq!(above[0].kind, ViolationKind::OutOfRange);
}

#[test]
fn integer_rejects_fraction_but_accepts_whole_float() {
    let node = integer();

    assert_eq!(accepted(&node, json!(5.0)), json!(5.0));
    let found = violations(&node, json!(5.5));
    assert_eq!(found[0].kind, ViolationKind::TypeMismatch);
}

#[test]
fn positive_numbers() {
    accepted(&integer().positive(), json!(1));
    accepted(&number().positive(), json!(0.001));

    assert_eq!(violations(&integer().positive(), json!(0))[0].kind, ViolationKind::OutOfRange);
    let found = violations(&number().positive(), json!(0.0));
    assert_eq!(found[0].message, "must be greater than 0, found 0");
}

#[test]
fn positive_float_accepts_subnormal_values() {
    let node = object().field("scale", number().positive());

    accepted(&node, json!({ "scale": 1e-310 }));
    accepted(&node, json!({ "scale": f64::from_bits(1) }));

    let found = violations(&node, json!({ "scale": -1e-310 }));
    assert_eq!(found[0].kind, ViolationKind::OutOfRange);
    assert_eq!(found[0].path.to_string(), "scale");
}

#[test]
fn multiple_of_step() {
    let node = integer().multiple_of(90.0);

    accepted(&node, json!(270));
    assert_eq!(violations(&node, json!(45))[0].kind, ViolationKind::InvalidFormat);
}

#[test]
fn string_constraints() {
    let pattern = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap_or_else(|e| panic!("{e}"));
    let color = string().pattern(&pattern);

    accepted(&color, json!("#1e1e2e"));
    assert_eq!(violations(&color, json!("blue"))[0].kind, ViolationKind::InvalidFormat);

    let name = string().non_empty();
    assert_eq!(violations(&name, json!(""))[0].kind, ViolationKind::OutOfRange);
    assert_eq!(violations(&name, json!(3))[0].kind, ViolationKind::TypeMismatch);
}

#[test]
fn enumeration_membership() {
    let node = one_of(["top", "bottom", "left", "right"]);

    accepted(&node, json!("left"));

    let found = violations(&node, json!("middle"));
    assert_eq!(found[0].kind, ViolationKind::NotInEnumeration);
    assert!(found[0].message.contains("top, bottom, left, right"));

    assert_eq!(violations(&node, json!(1))[0].kind, ViolationKind::NotInEnumeration);
}

#[test]
fn literal_must_match_exactly() {
    let node = literal("pipewire");

    accepted(&node, json!("pipewire"));
    assert_eq!(
        violations(&node, json!("pulseaudio"))[0].kind,
        ViolationKind::NotInEnumeration
    );
}

#[test]
fn tuple_checks_length_and_positions() {
    let node = tuple(vec![integer(), integer()]);

    accepted(&node, json!([1920, 1080]));
    assert_eq!(violations(&node, json!([1920]))[0].kind, ViolationKind::TypeMismatch);
    assert_eq!(paths(&violations(&node, json!([1920, "x"]))), vec!["1"]);
}

#[test]
fn sequence_reports_each_bad_element() {
    let node = array(integer().positive()).min_items(1);

    accepted(&node, json!([1, 2]));

    let found = violations(&node, json!([1, 0, -3]));
    assert_eq!(paths(&found), vec!["1", "2"]);

    let empty = violations(&node, json!([]));
    assert_eq!(empty[0].kind, ViolationKind::OutOfRange);
}

#[test]
fn record_validates_every_value() {
    let node = record(string());

    accepted(&node, json!({ "Mod+Return": "spawn ghostty" }));
    assert_eq!(
        paths(&violations(&node, json!({ "a": "x", "b": 2 }))),
        vec!["b"]
    );
}

#[test]
fn defaults_fill_missing_fields() {
    let node = object()
        .field("enabled", boolean().default(true))
        .field("command", string().default("swaylock -f -c 000000"))
        .optional("extra", string());

    assert_eq!(
        accepted(&node, json!({})),
        json!({ "enabled": true, "command": "swaylock -f -c 000000" })
    );
    assert_eq!(
        accepted(&node, json!({ "enabled": false })),
        json!({ "enabled": false, "command": "swaylock -f -c 000000" })
    );
}

#[test]
fn required_field_without_default_is_missing() {
    let node = object()
        .field("terminal", string().non_empty())
        .field("debug", boolean().default(false));

    let found = violations(&node, json!({}));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::MissingField);
    assert_eq!(found[0].path.to_string(), "terminal");
}

#[test]
fn required_nested_object_materializes_from_defaults() {
    let node = object().field(
        "timeouts",
        object()
            .field("idle", integer().min(60.0).default(300))
            .field("lock", integer().min(60.0).default(600)),
    );

    assert_eq!(
        accepted(&node, json!({})),
        json!({ "timeouts": { "idle": 300, "lock": 600 } })
    );
}

#[test]
fn required_nested_object_with_required_field_is_missing() {
    let node = object().field("keyboard", object().field("layout", string()));

    let found = violations(&node, json!({}));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::MissingField);
    assert_eq!(found[0].path.to_string(), "keyboard");
}

#[test]
fn every_malformed_field_is_reported() {
    let node = object()
        .field("a", integer().range(0.0, 10.0).default(1))
        .field("b", boolean().default(false))
        .field("c", one_of(["x", "y"]).default("x"))
        .field("nested", object().field("d", string().default("ok")));

    let found = violations(
        &node,
        json!({ "a": 11, "b": "yes", "c": "z", "nested": { "d": 4 } }),
    );

    assert_eq!(paths(&found), vec!["a", "b", "c", "nested.d"]);
    assert_eq!(found[0].kind, ViolationKind::OutOfRange);
    assert_eq!(found[1].kind, ViolationKind::TypeMismatch);
    assert_eq!(found[2].kind, ViolationKind::NotInEnumeration);
}

#[test]
fn unknown_keys_are_dropped_or_rejected() {
    let open = object().field("a", integer().default(1));
    assert_eq!(accepted(&open, json!({ "a": 2, "b": 3 })), json!({ "a": 2 }));

    let closed = object().field("a", integer().default(1)).closed();
    let found = violations(&closed, json!({ "a": 2, "b": 3 }));
    assert_eq!(found[0].kind, ViolationKind::UnknownField);
    assert_eq!(found[0].path.to_string(), "b");
}

#[test]
fn closed_world_option_applies_to_nested_objects() {
    let node = object().field("inner", object().field("a", integer().default(1)));
    let input = json!({ "inner": { "a": 1, "stray": true } });

    assert!(validate(&node, &input).is_ok());

    let options = ValidationOptions { closed_world: true };
    let Err(found) = validate_with(&node, &input, options) else {
        panic!("closed world should reject stray keys");
    };
    assert_eq!(paths(&found), vec!["inner.stray"]);
}

#[test]
fn input_is_not_modified() {
    let node = object().field("a", integer().default(1));
    let input = json!({ "b": 2 });

    let output = accepted(&node, input.clone());

    assert_eq!(input, json!({ "b": 2 }));
    assert_eq!(output, json!({ "a": 1 }));
}

#[test]
fn union_first_match_wins() {
    let node = union(vec![integer().positive(), string()]);

    accepted(&node, json!(2));
    accepted(&node, json!("auto"));
}

#[test]
fn union_shape_mismatch_reports_no_matching_variant() {
    let node = union(vec![integer(), string()]);

    let found = violations(&node, json!(true));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::NoMatchingVariant);
    assert!(found[0].message.contains("integer | string"));
}

#[test]
fn union_reports_closest_variant() {
    let node = union(vec![integer().positive(), string()]);

    let found = violations(&node, json!(0));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::OutOfRange);
}

#[test]
fn tagged_union_dispatches_on_discriminant() {
    let node = tagged("service")
        .variant(
            "audio",
            "pipewire",
            object()
                .field("service", literal("pipewire"))
                .field("quantum", integer().range(32.0, 8192.0).default(1024)),
        )
        .variant(
            "idle",
            "swayidle",
            object()
                .field("service", literal("swayidle"))
                .field("idle", integer().min(60.0).default(300)),
        );

    assert_eq!(
        accepted(&node, json!({ "service": "pipewire" })),
        json!({ "service": "pipewire", "quantum": 1024 })
    );

    let found = violations(&node, json!({ "service": "pipewire", "quantum": 16 }));
    assert_eq!(paths(&found), vec!["quantum"]);
    assert_eq!(found[0].kind, ViolationKind::OutOfRange);

    let unknown = violations(&node, json!({ "service": "pulseaudio" }));
    assert_eq!(unknown[0].kind, ViolationKind::NoMatchingVariant);
    assert!(unknown[0].message.contains("pipewire, swayidle"));

    let missing = violations(&node, json!({}));
    assert_eq!(missing[0].kind, ViolationKind::NoMatchingVariant);

    let not_object = violations(&node, json!([]));
    assert_eq!(not_object[0].kind, ViolationKind::TypeMismatch);
}

#[test]
fn materialize_object_defaults() {
    let node = object()
        .field("version", string().default("1.0.0"))
        .field("settings", object().field("gap", integer().default(8)));

    assert_eq!(
        materialize(&node).unwrap_or_else(|v| panic!("{v:?}")),
        json!({ "version": "1.0.0", "settings": { "gap": 8 } })
    );
}

#[test]
fn materialize_without_defaults_fails() {
    let node = object().field("terminal", string().non_empty());

    let Err(ConfigError::IncompleteDefaults { schema, violations }) =
        materialize_defaults(&node, "sway")
    else {
        panic!("terminal has no default");
    };
    assert_eq!(schema, "sway");
    assert_eq!(violations[0].kind, ViolationKind::MissingField);

    assert!(materialize(&string()).is_err());
    assert_eq!(
        materialize(&string().default("x")).unwrap_or_else(|v| panic!("{v:?}")),
        json!("x")
    );
}

#[test]
fn materialize_rejects_invalid_default() {
    let node = object().field("idle", integer().min(60.0).default(30));

    let Err(found) = materialize(&node) else {
        panic!("default below minimum must fail");
    };
    assert_eq!(found[0].kind, ViolationKind::OutOfRange);
}
