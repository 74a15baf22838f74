//! Unit tests for config module
//!
//! Tests the declared schemas, the registry, domain lookup and document
//! parsing. Filesystem access is limited to temporary directories.

#![allow(clippy::panic)]

use std::path::Path;

use serde_json::{Value, json};

use crate::{
    config::{
        Document, DocumentFormat, Domain, KdlSummary, SchemaRegistry, load_document,
        parse_document,
    },
    error::ConfigError,
    schema::SchemaKind,
    validation::{ValidationOptions, Violation, ViolationKind},
};

fn registry() -> &'static SchemaRegistry {
    SchemaRegistry::global()
}

fn check(name: &str, input: &Value) -> Result<Value, Vec<Violation>> {
    check_with(name, input, ValidationOptions::default())
}

fn check_with(
    name: &str,
    input: &Value,
    options: ValidationOptions,
) -> Result<Value, Vec<Violation>> {
    match registry().validate(name, input, options) {
        Ok(result) => result,
        Err(e) => panic!("schema {name} should be registered: {e}"),
    }
}

fn rejected(name: &str, input: Value) -> Vec<Violation> {
    match check(name, &input) {
        Ok(value) => panic!("{name} should reject {input}, got {value}"),
        Err(violations) => violations,
    }
}

fn accepted(name: &str, input: Value) -> Value {
    match check(name, &input) {
        Ok(value) => value,
        Err(violations) => panic!("{name} should accept {input}: {violations:?}"),
    }
}

fn defaults(name: &str) -> Value {
    registry()
        .materialize_defaults(name)
        .unwrap_or_else(|e| panic!("{name} defaults: {e}"))
}

#[test]
fn registry_holds_every_schema() {
    let names: Vec<&str> = registry().names().collect();

    for expected in [
        "niri", "waybar", "wofi", "ghostty", "desktop", "component", "session", "display",
        "network", "audio", "idle", "swaylock", "services", "service", "sway",
    ] {
        assert!(names.contains(&expected), "{expected} missing from registry");
    }
    assert_eq!(names.len(), 15);
}

#[test]
fn unknown_schema_is_an_error() {
    let Err(ConfigError::UnknownSchema { name }) = registry().get("kitty") else {
        panic!("kitty is not a registered schema");
    };
    assert_eq!(name, "kitty");

    assert!(registry().validate("kitty", &json!({}), ValidationOptions::default()).is_err());
    assert!(registry().materialize_defaults("kitty").is_err());
}

#[test]
fn defaults_validate_against_their_schema() {
    for entry in registry().entries() {
        if matches!(entry.name, "sway" | "component" | "service") {
            continue;
        }

        let value = defaults(entry.name);
        let revalidated = accepted(entry.name, value.clone());
        assert_eq!(revalidated, value, "{} defaults are not a fixed point", entry.name);
    }
}

#[test]
fn tool_defaults_carry_base_fields() {
    for name in ["niri", "waybar", "wofi", "ghostty", "audio", "idle"] {
        let value = defaults(name);
        assert_eq!(value["version"], json!("1.0.0"));
        assert_eq!(value["enabled"], json!(true));
        assert_eq!(value["debug"], json!(false));
        assert!(value["settings"].is_object(), "{name} settings missing");
    }

    assert_eq!(defaults("audio")["service"], json!("pipewire"));
    assert_eq!(defaults("session")["service"], json!("elogind"));
}

#[test]
fn discriminated_records_accept_each_variant_default() {
    for (record, variants) in [
        ("component", vec!["niri", "waybar", "wofi", "ghostty"]),
        (
            "service",
            vec!["session", "display", "network", "audio", "idle", "swaylock"],
        ),
    ] {
        for variant in variants {
            let value = defaults(variant);
            assert_eq!(
                registry().classify(record, &value).unwrap_or_else(|e| panic!("{e}")),
                Some(variant)
            );
            assert_eq!(accepted(record, value.clone()), value);
        }
    }
}

#[test]
fn discriminated_records_have_no_defaults() {
    assert!(matches!(
        registry().materialize_defaults("service"),
        Err(ConfigError::IncompleteDefaults { .. })
    ));
}

#[test]
fn sway_cannot_materialize_defaults() {
    let Err(ConfigError::IncompleteDefaults { schema, violations }) =
        registry().materialize_defaults("sway")
    else {
        panic!("sway requires a terminal and a menu");
    };

    assert_eq!(schema, "sway");
    let paths: Vec<String> = violations.iter().map(|v| v.path.to_string()).collect();
    assert_eq!(paths, vec!["terminal", "menu"]);
    assert!(violations.iter().all(|v| v.kind == ViolationKind::MissingField));
}

#[test]
fn sway_minimal_document() {
    let value = accepted("sway", json!({ "terminal": "ghostty", "menu": "wofi --show drun" }));
    assert_eq!(value["modifier"], json!("Mod4"));
    assert_eq!(value["default_border"], json!("pixel"));

    let found = rejected("sway", json!({ "menu": "wofi" }));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::MissingField);
    assert_eq!(found[0].path.to_string(), "terminal");

    let empty = rejected("sway", json!({ "terminal": "", "menu": "wofi" }));
    assert_eq!(empty[0].kind, ViolationKind::OutOfRange);
}

#[test]
fn sway_nested_rules() {
    let found = rejected(
        "sway",
        json!({
            "terminal": "ghostty",
            "menu": "wofi",
            "keybindings": [{ "modifiers": [], "key": "Return", "command": "exec ghostty" }],
            "window_rules": [{ "criteria": { "app_id": "firefox", "floating": true }, "commands": [] }],
            "floating_minimum_size": [75]
        }),
    );

    let paths: Vec<String> = found.iter().map(|v| v.path.to_string()).collect();
    assert_eq!(
        paths,
        vec!["window_rules.0.commands", "keybindings.0.modifiers", "floating_minimum_size"]
    );
}

#[test]
fn idle_timeout_below_minimum_is_the_only_violation() {
    let found = rejected(
        "idle",
        json!({ "service": "swayidle", "settings": { "timeouts": { "idle": 10 } } }),
    );

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::OutOfRange);
    assert_eq!(found[0].path.to_string(), "settings.timeouts.idle");
    assert!(found[0].message.contains("60"));
}

#[test]
fn idle_partial_document_receives_defaults() {
    let value = accepted(
        "idle",
        json!({ "service": "swayidle", "settings": { "timeouts": { "idle": 60 } } }),
    );

    assert_eq!(value["settings"]["timeouts"]["idle"], json!(60));
    assert_eq!(value["settings"]["timeouts"]["lock"], json!(600));
    assert_eq!(value["settings"]["timeouts"]["suspend"], json!(1800));
    assert_eq!(value["settings"]["lock"]["command"], json!("swaylock -f -c 000000"));
    assert_eq!(value["settings"]["battery"]["timeouts"]["suspend"], json!(900));
    assert_eq!(value["enabled"], json!(true));
}

#[test]
fn numeric_bounds_at_the_edges() {
    let audio = |settings: Value| json!({ "service": "pipewire", "settings": settings });

    for ok in [8000, 384_000] {
        accepted("audio", audio(json!({ "default_clock_rate": ok })));
    }
    for bad in [7999, 384_001] {
        let found = rejected("audio", audio(json!({ "default_clock_rate": bad })));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::OutOfRange);
        assert_eq!(found[0].path.to_string(), "settings.default_clock_rate");
    }

    for ok in [-20, 19] {
        accepted("audio", audio(json!({ "rtkit": { "nice_level": ok } })));
    }
    for bad in [-21, 20] {
        let found = rejected("audio", audio(json!({ "rtkit": { "nice_level": bad } })));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path.to_string(), "settings.rtkit.nice_level");
    }

    let ghostty = |window: Value| json!({ "settings": { "window": window } });
    accepted("ghostty", ghostty(json!({ "opacity": 0.1 })));
    let found = rejected("ghostty", ghostty(json!({ "opacity": 0.05, "width": 399 })));
    assert_eq!(found.len(), 2);
}

#[test]
fn enumeration_fields_are_closed() {
    let session = |value: &str| {
        json!({ "service": "elogind", "settings": { "handle_lid_switch": value } })
    };

    for value in ["suspend", "hibernate", "ignore", "poweroff"] {
        accepted("session", session(value));
    }

    let found = rejected("session", session("explode"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::NotInEnumeration);
    assert_eq!(found[0].path.to_string(), "settings.handle_lid_switch");
}

#[test]
fn service_literal_is_pinned() {
    let found = rejected("audio", json!({ "service": "pulseaudio" }));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::NotInEnumeration);
    assert_eq!(found[0].path.to_string(), "service");
}

#[test]
fn every_malformed_field_is_reported_once() {
    let found = rejected(
        "waybar",
        json!({ "settings": { "height": 5, "layer": "middle", "spacing": "wide" } }),
    );

    let paths: Vec<String> = found.iter().map(|v| v.path.to_string()).collect();
    assert_eq!(paths, vec!["settings.layer", "settings.height", "settings.spacing"]);
}

#[test]
fn waybar_module_rules() {
    let found = rejected(
        "waybar",
        json!({ "settings": { "modules": { "clock": { "type": "clock", "rotate": 45 } } } }),
    );
    assert_eq!(found[0].kind, ViolationKind::InvalidFormat);
    assert_eq!(found[0].path.to_string(), "settings.modules.clock.rotate");

    let value = accepted(
        "waybar",
        json!({ "settings": { "modules": { "clock": { "type": "clock", "rotate": 270 } } } }),
    );
    assert_eq!(value["settings"]["modules"]["clock"]["max-volume"], json!(100));
}

#[test]
fn wofi_size_accepts_number_or_string() {
    let wofi = |width: Value| json!({ "settings": { "width": width } });

    accepted("wofi", wofi(json!(640)));
    accepted("wofi", wofi(json!("60%")));

    let zero = rejected("wofi", wofi(json!(0)));
    assert_eq!(zero[0].kind, ViolationKind::OutOfRange);

    let flag = rejected("wofi", wofi(json!(true)));
    assert_eq!(flag[0].kind, ViolationKind::NoMatchingVariant);
    assert_eq!(flag[0].path.to_string(), "settings.width");
}

#[test]
fn wofi_alignment_accepts_fill() {
    let value = defaults("wofi");

    assert_eq!(value["settings"]["halign"], json!("fill"));
    assert_eq!(value["settings"]["valign"], json!("fill"));
    assert_eq!(value["settings"]["columns"], json!(1));
}

#[test]
fn niri_required_input_is_materialized() {
    let value = accepted("niri", json!({ "settings": {} }));

    assert_eq!(value["settings"]["input"]["keyboard"]["xkb_layout"], json!("us"));
    assert_eq!(value["settings"]["layout"]["gaps"], json!(8));
    assert_eq!(value["service"], json!("niri"));
}

#[test]
fn niri_outputs_are_checked_per_element() {
    let found = rejected(
        "niri",
        json!({ "settings": { "outputs": [
            { "name": "eDP-1", "background_color": "blue" },
            { "scale": 2.0 }
        ] } }),
    );

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].kind, ViolationKind::InvalidFormat);
    assert_eq!(found[0].path.to_string(), "settings.outputs.0.background_color");
    assert_eq!(found[1].kind, ViolationKind::MissingField);
    assert_eq!(found[1].path.to_string(), "settings.outputs.1.name");
}

#[test]
fn display_required_groups_materialize() {
    let value = accepted("display", json!({ "service": "sddm", "settings": {} }));

    assert_eq!(value["settings"]["autologin"], json!({ "enabled": false }));
    assert_eq!(value["settings"]["display"]["minimum_vt"], json!(7));
}

#[test]
fn desktop_components_stay_optional() {
    let value = defaults("desktop");
    assert_eq!(value["components"], json!({}));
    assert_eq!(value["global"]["theme"]["name"], json!("voidance"));

    let with_bar = accepted("desktop", json!({ "components": { "waybar": {} } }));
    assert_eq!(with_bar["components"]["waybar"]["service"], json!("waybar"));
}

#[test]
fn services_umbrella_checks_nested_slots() {
    let found = rejected(
        "services",
        json!({ "services": { "idle": { "settings": { "timeouts": { "suspend": 100 } } } },
                "global": { "service_timeout": 1 } }),
    );

    let paths: Vec<String> = found.iter().map(|v| v.path.to_string()).collect();
    assert_eq!(
        paths,
        vec!["services.idle.settings.timeouts.suspend", "global.service_timeout"]
    );
}

#[test]
fn pipewire_record_classifies_as_audio() {
    let record = json!({ "service": "pipewire", "settings": { "default_clock_quantum": 512 } });

    assert_eq!(
        registry().classify("service", &record).unwrap_or_else(|e| panic!("{e}")),
        Some("audio")
    );
    let value = accepted("service", record);
    assert_eq!(value["settings"]["default_clock_rate"], json!(48000));
}

#[test]
fn pipewire_record_with_idle_body_reports_audio_fields() {
    let record = json!({
        "service": "pipewire",
        "settings": { "timeouts": { "idle": 300 }, "default_clock_rate": "fast" }
    });

    let Err(found) = check_with("service", &record, ValidationOptions { closed_world: true }) else {
        panic!("idle settings are not audio settings");
    };

    assert!(found.iter().all(|v| v.kind != ViolationKind::NoMatchingVariant));
    let paths: Vec<String> = found.iter().map(|v| v.path.to_string()).collect();
    assert_eq!(paths, vec!["settings.default_clock_rate", "settings.timeouts"]);
    assert_eq!(found[1].kind, ViolationKind::UnknownField);
}

#[test]
fn pipewire_record_with_session_body_is_accepted_in_open_world() {
    let record = json!({
        "service": "pipewire",
        "settings": { "handle_lid_switch": "suspend", "timeouts": { "idle": 300 } }
    });

    let value = accepted("service", record);

    assert_eq!(value["service"], json!("pipewire"));
    assert_eq!(value["settings"]["default_clock_rate"], json!(48000));
    assert!(value["settings"].get("handle_lid_switch").is_none());
    assert!(value["settings"].get("timeouts").is_none());
}

#[test]
fn unknown_service_tag_has_no_matching_variant() {
    let found = rejected("service", json!({ "service": "pulseaudio" }));

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, ViolationKind::NoMatchingVariant);
    assert_eq!(found[0].path.to_string(), "service");
}

#[test]
fn registered_schemas_are_objects_or_tagged() {
    for entry in registry().entries() {
        assert!(
            matches!(entry.node.kind(), SchemaKind::Object(_) | SchemaKind::Tagged(_)),
            "{} has an unexpected root kind",
            entry.name
        );
    }
}

#[test]
fn domain_table() {
    let Some(niri) = Domain::find("niri") else {
        panic!("niri domain missing");
    };
    assert_eq!(niri.format, DocumentFormat::Kdl);
    assert_eq!(niri.system_config(), Path::new("/etc/niri/config.kdl"));

    let validated: Vec<&str> = Domain::validated_by_default().map(|d| d.name).collect();
    assert_eq!(
        validated,
        vec!["niri", "waybar", "wofi", "ghostty", "desktop", "services"]
    );

    assert_eq!(Domain::generated().count(), 12);
    assert!(Domain::find("sway").is_some_and(|d| d.output_file.is_none()));
    assert!(Domain::find("kitty").is_none());

    for domain in Domain::all() {
        assert!(registry().get(domain.name).is_ok(), "{} has no schema", domain.name);
    }
}

#[test]
fn format_detection_prefers_extension() {
    let detect = |path: &str| DocumentFormat::detect(Path::new(path), DocumentFormat::Json);

    assert_eq!(detect("waybar.toml"), DocumentFormat::Toml);
    assert_eq!(detect("config.kdl"), DocumentFormat::Kdl);
    assert_eq!(detect("config"), DocumentFormat::Json);
    assert_eq!(
        DocumentFormat::detect(Path::new("config"), DocumentFormat::Kdl),
        DocumentFormat::Kdl
    );
}

#[test]
fn toml_documents_become_json_trees() {
    let document = parse_document(
        "service = \"waybar\"\n[settings]\nheight = 40\nmodules-left = [\"clock\"]\n",
        DocumentFormat::Toml,
        None,
    )
    .unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(
        document,
        Document::Structured(json!({
            "service": "waybar",
            "settings": { "height": 40, "modules-left": ["clock"] }
        }))
    );
}

#[test]
fn malformed_json_is_a_parse_error() {
    let Err(ConfigError::ParseError { format, location, .. }) =
        parse_document("{ \"settings\": ", DocumentFormat::Json, None)
    else {
        panic!("truncated JSON must not parse");
    };

    assert_eq!(format, "JSON");
    assert_eq!(location, "string");
}

#[test]
fn kdl_scan_counts_sections() {
    let summary = KdlSummary::scan(
        "output \"eDP-1\" {\n    scale 1.5\n}\nlayout {\n    gaps 8\n}\nbinds {\n}\n",
    );

    assert_eq!(summary.found(), 3);
    assert_eq!(summary.expected(), 4);
    let missing: Vec<&str> = summary
        .sections
        .iter()
        .filter(|section| !section.found)
        .map(|section| section.name)
        .collect();
    assert_eq!(missing, vec!["Input configuration"]);
}

#[test]
fn missing_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));

    let loaded = load_document(&dir.path().join("absent.json"), DocumentFormat::Json)
        .unwrap_or_else(|e| panic!("{e}"));
    assert!(loaded.is_none());
}

#[test]
fn existing_file_is_parsed_by_extension() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("niri.kdl");
    std::fs::write(&path, "input {\n}\n").unwrap_or_else(|e| panic!("{e}"));

    let Some(Document::Kdl(summary)) =
        load_document(&path, DocumentFormat::Json).unwrap_or_else(|e| panic!("{e}"))
    else {
        panic!("a .kdl file is scanned, not parsed");
    };
    assert_eq!(summary.found(), 1);
}
