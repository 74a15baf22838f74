use std::sync::LazyLock;

use regex::Regex;

use crate::schema::{SchemaNode, boolean, literal, object, one_of, string};

#[allow(clippy::expect_used)]
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex colour pattern is valid"));

/// Fields every tool record carries before its own settings.
pub(crate) fn base() -> SchemaNode {
    object()
        .field(
            "version",
            string().default("1.0.0").describe("Schema version of this record"),
        )
        .field(
            "enabled",
            boolean().default(true).describe("Whether the tool is managed at all"),
        )
        .field(
            "debug",
            boolean().default(false).describe("Enable debug output for the tool"),
        )
}

/// A tool record: the base fields, the `service` discriminant pinned to
/// `service`, and the tool specific `settings` object.
pub(crate) fn tool_record(service: &str, settings: SchemaNode) -> SchemaNode {
    base()
        .field(
            "service",
            literal(service)
                .default(service)
                .describe("Discriminant naming the tool this record configures"),
        )
        .field("settings", settings)
}

/// `#rrggbb` colour string.
pub(crate) fn hex_color() -> SchemaNode {
    string().pattern(&HEX_COLOR)
}

pub(crate) fn accel_profile() -> SchemaNode {
    one_of(["none", "flat", "adaptive"])
}

pub(crate) fn log_level() -> SchemaNode {
    one_of(["error", "warn", "info", "debug"])
}

pub(crate) fn transform() -> SchemaNode {
    one_of([
        "normal",
        "90",
        "180",
        "270",
        "flipped",
        "flipped-90",
        "flipped-180",
        "flipped-270",
    ])
}
