//! Desktop component schemas: compositor, bar, launcher and terminal.

pub mod ghostty;
pub mod niri;
pub mod waybar;
pub mod wofi;

use serde_json::json;

use super::base::log_level;
use crate::schema::{SchemaNode, boolean, object, one_of, string, tagged};

/// Umbrella record holding every desktop component, each slot optional.
pub fn desktop() -> SchemaNode {
    let components = object()
        .optional("niri", niri::schema())
        .optional("waybar", waybar::schema())
        .optional("wofi", wofi::schema())
        .optional("ghostty", ghostty::schema());

    let theme = object()
        .field("name", string().default("voidance"))
        .field("variant", one_of(["dark", "light"]).default("dark"))
        .field("accent-color", string().default("#458588"));

    let global = object()
        .field("log-level", log_level().default("info"))
        .field("auto-start", boolean().default(true))
        .field("config-validation", boolean().default(true))
        .field("hardware-detection", boolean().default(true))
        .field("theme", theme.default(json!({})));

    object()
        .field("version", string().default("1.0.0"))
        .field("components", components)
        .field("global", global)
        .describe("Voidance desktop environment")
}

/// Any single component record, routed by its `service` field.
pub fn component() -> SchemaNode {
    tagged("service")
        .variant("niri", "niri", niri::schema())
        .variant("waybar", "waybar", waybar::schema())
        .variant("wofi", "wofi", wofi::schema())
        .variant("ghostty", "ghostty", ghostty::schema())
        .describe("A desktop component record selected by its service field")
}
