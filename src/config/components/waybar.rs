//! Schema for the waybar status bar and its modules.

use serde_json::json;

use crate::{
    config::base::tool_record,
    schema::{SchemaNode, array, boolean, integer, object, one_of, record, string},
};

const MODULE_TYPES: &[&str] = &[
    "custom",
    "battery",
    "backlight",
    "clock",
    "cpu",
    "disk",
    "idle_inhibitor",
    "memory",
    "mpd",
    "network",
    "pulseaudio",
    "river",
    "river/tags",
    "river/layout",
    "river/mode",
    "river/window",
    "scratchpad",
    "sway/mode",
    "sway/workspaces",
    "sway/window",
    "sway/scratchpad",
    "temperature",
    "tray",
    "upower",
    "wireplumber",
];

/// Free-form string options a bar module may carry.
const MODULE_STRINGS: &[&str] = &[
    "format",
    "format-alt",
    "tooltip-format",
    "on-click",
    "on-click-right",
    "on-click-middle",
    "on-scroll-up",
    "on-scroll-down",
    "format-disconnected",
    "format-connected",
    "format-alt-connected",
    "format-padding",
    "format-time",
    "format-date",
    "timezone",
    "locale",
    "time-format",
    "date-format",
    "format-charging",
    "format-plugged",
    "format-full",
    "format-low",
    "format-medium",
    "format-high",
    "format-critical",
    "bat",
    "adapter",
    "interface",
    "format-device",
    "format-mounted",
    "format-unmounted",
    "format-not-mounted",
    "format-source",
    "format-source-muted",
    "tooltip-format-source",
    "hwmon-path",
    "hwmon-path-abs",
    "input-filename",
];

/// Schema of the waybar status bar record.
pub fn schema() -> SchemaNode {
    tool_record("waybar", settings()).describe("Waybar status bar")
}

fn settings() -> SchemaNode {
    let margin = || integer().range(0.0, 100.0).default(0);

    object()
        .field("layer", one_of(["top", "bottom", "overlay"]).default("top"))
        .field(
            "position",
            one_of(["top", "bottom", "left", "right"]).default("top"),
        )
        .field("height", integer().range(10.0, 200.0).default(30))
        .field("width", one_of(["auto", "request"]).default("request"))
        .field("spacing", integer().range(0.0, 50.0).default(4))
        .field("margin-top", margin())
        .field("margin-bottom", margin())
        .field("margin-left", margin())
        .field("margin-right", margin())
        .field(
            "modules-left",
            array(string()).default(json!(["niri/workspaces"])),
        )
        .field("modules-center", array(string()).default(json!(["clock"])))
        .field(
            "modules-right",
            array(string()).default(json!(["pulseaudio", "network", "battery", "tray"])),
        )
        .optional("startup-command", string())
        .field("reload-style-on-change", boolean().default(false))
        .field("fixed-center", boolean().default(true))
        .field("passthrough", boolean().default(false))
        .field("ipc", boolean().default(true))
        .field("include", array(string()).default(json!([])))
        .field("modules", record(module()).default(json!({})))
        .optional("bar-id", string())
        .optional("output", array(string()))
        .field("exclusive", boolean().default(true))
        .field("gtk-layer-shell", boolean().default(true))
}

fn module() -> SchemaNode {
    let mut node = object().field("type", one_of(MODULE_TYPES.iter().copied()));

    for name in MODULE_STRINGS {
        node = node.optional(*name, string());
    }

    node.optional("interval", integer().positive())
        .field("tooltip", boolean().default(true))
        .optional("min-length", integer().positive())
        .optional("max-length", integer().positive())
        .optional("align", one_of(["left", "center", "right"]))
        .optional("rotate", integer().multiple_of(90.0))
        .optional("smooth-scrolling-threshold", integer().positive())
        .optional("format-icons", record(string()))
        .optional("format-alt-icons", record(string()))
        .optional("nodes", array(string()))
        .optional("ignored-sinks", array(string()))
        .field("max-volume", integer().range(0.0, 200.0).default(100))
        .field("scroll-step", integer().range(1.0, 20.0).default(1))
        .field("reverse-scrolling", boolean().default(false))
        .optional("thermal-zone", integer())
        .optional("critical-threshold", integer())
}
