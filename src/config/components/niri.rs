//! Schema for the niri compositor: outputs, layout, input, key bindings and window rules.

use serde_json::json;

use crate::{
    config::base::{accel_profile, hex_color, tool_record, transform},
    schema::{SchemaNode, array, boolean, integer, number, object, one_of, record, string},
};

/// Schema of the niri compositor record.
pub fn schema() -> SchemaNode {
    tool_record("niri", settings()).describe("Niri scrollable-tiling compositor")
}

fn settings() -> SchemaNode {
    object()
        .field("outputs", array(output()).default(json!([])))
        .field("layout", layout().default(json!({})))
        .field("input", input())
        .field("keybindings", array(keybinding()).default(json!([])))
        .field("window_rules", array(window_rule()).default(json!([])))
        .field("environment", record(string()).default(json!({})))
        .field(
            "spawn_at_startup",
            array(object().field("command", array(string()))).default(json!([])),
        )
        .field(
            "cursor",
            object()
                .field("theme", string().default("Adwaita"))
                .field("size", integer().range(8.0, 128.0).default(24))
                .default(json!({})),
        )
        .field("prefer_no_csd", boolean().default(true))
        .field(
            "hotkey_overlay",
            object()
                .field("skip_at_startup", boolean().default(true))
                .default(json!({})),
        )
}

fn output() -> SchemaNode {
    object()
        .field("name", string().describe("Connector name, e.g. eDP-1"))
        .optional(
            "mode",
            object()
                .field("width", integer().positive())
                .field("height", integer().positive())
                .optional("refresh", number().positive()),
        )
        .optional(
            "position",
            object().field("x", integer()).field("y", integer()),
        )
        .field("scale", number().positive().default(1.0))
        .field("transform", transform().default("normal"))
        .field("adaptive_sync", boolean().default(false))
        .field("background_color", hex_color().default("#24273a"))
}

fn layout() -> SchemaNode {
    let preset = || {
        array(array(integer().positive())).default(json!([
            [1, 10],
            [1, 5],
            [2, 5],
            [3, 5],
            [4, 5],
            [5, 5]
        ]))
    };

    object()
        .field("default_width", integer().range(100.0, 2000.0).default(800))
        .field("default_height", integer().range(100.0, 2000.0).default(600))
        .field("gaps", integer().range(0.0, 100.0).default(8))
        .optional(
            "center_column",
            object().field("width", integer().range(1.0, 10.0).default(1)),
        )
        .field("preset_column_widths", preset())
        .field("preset_window_heights", preset())
}

fn input() -> SchemaNode {
    let keyboard = object()
        .field("repeat_rate", integer().range(1.0, 100.0).default(25))
        .field("repeat_delay", integer().range(100.0, 2000.0).default(600))
        .field("xkb_layout", string().default("us"))
        .field("xkb_variant", string().default(""))
        .field("xkb_options", string().default(""));

    let touchpad = object()
        .field("accel_profile", accel_profile().default("adaptive"))
        .field("accel_speed", number().range(-1.0, 1.0).default(0.0))
        .field("natural_scroll", boolean().default(false))
        .field("tap_to_click", boolean().default(true))
        .field("drag_lock", boolean().default(false))
        .field("disable_while_typing", boolean().default(true))
        .field("middle_emulation", boolean().default(false));

    let mouse = object()
        .field("accel_profile", accel_profile().default("adaptive"))
        .field("accel_speed", number().range(-1.0, 1.0).default(0.0))
        .field("natural_scroll", boolean().default(false));

    object()
        .field("keyboard", keyboard.default(json!({})))
        .field("touchpad", touchpad.default(json!({})))
        .field("mouse", mouse.default(json!({})))
}

fn keybinding() -> SchemaNode {
    object()
        .field(
            "modifiers",
            array(one_of(["Ctrl", "Alt", "Shift", "Super", "Hyper", "Meta"])),
        )
        .field("key", string())
        .field(
            "action",
            one_of([
                "spawn",
                "close",
                "fullscreen",
                "focus",
                "move",
                "resize",
                "quit",
                "reload",
            ]),
        )
        .optional("command", string())
        .optional("direction", one_of(["left", "right", "up", "down"]))
        .optional("workspace", integer().positive())
}

fn window_rule() -> SchemaNode {
    object()
        .optional("app_id", string())
        .optional("title", string())
        .optional("output", string())
        .optional("width", integer().positive())
        .optional("height", integer().positive())
        .optional("x", integer())
        .optional("y", integer())
        .optional("floating", boolean())
        .optional("fullscreen", boolean())
        .optional("pinned", boolean())
        .optional("focused", boolean())
        .optional("opacity", number().range(0.0, 1.0))
}
