//! Schema of a structured Sway window manager configuration.
//!
//! Unlike the tool records this is a plain document with no `service`
//! discriminant, and its terminal and menu commands have no defaults.

use crate::{
    config::base::{accel_profile, hex_color, transform},
    schema::{SchemaNode, array, boolean, number, object, one_of, record, string, tuple, union},
};

/// Complete Sway configuration.
pub fn schema() -> SchemaNode {
    let border = || one_of(["none", "normal", "pixel"]);

    object()
        .field(
            "modifier",
            one_of(["Mod1", "Mod4"])
                .default("Mod4")
                .describe("Mod1 (Alt) or Mod4 (Super)"),
        )
        .field("terminal", string().non_empty())
        .field("menu", string().non_empty())
        .optional("font", font())
        .field("default_border", border().default("pixel"))
        .field("default_floating_border", border().default("normal"))
        .field(
            "hide_edge_borders",
            one_of(["none", "vertical", "horizontal", "both", "smart"]).default("smart"),
        )
        .optional("border_pixel_size", number().range(0.0, 20.0))
        .optional("colors", colors())
        .optional("outputs", array(output()))
        .optional("inputs", array(input()))
        .optional("workspaces", array(workspace()))
        .optional("window_rules", array(window_rule()))
        .optional("keybindings", array(keybinding()))
        .optional("bars", array(bar()))
        .optional("exec", array(string()))
        .optional("exec_always", array(string()))
        .optional("include", array(string()))
        .extend(behaviour())
        .describe("Sway window manager")
}

fn font() -> SchemaNode {
    object()
        .field("family", string().non_empty())
        .field("size", number().range(6.0, 72.0))
        .optional("weight", one_of(["normal", "bold"]))
        .optional("style", one_of(["normal", "italic", "oblique"]))
}

fn client_state() -> SchemaNode {
    object()
        .field("border", hex_color())
        .field("background", hex_color())
        .field("text", hex_color())
        .field("indicator", hex_color())
        .field("child_border", hex_color())
}

fn colors() -> SchemaNode {
    object()
        .field("focused", client_state())
        .field("focused_inactive", client_state())
        .field("unfocused", client_state())
        .field("urgent", client_state())
        .field("placeholder", client_state())
}

fn output() -> SchemaNode {
    object()
        .optional("name", string())
        .optional(
            "resolution",
            object()
                .field("width", number().min(640.0))
                .field("height", number().min(480.0))
                .optional("refresh", number().min(30.0)),
        )
        .optional(
            "position",
            object()
                .field("x", number().min(0.0))
                .field("y", number().min(0.0)),
        )
        .optional("scale", number().range(0.5, 4.0))
        .optional("transform", transform())
        .optional("background", string())
        .optional("mode", string())
        .optional("adaptive_sync", boolean())
        .optional("max_render_time", number().min(0.0))
}

fn input() -> SchemaNode {
    let keyboard = object()
        .field("layout", string().default("us"))
        .field("variant", string().default(""))
        .field("options", string().default(""))
        .optional("repeat_delay", number().range(100.0, 2000.0))
        .optional("repeat_rate", number().range(2.0, 100.0));

    let touchpad = object()
        .optional("tap", boolean())
        .optional("natural_scroll", boolean())
        .optional("dwt", boolean())
        .optional("drag", boolean())
        .optional("drag_lock", boolean())
        .optional("middle_emulation", boolean())
        .optional(
            "scroll_method",
            one_of(["none", "two_finger", "edge", "on_button_down"]),
        )
        .optional("accel_profile", accel_profile())
        .optional("pointer_accel", number().range(-1.0, 1.0));

    object()
        .optional("identifier", string())
        .optional(
            "type",
            one_of([
                "keyboard",
                "pointer",
                "touchpad",
                "touch",
                "tablet_tool",
                "tablet_pad",
                "switch",
            ]),
        )
        .optional("keyboard", keyboard)
        .optional("touchpad", touchpad)
        .optional("accel_profile", accel_profile())
        .optional("pointer_accel", number().range(-1.0, 1.0))
        .optional("scroll_factor", number().range(0.1, 10.0))
        .optional("map_to_output", string())
        .optional("map_to_region", string())
}

fn workspace() -> SchemaNode {
    object()
        .field("number", number().range(1.0, 10.0))
        .field("name", string().non_empty())
        .optional("output", string())
}

fn window_rule() -> SchemaNode {
    object()
        .field(
            "criteria",
            record(union(vec![string(), number(), boolean()])),
        )
        .field("commands", array(string()).min_items(1))
}

fn keybinding() -> SchemaNode {
    object()
        .field(
            "modifiers",
            array(one_of(["Mod1", "Mod4", "Shift", "Control"])).min_items(1),
        )
        .field("key", string().non_empty())
        .field("command", string().non_empty())
        .optional("release", boolean())
        .optional("whole_window", boolean())
        .optional("border", boolean())
        .optional("exclude_titlebar", boolean())
        .optional("locked", boolean())
        .optional("to_focus", boolean())
        .optional("group", array(string()))
}

fn bar() -> SchemaNode {
    let outputs = || union(vec![string(), array(string())]);

    let colors = object()
        .optional("background", hex_color())
        .optional("statusline", hex_color())
        .optional("separator", hex_color())
        .optional("focused_workspace", client_state())
        .optional("active_workspace", client_state())
        .optional("inactive_workspace", client_state())
        .optional("urgent_workspace", client_state())
        .optional("binding_mode", client_state());

    object()
        .field("id", string().non_empty())
        .field("position", one_of(["top", "bottom"]).default("top"))
        .optional("output", outputs())
        .optional("status_command", string())
        .optional("font", string())
        .optional("height", number().range(10.0, 100.0))
        .field("workspace_buttons", boolean().default(true))
        .field("binding_mode_indicator", boolean().default(true))
        .optional("verbose", boolean())
        .optional("pango_markup", boolean())
        .optional("colors", colors)
        .optional("tray_output", outputs())
}

fn behaviour() -> SchemaNode {
    let gap = || number().range(0.0, 100.0);
    let size = || tuple(vec![number(), number()]);

    object()
        .optional(
            "gaps",
            object()
                .optional("inner", gap())
                .optional("outer", gap())
                .optional("horizontal", gap())
                .optional("vertical", gap()),
        )
        .optional("smart_gaps", boolean())
        .optional("smart_borders", one_of(["no_gaps", "inverse_outer", "on"]))
        .optional("focus_follows_mouse", boolean())
        .optional("mouse_warping", boolean())
        .optional("focus_wrapping", one_of(["yes", "no", "force"]))
        .optional("floating_minimum_size", size())
        .optional("floating_maximum_size", size())
        .optional("title_align", one_of(["left", "center", "right"]))
        .optional("titlebar_border_thickness", number().range(0.0, 10.0))
        .optional("titlebar_padding", number().range(0.0, 20.0))
}
