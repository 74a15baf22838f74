//! Schema for the ghostty terminal: font, theme, window and rendering.

use serde_json::json;

use crate::{
    config::base::tool_record,
    schema::{SchemaNode, array, boolean, integer, number, object, one_of, string},
};

/// Schema of the ghostty terminal record.
pub fn schema() -> SchemaNode {
    tool_record("ghostty", settings()).describe("Ghostty terminal emulator")
}

fn settings() -> SchemaNode {
    object()
        .field(
            "shell",
            object()
                .field("program", string().default("bash"))
                .field("args", array(string()).default(json!([])))
                .default(json!({})),
        )
        .field("font", font().default(json!({})))
        .field("theme", string().default("auto"))
        .field("background", string().default("#24273a"))
        .field("foreground", string().default("#cad3f5"))
        .field(
            "cursor",
            object()
                .field("color", string().default("#f4dbd2"))
                .field("style", one_of(["block", "beam", "underline"]).default("block"))
                .field("blink", boolean().default(false))
                .default(json!({})),
        )
        .field("window", window().default(json!({})))
        .field("render", render().default(json!({})))
        .field("keybind", array(keybind()).default(default_keybinds()))
        .field(
            "shell-integration",
            object()
                .field("detect", boolean().default(true))
                .optional("program", string())
                .optional("cwd", string())
                .default(json!({})),
        )
        .field(
            "mouse",
            object()
                .field("hide-while-typing", boolean().default(true))
                .field("alternate-scroll-mode", boolean().default(true))
                .field("url-detection", boolean().default(true))
                .field(
                    "double-click-speed",
                    integer().range(100.0, 2000.0).default(500),
                )
                .default(json!({})),
        )
        .field(
            "bell",
            object()
                .field("sound", boolean().default(false))
                .field("visual", boolean().default(true))
                .optional("command", string())
                .default(json!({})),
        )
        .field(
            "clipboard",
            object()
                .field("read", boolean().default(true))
                .field("write", boolean().default(true))
                .field("primary", boolean().default(false))
                .field(
                    "max-size",
                    integer().range(1024.0, 10_485_760.0).default(1_048_576),
                )
                .default(json!({})),
        )
        .field("advanced", advanced().default(json!({})))
}

fn font() -> SchemaNode {
    object()
        .field("family", string().default("Fira Code Nerd Font"))
        .field("size", number().positive().default(12.0))
        .field(
            "weight",
            one_of([
                "thin",
                "extra-light",
                "light",
                "semi-light",
                "regular",
                "medium",
                "semi-bold",
                "bold",
                "extra-bold",
                "black",
            ])
            .default("regular"),
        )
        .field(
            "stretch",
            one_of([
                "ultra-condensed",
                "extra-condensed",
                "condensed",
                "semi-condensed",
                "normal",
                "semi-expanded",
                "expanded",
                "extra-expanded",
                "ultra-expanded",
            ])
            .default("normal"),
        )
        .field("style", one_of(["normal", "italic", "oblique"]).default("normal"))
}

fn window() -> SchemaNode {
    let spacing = |default: i64| integer().range(0.0, 100.0).default(default);

    object()
        .field("width", integer().range(400.0, 4000.0).default(800))
        .field("height", integer().range(300.0, 3000.0).default(600))
        .field("padding-x", spacing(8))
        .field("padding-y", spacing(8))
        .field("margin-x", spacing(0))
        .field("margin-y", spacing(0))
        .field("opacity", number().range(0.1, 1.0).default(1.0))
        .field("blur", boolean().default(false))
        .field("decorations", boolean().default(true))
        .field("resizable", boolean().default(true))
}

fn render() -> SchemaNode {
    object()
        .field(
            "backend",
            one_of(["auto", "gl", "vulkan", "software"]).default("auto"),
        )
        .field("fps", integer().range(30.0, 240.0).default(60))
        .field("vsync", boolean().default(true))
        .field("gpu-acceleration", boolean().default(true))
        .field(
            "font-hinting",
            one_of(["none", "slight", "medium", "full"]).default("slight"),
        )
        .field("antialiasing", boolean().default(true))
}

fn keybind() -> SchemaNode {
    object()
        .field("key", string())
        .field(
            "action",
            one_of([
                "spawn",
                "copy",
                "paste",
                "scroll-to-top",
                "scroll-to-bottom",
                "page-up",
                "page-down",
                "increase-font-size",
                "decrease-font-size",
                "reset-font-size",
                "toggle-fullscreen",
                "toggle-transparency",
                "quit",
            ]),
        )
        .optional("command", string())
        .field(
            "mods",
            array(one_of(["ctrl", "alt", "shift", "super", "hyper", "meta"])).default(json!([])),
        )
}

fn default_keybinds() -> serde_json::Value {
    json!([
        { "key": "c", "action": "copy", "mods": ["ctrl", "shift"] },
        { "key": "v", "action": "paste", "mods": ["ctrl", "shift"] },
        { "key": "plus", "action": "increase-font-size", "mods": ["ctrl"] },
        { "key": "minus", "action": "decrease-font-size", "mods": ["ctrl"] },
        { "key": "0", "action": "reset-font-size", "mods": ["ctrl"] },
        { "key": "f11", "action": "toggle-fullscreen" }
    ])
}

fn advanced() -> SchemaNode {
    object()
        .field(
            "buffer-size",
            integer().range(1000.0, 100_000.0).default(10_000),
        )
        .field(
            "scrollback-size",
            integer().range(100.0, 100_000.0).default(10_000),
        )
        .field("tab-width", integer().range(1.0, 20.0).default(8))
        .field(
            "unicode-version",
            one_of(["9", "10", "11", "12", "13", "14", "15"]).default("15"),
        )
        .field("working-directory", string().default("home"))
        .field("confirm-close-sudo", boolean().default(true))
}
