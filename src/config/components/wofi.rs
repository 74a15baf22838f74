//! Schema for the wofi application launcher.

use serde_json::json;

use crate::{
    config::base::tool_record,
    schema::{SchemaNode, array, boolean, integer, object, one_of, string, union},
};

/// Schema of the wofi launcher record.
pub fn schema() -> SchemaNode {
    let settings = behaviour()
        .extend(geometry())
        .extend(colors())
        .extend(keys())
        .extend(alignment())
        .extend(modes())
        .extend(files_and_hooks());

    tool_record("wofi", settings).describe("wofi application launcher")
}

fn behaviour() -> SchemaNode {
    object()
        .field("mode", one_of(["drun", "run", "dmenu", "combi"]).default("drun"))
        .field("term", string().default("ghostty"))
        .optional("exec", string())
        .optional("exec-search", string())
        .field("prompt", string().default("Apps"))
        .field("filter", boolean().default(true))
        .field("allow-images", boolean().default(true))
        .field("allow-markup", boolean().default(true))
        .field("insensitive", boolean().default(true))
        .field("parse-search", boolean().default(true))
        .field("hide-scroll", boolean().default(false))
        .field("normal-window", boolean().default(false))
        .field("sort-order", one_of(["default", "alphabetical"]).default("default"))
        .field("gtk-dark", boolean().default(true))
        .field("search-field", boolean().default(true))
        .field("password-field", boolean().default(false))
}

fn geometry() -> SchemaNode {
    let size = || union(vec![integer().positive(), string()]);

    object()
        .field("monitor", integer().min(0.0).default(0))
        .field(
            "layers",
            one_of(["top", "bottom", "background", "overlay"]).default("top"),
        )
        .field("x-offset", integer().default(0))
        .field("y-offset", integer().default(0))
        .field("width", size().default("50%"))
        .field("height", size().default("40%"))
        .field(
            "location",
            one_of([
                "top-left",
                "top-center",
                "top-right",
                "center-left",
                "center",
                "center-right",
                "bottom-left",
                "bottom-center",
                "bottom-right",
            ])
            .default("center"),
        )
        .field("orientation", one_of(["horizontal", "vertical"]).default("vertical"))
        .field(
            "line_wrap",
            one_of(["off", "word", "char", "word_char"]).default("off"),
        )
        .field("dynamic_lines", boolean().default(false))
        .field("num_lines", integer().range(1.0, 100.0).default(10))
        .field("lines", integer().range(1.0, 100.0).default(10))
        .field("columns", integer().range(1.0, 10.0).default(1))
        .field("term-size", integer().range(1.0, 100.0).default(10))
        .field("display-columns", integer().range(1.0, 10.0).default(1))
        .field("display-row", integer().range(1.0, 100.0).default(1))
}

fn colors() -> SchemaNode {
    let palette = object()
        .field("background", string().default("#282828ff"))
        .field("foreground", string().default("#ebdbb2ff"))
        .field("border", string().default("#458588ff"))
        .field("selected", string().default("#458588ff"))
        .field("selected-foreground", string().default("#282828ff"))
        .field("window", string().default("#458588ff"))
        .field("separator", string().default("#665c54ff"));

    let mut node = object()
        .field("color", palette.default(json!({})))
        .field("color-window", string().default("#458588ff"))
        .field("color-border", string().default("#458588ff"))
        .field("color-separator", string().default("#665c54ff"));

    for row in ["", "-alt", "-selected", "-active"] {
        node = node
            .optional(format!("color-row-bg{row}"), string())
            .optional(format!("color-row-fg{row}"), string());
    }

    node
}

fn keys() -> SchemaNode {
    let up = || one_of(["Up", "Control-p", "Shift-Tab", "ISO_Left_Tab"]).default("Up");
    let down = || one_of(["Down", "Control-n", "Tab"]).default("Down");
    let home = || one_of(["Home", "KP_Home", "Control-a"]).default("Home");
    let end = || one_of(["End", "KP_End", "Control-e"]).default("End");
    let page_up = || one_of(["Page_Up", "KP_Page_Up", "Control-v"]).default("Page_Up");
    let page_down = || one_of(["Page_Down", "KP_Page_Down", "Control-y"]).default("Page_Down");

    object()
        .field(
            "key-expand",
            one_of(["Tab", "ISO_Left_Tab", "Down", "Control-bracketleft", "grave"])
                .default("Tab"),
        )
        .field("key-nav-up", up())
        .field("key-nav-down", down())
        .field("key-nav-left", one_of(["Left", "Control-b"]).default("Left"))
        .field("key-nav-right", one_of(["Right", "Control-f"]).default("Right"))
        .field(
            "key-submit",
            one_of(["Return", "KP_Enter", "Control-m", "Control-j"]).default("Return"),
        )
        .field(
            "key-exit",
            one_of(["Escape", "Control-g", "Control-c"]).default("Escape"),
        )
        .field(
            "key-delete",
            one_of(["BackSpace", "Delete", "Control-h"]).default("BackSpace"),
        )
        .field(
            "key-delete-word",
            one_of(["Control-BackSpace", "Control-w"]).default("Control-BackSpace"),
        )
        .field("key-delete-line", one_of(["Control-u"]).default("Control-u"))
        .field("key-pgup", page_up())
        .field("key-pgdn", page_down())
        .field("key-home", home())
        .field("key-end", end())
        .field("key-row-first", home())
        .field("key-row-last", end())
        .field("key-row-up", up())
        .field("key-row-down", down())
        .field("key-page-first", home())
        .field("key-page-last", end())
        .field("key-page-up", page_up())
        .field("key-page-down", page_down())
}

fn alignment() -> SchemaNode {
    let horizontal = |default: &str| one_of(["left", "center", "right", "fill"]).default(default);
    let vertical = |default: &str| one_of(["top", "center", "bottom", "fill"]).default(default);

    object()
        .field("halign", horizontal("fill"))
        .field("valign", vertical("fill"))
        .field("halign-label", horizontal("left"))
        .field("valign-label", vertical("center"))
        .field("halign-content", horizontal("left"))
        .field("valign-content", vertical("center"))
}

fn modes() -> SchemaNode {
    object()
        .field("drun-display-generic", boolean().default(true))
        .field("drun-display-actions", boolean().default(false))
        .field("drun-display-no-generic", boolean().default(false))
        .optional("drun-username", string())
        .field("drun-desktop", array(string()).default(json!([])))
        .optional("run-exec", string())
        .optional("run-exec-search", string())
        .optional("run-list-command", string())
        .optional("run-file-exec", string())
        .field("run-match", one_of(["exact", "fuzzy", "regex"]).default("fuzzy"))
        .field("run-actions", boolean().default(true))
        .field("dmenu-print-index", boolean().default(false))
        .field("dmenu-allow-markup", boolean().default(false))
        .field("dmenu-allow-images", boolean().default(false))
        .field("combi-hide-mode", boolean().default(false))
}

fn files_and_hooks() -> SchemaNode {
    object()
        .optional("cache-file", string())
        .optional("config-file", string())
        .optional("style", string())
        .optional("css-file", string())
        .optional("widget-list", string())
        .optional("log-file", string())
        .field(
            "log-level",
            one_of(["ERROR", "WARNING", "INFO", "DEBUG"]).default("INFO"),
        )
        .field("show-all", boolean().default(false))
        .field("single-pass", boolean().default(false))
        .field("exec-args", array(string()).default(json!([])))
        .field("defer", boolean().default(false))
        .optional("wait-for", string())
        .optional("pre-display-cmd", string())
        .optional("post-display-cmd", string())
        .optional("pre-select-cmd", string())
        .optional("post-select-cmd", string())
}
