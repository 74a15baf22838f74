//! Lock screen schema.

use crate::{
    config::base::tool_record,
    schema::{SchemaNode, boolean, integer, number, object, string},
};

/// Colours as `rrggbbaa` without a leading `#`, the form swaylock expects.
const COLORS: [(&str, &str); 16] = [
    ("background", "000000ff"),
    ("bs_color", "000000ff"),
    ("inside_color", "00000088"),
    ("ring_color", "458588ff"),
    ("line_color", "458588ff"),
    ("text_color", "ebdbb2ff"),
    ("text_clear_color", "ebdbb2ff"),
    ("text_caps_lock_color", "fabd2fff"),
    ("text_ver_color", "8ec07cff"),
    ("text_wrong_color", "fb4934ff"),
    ("inside_clear_color", "00000000"),
    ("inside_ver_color", "45858888"),
    ("inside_wrong_color", "cc241d88"),
    ("ring_clear_color", "8ec07cff"),
    ("ring_ver_color", "8ec07cff"),
    ("ring_wrong_color", "fb4934ff"),
];

/// Schema of the swaylock screen locker record.
pub fn schema() -> SchemaNode {
    let colors = COLORS
        .iter()
        .fold(object(), |node, (name, default)| {
            node.field(*name, string().default(*default))
        });

    let settings = object()
        .field("colors", colors)
        .field(
            "indicator",
            object()
                .field("enabled", boolean().default(true))
                .field("radius", integer().range(50.0, 200.0).default(100))
                .field("thickness", integer().range(10.0, 50.0).default(20)),
        )
        .field(
            "effects",
            object()
                .field("screenshots", boolean().default(true))
                .field("blur", string().default("7x5"))
                .field("vignette", string().default("0.5:0.5"))
                .field("fade_in", number().range(0.0, 5.0).default(0.2)),
        )
        .field(
            "clock",
            object()
                .field("enabled", boolean().default(true))
                .field("time_str", string().default("%H:%M:%S"))
                .field("date_str", string().default("%Y-%m-%d")),
        )
        .field("font", string().default("monospace"))
        .field(
            "key_handling",
            object()
                .field("ignore_empty_password", boolean().default(true))
                .field("show_keyboard_layout", boolean().default(true))
                .field("show_failed_attempts", boolean().default(true)),
        );

    tool_record("swaylock", settings).describe("swaylock screen locker")
}
