//! Idle management service schema: timeouts plus the lock, screen-off and suspend actions.

use crate::{
    config::base::tool_record,
    schema::{SchemaNode, boolean, integer, object, string},
};

/// Schema of the swayidle idle management record.
///
/// Timeouts are in seconds.
pub fn schema() -> SchemaNode {
    let settings = object()
        .field("timeouts", timeouts(300, 600, 1800))
        .field(
            "lock",
            object()
                .field("enabled", boolean().default(true))
                .field("command", string().default("swaylock -f -c 000000"))
                .field("before_sleep", boolean().default(true)),
        )
        .field(
            "screen_off",
            object()
                .field("enabled", boolean().default(true))
                .field("command", string().default(r#"swaymsg "output * power off""#)),
        )
        .field(
            "suspend",
            object()
                .field("enabled", boolean().default(true))
                .field("command", string().default("systemctl suspend"))
                .field(
                    "resume_command",
                    string().default(r#"swaymsg "output * power on""#),
                ),
        )
        .field(
            "notifications",
            object()
                .field("enabled", boolean().default(true))
                .field("before_lock", integer().min(10.0).default(30))
                .field("message", string().default("Screen will lock in 30 seconds"))
                .field("icon", string().default("dialog-information")),
        )
        .field(
            "battery",
            object()
                .field("enabled", boolean().default(true))
                .field("timeouts", timeouts(180, 300, 900))
                .describe("Shorter timeouts applied while on battery power"),
        );

    tool_record("swayidle", settings).describe("swayidle idle management")
}

fn timeouts(idle: i64, lock: i64, suspend: i64) -> SchemaNode {
    object()
        .field("idle", integer().min(60.0).default(idle))
        .field("lock", integer().min(60.0).default(lock))
        .field("suspend", integer().min(300.0).default(suspend))
}
