//! Session management service schema.

use serde_json::json;

use crate::{
    config::base::tool_record,
    schema::{SchemaNode, array, boolean, integer, object, one_of, string},
};

/// Schema of the elogind session manager record.
pub fn schema() -> SchemaNode {
    let settings = object()
        .field(
            "handle_lid_switch",
            one_of(["suspend", "hibernate", "ignore", "poweroff"]).default("suspend"),
        )
        .field(
            "handle_lid_switch_docked",
            one_of(["suspend", "hibernate", "ignore", "poweroff"]).default("ignore"),
        )
        .field(
            "handle_power_key",
            one_of(["poweroff", "reboot", "ignore", "suspend", "hibernate"]).default("poweroff"),
        )
        .field(
            "handle_suspend_key",
            one_of(["suspend", "hibernate", "ignore"]).default("suspend"),
        )
        .field(
            "handle_hibernate_key",
            one_of(["hibernate", "ignore"]).default("hibernate"),
        )
        .field("kill_user_processes", boolean().default(false))
        .field("kill_exclude_users", array(string()).default(json!(["root"])))
        .field(
            "idle_action",
            one_of(["ignore", "suspend", "hibernate", "poweroff"]).default("ignore"),
        )
        .field("idle_action_sec", integer().min(0.0).default(0));

    tool_record("elogind", settings).describe("elogind session and power management")
}
