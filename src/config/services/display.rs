//! Display manager service schema.

use serde_json::json;

use crate::{
    config::base::tool_record,
    schema::{SchemaNode, array, boolean, integer, object, string},
};

/// Schema of the SDDM display manager record.
pub fn schema() -> SchemaNode {
    let autologin = object()
        .field("enabled", boolean().default(false))
        .optional("user", string())
        .optional("session", string());

    let display = object()
        .field("minimum_vt", integer().range(1.0, 12.0).default(7))
        .optional("server_command", string())
        .optional("server_args", string())
        .field("xserver_command", string().default("X"))
        .field("xserver_args", string().default("-nolisten tcp"));

    let users = object()
        .field("maximum_uid", integer().min(1000.0).default(60000))
        .field("minimum_uid", integer().min(0.0).default(1000))
        .field("hide_users", array(string()).default(json!([])))
        .field("hide_shells", array(string()).default(json!([])));

    let settings = object()
        .field("theme", string().default("breeze"))
        .field("wayland_first", boolean().default(true))
        .field("autologin", autologin)
        .field("display", display)
        .field("users", users);

    tool_record("sddm", settings).describe("SDDM display manager")
}
