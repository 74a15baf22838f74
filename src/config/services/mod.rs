//! System service schemas: session, display, network, audio, idle and lock.

pub mod audio;
pub mod display;
pub mod idle;
pub mod network;
pub mod session;
pub mod swaylock;

use super::base::log_level;
use crate::schema::{SchemaNode, boolean, integer, object, string, tagged};

/// Umbrella record holding every system service, each slot optional.
pub fn services() -> SchemaNode {
    let services = object()
        .optional("session", session::schema())
        .optional("display", display::schema())
        .optional("network", network::schema())
        .optional("audio", audio::schema())
        .optional("idle", idle::schema())
        .optional("swaylock", swaylock::schema());

    let global = object()
        .field("log_level", log_level().default("info"))
        .field(
            "service_timeout",
            integer()
                .range(5.0, 300.0)
                .default(30)
                .describe("Seconds to wait for a service to start"),
        )
        .field("auto_start", boolean().default(true))
        .field("dependency_check", boolean().default(true));

    object()
        .field("version", string().default("1.0.0"))
        .field("services", services)
        .field("global", global)
        .describe("Voidance system services")
}

/// Any single service record, routed by its `service` field.
pub fn service() -> SchemaNode {
    tagged("service")
        .variant("session", "elogind", session::schema())
        .variant("display", "sddm", display::schema())
        .variant("network", "NetworkManager", network::schema())
        .variant("audio", "pipewire", audio::schema())
        .variant("idle", "swayidle", idle::schema())
        .variant("swaylock", "swaylock", swaylock::schema())
        .describe("A system service record selected by its service field")
}
