//! Schema for the PipeWire audio service.

use serde_json::json;

use crate::{
    config::base::tool_record,
    schema::{SchemaNode, array, boolean, integer, object, one_of, string},
};

/// Schema of the PipeWire audio server record.
pub fn schema() -> SchemaNode {
    let settings = object()
        .field(
            "default_clock_rate",
            integer().range(8000.0, 384_000.0).default(48000),
        )
        .field(
            "default_clock_quantum",
            integer().range(32.0, 8192.0).default(1024),
        )
        .field(
            "allowed_rates",
            array(integer()).default(json!([44100, 48000, 88200, 96000, 176400, 192000])),
        )
        .field("mem_allow_mlock", boolean().default(true))
        .field("log_level", one_of(["0", "1", "2", "3", "4"]).default("2"))
        .field("rtkit", rtkit())
        .field("pulse", pulse());

    tool_record("pipewire", settings).describe("PipeWire audio and video server")
}

fn rtkit() -> SchemaNode {
    object()
        .field("enabled", boolean().default(true))
        .field("nice_level", integer().range(-20.0, 19.0).default(-11))
        .field("rt_prio", integer().range(1.0, 99.0).default(88))
        .field("rt_time_soft", integer().min(-1.0).default(200_000))
        .field("rt_time_hard", integer().min(-1.0).default(200_000))
}

fn pulse() -> SchemaNode {
    object()
        .field("server_address", array(string()).default(json!(["unix:native"])))
        .field("min_req", string().default("256/48000"))
        .field("default_req", string().default("960/48000"))
        .field("max_req", string().default("1920/48000"))
        .field("min_quantum", string().default("256/48000"))
        .field("default_quantum", string().default("960/48000"))
        .field("max_quantum", string().default("1920/48000"))
}
