//! Schema for the network service.

use serde_json::json;

use crate::{
    config::base::tool_record,
    schema::{SchemaNode, array, boolean, integer, object, one_of, string},
};

/// Schema of the NetworkManager record.
pub fn schema() -> SchemaNode {
    let settings = object()
        .field("dhcp", one_of(["internal", "dhclient"]).default("internal"))
        .field("plugins", array(string()).default(json!(["keyfile"])))
        .field(
            "wifi",
            object()
                .field("scan_rand_mac_address", boolean().default(true))
                .field("powersave", integer().range(0.0, 3.0).default(3)),
        )
        .field(
            "ethernet",
            object().field("auto_negotiate", boolean().default(true)),
        )
        .field(
            "connectivity",
            object()
                .field("enabled", boolean().default(true))
                .field("uri", string().default("http://check.ipv6.microsoft.com/"))
                .field("interval", integer().min(60.0).default(300)),
        )
        .field(
            "ipv6",
            object().field(
                "ip6_privacy",
                one_of([
                    "disabled",
                    "prefer-public-addr",
                    "prefer-temp-addr",
                    "prefer-public-addr-6rd",
                    "prefer-temp-addr-6rd",
                ])
                .default("prefer-public-addr"),
            ),
        );

    tool_record("NetworkManager", settings).describe("NetworkManager network configuration")
}
