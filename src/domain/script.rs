// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shoelaces Script Mappings
//!
//! Shoelaces reads a JSON document mapping networks to boot scripts:
//!
//! ```json
//! {"networkMaps": [{"network": "10.0.0.5/32", "script": {"name": "ubuntu.ipxe"}}]}
//! ```
//!
//! A device opts in by carrying a tag whose slug starts with the configured
//! prefix; the remainder of the slug names the script.

use serde::{Deserialize, Serialize};

use super::host::HostRecord;

/// File extension appended to every boot script name
pub const BOOT_SCRIPT_EXTENSION: &str = ".ipxe";

/// Tag attached to a NetBox device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTag {
    #[serde(default)]
    pub name: String,
    pub slug: String,
}

/// Script reference; shoelaces only supports selecting scripts by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootScript {
    pub name: String,
}

/// One `/32` network bound to a boot script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMapping {
    pub network: String,
    pub script: BootScript,
}

impl ScriptMapping {
    /// Network in CIDR form, always a single host
    pub fn network_cidr(&self) -> &str {
        &self.network
    }

    pub fn script_name(&self) -> &str {
        &self.script.name
    }
}

/// Document layout shoelaces expects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkMap {
    #[serde(rename = "networkMaps")]
    pub network_maps: Vec<ScriptMapping>,
}

impl NetworkMap {
    pub fn new(network_maps: Vec<ScriptMapping>) -> Self {
        Self { network_maps }
    }
}

/// Build the mapping for a host from the first tag matching `prefix`
///
/// Later matching tags on the same device are ignored. An empty prefix
/// disables mappings entirely.
pub fn script_mapping_for(
    host: &HostRecord,
    tags: &[DeviceTag],
    prefix: &str,
) -> Option<ScriptMapping> {
    if prefix.is_empty() {
        return None;
    }

    tags.iter()
        .find_map(|tag| tag.slug.strip_prefix(prefix))
        .map(|script| ScriptMapping {
            network: format!("{}/32", host.address),
            script: BootScript {
                name: format!("{}{}", script, BOOT_SCRIPT_EXTENSION),
            },
        })
}
