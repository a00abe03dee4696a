// Copyright (c) 2025 - Cowboy AI, Inc.
//! Artifact Derivation
//!
//! Turns the host records of a run into the two downstream views:
//!
//! ```text
//! records (enumeration order) ──┬──> hosts     (keyed by device id, last write wins)
//!                               └──> mappings  (enumeration order, first matching tag)
//! ```

use std::collections::{BTreeMap, HashMap};

use super::host::HostRecord;
use super::script::{script_mapping_for, DeviceTag, NetworkMap, ScriptMapping};

/// Views rendered at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifacts {
    /// One record per device id, ascending by id
    pub hosts: Vec<HostRecord>,
    /// Script mappings in device enumeration order
    pub mappings: Vec<ScriptMapping>,
}

impl Artifacts {
    /// Hosts in a stable order for file output
    ///
    /// Each record's hardware addresses are sorted first, then records are
    /// ordered by their first hardware address with the device id as tie-break.
    pub fn sorted_hosts(&self) -> Vec<HostRecord> {
        let mut hosts: Vec<HostRecord> = self
            .hosts
            .iter()
            .map(HostRecord::with_sorted_hardware_addresses)
            .collect();
        hosts.sort_by(|a, b| {
            a.primary_hardware_address()
                .cmp(b.primary_hardware_address())
                .then(a.device_id.cmp(&b.device_id))
        });
        hosts
    }

    pub fn network_map(&self) -> NetworkMap {
        NetworkMap::new(self.mappings.clone())
    }
}

/// Build hosts and script mappings from the records of a run
///
/// `records` must be in device enumeration order. Mappings are only derived
/// when `script_tag_prefix` is non-empty. Tags are looked up by device id, so
/// records sharing an id all use the last-seen tags for that id.
pub fn derive_artifacts(
    records: &[HostRecord],
    tags_by_id: &HashMap<i64, Vec<DeviceTag>>,
    script_tag_prefix: &str,
) -> Artifacts {
    let hosts: BTreeMap<i64, HostRecord> = records
        .iter()
        .map(|record| (record.device_id, record.clone()))
        .collect();

    let mappings = records
        .iter()
        .filter_map(|record| {
            let tags = tags_by_id
                .get(&record.device_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            script_mapping_for(record, tags, script_tag_prefix)
        })
        .collect();

    Artifacts {
        hosts: hosts.into_values().collect(),
        mappings,
    }
}
