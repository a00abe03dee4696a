// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Synchronization
//!
//! A run is a sequential fold over the device listing:
//!
//! ```text
//! list_devices ──> [d1, d2, d3, ...]
//!                    │
//!                    ▼  one device at a time
//!          list_interfaces(d) ──> normalize(d, ifaces)
//!                    │
//!                    ▼
//!      SyncOutcome { records, tags_by_id, skipped }
//! ```
//!
//! Failing to list devices aborts the run. Failing to list a device's
//! interfaces only skips that device.

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::domain::{derive_artifacts, normalize, Artifacts, DeviceTag, HostRecord, SkipReason};
use crate::errors::SyncResult;
use crate::inventory::{DeviceQuery, InterfaceQuery, Inventory, NetBoxDevice};

/// What to pull from the inventory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOptions {
    pub devices: DeviceQuery,
    /// Keep management-only interfaces when collecting MACs
    pub include_mgmt_only: bool,
}

/// A device that produced no host record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDevice {
    pub device_id: i64,
    pub name: String,
    pub reason: SkipReason,
}

/// Result of folding every device of a run
#[derive(Debug, Clone, Default)]
pub struct SyncOutcome {
    /// Host records in device enumeration order
    pub records: Vec<HostRecord>,
    /// Tags of every device that produced a record; a repeated id keeps the last
    pub tags_by_id: HashMap<i64, Vec<DeviceTag>>,
    pub skipped: Vec<SkippedDevice>,
}

impl SyncOutcome {
    /// Derive the downstream views; an empty prefix disables script mappings
    pub fn artifacts(&self, script_tag_prefix: &str) -> Artifacts {
        derive_artifacts(&self.records, &self.tags_by_id, script_tag_prefix)
    }

    fn absorb(mut self, device: NetBoxDevice, result: Result<HostRecord, SkipReason>) -> Self {
        match result {
            Ok(record) => {
                debug!(
                    "{} {} {} {:?}",
                    record.device_id, record.name, record.address, record.hardware_addresses
                );
                self.tags_by_id.insert(device.id, device.tags);
                self.records.push(record);
            }
            Err(reason) => {
                match &reason {
                    SkipReason::InterfaceLookupFailed(_) => warn!(
                        "Error pulling interfaces for {} ({}): {}",
                        device.display_name(),
                        device.id,
                        reason
                    ),
                    _ => info!(
                        "Skipping {} ({}): {}",
                        device.display_name(),
                        device.id,
                        reason
                    ),
                }
                self.skipped.push(SkippedDevice {
                    device_id: device.id,
                    name: device.display_name().to_string(),
                    reason,
                });
            }
        }
        self
    }
}

/// Pull devices and interfaces and build host records
pub async fn synchronize<I>(inventory: &I, options: &SyncOptions) -> SyncResult<SyncOutcome>
where
    I: Inventory + ?Sized,
{
    let devices = inventory.list_devices(&options.devices).await?;
    info!("Retrieved {} devices", devices.len());

    let mut outcome = SyncOutcome::default();
    for device in devices {
        let result = process_device(inventory, &device, options.include_mgmt_only).await;
        outcome = outcome.absorb(device, result);
    }

    info!(
        "Built {} host records, skipped {} devices",
        outcome.records.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}

async fn process_device<I>(
    inventory: &I,
    device: &NetBoxDevice,
    include_mgmt_only: bool,
) -> Result<HostRecord, SkipReason>
where
    I: Inventory + ?Sized,
{
    // No point asking for interfaces of a device we cannot address
    if device.primary_address().is_none() {
        return Err(SkipReason::NoPrimaryAddress);
    }

    let query = InterfaceQuery {
        device_id: device.id,
        include_mgmt_only,
    };
    let interfaces = inventory
        .list_interfaces(&query)
        .await
        .map_err(|e| SkipReason::InterfaceLookupFailed(e.to_string()))?;

    normalize(device, &interfaces)
}
