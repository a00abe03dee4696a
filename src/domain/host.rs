// Copyright (c) 2025 - Cowboy AI, Inc.
//! DHCP Host Records

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inventory::{NetBoxDevice, NetBoxInterface};

/// Why a device produced no host record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("no primary IPv4 address")]
    NoPrimaryAddress,

    #[error("no interface available for PXE")]
    NoEligibleInterface,

    #[error("interface lookup failed: {0}")]
    InterfaceLookupFailed(String),
}

/// Everything a DHCP daemon needs to pin a device to its address
///
/// Field names serialize as `DeviceID`, `HWAddr`, `Name` and `Addr`, the
/// variables available to host line templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    #[serde(rename = "DeviceID")]
    pub device_id: i64,

    /// Lower-case MACs, one slot per interface (empty when the interface has none)
    #[serde(rename = "HWAddr")]
    pub hardware_addresses: Vec<String>,

    #[serde(rename = "Name")]
    pub name: String,

    /// IPv4 address without the prefix length
    #[serde(rename = "Addr")]
    pub address: String,
}

impl HostRecord {
    /// First hardware address, used as the sort key for file output
    pub fn primary_hardware_address(&self) -> &str {
        self.hardware_addresses
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Copy with the hardware addresses in lexicographic order
    pub fn with_sorted_hardware_addresses(&self) -> Self {
        let mut sorted = self.clone();
        sorted.hardware_addresses.sort();
        sorted
    }
}

/// Map a device and its interfaces onto a host record
///
/// Rules, in order:
/// 1. a device without a primary IPv4 address is skipped
/// 2. the address is everything before the first `/`
/// 3. a device without interfaces is skipped
/// 4. MACs are lower-cased and keep their interface position
pub fn normalize(
    device: &NetBoxDevice,
    interfaces: &[NetBoxInterface],
) -> Result<HostRecord, SkipReason> {
    let primary = device
        .primary_address()
        .ok_or(SkipReason::NoPrimaryAddress)?;
    let address = primary
        .split_once('/')
        .map_or(primary, |(address, _)| address);

    if interfaces.is_empty() {
        return Err(SkipReason::NoEligibleInterface);
    }

    let hardware_addresses = interfaces
        .iter()
        .map(|iface| {
            iface
                .mac_address
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_default()
        })
        .collect();

    Ok(HostRecord {
        device_id: device.id,
        hardware_addresses,
        name: device.display_name().to_string(),
        address: address.to_string(),
    })
}
