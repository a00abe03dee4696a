// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for netbox-dnsmasq
//!
//! Provides an in-memory [`Inventory`] and deterministic NetBox records.
//! All ids, addresses and MACs are fixed so runs are reproducible.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use netbox_dnsmasq::domain::DeviceTag;
use netbox_dnsmasq::errors::{SyncError, SyncResult};
use netbox_dnsmasq::inventory::{
    DeviceQuery, InterfaceQuery, Inventory, NetBoxAddress, NetBoxDevice, NetBoxInterface,
};

/// Build a device with an optional primary address and tag slugs
pub fn device(id: i64, name: &str, primary: Option<&str>, tag_slugs: &[&str]) -> NetBoxDevice {
    NetBoxDevice {
        id,
        name: Some(name.to_string()),
        primary_ip4: primary.map(|address| NetBoxAddress {
            address: address.to_string(),
        }),
        tags: tag_slugs
            .iter()
            .map(|slug| DeviceTag {
                name: slug.to_string(),
                slug: slug.to_string(),
            })
            .collect(),
    }
}

/// Build an interface with an optional MAC
pub fn interface(id: i64, mac: Option<&str>) -> NetBoxInterface {
    NetBoxInterface {
        id,
        name: format!("eth{}", id),
        mac_address: mac.map(str::to_string),
        mgmt_only: false,
    }
}

/// Decode error standing in for a broken NetBox response
pub fn decode_error(url: &str) -> SyncError {
    let source = serde_json::from_str::<serde_json::Value>("<html>502 Bad Gateway</html>")
        .expect_err("fixture body must not be JSON");
    SyncError::Decode {
        url: url.to_string(),
        source,
    }
}

/// In-memory inventory recording the queries it receives
#[derive(Default)]
pub struct FakeInventory {
    devices: Vec<NetBoxDevice>,
    interfaces: HashMap<i64, Vec<NetBoxInterface>>,
    failing_devices: bool,
    failing_interfaces: HashSet<i64>,
    device_queries: Mutex<Vec<DeviceQuery>>,
    interface_queries: Mutex<Vec<InterfaceQuery>>,
}

impl FakeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(mut self, device: NetBoxDevice, interfaces: Vec<NetBoxInterface>) -> Self {
        self.interfaces.insert(device.id, interfaces);
        self.devices.push(device);
        self
    }

    /// Device whose interface listing fails
    pub fn with_broken_device(mut self, device: NetBoxDevice) -> Self {
        self.failing_interfaces.insert(device.id);
        self.devices.push(device);
        self
    }

    /// Make the device listing itself fail
    pub fn failing(mut self) -> Self {
        self.failing_devices = true;
        self
    }

    pub fn device_queries(&self) -> Vec<DeviceQuery> {
        self.device_queries.lock().unwrap().clone()
    }

    pub fn interface_queries(&self) -> Vec<InterfaceQuery> {
        self.interface_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Inventory for FakeInventory {
    async fn list_devices(&self, query: &DeviceQuery) -> SyncResult<Vec<NetBoxDevice>> {
        self.device_queries.lock().unwrap().push(query.clone());
        if self.failing_devices {
            return Err(decode_error("http://netbox.test/api/dcim/devices/"));
        }
        Ok(self.devices.clone())
    }

    async fn list_interfaces(&self, query: &InterfaceQuery) -> SyncResult<Vec<NetBoxInterface>> {
        self.interface_queries.lock().unwrap().push(*query);
        if self.failing_interfaces.contains(&query.device_id) {
            return Err(decode_error("http://netbox.test/api/dcim/interfaces/"));
        }
        Ok(self
            .interfaces
            .get(&query.device_id)
            .cloned()
            .unwrap_or_default())
    }
}
