// Copyright (c) 2025 - Cowboy AI, Inc.

//! Inventory Source Abstraction
//!
//! The synchronization driver reads devices and interfaces through the
//! [`Inventory`] trait. [`crate::adapters::NetBoxClient`] implements it
//! against the NetBox DCIM REST API; tests substitute an in-memory inventory.
//!
//! # Queries
//!
//! ```text
//! DeviceQuery    → GET /api/dcim/devices/?has_primary_ip=yes[&tag=..][&site=..]
//! InterfaceQuery → GET /api/dcim/interfaces/?device_id=N&mac_address__n=null[&mgmt_only=false]
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DeviceTag;
use crate::errors::SyncResult;

/// Address object embedded in a NetBox device (`primary_ip4`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetBoxAddress {
    /// CIDR format: "10.0.0.5/24"
    #[serde(default)]
    pub address: String,
}

/// Minimal view of a NetBox device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetBoxDevice {
    pub id: i64,
    /// NetBox allows unnamed devices
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub primary_ip4: Option<NetBoxAddress>,
    #[serde(default)]
    pub tags: Vec<DeviceTag>,
}

impl NetBoxDevice {
    /// Device name, empty when NetBox has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Primary IPv4 address in CIDR form, if one is assigned
    pub fn primary_address(&self) -> Option<&str> {
        self.primary_ip4
            .as_ref()
            .map(|ip| ip.address.as_str())
            .filter(|address| !address.is_empty())
    }
}

/// Minimal view of a NetBox interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetBoxInterface {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub mgmt_only: bool,
}

/// Filters for the device listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceQuery {
    pub site: Option<String>,
    pub tag: Option<String>,
}

impl DeviceQuery {
    /// Query parameters sent to `/api/dcim/devices/`
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("has_primary_ip", "yes".to_string())];
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        if let Some(site) = &self.site {
            params.push(("site", site.clone()));
        }
        params
    }
}

/// Filters for the per-device interface listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceQuery {
    pub device_id: i64,
    /// Keep management-only interfaces in the result
    pub include_mgmt_only: bool,
}

impl InterfaceQuery {
    pub fn for_device(device_id: i64) -> Self {
        Self {
            device_id,
            include_mgmt_only: false,
        }
    }

    /// Query parameters sent to `/api/dcim/interfaces/`
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("device_id", self.device_id.to_string()),
            ("mac_address__n", "null".to_string()),
        ];
        if !self.include_mgmt_only {
            params.push(("mgmt_only", "false".to_string()));
        }
        params
    }
}

/// Read-only source of devices and interfaces
#[async_trait]
pub trait Inventory: Send + Sync {
    /// List every device matching the query, across all pages
    async fn list_devices(&self, query: &DeviceQuery) -> SyncResult<Vec<NetBoxDevice>>;

    /// List the interfaces of one device, across all pages
    async fn list_interfaces(&self, query: &InterfaceQuery) -> SyncResult<Vec<NetBoxInterface>>;
}

#[async_trait]
impl<'a, T> Inventory for &'a T
where
    T: Inventory + ?Sized,
{
    async fn list_devices(&self, query: &DeviceQuery) -> SyncResult<Vec<NetBoxDevice>> {
        (**self).list_devices(query).await
    }

    async fn list_interfaces(&self, query: &InterfaceQuery) -> SyncResult<Vec<NetBoxInterface>> {
        (**self).list_interfaces(query).await
    }
}
