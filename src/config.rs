// Copyright (c) 2025 - Cowboy AI, Inc.

//! Run configuration
//!
//! Everything is read from the environment. Empty values count as unset,
//! except for the switches `VERBOSE` and `NETBOX_INCLUDE_MGMT_ONLY` where
//! presence alone turns them on.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::NetBoxConfig;
use crate::errors::{SyncError, SyncResult};
use crate::inventory::DeviceQuery;
use crate::sync::SyncOptions;

/// Environment variable names
pub mod keys {
    pub const NETBOX_URL: &str = "NETBOX_URL";
    pub const NETBOX_HOST: &str = "NETBOX_HOST";
    pub const NETBOX_PROTOCOL: &str = "NETBOX_PROTOCOL";
    pub const NETBOX_TOKEN: &str = "NETBOX_TOKEN";
    pub const NETBOX_SITE: &str = "NETBOX_SITE";
    pub const NETBOX_TAG: &str = "NETBOX_TAG";
    pub const NETBOX_TIMEOUT: &str = "NETBOX_TIMEOUT";
    pub const NETBOX_INCLUDE_MGMT_ONLY: &str = "NETBOX_INCLUDE_MGMT_ONLY";
    pub const SHOELACES_TAG_PREFIX: &str = "SHOELACES_TAG_PREFIX";
    pub const SHOELACES_MAPFILE: &str = "SHOELACES_MAPFILE";
    pub const DNSMASQ_TEMPLATE: &str = "DNSMASQ_TEMPLATE";
    pub const DNSMASQ_HOSTSFILE: &str = "DNSMASQ_HOSTSFILE";
    pub const VERBOSE: &str = "VERBOSE";
}

/// Protocol used with `NETBOX_HOST` when `NETBOX_PROTOCOL` is unset
pub const DEFAULT_PROTOCOL: &str = "http";

/// Configuration for one synchronization run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub netbox: NetBoxConfig,
    pub options: SyncOptions,
    /// Empty disables shoelaces mappings
    pub script_tag_prefix: String,
    /// Host line template; the default template is used when unset
    pub host_template: Option<String>,
    /// Hosts go to stdout when unset
    pub hosts_file: Option<PathBuf>,
    /// No map is written when unset
    pub map_file: Option<PathBuf>,
}

impl SyncConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> SyncResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let api_token = value(keys::NETBOX_TOKEN).ok_or_else(|| {
            SyncError::Configuration(
                "Please provide netbox API token via env var NETBOX_TOKEN".to_string(),
            )
        })?;

        let base_url = match value(keys::NETBOX_URL) {
            Some(url) => url,
            None => {
                let host = value(keys::NETBOX_HOST).ok_or_else(|| {
                    SyncError::Configuration(
                        "Please provide netbox url via NETBOX_URL or NETBOX_HOST".to_string(),
                    )
                })?;
                let protocol =
                    value(keys::NETBOX_PROTOCOL).unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());
                format!("{}://{}", protocol, host)
            }
        };

        let mut netbox = NetBoxConfig::new(&base_url, api_token)?;
        if let Some(timeout) = value(keys::NETBOX_TIMEOUT) {
            let secs: u64 = timeout.parse().map_err(|_| {
                SyncError::Configuration(format!(
                    "NETBOX_TIMEOUT must be a whole number of seconds: {}",
                    timeout
                ))
            })?;
            netbox = netbox.with_timeout(Duration::from_secs(secs))?;
        }

        Ok(Self {
            netbox,
            options: SyncOptions {
                devices: DeviceQuery {
                    site: value(keys::NETBOX_SITE),
                    tag: value(keys::NETBOX_TAG),
                },
                include_mgmt_only: lookup(keys::NETBOX_INCLUDE_MGMT_ONLY).is_some(),
            },
            script_tag_prefix: value(keys::SHOELACES_TAG_PREFIX).unwrap_or_default(),
            host_template: value(keys::DNSMASQ_TEMPLATE),
            hosts_file: value(keys::DNSMASQ_HOSTSFILE).map(PathBuf::from),
            map_file: value(keys::SHOELACES_MAPFILE).map(PathBuf::from),
        })
    }
}

/// Whether `VERBOSE` is present in the process environment
pub fn verbose_from_env() -> bool {
    std::env::var_os(keys::VERBOSE).is_some()
}
