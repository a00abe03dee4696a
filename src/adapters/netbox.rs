// Copyright (c) 2025 - Cowboy AI, Inc.

//! NetBox DCIM Inventory Adapter
//!
//! Read-only client for the NetBox REST API implementing [`Inventory`].
//!
//! NetBox list endpoints are paginated with a cursor envelope:
//!
//! ```text
//! GET /api/dcim/devices/?has_primary_ip=yes
//!   → {"count": 120, "next": "https://netbox/api/dcim/devices/?...&offset=50", "previous": null, "results": [...]}
//! GET <next>
//!   → {"count": 120, "next": "...&offset=100", ...}
//! GET <next>
//!   → {"count": 120, "next": null, ...}
//! ```
//!
//! The `next` URL already carries every filter, so it is requested verbatim.
//! Requests are issued one at a time and never retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use netbox_dnsmasq::adapters::{NetBoxClient, NetBoxConfig};
//! use netbox_dnsmasq::inventory::{DeviceQuery, Inventory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NetBoxConfig::new("https://netbox.example.com", "your-token-here")?;
//!     let client = NetBoxClient::new(config)?;
//!
//!     let devices = client.list_devices(&DeviceQuery::default()).await?;
//!     println!("{} devices", devices.len());
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::errors::{SyncError, SyncResult};
use crate::inventory::{
    DeviceQuery, InterfaceQuery, Inventory, NetBoxDevice, NetBoxInterface,
};

/// Device listing endpoint
pub const DEVICES_PATH: &str = "/api/dcim/devices/";

/// Interface listing endpoint
pub const INTERFACES_PATH: &str = "/api/dcim/interfaces/";

/// Per-request timeout used unless configured otherwise
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for NetBox connection
#[derive(Debug, Clone)]
pub struct NetBoxConfig {
    /// NetBox base URL including scheme and optional port
    pub base_url: Url,

    /// API token for authentication; a read-only token is sufficient
    pub api_token: String,

    /// Timeout applied to every request
    pub timeout: Duration,
}

impl NetBoxConfig {
    /// Validate and build a configuration with the default timeout
    pub fn new(base_url: &str, api_token: impl Into<String>) -> SyncResult<Self> {
        let parsed = Url::parse(base_url).map_err(|e| {
            SyncError::Configuration(format!("Invalid NetBox URL '{}': {}", base_url, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SyncError::Configuration(format!(
                "NetBox URL must use http or https: {}",
                base_url
            )));
        }

        if parsed.host_str().is_none() {
            return Err(SyncError::Configuration(format!(
                "NetBox URL has no host: {}",
                base_url
            )));
        }

        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(SyncError::Configuration(
                "NetBox API token is empty".to_string(),
            ));
        }

        Ok(Self {
            base_url: parsed,
            api_token,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> SyncResult<Self> {
        if timeout.is_zero() {
            return Err(SyncError::Configuration(
                "NetBox request timeout must be greater than zero".to_string(),
            ));
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Absolute URL of an API path, keeping any path prefix of the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

/// Envelope wrapping every NetBox list response
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// URL of the following page; an empty string means there is none
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }
}

/// NetBox REST client
pub struct NetBoxClient {
    config: NetBoxConfig,
    client: Client,
}

impl NetBoxClient {
    /// Create a client; no request is made until the first listing
    pub fn new(config: NetBoxConfig) -> SyncResult<Self> {
        info!("Using NetBox at {}", config.base_url);

        let mut token = HeaderValue::from_str(&format!("Token {}", config.api_token))
            .map_err(|e| SyncError::Configuration(format!("Invalid API token: {}", e)))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, token);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                SyncError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &NetBoxConfig {
        &self.config
    }

    /// Retrieve every record of a list endpoint, following `next` links
    ///
    /// Any transport or decode failure aborts the whole fetch. A `next` link
    /// pointing at a page already fetched ends the walk.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> SyncResult<Vec<T>> {
        let endpoint = self.config.endpoint(path);
        let first = Url::parse_with_params(&endpoint, query).map_err(|e| {
            SyncError::Configuration(format!("Invalid NetBox endpoint '{}': {}", endpoint, e))
        })?;

        let mut url = first.to_string();
        let mut visited = HashSet::new();
        let mut results = Vec::new();
        let mut pages = 0usize;

        loop {
            let page: Page<T> = self.fetch_page(&url).await?;
            pages += 1;
            visited.insert(url);

            let next = page.next_url().map(str::to_string);
            results.extend(page.results);

            match next {
                Some(next) if visited.contains(&next) => {
                    warn!("Pagination of {} loops back to {}, stopping", path, next);
                    break;
                }
                Some(next) => url = next,
                None => break,
            }
        }

        debug!("Fetched {} records from {} in {} pages", results.len(), path, pages);
        Ok(results)
    }

    async fn fetch_page<T: DeserializeOwned>(&self, url: &str) -> SyncResult<Page<T>> {
        let transport = |source: reqwest::Error| SyncError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let response = response.error_for_status().map_err(transport)?;
        let body = response.bytes().await.map_err(transport)?;

        serde_json::from_slice(&body).map_err(|source| SyncError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl Inventory for NetBoxClient {
    async fn list_devices(&self, query: &DeviceQuery) -> SyncResult<Vec<NetBoxDevice>> {
        self.fetch_all(DEVICES_PATH, &query.to_params()).await
    }

    async fn list_interfaces(&self, query: &InterfaceQuery) -> SyncResult<Vec<NetBoxInterface>> {
        self.fetch_all(INTERFACES_PATH, &query.to_params()).await
    }
}
