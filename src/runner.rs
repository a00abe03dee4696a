// Copyright (c) 2025 - Cowboy AI, Inc.
//! One synchronization run, from configuration to written artifacts
//!
//! ```text
//! parse template ──> connect ──> synchronize ──> hosts (file or stdout)
//!                                            └─> network map (when configured)
//! ```

use tracing::info;

use crate::adapters::NetBoxConfig;
use crate::config::SyncConfig;
use crate::errors::SyncResult;
use crate::inventory::Inventory;
use crate::output;
use crate::render::HostTemplate;
use crate::sync::synchronize;

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Host lines written
    pub hosts: usize,
    pub mappings: usize,
    pub skipped: usize,
}

/// Execute a full run against the inventory returned by `connect`
///
/// The host template is compiled before `connect` is called, so a broken
/// template never reaches the inventory.
pub async fn run<I, F>(config: &SyncConfig, connect: F) -> SyncResult<RunSummary>
where
    I: Inventory,
    F: FnOnce(&NetBoxConfig) -> SyncResult<I>,
{
    let template = HostTemplate::from_source(config.host_template.as_deref())?;
    let inventory = connect(&config.netbox)?;

    let outcome = synchronize(&inventory, &config.options).await?;
    let artifacts = outcome.artifacts(&config.script_tag_prefix);

    let hosts = match &config.hosts_file {
        Some(path) => output::write_hosts_file(path, &template, &artifacts.sorted_hosts())?,
        None => output::write_hosts_console(&template, &artifacts.hosts)?,
    };

    if let Some(path) = &config.map_file {
        output::write_network_map_file(path, &artifacts.network_map())?;
    }

    let summary = RunSummary {
        hosts,
        mappings: artifacts.mappings.len(),
        skipped: outcome.skipped.len(),
    };
    info!(
        "Synchronized {} hosts and {} script mappings from {}",
        summary.hosts, summary.mappings, config.netbox.base_url
    );
    Ok(summary)
}
