// Copyright (c) 2025 - Cowboy AI, Inc.
//! NetBox to dnsmasq/shoelaces synchronizer
//!
//! Reads devices from NetBox and writes:
//! - dnsmasq host lines to `DNSMASQ_HOSTSFILE` (or stdout)
//! - the shoelaces network map to `SHOELACES_MAPFILE` (when set)
//!
//! Run with: cargo run --bin netbox-dnsmasq
//!
//! Prerequisites:
//! 1. NetBox API accessible (via NETBOX_URL, or NETBOX_HOST and NETBOX_PROTOCOL)
//! 2. NetBox API token set (via NETBOX_TOKEN)
//!
//! Set VERBOSE to log progress on stderr.

use anyhow::{Context, Result};
use std::process::ExitCode;

use netbox_dnsmasq::{
    config::{self, SyncConfig},
    runner, NetBoxClient,
};

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("netbox_dnsmasq=debug".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run() -> Result<()> {
    let config = SyncConfig::from_env().context("Invalid configuration")?;

    runner::run(&config, |netbox| NetBoxClient::new(netbox.clone()))
        .await
        .with_context(|| format!("Synchronization with {} failed", config.netbox.base_url))?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if config::verbose_from_env() {
        if let Err(e) = init_tracing() {
            eprintln!("Failed to initialize logging: {:#}", e);
        }
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
