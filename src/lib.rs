// Copyright (c) 2025 - Cowboy AI, Inc.
//! NetBox to dnsmasq/shoelaces synchronization
//!
//! Pulls devices and their interfaces from NetBox and derives two artifacts:
//! a dnsmasq host mapping (one templated line per host) and a shoelaces
//! network map binding `/32` networks to iPXE boot scripts. Every run is a
//! full resynchronization; nothing is cached or persisted between runs.
//!
//! - [`inventory`] - inventory trait and raw NetBox records
//! - [`adapters`] - NetBox REST client with pagination
//! - [`domain`] - host records, script mappings and artifact derivation
//! - [`sync`] - sequential synchronization driver
//! - [`render`] / [`output`] - templates, JSON and file destinations
//! - [`config`] - environment configuration
//! - [`runner`] - one complete run from configuration to artifacts

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod output;
pub mod render;
pub mod runner;
pub mod sync;

// Re-export commonly used types
pub use adapters::{NetBoxClient, NetBoxConfig};
pub use config::SyncConfig;
pub use domain::{Artifacts, HostRecord, ScriptMapping};
pub use errors::{SyncError, SyncResult};
pub use inventory::Inventory;
pub use render::HostTemplate;
pub use runner::{run, RunSummary};
pub use sync::{synchronize, SyncOptions, SyncOutcome};
