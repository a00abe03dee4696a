// Copyright (c) 2025 - Cowboy AI, Inc.
//! Boot Configuration Domain Models
//!
//! Canonical values derived from the inventory on every run. Nothing here is
//! persisted; a run builds them, renders them, and drops them.
//!
//! - [`HostRecord`] - one DHCP host mapping per eligible device
//! - [`ScriptMapping`] - shoelaces `/32` network to boot script association
//! - [`DeviceTag`] - inventory tag consulted for script selection
//! - [`Artifacts`] - the two downstream views built from a run

pub mod artifacts;
pub mod host;
pub mod script;

pub use artifacts::{derive_artifacts, Artifacts};
pub use host::{normalize, HostRecord, SkipReason};
pub use script::{
    script_mapping_for, BootScript, DeviceTag, NetworkMap, ScriptMapping, BOOT_SCRIPT_EXTENSION,
};
