// Copyright (c) 2025 - Cowboy AI, Inc.

//! Inventory adapter implementations
//!
//! Concrete implementations of the [`crate::inventory::Inventory`] trait.

pub mod netbox;

pub use netbox::{NetBoxClient, NetBoxConfig, Page};
