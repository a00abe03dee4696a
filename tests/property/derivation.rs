// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Artifact Derivation
//!
//! Drives the synchronization fold over generated inventories and checks the
//! derived host list and script mappings.

use netbox_dnsmasq::domain::BOOT_SCRIPT_EXTENSION;
use netbox_dnsmasq::{synchronize, HostTemplate, SyncOptions, SyncOutcome};
use proptest::prelude::*;
use std::collections::HashSet;

use crate::fixtures::{device, interface, FakeInventory};

const PREFIX: &str = "pxe-";

// ============================================================================
// Property Test Strategies
// ============================================================================

#[derive(Debug, Clone)]
struct GeneratedDevice {
    id: i64,
    macs: Vec<String>,
    slugs: Vec<String>,
}

fn slug() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|s| format!("{}{}", PREFIX, s)),
        "[a-z]{1,8}-[a-z]{1,8}",
    ]
}

fn generated_device() -> impl Strategy<Value = GeneratedDevice> {
    (
        1i64..200,
        prop::collection::vec("[0-9A-F]{2}(:[0-9A-F]{2}){5}", 0..4),
        prop::collection::vec(slug(), 0..4),
    )
        .prop_map(|(id, macs, slugs)| GeneratedDevice { id, macs, slugs })
}

/// Devices with distinct ids, in generated order
fn unique_devices() -> impl Strategy<Value = Vec<GeneratedDevice>> {
    prop::collection::vec(generated_device(), 0..20).prop_map(|devices| {
        let mut seen = HashSet::new();
        devices
            .into_iter()
            .filter(|d| seen.insert(d.id))
            .collect()
    })
}

fn inventory_of(devices: &[GeneratedDevice]) -> FakeInventory {
    devices.iter().fold(FakeInventory::new(), |inventory, generated| {
        let slugs: Vec<&str> = generated.slugs.iter().map(String::as_str).collect();
        let address = format!("10.{}.{}.1/24", generated.id / 256, generated.id % 256);
        let interfaces = generated
            .macs
            .iter()
            .enumerate()
            .map(|(i, mac)| interface(i as i64, Some(mac.as_str())))
            .collect();
        inventory.with_device(
            device(generated.id, &format!("node{}", generated.id), Some(&address), &slugs),
            interfaces,
        )
    })
}

fn run(devices: &[GeneratedDevice]) -> SyncOutcome {
    let inventory = inventory_of(devices);
    tokio_test::block_on(synchronize(&inventory, &SyncOptions::default()))
        .expect("in-memory inventory never fails")
}

fn render_sorted(outcome: &SyncOutcome) -> Vec<u8> {
    let template = HostTemplate::from_source(None).expect("default template compiles");
    let mut out = Vec::new();
    template
        .write_hosts(&outcome.artifacts(PREFIX).sorted_hosts(), &mut out)
        .expect("writing to memory never fails");
    out
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: devices without interfaces never reach the host output
    #[test]
    fn prop_interfaceless_devices_excluded(devices in unique_devices()) {
        let artifacts = run(&devices).artifacts(PREFIX);

        for host in &artifacts.hosts {
            let generated = devices.iter().find(|d| d.id == host.device_id).unwrap();
            prop_assert!(!generated.macs.is_empty());
        }
        for generated in devices.iter().filter(|d| !d.macs.is_empty()) {
            prop_assert!(artifacts.hosts.iter().any(|h| h.device_id == generated.id));
        }
    }

    /// Property: mappings come from the first matching tag, one per eligible device
    #[test]
    fn prop_first_matching_tag_selects_script(devices in unique_devices()) {
        let artifacts = run(&devices).artifacts(PREFIX);

        let expected: Vec<String> = devices
            .iter()
            .filter(|d| !d.macs.is_empty())
            .filter_map(|d| d.slugs.iter().find_map(|s| s.strip_prefix(PREFIX)))
            .map(|script| format!("{}{}", script, BOOT_SCRIPT_EXTENSION))
            .collect();
        let actual: Vec<String> = artifacts
            .mappings
            .iter()
            .map(|m| m.script_name().to_string())
            .collect();

        prop_assert_eq!(actual, expected);
        for mapping in &artifacts.mappings {
            prop_assert!(mapping.network_cidr().ends_with("/32"));
        }
    }

    /// Property: sorted host output is byte-identical across runs
    #[test]
    fn prop_sorted_output_is_stable(devices in unique_devices()) {
        let first = render_sorted(&run(&devices));
        let second = render_sorted(&run(&devices));

        prop_assert_eq!(first, second);
    }

    /// Property: sorted output does not depend on device enumeration order
    #[test]
    fn prop_sorted_output_ignores_enumeration_order(devices in unique_devices()) {
        let mut reversed = devices.clone();
        reversed.reverse();

        prop_assert_eq!(render_sorted(&run(&devices)), render_sorted(&run(&reversed)));
    }
}
