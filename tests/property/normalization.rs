// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Device Normalization

use netbox_dnsmasq::domain::{normalize, SkipReason};
use proptest::prelude::*;

use crate::fixtures::{device, interface};

// ============================================================================
// Property Test Strategies
// ============================================================================

fn ipv4() -> impl Strategy<Value = String> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d))
}

/// MAC address in random casing
fn mac() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{2}(:[0-9a-fA-F]{2}){5}"
}

fn macs() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::weighted(0.8, mac()), 1..6)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the host address is the primary address before the slash
    #[test]
    fn prop_address_is_prefix_before_slash(ip in ipv4(), prefix in 0u8..=32) {
        let dev = device(1, "node", Some(&format!("{}/{}", ip, prefix)), &[]);
        let record = normalize(&dev, &[interface(1, Some("aa:bb:cc:dd:ee:ff"))]).unwrap();

        prop_assert_eq!(record.address, ip);
    }

    /// Property: hardware addresses are always lower-case
    #[test]
    fn prop_hardware_addresses_lowercase(ip in ipv4(), macs in macs()) {
        let dev = device(1, "node", Some(&format!("{}/24", ip)), &[]);
        let interfaces: Vec<_> = macs
            .iter()
            .enumerate()
            .map(|(i, mac)| interface(i as i64, mac.as_deref()))
            .collect();
        let record = normalize(&dev, &interfaces).unwrap();

        for hw in &record.hardware_addresses {
            prop_assert_eq!(hw, &hw.to_lowercase());
        }
    }

    /// Property: one hardware address slot per interface, in interface order
    #[test]
    fn prop_hardware_addresses_positional(ip in ipv4(), macs in macs()) {
        let dev = device(1, "node", Some(&format!("{}/24", ip)), &[]);
        let interfaces: Vec<_> = macs
            .iter()
            .enumerate()
            .map(|(i, mac)| interface(i as i64, mac.as_deref()))
            .collect();
        let record = normalize(&dev, &interfaces).unwrap();

        prop_assert_eq!(record.hardware_addresses.len(), macs.len());
        for (slot, mac) in record.hardware_addresses.iter().zip(&macs) {
            let expected = mac.as_deref().map(str::to_lowercase).unwrap_or_default();
            prop_assert_eq!(slot, &expected);
        }
    }

    /// Property: a device without interfaces never yields a record
    #[test]
    fn prop_no_interfaces_never_yields_record(
        ip in ipv4(),
        id in 1i64..10_000,
        slugs in prop::collection::vec("[a-z]{1,8}-[a-z]{1,8}", 0..4),
    ) {
        let slugs: Vec<&str> = slugs.iter().map(String::as_str).collect();
        let dev = device(id, "node", Some(&format!("{}/24", ip)), &slugs);

        prop_assert_eq!(normalize(&dev, &[]), Err(SkipReason::NoEligibleInterface));
    }

    /// Property: normalization is deterministic
    #[test]
    fn prop_normalize_is_deterministic(ip in ipv4(), macs in macs()) {
        let dev = device(1, "node", Some(&format!("{}/24", ip)), &[]);
        let interfaces: Vec<_> = macs
            .iter()
            .enumerate()
            .map(|(i, mac)| interface(i as i64, mac.as_deref()))
            .collect();

        prop_assert_eq!(normalize(&dev, &interfaces), normalize(&dev, &interfaces));
    }
}
