// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider builder tests
//!
//! Tier tables, default-on-miss, snapshot independence and non-destructive
//! defaults for every provider.

mod fixtures;

use cim_vm_builder::builder::VmBuilder;
use cim_vm_builder::domain::{CloudProvider, ConfigValue};
use pretty_assertions::assert_eq;
use test_case::test_case;

use fixtures::{builder_for, KNOWN_TIERS};

fn capacity(provider: CloudProvider, tier: &str) -> Vec<(String, ConfigValue)> {
    let mut builder = builder_for(provider);
    builder.set_cpu_ram_by_tier(tier);
    builder
        .build()
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test_case(CloudProvider::Aws, "small", "instance_type", "t3.micro")]
#[test_case(CloudProvider::Aws, "medium", "instance_type", "t3.small")]
#[test_case(CloudProvider::Aws, "large", "instance_type", "t3.medium")]
#[test_case(CloudProvider::Aws, "xlarge", "instance_type", "m5.large")]
#[test_case(CloudProvider::Azure, "small", "vm_size", "Standard_B1s")]
#[test_case(CloudProvider::Azure, "medium", "vm_size", "Standard_B2s")]
#[test_case(CloudProvider::Azure, "large", "vm_size", "Standard_D2s_v3")]
#[test_case(CloudProvider::Azure, "xlarge", "vm_size", "Standard_D4s_v3")]
#[test_case(CloudProvider::Gcp, "small", "machine_type", "e2-micro")]
#[test_case(CloudProvider::Gcp, "medium", "machine_type", "e2-small")]
#[test_case(CloudProvider::Gcp, "large", "machine_type", "e2-medium")]
#[test_case(CloudProvider::Gcp, "xlarge", "machine_type", "e2-standard-2")]
#[test_case(CloudProvider::Oracle, "small", "compute_shape", "VM.Standard2.1")]
#[test_case(CloudProvider::Oracle, "medium", "compute_shape", "VM.Standard2.2")]
#[test_case(CloudProvider::Oracle, "large", "compute_shape", "VM.Standard2.4")]
#[test_case(CloudProvider::Oracle, "xlarge", "compute_shape", "VM.Standard2.8")]
fn test_capacity_identifier(provider: CloudProvider, tier: &str, key: &str, expected: &str) {
    assert_eq!(
        capacity(provider, tier),
        vec![(key.to_string(), ConfigValue::from(expected))]
    );
}

#[test_case("small", 2, 4)]
#[test_case("medium", 4, 8)]
#[test_case("large", 8, 16)]
#[test_case("xlarge", 16, 32)]
fn test_onprem_cpu_ram(tier: &str, cpu: i64, ram_gb: i64) {
    assert_eq!(
        capacity(CloudProvider::OnPremise, tier),
        vec![
            ("cpu".to_string(), ConfigValue::Int(cpu)),
            ("disk_gb".to_string(), ConfigValue::Int(50)),
            ("ram_gb".to_string(), ConfigValue::Int(ram_gb)),
        ]
    );
}

#[test_case(CloudProvider::Aws)]
#[test_case(CloudProvider::Azure)]
#[test_case(CloudProvider::Gcp)]
#[test_case(CloudProvider::OnPremise)]
#[test_case(CloudProvider::Oracle)]
fn test_unknown_tier_matches_small(provider: CloudProvider) {
    let small = capacity(provider, "small");
    assert_eq!(capacity(provider, "unknown-tier"), small);
    assert_eq!(capacity(provider, ""), small);
    assert_eq!(capacity(provider, "XLARGE"), small);
}

#[test_case(CloudProvider::Aws)]
#[test_case(CloudProvider::Azure)]
#[test_case(CloudProvider::Gcp)]
#[test_case(CloudProvider::OnPremise)]
#[test_case(CloudProvider::Oracle)]
fn test_build_does_not_alias_state(provider: CloudProvider) {
    let mut builder = builder_for(provider);
    builder.set_region("region-a");
    builder.set_cpu_ram_by_tier("large");
    builder.set_image_defaults();
    builder.set_network_defaults();
    let captured = builder.build();
    let expected = captured.clone();

    builder.reset();
    builder.set_region("region-b");
    builder.set_cpu_ram_by_tier("small");

    assert_eq!(captured, expected);
    assert_eq!(captured.get_str("region"), Some("region-a"));
    assert_eq!(builder.build().get_str("region"), Some("region-b"));
}

#[test_case(CloudProvider::Aws)]
#[test_case(CloudProvider::Azure)]
#[test_case(CloudProvider::Gcp)]
#[test_case(CloudProvider::OnPremise)]
#[test_case(CloudProvider::Oracle)]
fn test_defaults_are_idempotent(provider: CloudProvider) {
    let mut once = builder_for(provider);
    once.set_image_defaults();
    once.set_network_defaults();

    let mut twice = builder_for(provider);
    twice.set_image_defaults();
    twice.set_image_defaults();
    twice.set_network_defaults();
    twice.set_network_defaults();

    assert_eq!(once.build(), twice.build());
}

#[test_case(CloudProvider::Aws)]
#[test_case(CloudProvider::Azure)]
#[test_case(CloudProvider::Gcp)]
#[test_case(CloudProvider::OnPremise)]
#[test_case(CloudProvider::Oracle)]
fn test_defaults_never_overwrite(provider: CloudProvider) {
    let mut reference = builder_for(provider);
    reference.set_image_defaults();
    reference.set_network_defaults();
    let default_keys: Vec<String> = reference.build().keys().map(str::to_string).collect();

    let mut builder = builder_for(provider);
    builder.apply_overrides(&mut |config| {
        for key in &default_keys {
            config.insert(key.clone(), ConfigValue::from("custom"));
        }
    });
    builder.set_image_defaults();
    builder.set_network_defaults();

    let config = builder.build();
    for key in &default_keys {
        assert_eq!(config.get_str(key), Some("custom"), "{} overwritten", key);
    }
}

#[test]
fn test_set_name_stays_out_of_config() {
    for provider in CloudProvider::ALL {
        let mut builder = builder_for(provider);
        builder.set_name("vm-name");
        assert_eq!(builder.name(), "vm-name");
        assert!(builder.build().is_empty());
    }
}

#[test]
fn test_region_overwrites() {
    let mut builder = builder_for(CloudProvider::Gcp);
    builder.set_region("us-central1");
    builder.set_region("europe-west1");
    assert_eq!(builder.build().get_str("region"), Some("europe-west1"));
}

#[test]
fn test_every_known_tier_is_distinct() {
    for provider in CloudProvider::ALL {
        let mut seen = Vec::new();
        for tier in KNOWN_TIERS {
            let result = capacity(provider, tier);
            assert!(!seen.contains(&result), "{} repeats a capacity for {}", provider, tier);
            seen.push(result);
        }
    }
}
