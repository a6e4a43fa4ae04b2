// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Configuration Construction

use cim_vm_builder::builder::{
    AwsVmBuilder, AzureVmBuilder, GcpVmBuilder, OnPremVmBuilder, OracleVmBuilder, VmBuilder,
};
use cim_vm_builder::director::{Director, VmTierDirector};
use cim_vm_builder::domain::{BuildOptions, CloudProvider, ProviderConfig, VmProfile};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn fresh_builder(provider: CloudProvider) -> Box<dyn VmBuilder> {
    match provider {
        CloudProvider::Aws => Box::new(AwsVmBuilder::new()),
        CloudProvider::Azure => Box::new(AzureVmBuilder::new()),
        CloudProvider::Gcp => Box::new(GcpVmBuilder::new()),
        CloudProvider::OnPremise => Box::new(OnPremVmBuilder::new()),
        CloudProvider::Oracle => Box::new(OracleVmBuilder::new()),
    }
}

fn construct(
    provider: CloudProvider,
    region: &str,
    tier: &str,
    profile: VmProfile,
    options: &BuildOptions,
) -> ProviderConfig {
    let mut builder = fresh_builder(provider);
    VmTierDirector::new().construct(builder.as_mut(), "prop-vm", region, tier, profile, options)
}

// ============================================================================
// Strategies
// ============================================================================

fn provider() -> impl Strategy<Value = CloudProvider> {
    prop_oneof![
        Just(CloudProvider::Aws),
        Just(CloudProvider::Azure),
        Just(CloudProvider::Gcp),
        Just(CloudProvider::OnPremise),
        Just(CloudProvider::Oracle),
    ]
}

fn profile() -> impl Strategy<Value = VmProfile> {
    prop_oneof![
        Just(VmProfile::General),
        Just(VmProfile::Memory),
        Just(VmProfile::Compute),
    ]
}

fn known_tier() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("small"), Just("medium"), Just("large"), Just("xlarge")]
}

/// Tier strings that never name a known tier
fn unknown_tier() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{0,12}".prop_filter("known tier", |t| {
        !matches!(t.as_str(), "small" | "medium" | "large" | "xlarge")
    })
}

fn options() -> impl Strategy<Value = BuildOptions> {
    (
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of(proptest::collection::vec("[0-9]{1,5}/tcp", 0..4)),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<u32>()),
    )
        .prop_map(
            |(key_pair_name, firewall_rules, public_ip, memory_optimization, disk_optimization, storage_iops)| {
                BuildOptions {
                    key_pair_name,
                    firewall_rules,
                    public_ip,
                    memory_optimization,
                    disk_optimization,
                    storage_iops,
                }
            },
        )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Same inputs, same configuration
    #[test]
    fn prop_construction_is_deterministic(
        provider in provider(),
        region in "[a-z0-9-]{1,16}",
        tier in known_tier(),
        profile in profile(),
        options in options(),
    ) {
        let first = construct(provider, &region, tier, profile, &options);
        let second = construct(provider, &region, tier, profile, &options);
        prop_assert_eq!(first, second);
    }

    /// Unknown tiers behave exactly like the first table entry
    #[test]
    fn prop_unknown_tier_equals_small(
        provider in provider(),
        tier in unknown_tier(),
        options in options(),
    ) {
        let unknown = construct(provider, "r", &tier, VmProfile::General, &options);
        let small = construct(provider, "r", "small", VmProfile::General, &options);
        prop_assert_eq!(unknown, small);
    }

    /// An option key exists exactly when the option was supplied
    #[test]
    fn prop_options_present_iff_supplied(
        provider in provider(),
        tier in known_tier(),
        options in options(),
    ) {
        let config = construct(provider, "r", tier, VmProfile::General, &options);

        prop_assert_eq!(config.contains_key("key_pair"), options.key_pair_name.is_some());
        prop_assert_eq!(config.contains_key("firewall_rules"), options.firewall_rules.is_some());
        prop_assert_eq!(config.contains_key("public_ip"), options.public_ip.is_some());
        prop_assert_eq!(config.contains_key("memory_optimization"), options.memory_optimization.is_some());
        prop_assert_eq!(config.contains_key("disk_optimization"), options.disk_optimization.is_some());
        prop_assert_eq!(config.get_int("storage_iops"), options.storage_iops.map(i64::from));
    }

    /// Region, vcpus and memory_gb are always emitted
    #[test]
    fn prop_required_keys_always_present(
        provider in provider(),
        region in "[a-z0-9-]{1,16}",
        tier in "[a-z]{0,8}",
        profile in profile(),
    ) {
        let config = construct(provider, &region, &tier, profile, &BuildOptions::default());

        prop_assert_eq!(config.get_str("region"), Some(region.as_str()));
        prop_assert!(config.get_int("vcpus").is_some());
        prop_assert!(config.get_int("memory_gb").is_some());
    }

    /// Options never remove keys produced by the builder
    #[test]
    fn prop_options_only_add_keys(
        provider in provider(),
        tier in known_tier(),
        options in options(),
    ) {
        let bare = construct(provider, "r", tier, VmProfile::General, &BuildOptions::default());
        let with_options = construct(provider, "r", tier, VmProfile::General, &options);

        for (key, value) in bare.iter() {
            prop_assert_eq!(with_options.get(key), Some(value));
        }
    }
}
