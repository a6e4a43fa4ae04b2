// Copyright (c) 2025 - Cowboy AI, Inc.
//! Director
//!
//! Drives any [`VmBuilder`] through the same fixed construction sequence,
//! regardless of provider:
//!
//! ```text
//! reset → name → region → capacity(effective tier)
//!       → image defaults → network defaults
//!       → optional attributes → compute metadata(original tier) → build
//! ```
//!
//! The Director is total: it raises no errors of its own and the builders it
//! drives raise none either. Provider mismatches are the selector's concern;
//! the Director only knows the [`VmBuilder`] trait.
//!
//! # Example
//!
//! ```rust
//! use cim_vm_builder::builder::AwsVmBuilder;
//! use cim_vm_builder::director::{Director, VmTierDirector};
//! use cim_vm_builder::domain::{BuildOptions, VmProfile};
//!
//! let director = VmTierDirector::new();
//! let mut builder = AwsVmBuilder::new();
//! let config = director.construct(
//!     &mut builder,
//!     "web-01",
//!     "us-east-1",
//!     "small",
//!     VmProfile::General,
//!     &BuildOptions::default(),
//! );
//!
//! assert_eq!(config.get_str("instance_type"), Some("t3.micro"));
//! assert_eq!(config.get_int("vcpus"), Some(2));
//! ```

use tracing::debug;

use crate::builder::VmBuilder;
use crate::domain::{set_default, BuildOptions, BuildRequest, ProviderConfig, TierComputeShape, VmProfile};

/// Resolves the tier handed to the builder from the requested profile and tier
///
/// Extension point for profile-specific sizing. The default
/// [`IdentityTierResolver`] ignores the profile.
pub trait TierResolver: Send + Sync {
    fn resolve(&self, profile: VmProfile, tier: &str) -> String;
}

/// Returns the requested tier unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTierResolver;

impl TierResolver for IdentityTierResolver {
    fn resolve(&self, _profile: VmProfile, tier: &str) -> String {
        tier.to_string()
    }
}

/// Orchestrates a builder into a finished provider configuration
pub trait Director {
    /// Run the full construction sequence and return the snapshot
    fn construct(
        &self,
        builder: &mut dyn VmBuilder,
        name: &str,
        region: &str,
        tier: &str,
        profile: VmProfile,
        options: &BuildOptions,
    ) -> ProviderConfig;
}

/// Director applying tier-based capacity and compute metadata
#[derive(Debug, Clone, Default)]
pub struct VmTierDirector<R = IdentityTierResolver> {
    resolver: R,
}

impl VmTierDirector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: TierResolver> VmTierDirector<R> {
    /// Director using a custom tier resolver
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Tier passed to `set_cpu_ram_by_tier`
    pub fn effective_tier(&self, profile: VmProfile, tier: &str) -> String {
        self.resolver.resolve(profile, tier)
    }

    /// Construct from a service-layer request
    pub fn construct_request(
        &self,
        builder: &mut dyn VmBuilder,
        request: &BuildRequest,
    ) -> ProviderConfig {
        self.construct(
            builder,
            &request.name,
            &request.region,
            request.tier.as_str(),
            request.profile,
            &request.options,
        )
    }
}

impl<R: TierResolver> Director for VmTierDirector<R> {
    fn construct(
        &self,
        builder: &mut dyn VmBuilder,
        name: &str,
        region: &str,
        tier: &str,
        profile: VmProfile,
        options: &BuildOptions,
    ) -> ProviderConfig {
        builder.reset();
        builder.set_name(name);
        builder.set_region(region);

        let effective_tier = self.effective_tier(profile, tier);
        builder.set_cpu_ram_by_tier(&effective_tier);

        // Network after image; keep this order even though both only fill gaps
        builder.set_image_defaults();
        builder.set_network_defaults();

        // Metadata describes the requested tier, not the resolved one
        let shape = TierComputeShape::for_tier(tier);
        builder.apply_overrides(&mut |config| {
            options.apply_to(config);
            set_default(config, "vcpus", shape.vcpus);
            set_default(config, "memory_gb", shape.memory_gb);
        });

        let config = builder.build();
        debug!(
            provider = %builder.provider(),
            name,
            tier,
            effective_tier = %effective_tier,
            profile = %profile,
            keys = config.len(),
            "constructed provider configuration"
        );
        config
    }
}
