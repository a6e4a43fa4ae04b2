// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Builders
//!
//! One [`VmBuilder`] per provider translates abstract attributes (region,
//! tier) into the provider's native configuration vocabulary. Each builder
//! owns a [`BuilderCore`] holding the display name and the in-progress
//! [`ConfigMap`].
//!
//! # Construction Sequence
//!
//! ```text
//! reset → set_name → set_region → set_cpu_ram_by_tier
//!       → set_image_defaults → set_network_defaults → build
//! ```
//!
//! The [`Director`](crate::director::Director) drives this sequence. Advanced
//! callers may invoke steps out of order; the image and network steps only
//! fill keys that are still absent, so they never clobber earlier values.
//!
//! # State Ownership
//!
//! - `build()` returns an independent [`ProviderConfig`] snapshot
//! - `apply_overrides` lends the live map to a closure for one call only
//! - A builder is single-owner: use one instance per in-flight construction
//!
//! # Example
//!
//! ```rust
//! use cim_vm_builder::builder::{AwsVmBuilder, VmBuilder};
//!
//! let mut builder = AwsVmBuilder::new();
//! builder.set_region("eu-west-1");
//! builder.set_cpu_ram_by_tier("medium");
//! let config = builder.build();
//!
//! assert_eq!(config.get_str("instance_type"), Some("t3.small"));
//! ```

pub mod aws;
pub mod azure;
pub mod gcp;
pub mod onprem;
pub mod oracle;
pub mod registry;

pub use aws::AwsVmBuilder;
pub use azure::AzureVmBuilder;
pub use gcp::GcpVmBuilder;
pub use onprem::OnPremVmBuilder;
pub use oracle::OracleVmBuilder;
pub use registry::{BuilderConstructor, BuilderRegistry};

use crate::domain::{set_default, CloudProvider, ConfigMap, ConfigValue, ProviderConfig};

/// State shared by every provider builder
#[derive(Debug, Clone, Default)]
pub struct BuilderCore {
    name: String,
    config: ConfigMap,
}

impl BuilderCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear name and configuration
    pub fn reset(&mut self) {
        self.name.clear();
        self.config = ConfigMap::new();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Insert or overwrite a key
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) {
        self.config.insert(key.to_string(), value.into());
    }

    /// Insert a key only if it is absent
    pub fn set_default(&mut self, key: &str, value: impl Into<ConfigValue>) {
        set_default(&mut self.config, key, value);
    }

    /// Independent copy of the current configuration
    pub fn snapshot(&self) -> ProviderConfig {
        ProviderConfig::new(self.config.clone())
    }

    /// Lend the live configuration to `overrides` for the duration of one call
    pub fn apply_overrides(&mut self, overrides: &mut dyn FnMut(&mut ConfigMap)) {
        overrides(&mut self.config);
    }
}

/// Provider-specific configuration builder
///
/// Implementors supply the provider rules (tier mapping, image defaults,
/// network defaults) and access to their [`BuilderCore`]; the remaining steps
/// are shared. No step fails: a tier absent from a provider's table resolves
/// to the smallest tier.
pub trait VmBuilder: Send {
    /// Provider this builder targets
    fn provider(&self) -> CloudProvider;

    fn core(&self) -> &BuilderCore;

    fn core_mut(&mut self) -> &mut BuilderCore;

    /// Map a tier to the provider's capacity identifier(s)
    fn set_cpu_ram_by_tier(&mut self, tier: &str);

    /// Fill the provider's default image if absent
    fn set_image_defaults(&mut self);

    /// Fill the provider's default network placement if absent
    fn set_network_defaults(&mut self);

    /// Clear all state
    fn reset(&mut self) {
        self.core_mut().reset();
    }

    /// Store the display name (kept out of the configuration map)
    fn set_name(&mut self, name: &str) {
        self.core_mut().set_name(name);
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    /// Set `region`, overwriting any previous value
    fn set_region(&mut self, region: &str) {
        self.core_mut().set("region", region);
    }

    /// Return an independent snapshot of the configuration
    fn build(&self) -> ProviderConfig {
        self.core().snapshot()
    }

    /// Scoped mutable access to the in-progress configuration
    ///
    /// Reserved for the Director's optional-attribute injection. Writing keys
    /// the builder owns (capacity, image, network) bypasses its rules.
    fn apply_overrides(&mut self, overrides: &mut dyn FnMut(&mut ConfigMap)) {
        self.core_mut().apply_overrides(overrides);
    }
}
