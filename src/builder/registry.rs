// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Selector
//!
//! Enum-keyed factory map from [`CloudProvider`] to a builder constructor.
//! Every selection yields a fresh builder so no state leaks between
//! constructions. Unsupported providers are rejected here, before the
//! Director ever sees a builder.

use std::collections::HashMap;

use super::{AwsVmBuilder, AzureVmBuilder, GcpVmBuilder, OnPremVmBuilder, OracleVmBuilder, VmBuilder};
use crate::domain::CloudProvider;
use crate::errors::{ProvisioningError, ProvisioningResult};

/// Constructor producing a fresh builder
pub type BuilderConstructor = fn() -> Box<dyn VmBuilder>;

/// Registry of builder constructors keyed by provider
#[derive(Debug, Clone, Default)]
pub struct BuilderRegistry {
    constructors: HashMap<CloudProvider, BuilderConstructor>,
}

impl BuilderRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a builder for every supported provider
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(CloudProvider::Aws, || Box::new(AwsVmBuilder::new()));
        registry.register(CloudProvider::Azure, || Box::new(AzureVmBuilder::new()));
        registry.register(CloudProvider::Gcp, || Box::new(GcpVmBuilder::new()));
        registry.register(CloudProvider::OnPremise, || Box::new(OnPremVmBuilder::new()));
        registry.register(CloudProvider::Oracle, || Box::new(OracleVmBuilder::new()));
        registry
    }

    /// Register (or replace) the constructor for a provider
    pub fn register(&mut self, provider: CloudProvider, constructor: BuilderConstructor) {
        self.constructors.insert(provider, constructor);
    }

    pub fn supports(&self, provider: CloudProvider) -> bool {
        self.constructors.contains_key(&provider)
    }

    /// Registered providers in canonical order
    pub fn providers(&self) -> Vec<CloudProvider> {
        let mut providers: Vec<_> = self.constructors.keys().copied().collect();
        providers.sort();
        providers
    }

    /// Fresh builder for `provider`
    pub fn select(&self, provider: CloudProvider) -> ProvisioningResult<Box<dyn VmBuilder>> {
        self.constructors
            .get(&provider)
            .map(|constructor| constructor())
            .ok_or_else(|| ProvisioningError::UnsupportedProvider(provider.to_string()))
    }

    /// Fresh builder for a provider identifier such as `"aws"` or `"onpremise"`
    pub fn select_by_id(&self, id: &str) -> ProvisioningResult<Box<dyn VmBuilder>> {
        let provider: CloudProvider = id.parse()?;
        self.select(provider)
    }
}
