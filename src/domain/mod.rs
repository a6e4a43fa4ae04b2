// Copyright (c) 2025 - Cowboy AI, Inc.
//! VM Provisioning Domain Models
//!
//! Value objects shared by the builders, the director, the resource factories
//! and the service layer.
//!
//! - [`CloudProvider`] - closed set of supported providers
//! - [`VmTier`] / [`VmProfile`] - abstract size bucket and machine family
//! - [`TierTable`] - ordered tier lookup with fallback to the first entry
//! - [`TierComputeShape`] - descriptive vCPU/RAM for a tier
//! - [`ConfigValue`] / [`ProviderConfig`] - flat provider configuration
//! - [`BuildRequest`] and friends - service-layer inputs

pub mod config;
pub mod provider;
pub mod request;
pub mod tier;

pub use config::{set_default, ConfigMap, ConfigValue, ProviderConfig};
pub use provider::CloudProvider;
pub use request::{
    BuildOptions, BuildRequest, CreateVmRequest, UpdateVmRequest, VmAction, VmActionRequest,
};
pub use tier::{TierComputeShape, TierTable, UnknownTier, VmProfile, VmTier};
