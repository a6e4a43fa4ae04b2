// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Factory
//!
//! Abstract factory turning a finished [`ProviderConfig`] into a
//! provider-shaped [`VirtualMachine`] record. Creation is simulated: no cloud
//! API is contacted, the factory only checks that the configuration carries
//! every key its provider needs and mints an identifier.
//!
//! The key names checked here are the stable contract between the builders
//! and the factories.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{CloudProvider, ProviderConfig};
use crate::errors::{ProvisioningError, ProvisioningResult};

/// Lifecycle status of a virtual machine record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmStatus {
    /// Accepted, not yet running
    Pending,
    Running,
    Stopped,
}

impl VmStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for VmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Virtual machine resource produced by a factory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualMachine {
    pub resource_id: String,
    pub name: String,
    pub provider: CloudProvider,
    pub status: VmStatus,
    specs: ProviderConfig,
}

impl VirtualMachine {
    /// Provider configuration the VM was created from
    pub fn get_specs(&self) -> ProviderConfig {
        self.specs.clone()
    }
}

/// Abstract factory for provider resources
pub trait CloudResourceFactory: Send + Sync {
    fn provider(&self) -> CloudProvider;

    fn provider_name(&self) -> &'static str {
        self.provider().display_name()
    }

    /// Keys a configuration must carry for this provider
    fn required_keys(&self) -> &'static [&'static str];

    /// Create a virtual machine record from `config`
    fn create_virtual_machine(
        &self,
        name: &str,
        config: ProviderConfig,
    ) -> ProvisioningResult<VirtualMachine> {
        let provider = self.provider();
        if let Some(missing) = self
            .required_keys()
            .iter()
            .find(|key| !config.contains_key(key))
        {
            return Err(ProvisioningError::MissingParameter {
                provider: provider.to_string(),
                key: missing.to_string(),
            });
        }

        let resource_id = format!("{}-{}", provider.resource_prefix(), Uuid::now_v7().simple());
        debug!(%provider, resource_id = %resource_id, name, "virtual machine created");

        Ok(VirtualMachine {
            resource_id,
            name: name.to_string(),
            provider,
            status: VmStatus::Running,
            specs: config,
        })
    }
}

/// AWS EC2 factory
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsResourceFactory;

impl CloudResourceFactory for AwsResourceFactory {
    fn provider(&self) -> CloudProvider {
        CloudProvider::Aws
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &["region", "instance_type", "ami", "vpc_id"]
    }
}

/// Azure VM factory
#[derive(Debug, Clone, Copy, Default)]
pub struct AzureResourceFactory;

impl CloudResourceFactory for AzureResourceFactory {
    fn provider(&self) -> CloudProvider {
        CloudProvider::Azure
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &["region", "vm_size", "image", "resource_group"]
    }
}

/// GCP Compute Engine factory
#[derive(Debug, Clone, Copy, Default)]
pub struct GcpResourceFactory;

impl CloudResourceFactory for GcpResourceFactory {
    fn provider(&self) -> CloudProvider {
        CloudProvider::Gcp
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &["region", "machine_type", "zone", "project"]
    }
}

/// On-premises hypervisor factory
#[derive(Debug, Clone, Copy, Default)]
pub struct OnPremResourceFactory;

impl CloudResourceFactory for OnPremResourceFactory {
    fn provider(&self) -> CloudProvider {
        CloudProvider::OnPremise
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &["region", "cpu", "ram_gb", "disk_gb"]
    }
}

/// OCI compute factory
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleResourceFactory;

impl CloudResourceFactory for OracleResourceFactory {
    fn provider(&self) -> CloudProvider {
        CloudProvider::Oracle
    }

    fn required_keys(&self) -> &'static [&'static str] {
        &[
            "region",
            "compute_shape",
            "image_id",
            "compartment_id",
            "availability_domain",
            "subnet_id",
        ]
    }
}

/// Factory for a provider
pub fn create_cloud_factory(provider: CloudProvider) -> Box<dyn CloudResourceFactory> {
    match provider {
        CloudProvider::Aws => Box::new(AwsResourceFactory),
        CloudProvider::Azure => Box::new(AzureResourceFactory),
        CloudProvider::Gcp => Box::new(GcpResourceFactory),
        CloudProvider::OnPremise => Box::new(OnPremResourceFactory),
        CloudProvider::Oracle => Box::new(OracleResourceFactory),
    }
}
