// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-vm-builder
//!
//! Deterministic requests and option sets shared by the integration tests.

#![allow(dead_code)]

use cim_vm_builder::builder::{
    AwsVmBuilder, AzureVmBuilder, GcpVmBuilder, OnPremVmBuilder, OracleVmBuilder, VmBuilder,
};
use cim_vm_builder::domain::{BuildOptions, BuildRequest, CloudProvider, VmProfile, VmTier};

pub const KNOWN_TIERS: [&str; 4] = ["small", "medium", "large", "xlarge"];

/// Fresh builder for a provider, without going through the registry
pub fn builder_for(provider: CloudProvider) -> Box<dyn VmBuilder> {
    match provider {
        CloudProvider::Aws => Box::new(AwsVmBuilder::new()),
        CloudProvider::Azure => Box::new(AzureVmBuilder::new()),
        CloudProvider::Gcp => Box::new(GcpVmBuilder::new()),
        CloudProvider::OnPremise => Box::new(OnPremVmBuilder::new()),
        CloudProvider::Oracle => Box::new(OracleVmBuilder::new()),
    }
}

/// Every optional attribute set
pub fn full_options() -> BuildOptions {
    BuildOptions {
        key_pair_name: Some("deploy-key".to_string()),
        firewall_rules: Some(vec!["22/tcp".to_string(), "443/tcp".to_string()]),
        public_ip: Some(true),
        memory_optimization: Some(false),
        disk_optimization: Some(true),
        storage_iops: Some(3000),
    }
}

pub fn web_request() -> BuildRequest {
    BuildRequest::new("web-01", CloudProvider::Aws, "us-east-1", VmTier::Small)
}

pub fn db_request() -> BuildRequest {
    BuildRequest::new("db-1", CloudProvider::OnPremise, "dc1", VmTier::Large)
        .with_profile(VmProfile::Memory)
}
