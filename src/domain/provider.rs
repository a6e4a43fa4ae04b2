// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Provider Domain Model
//!
//! The closed set of providers a virtual machine configuration can target.
//! Parsing is the only place an arbitrary identifier enters the system; every
//! downstream component works with the typed [`CloudProvider`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ProvisioningError;

/// Supported cloud provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    /// Amazon Web Services (EC2)
    Aws,
    /// Microsoft Azure
    Azure,
    /// Google Cloud Platform (Compute Engine)
    Gcp,
    /// On-premises hypervisor
    #[serde(rename = "onpremise", alias = "onprem")]
    OnPremise,
    /// Oracle Cloud Infrastructure
    Oracle,
}

impl CloudProvider {
    /// All supported providers, in canonical order
    pub const ALL: [CloudProvider; 5] = [
        Self::Aws,
        Self::Azure,
        Self::Gcp,
        Self::OnPremise,
        Self::Oracle,
    ];

    /// Get the canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Azure => "azure",
            Self::Gcp => "gcp",
            Self::OnPremise => "onpremise",
            Self::Oracle => "oracle",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::Gcp => "GCP",
            Self::OnPremise => "On-Premise",
            Self::Oracle => "Oracle Cloud",
        }
    }

    /// Prefix used for resource identifiers minted by this provider's factory
    pub fn resource_prefix(&self) -> &'static str {
        match self {
            Self::Aws => "i",
            Self::Azure => "azvm",
            Self::Gcp => "gce",
            Self::OnPremise => "vm",
            Self::Oracle => "ocid1.instance",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = ProvisioningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aws" => Ok(Self::Aws),
            "azure" => Ok(Self::Azure),
            "gcp" => Ok(Self::Gcp),
            "onpremise" | "onprem" => Ok(Self::OnPremise),
            "oracle" => Ok(Self::Oracle),
            _ => Err(ProvisioningError::UnsupportedProvider(s.to_string())),
        }
    }
}
