// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request Value Objects
//!
//! Transient inputs to the service layer. A [`BuildRequest`] drives the
//! Builder/Director pipeline; the remaining requests cover direct creation,
//! updates and lifecycle actions on stored VM records.

use serde::{Deserialize, Serialize};

use super::config::{ConfigMap, ConfigValue};
use super::provider::CloudProvider;
use super::tier::{VmProfile, VmTier};

/// Optional cross-provider attributes injected by the Director
///
/// Every field is independently nullable. Only present fields reach the
/// provider configuration, so `Some(false)` and `Some(0)` are meaningful
/// values and distinct from `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// SSH key or authentication key pair, written as `key_pair`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_pair_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_rules: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_optimization: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_optimization: Option<bool>,

    /// Disk performance in IOPS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_iops: Option<u32>,
}

impl BuildOptions {
    /// Write every present option into `config`, overwriting existing keys
    ///
    /// Absent options leave whatever the map already holds untouched.
    pub fn apply_to(&self, config: &mut ConfigMap) {
        if let Some(key_pair) = &self.key_pair_name {
            config.insert("key_pair".to_string(), ConfigValue::from(key_pair.clone()));
        }
        if let Some(rules) = &self.firewall_rules {
            config.insert("firewall_rules".to_string(), ConfigValue::from(rules.clone()));
        }
        if let Some(public_ip) = self.public_ip {
            config.insert("public_ip".to_string(), public_ip.into());
        }
        if let Some(memory_optimization) = self.memory_optimization {
            config.insert("memory_optimization".to_string(), memory_optimization.into());
        }
        if let Some(disk_optimization) = self.disk_optimization {
            config.insert("disk_optimization".to_string(), disk_optimization.into());
        }
        if let Some(iops) = self.storage_iops {
            config.insert("storage_iops".to_string(), iops.into());
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Request to build a VM through the Builder/Director pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub name: String,
    pub provider: CloudProvider,
    pub region: String,
    pub tier: VmTier,

    #[serde(default)]
    pub profile: VmProfile,

    #[serde(flatten)]
    pub options: BuildOptions,
}

impl BuildRequest {
    pub fn new(
        name: impl Into<String>,
        provider: CloudProvider,
        region: impl Into<String>,
        tier: VmTier,
    ) -> Self {
        Self {
            name: name.into(),
            provider,
            region: region.into(),
            tier,
            profile: VmProfile::default(),
            options: BuildOptions::default(),
        }
    }

    pub fn with_profile(mut self, profile: VmProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }
}

/// Request to create a VM directly from provider parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVmRequest {
    pub name: String,
    pub provider: CloudProvider,
    pub params: ConfigMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
}

/// Partial update of a stored VM record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVmRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_gb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_gb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Azure VM size, stored as `vm_size`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
}

impl UpdateVmRequest {
    /// Spec changes carried by this request, keyed as stored
    pub fn spec_changes(&self) -> ConfigMap {
        let mut changes = ConfigMap::new();
        if let Some(cpu) = self.cpu {
            changes.insert("cpu".to_string(), cpu.into());
        }
        if let Some(ram_gb) = self.ram_gb {
            changes.insert("ram_gb".to_string(), ram_gb.into());
        }
        if let Some(disk_gb) = self.disk_gb {
            changes.insert("disk_gb".to_string(), disk_gb.into());
        }
        if let Some(instance_type) = &self.instance_type {
            changes.insert("instance_type".to_string(), instance_type.clone().into());
        }
        if let Some(size) = &self.size {
            changes.insert("vm_size".to_string(), size.clone().into());
        }
        if let Some(machine_type) = &self.machine_type {
            changes.insert("machine_type".to_string(), machine_type.clone().into());
        }
        changes
    }
}

/// Lifecycle action on a VM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmAction {
    Start,
    Stop,
    Restart,
}

impl VmAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmActionRequest {
    pub action: VmAction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
}

impl VmActionRequest {
    pub fn new(action: VmAction) -> Self {
        Self {
            action,
            requested_by: None,
        }
    }
}
