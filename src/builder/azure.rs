// Copyright (c) 2025 - Cowboy AI, Inc.
//! Azure VM configuration builder

use tracing::debug;

use super::{BuilderCore, VmBuilder};
use crate::domain::{CloudProvider, TierTable};

/// Tier → Azure VM size
pub static VM_SIZES: TierTable<&str> = TierTable::new(&[
    ("small", "Standard_B1s"),
    ("medium", "Standard_B2s"),
    ("large", "Standard_D2s_v3"),
    ("xlarge", "Standard_D4s_v3"),
]);

pub const DEFAULT_IMAGE: &str = "Ubuntu 20.04 LTS";
pub const DEFAULT_RESOURCE_GROUP: &str = "rg-default";

/// Builder for Azure VM configuration
///
/// Keys: `region`, `vm_size`, `image`, `resource_group`.
#[derive(Debug, Clone, Default)]
pub struct AzureVmBuilder {
    core: BuilderCore,
}

impl AzureVmBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VmBuilder for AzureVmBuilder {
    fn provider(&self) -> CloudProvider {
        CloudProvider::Azure
    }

    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn set_cpu_ram_by_tier(&mut self, tier: &str) {
        let vm_size = *VM_SIZES.lookup(tier);
        debug!(tier, vm_size, "azure: vm size selected");
        self.core.set("vm_size", vm_size);
    }

    fn set_image_defaults(&mut self) {
        self.core.set_default("image", DEFAULT_IMAGE);
    }

    fn set_network_defaults(&mut self) {
        self.core.set_default("resource_group", DEFAULT_RESOURCE_GROUP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sequence() {
        let mut builder = AzureVmBuilder::new();
        builder.set_region("eastus");
        builder.set_cpu_ram_by_tier("large");
        builder.set_image_defaults();
        builder.set_network_defaults();

        let config = builder.build();
        assert_eq!(config.get_str("vm_size"), Some("Standard_D2s_v3"));
        assert_eq!(config.get_str("image"), Some(DEFAULT_IMAGE));
        assert_eq!(config.get_str("resource_group"), Some(DEFAULT_RESOURCE_GROUP));
        assert_eq!(config.len(), 4);
    }
}
