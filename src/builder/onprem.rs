// Copyright (c) 2025 - Cowboy AI, Inc.
//! On-premises hypervisor configuration builder
//!
//! On-premises hosts have no catalogue of instance types, so the tier maps
//! straight to a raw CPU/RAM pair. Images come from a generic hypervisor
//! template and are not configured here.

use tracing::debug;

use super::{BuilderCore, VmBuilder};
use crate::domain::{CloudProvider, TierTable};

/// Tier → (cpu, ram_gb)
pub static CPU_RAM: TierTable<(i64, i64)> = TierTable::new(&[
    ("small", (2, 4)),
    ("medium", (4, 8)),
    ("large", (8, 16)),
    ("xlarge", (16, 32)),
]);

pub const DEFAULT_DISK_GB: i64 = 50;
pub const DEFAULT_NIC: &str = "eth0";
pub const DEFAULT_HYPERVISOR: &str = "vmware";

/// Builder for on-premises VM configuration
///
/// Keys: `region`, `cpu`, `ram_gb`, `disk_gb`, `nic`, `hypervisor`.
#[derive(Debug, Clone, Default)]
pub struct OnPremVmBuilder {
    core: BuilderCore,
}

impl OnPremVmBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VmBuilder for OnPremVmBuilder {
    fn provider(&self) -> CloudProvider {
        CloudProvider::OnPremise
    }

    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn set_cpu_ram_by_tier(&mut self, tier: &str) {
        let (cpu, ram_gb) = *CPU_RAM.lookup(tier);
        debug!(tier, cpu, ram_gb, "onpremise: cpu/ram selected");
        self.core.set("cpu", cpu);
        self.core.set("ram_gb", ram_gb);
        self.core.set_default("disk_gb", DEFAULT_DISK_GB);
    }

    fn set_image_defaults(&mut self) {}

    fn set_network_defaults(&mut self) {
        self.core.set_default("nic", DEFAULT_NIC);
        self.core.set_default("hypervisor", DEFAULT_HYPERVISOR);
    }
}
