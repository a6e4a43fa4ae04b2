// Copyright (c) 2025 - Cowboy AI, Inc.
//! GCP Compute Engine configuration builder

use tracing::debug;

use super::{BuilderCore, VmBuilder};
use crate::domain::{CloudProvider, TierTable};

/// Tier → Compute Engine machine type
pub static MACHINE_TYPES: TierTable<&str> = TierTable::new(&[
    ("small", "e2-micro"),
    ("medium", "e2-small"),
    ("large", "e2-medium"),
    ("xlarge", "e2-standard-2"),
]);

/// GCP boots from a disk image rather than a machine image
pub const DEFAULT_BASE_DISK: &str = "ubuntu-2004-lts";
pub const DEFAULT_ZONE: &str = "us-central1-a";
pub const DEFAULT_PROJECT: &str = "demo-project";

/// Builder for GCP Compute Engine configuration
///
/// Keys: `region`, `machine_type`, `base_disk`, `zone`, `project`.
#[derive(Debug, Clone, Default)]
pub struct GcpVmBuilder {
    core: BuilderCore,
}

impl GcpVmBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VmBuilder for GcpVmBuilder {
    fn provider(&self) -> CloudProvider {
        CloudProvider::Gcp
    }

    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn set_cpu_ram_by_tier(&mut self, tier: &str) {
        let machine_type = *MACHINE_TYPES.lookup(tier);
        debug!(tier, machine_type, "gcp: machine type selected");
        self.core.set("machine_type", machine_type);
    }

    fn set_image_defaults(&mut self) {
        self.core.set_default("base_disk", DEFAULT_BASE_DISK);
    }

    fn set_network_defaults(&mut self) {
        self.core.set_default("zone", DEFAULT_ZONE);
        self.core.set_default("project", DEFAULT_PROJECT);
    }
}
