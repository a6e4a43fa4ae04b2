// Copyright (c) 2025 - Cowboy AI, Inc.
//! Oracle Cloud Infrastructure compute configuration builder

use tracing::debug;

use super::{BuilderCore, VmBuilder};
use crate::domain::{CloudProvider, TierTable};

/// Tier → OCI compute shape
pub static COMPUTE_SHAPES: TierTable<&str> = TierTable::new(&[
    ("small", "VM.Standard2.1"),
    ("medium", "VM.Standard2.2"),
    ("large", "VM.Standard2.4"),
    ("xlarge", "VM.Standard2.8"),
]);

pub const DEFAULT_IMAGE_ID: &str = "ocid1.image.oc1..exampleimage";
pub const DEFAULT_COMPARTMENT_ID: &str = "ocid1.compartment.oc1..exampleuniqueID";
pub const DEFAULT_AVAILABILITY_DOMAIN: &str = "AD-1";
pub const DEFAULT_SUBNET_ID: &str = "ocid1.subnet.oc1..examplesubnet";

/// Builder for OCI compute configuration
///
/// Keys: `region`, `compute_shape`, `image_id`, `compartment_id`,
/// `availability_domain`, `subnet_id`.
#[derive(Debug, Clone, Default)]
pub struct OracleVmBuilder {
    core: BuilderCore,
}

impl OracleVmBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VmBuilder for OracleVmBuilder {
    fn provider(&self) -> CloudProvider {
        CloudProvider::Oracle
    }

    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn set_cpu_ram_by_tier(&mut self, tier: &str) {
        let compute_shape = *COMPUTE_SHAPES.lookup(tier);
        debug!(tier, compute_shape, "oracle: compute shape selected");
        self.core.set("compute_shape", compute_shape);
    }

    fn set_image_defaults(&mut self) {
        self.core.set_default("image_id", DEFAULT_IMAGE_ID);
    }

    fn set_network_defaults(&mut self) {
        self.core.set_default("compartment_id", DEFAULT_COMPARTMENT_ID);
        self.core.set_default("availability_domain", DEFAULT_AVAILABILITY_DOMAIN);
        self.core.set_default("subnet_id", DEFAULT_SUBNET_ID);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_shape_fallback() {
        let mut builder = OracleVmBuilder::new();
        builder.set_cpu_ram_by_tier("unknown-tier");
        assert_eq!(builder.build().get_str("compute_shape"), Some("VM.Standard2.1"));
    }

    #[test]
    fn test_network_defaults() {
        let mut builder = OracleVmBuilder::new();
        builder.set_network_defaults();

        let config = builder.build();
        assert_eq!(config.get_str("compartment_id"), Some(DEFAULT_COMPARTMENT_ID));
        assert_eq!(config.get_str("availability_domain"), Some("AD-1"));
        assert_eq!(config.get_str("subnet_id"), Some(DEFAULT_SUBNET_ID));
    }
}
