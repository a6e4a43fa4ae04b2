// Copyright (c) 2025 - Cowboy AI, Inc.
//! AWS EC2 configuration builder

use tracing::debug;

use super::{BuilderCore, VmBuilder};
use crate::domain::{CloudProvider, TierTable};

/// Tier → EC2 instance type
pub static INSTANCE_TYPES: TierTable<&str> = TierTable::new(&[
    ("small", "t3.micro"),
    ("medium", "t3.small"),
    ("large", "t3.medium"),
    ("xlarge", "m5.large"),
]);

pub const DEFAULT_AMI: &str = "ami-0abcdef1234567890";
pub const DEFAULT_VPC_ID: &str = "vpc-12345678";

/// Builder for AWS EC2 configuration
///
/// Keys: `region`, `instance_type`, `ami`, `vpc_id`.
#[derive(Debug, Clone, Default)]
pub struct AwsVmBuilder {
    core: BuilderCore,
}

impl AwsVmBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VmBuilder for AwsVmBuilder {
    fn provider(&self) -> CloudProvider {
        CloudProvider::Aws
    }

    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn set_cpu_ram_by_tier(&mut self, tier: &str) {
        let instance_type = *INSTANCE_TYPES.lookup(tier);
        debug!(tier, instance_type, "aws: instance type selected");
        self.core.set("instance_type", instance_type);
    }

    fn set_image_defaults(&mut self) {
        self.core.set_default("ami", DEFAULT_AMI);
    }

    fn set_network_defaults(&mut self) {
        self.core.set_default("vpc_id", DEFAULT_VPC_ID);
    }
}
