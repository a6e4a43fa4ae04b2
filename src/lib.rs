//! Provider-specific virtual machine configuration for the Composable Information Machine
//!
//! A Builder/Director pipeline derives a flat, provider-native configuration
//! from an abstract request (name, region, tier, profile, optional
//! attributes) for AWS, Azure, GCP, on-premises and Oracle. An abstract
//! resource factory, a repository, audit sinks and a service layer surround
//! the pipeline.

pub mod audit;
pub mod builder;
pub mod config;
pub mod director;
pub mod domain;
pub mod errors;
pub mod factory;
pub mod nats;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use builder::{BuilderRegistry, VmBuilder};
pub use director::{Director, VmTierDirector};
pub use domain::{BuildOptions, BuildRequest, CloudProvider, ProviderConfig, VmProfile, VmTier};
pub use errors::{ProvisioningError, ProvisioningResult};
pub use service::VmService;
