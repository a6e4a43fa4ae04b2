// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for VM Provisioning
//!
//! The application service that wires the Builder/Director core to its
//! collaborators.
//!
//! ```text
//! Client Request
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Provider Selector → Director → Builder → ProviderConfig
//!     ↓
//! Resource Factory → Repository
//!     ↓
//! Audit Sink (tracing, JSON lines, NATS)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cim_vm_builder::audit::TracingAuditSink;
//! use cim_vm_builder::domain::{BuildRequest, CloudProvider, VmTier};
//! use cim_vm_builder::repository::InMemoryVmRepository;
//! use cim_vm_builder::service::VmService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = VmService::new(
//!         Arc::new(InMemoryVmRepository::new()),
//!         Arc::new(TracingAuditSink),
//!     );
//!
//!     let request = BuildRequest::new("web-01", CloudProvider::Aws, "us-east-1", VmTier::Small);
//!     let vm = service.build_vm(request).await?;
//!     println!("{} {}", vm.id, vm.status);
//!
//!     Ok(())
//! }
//! ```

pub mod vm;

pub use vm::VmService;
