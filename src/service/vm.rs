// Copyright (c) 2025 - Cowboy AI, Inc.
//! VM Service
//!
//! Coordinates one provisioning operation end to end:
//!
//! ```text
//! BuildRequest → BuilderRegistry → Director → ResourceFactory
//!                                                  ↓
//!                                            VmRepository
//!                                                  ↓
//!                                              AuditSink
//! ```
//!
//! Each attempt is audited exactly once, success or failure. Lookups of
//! existing records happen before the audited section, so a missing id is
//! returned as `NotFound` without an audit record.

use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::audit::{AuditRecord, AuditSink};
use crate::builder::BuilderRegistry;
use crate::director::VmTierDirector;
use crate::domain::{
    BuildRequest, CloudProvider, CreateVmRequest, ProviderConfig, UpdateVmRequest, VmAction,
    VmActionRequest,
};
use crate::errors::ProvisioningResult;
use crate::factory::{create_cloud_factory, VmStatus};
use crate::repository::{VmDto, VmRepository};

/// Application service for VM provisioning
pub struct VmService {
    repo: Arc<dyn VmRepository>,
    audit: Arc<dyn AuditSink>,
    registry: BuilderRegistry,
    director: VmTierDirector,
    default_actor: String,
}

impl VmService {
    /// Service with every provider registered and `system` as default actor
    pub fn new(repo: Arc<dyn VmRepository>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            repo,
            audit,
            registry: BuilderRegistry::with_defaults(),
            director: VmTierDirector::new(),
            default_actor: "system".to_string(),
        }
    }

    /// Replace the provider selector
    pub fn with_registry(mut self, registry: BuilderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Actor recorded when a request names none
    pub fn with_default_actor(mut self, actor: impl Into<String>) -> Self {
        self.default_actor = actor.into();
        self
    }

    /// Build a VM through the Builder/Director pipeline and store it
    pub async fn build_vm(&self, request: BuildRequest) -> ProvisioningResult<VmDto> {
        let result = self.build_and_store(&request).await;

        match &result {
            Ok(vm) => {
                info!(vm_id = %vm.id, provider = %vm.provider, tier = %request.tier, "VM built");
                self.audit(
                    &self.default_actor,
                    "create(builder)",
                    &vm.id,
                    request.provider,
                    true,
                    Some(json!({ "tier": request.tier, "region": request.region })),
                )
                .await;
            }
            Err(e) => {
                warn!(provider = %request.provider, "VM build failed: {}", e);
                self.audit(
                    &self.default_actor,
                    "create(builder)",
                    "",
                    request.provider,
                    false,
                    Some(json!({ "error": e.to_string() })),
                )
                .await;
            }
        }

        result
    }

    async fn build_and_store(&self, request: &BuildRequest) -> ProvisioningResult<VmDto> {
        let mut builder = self.registry.select(request.provider)?;
        let config = self.director.construct_request(builder.as_mut(), request);

        let factory = create_cloud_factory(request.provider);
        let vm = VmDto::from(factory.create_virtual_machine(&request.name, config)?);
        self.repo.save(vm.clone()).await?;
        Ok(vm)
    }

    /// Create a VM directly from provider parameters
    pub async fn create_vm(&self, request: CreateVmRequest) -> ProvisioningResult<VmDto> {
        let actor = request
            .requested_by
            .clone()
            .unwrap_or_else(|| self.default_actor.clone());

        let result = self.create_and_store(&request).await;

        match &result {
            Ok(vm) => {
                info!(vm_id = %vm.id, provider = %vm.provider, "VM created");
                self.audit(&actor, "create", &vm.id, vm.provider, true, Some(json!({ "name": vm.name })))
                    .await;
            }
            Err(e) => {
                warn!(provider = %request.provider, "VM creation failed: {}", e);
                self.audit(
                    &actor,
                    "create",
                    "",
                    request.provider,
                    false,
                    Some(json!({ "error": e.to_string() })),
                )
                .await;
            }
        }

        result
    }

    async fn create_and_store(&self, request: &CreateVmRequest) -> ProvisioningResult<VmDto> {
        let factory = create_cloud_factory(request.provider);
        let config = ProviderConfig::new(request.params.clone());
        let vm = VmDto::from(factory.create_virtual_machine(&request.name, config)?);
        self.repo.save(vm.clone()).await?;
        Ok(vm)
    }

    /// Apply a partial update to a stored VM
    pub async fn update_vm(&self, id: &str, changes: UpdateVmRequest) -> ProvisioningResult<VmDto> {
        let mut vm = self.repo.get(id).await?;

        if let Some(name) = &changes.name {
            vm.name = name.clone();
        }
        let mut specs = vm.specs.into_inner();
        specs.extend(changes.spec_changes());
        vm.specs = ProviderConfig::new(specs);

        let result = self.repo.save(vm.clone()).await;
        let details = serde_json::to_value(&changes).ok();
        self.audit_result(&self.default_actor, "update", id, vm.provider, &result, details)
            .await;
        result.map(|_| vm)
    }

    /// Remove a VM record
    pub async fn delete_vm(&self, id: &str) -> ProvisioningResult<()> {
        let vm = self.repo.get(id).await?;
        let result = self.repo.delete(id).await;
        self.audit_result(&self.default_actor, "delete", id, vm.provider, &result, None)
            .await;
        result
    }

    /// Apply a lifecycle action (start, stop, restart)
    pub async fn apply_action(
        &self,
        id: &str,
        request: VmActionRequest,
    ) -> ProvisioningResult<VmDto> {
        let mut vm = self.repo.get(id).await?;
        let actor = request
            .requested_by
            .clone()
            .unwrap_or_else(|| self.default_actor.clone());

        vm.status = match request.action {
            VmAction::Start | VmAction::Restart => VmStatus::Running,
            VmAction::Stop => VmStatus::Stopped,
        };

        let result = self.repo.save(vm.clone()).await;
        self.audit_result(&actor, request.action.as_str(), id, vm.provider, &result, None)
            .await;
        result.map(|_| vm)
    }

    pub async fn get_vm(&self, id: &str) -> ProvisioningResult<VmDto> {
        self.repo.get(id).await
    }

    pub async fn list_vms(&self) -> ProvisioningResult<Vec<VmDto>> {
        self.repo.list().await
    }

    async fn audit_result<T>(
        &self,
        actor: &str,
        action: &str,
        vm_id: &str,
        provider: CloudProvider,
        result: &ProvisioningResult<T>,
        details: Option<serde_json::Value>,
    ) {
        match result {
            Ok(_) => self.audit(actor, action, vm_id, provider, true, details).await,
            Err(e) => {
                self.audit(
                    actor,
                    action,
                    vm_id,
                    provider,
                    false,
                    Some(json!({ "error": e.to_string() })),
                )
                .await
            }
        }
    }

    async fn audit(
        &self,
        actor: &str,
        action: &str,
        vm_id: &str,
        provider: CloudProvider,
        success: bool,
        details: Option<serde_json::Value>,
    ) {
        self.audit
            .record(AuditRecord::new(actor, action, vm_id, provider, success, details))
            .await;
    }
}
