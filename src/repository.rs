// Copyright (c) 2025 - Cowboy AI, Inc.
//! VM Repository
//!
//! Key/value store of VM records keyed by resource id. The trait is async so
//! persistent backends can slot in; [`InMemoryVmRepository`] is the default.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::{CloudProvider, ProviderConfig};
use crate::errors::{ProvisioningError, ProvisioningResult};
use crate::factory::{VirtualMachine, VmStatus};

/// Stored VM record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmDto {
    pub id: String,
    pub name: String,
    pub provider: CloudProvider,
    pub status: VmStatus,
    pub specs: ProviderConfig,
}

impl From<VirtualMachine> for VmDto {
    fn from(vm: VirtualMachine) -> Self {
        let specs = vm.get_specs();
        Self {
            id: vm.resource_id,
            name: vm.name,
            provider: vm.provider,
            status: vm.status,
            specs,
        }
    }
}

/// Persistence port for VM records
#[async_trait]
pub trait VmRepository: Send + Sync {
    /// Insert or replace a record
    async fn save(&self, vm: VmDto) -> ProvisioningResult<()>;

    /// Fetch a record, failing with `NotFound` if absent
    async fn get(&self, id: &str) -> ProvisioningResult<VmDto>;

    /// Remove a record, failing with `NotFound` if absent
    async fn delete(&self, id: &str) -> ProvisioningResult<()>;

    /// All records ordered by id
    async fn list(&self) -> ProvisioningResult<Vec<VmDto>>;
}

/// In-memory repository guarded by an async read/write lock
#[derive(Debug, Default)]
pub struct InMemoryVmRepository {
    records: RwLock<BTreeMap<String, VmDto>>,
}

impl InMemoryVmRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VmRepository for InMemoryVmRepository {
    async fn save(&self, vm: VmDto) -> ProvisioningResult<()> {
        self.records.write().await.insert(vm.id.clone(), vm);
        Ok(())
    }

    async fn get(&self, id: &str) -> ProvisioningResult<VmDto> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ProvisioningError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> ProvisioningResult<()> {
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ProvisioningError::NotFound(id.to_string()))
    }

    async fn list(&self) -> ProvisioningResult<Vec<VmDto>> {
        Ok(self.records.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    fn record(id: &str) -> VmDto {
        VmDto {
            id: id.to_string(),
            name: format!("vm-{}", id),
            provider: CloudProvider::Gcp,
            status: VmStatus::Running,
            specs: ProviderConfig::default(),
        }
    }

    #[test]
    fn test_save_get_delete() {
        let repo = InMemoryVmRepository::new();
        block_on(async {
            repo.save(record("b")).await.unwrap();
            repo.save(record("a")).await.unwrap();

            assert_eq!(repo.get("a").await.unwrap().name, "vm-a");
            let ids: Vec<_> = repo.list().await.unwrap().into_iter().map(|vm| vm.id).collect();
            assert_eq!(ids, vec!["a", "b"]);

            repo.delete("a").await.unwrap();
            assert!(matches!(repo.get("a").await, Err(ProvisioningError::NotFound(_))));
            assert!(matches!(repo.delete("a").await, Err(ProvisioningError::NotFound(_))));
        });
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repo = InMemoryVmRepository::new();
        repo.save(record("a")).await.unwrap();

        let mut updated = record("a");
        updated.status = VmStatus::Stopped;
        repo.save(updated).await.unwrap();

        assert_eq!(repo.get("a").await.unwrap().status, VmStatus::Stopped);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
