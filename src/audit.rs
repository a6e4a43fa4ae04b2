// Copyright (c) 2025 - Cowboy AI, Inc.
//! Audit Sink
//!
//! Every service operation emits one [`AuditRecord`], whether it succeeded or
//! not. Sinks are fire-and-forget observers: [`AuditSink::record`] returns
//! nothing, and a sink that fails to persist a record logs the failure and
//! moves on. Construction outcomes never depend on auditing.
//!
//! Records never carry full request parameters; callers put only a small
//! summary (tier, region, error message) in `details`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::CloudProvider;

/// One audited operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: String,
    pub vm_id: String,
    pub provider: CloudProvider,
    pub success: bool,
    pub details: Option<serde_json::Value>,
}

impl AuditRecord {
    pub fn new(
        actor: impl Into<String>,
        action: impl Into<String>,
        vm_id: impl Into<String>,
        provider: CloudProvider,
        success: bool,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            actor: actor.into(),
            action: action.into(),
            vm_id: vm_id.into(),
            provider,
            success,
            details,
        }
    }
}

/// Observer receiving audit records
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Record an operation; must not fail or block the caller on errors
    async fn record(&self, record: AuditRecord);
}

/// Emits records as structured `tracing` events on the `audit` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, record: AuditRecord) {
        let details = record
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            target: "audit",
            actor = %record.actor,
            action = %record.action,
            vm_id = %record.vm_id,
            provider = %record.provider,
            success = record.success,
            details = %details,
            "audit"
        );
    }
}

/// Appends one JSON object per line to a file
#[derive(Debug)]
pub struct JsonLinesAuditSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append(&self, line: &[u8]) -> std::io::Result<()> {
        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line).await?;
        file.flush().await
    }
}

#[async_trait]
impl AuditSink for JsonLinesAuditSink {
    async fn record(&self, record: AuditRecord) {
        let mut line = match serde_json::to_vec(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to serialize audit record: {}", e);
                return;
            }
        };
        line.push(b'\n');

        if let Err(e) = self.append(&line).await {
            warn!("Failed to write audit record to {}: {}", self.path.display(), e);
        }
    }
}

/// Keeps records in memory; useful for inspection and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryAuditSink {
    records: Arc<Mutex<Vec<AuditRecord>>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded entries, oldest first
    pub async fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn record(&self, record: AuditRecord) {
        self.records.lock().await.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_json_lines_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("audit.log");
        let sink = JsonLinesAuditSink::new(&path);

        sink.record(AuditRecord::new(
            "alice",
            "create",
            "i-1",
            CloudProvider::Aws,
            true,
            Some(json!({ "name": "web-01" })),
        ))
        .await;
        sink.record(AuditRecord::new("system", "delete", "i-1", CloudProvider::Aws, true, None))
            .await;

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<AuditRecord> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].actor, "alice");
        assert_eq!(lines[0].details, Some(json!({ "name": "web-01" })));
        assert_eq!(lines[1].action, "delete");
        assert_eq!(lines[1].details, None);
    }

    #[tokio::test]
    async fn test_json_lines_sink_swallows_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for append
        let sink = JsonLinesAuditSink::new(dir.path());
        sink.record(AuditRecord::new("system", "create", "", CloudProvider::Gcp, false, None))
            .await;
    }

    #[tokio::test]
    async fn test_memory_sink_keeps_order() {
        let sink = MemoryAuditSink::new();
        sink.record(AuditRecord::new("a", "start", "vm-1", CloudProvider::OnPremise, true, None))
            .await;
        sink.record(AuditRecord::new("b", "stop", "vm-1", CloudProvider::OnPremise, true, None))
            .await;

        let actions: Vec<_> = sink.records().await.into_iter().map(|r| r.action).collect();
        assert_eq!(actions, vec!["start", "stop"]);
    }
}
