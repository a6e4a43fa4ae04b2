// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS audit transport
//!
//! Publishes audit records on `<prefix>.<action>` subjects and lets
//! observers subscribe to them. Publishing failures are logged, never
//! returned to the construction pipeline.

use async_nats::{Client, ConnectOptions};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::audit::{AuditRecord, AuditSink};
use crate::errors::{ProvisioningError, ProvisioningResult};

/// Configuration for NATS connection
#[derive(Debug, Clone)]
pub struct NatsConfig {
    /// NATS server URLs
    pub servers: Vec<String>,
    /// Client name
    pub name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
    /// Subject prefix for audit records
    pub audit_subject: String,
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            name: "cim-vm-builder".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(5),
            audit_subject: "infrastructure.vm.audit".to_string(),
        }
    }
}

/// Subject for an audit action, e.g. `infrastructure.vm.audit.create_builder`
///
/// Characters NATS treats as separators or wildcards are replaced so an
/// action always maps to a single subject token.
pub fn audit_subject(prefix: &str, action: &str) -> String {
    let token: String = action
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect::<String>()
        .trim_matches('_')
        .to_string();
    format!("{}.{}", prefix, token)
}

/// NATS client wrapper
#[derive(Clone)]
pub struct NatsClient {
    client: Client,
}

impl NatsClient {
    /// Connect with the given configuration
    pub async fn new(config: &NatsConfig) -> ProvisioningResult<Self> {
        let connect_options = ConnectOptions::new()
            .name(&config.name)
            .connection_timeout(config.connect_timeout)
            .request_timeout(Some(config.request_timeout));

        let client = async_nats::connect_with_options(config.servers.join(","), connect_options)
            .await
            .map_err(|e| ProvisioningError::NatsConnection(e.to_string()))?;

        info!("Connected to NATS at {:?}", config.servers);

        Ok(Self { client })
    }

    /// Publish a JSON message to a subject
    pub async fn publish<T>(&self, subject: &str, message: &T) -> ProvisioningResult<()>
    where
        T: Serialize,
    {
        let payload = serde_json::to_vec(message)?;

        self.client
            .publish(subject.to_string(), payload.into())
            .await
            .map_err(|e| ProvisioningError::NatsPublish(e.to_string()))?;

        debug!("Published message to subject: {}", subject);
        Ok(())
    }

    /// Stream of audit records published under `prefix`
    ///
    /// Messages that do not decode as audit records are skipped.
    pub async fn audit_stream(
        &self,
        prefix: &str,
    ) -> ProvisioningResult<impl Stream<Item = AuditRecord>> {
        let subject = format!("{}.>", prefix);
        let subscriber = self
            .client
            .subscribe(subject.clone())
            .await
            .map_err(|e| ProvisioningError::NatsConnection(e.to_string()))?;

        info!("Subscribed to audit subject: {}", subject);

        Ok(subscriber.filter_map(|msg| async move {
            match serde_json::from_slice::<AuditRecord>(&msg.payload) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed audit message on {}: {}", msg.subject, e);
                    None
                }
            }
        }))
    }

    /// Get the underlying NATS client for advanced operations
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Audit sink publishing each record to NATS
#[derive(Clone)]
pub struct NatsAuditSink {
    client: NatsClient,
    prefix: String,
}

impl NatsAuditSink {
    pub fn new(client: NatsClient, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into(),
        }
    }

    /// Connect and build a sink from configuration
    pub async fn connect(config: &NatsConfig) -> ProvisioningResult<Self> {
        let client = NatsClient::new(config).await?;
        Ok(Self::new(client, config.audit_subject.clone()))
    }
}

#[async_trait]
impl AuditSink for NatsAuditSink {
    async fn record(&self, record: AuditRecord) {
        let subject = audit_subject(&self.prefix, &record.action);
        if let Err(e) = self.client.publish(&subject, &record).await {
            warn!("Failed to publish audit record to {}: {}", subject, e);
        }
    }
}
