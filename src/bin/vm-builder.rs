// Copyright (c) 2025 - Cowboy AI, Inc.
//! VM Builder CLI
//!
//! Reads a JSON build request from a file (first argument) or stdin, runs it
//! through the Builder/Director pipeline and prints the resulting VM record
//! as JSON.
//!
//! ```text
//! echo '{"name":"web-01","provider":"aws","region":"us-east-1","tier":"small"}' \
//!     | cargo run --bin vm-builder
//! ```
//!
//! Audit records go to NATS when `NATS_URL` is set, otherwise to the file in
//! `VM_AUDIT_LOG`, otherwise to the `audit` tracing target.

use anyhow::{Context, Result};
use cim_vm_builder::audit::{AuditSink, JsonLinesAuditSink, TracingAuditSink};
use cim_vm_builder::config::ServiceConfig;
use cim_vm_builder::domain::BuildRequest;
use cim_vm_builder::nats::NatsAuditSink;
use cim_vm_builder::repository::InMemoryVmRepository;
use cim_vm_builder::service::VmService;
use std::io::Read;
use std::sync::Arc;
use tracing::{info, warn};

fn read_request() -> Result<BuildRequest> {
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read request file {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Invalid build request")
}

async fn audit_sink(config: &ServiceConfig) -> Arc<dyn AuditSink> {
    if let Some(nats) = &config.nats {
        match NatsAuditSink::connect(nats).await {
            Ok(sink) => return Arc::new(sink),
            Err(e) => warn!("NATS unavailable, falling back: {}", e),
        }
    }
    match &config.audit_log_path {
        Some(path) => Arc::new(JsonLinesAuditSink::new(path.clone())),
        None => Arc::new(TracingAuditSink),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServiceConfig::from_env().context("Invalid configuration")?;
    let request = read_request()?;
    info!(
        "Building {} on {} ({} / {})",
        request.name, request.provider, request.tier, request.profile
    );

    let service = VmService::new(Arc::new(InMemoryVmRepository::new()), audit_sink(&config).await)
        .with_default_actor(config.default_actor.clone());

    let vm = service.build_vm(request).await.context("Build failed")?;
    println!("{}", serde_json::to_string_pretty(&vm)?);

    Ok(())
}
