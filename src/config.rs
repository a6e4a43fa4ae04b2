// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service configuration
//!
//! Loaded from environment variables with defaults for everything:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `VM_DEFAULT_ACTOR` | Actor recorded when a request names none | `system` |
//! | `VM_AUDIT_LOG` | JSON-lines audit file | unset (no file sink) |
//! | `NATS_URL` | NATS servers, comma separated | unset (no NATS sink) |
//! | `NATS_AUDIT_SUBJECT` | Subject prefix for audit records | `infrastructure.vm.audit` |

use std::path::PathBuf;

use crate::errors::{ProvisioningError, ProvisioningResult};
use crate::nats::NatsConfig;

/// Configuration for [`VmService`](crate::service::VmService) and its sinks
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_actor: String,
    pub audit_log_path: Option<PathBuf>,
    pub nats: Option<NatsConfig>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_actor: "system".to_string(),
            audit_log_path: None,
            nats: None,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ProvisioningResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ProvisioningResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_actor = match lookup("VM_DEFAULT_ACTOR") {
            Some(actor) if actor.trim().is_empty() => {
                return Err(ProvisioningError::Configuration(
                    "VM_DEFAULT_ACTOR must not be empty".to_string(),
                ))
            }
            Some(actor) => actor,
            None => defaults.default_actor,
        };

        let audit_log_path = lookup("VM_AUDIT_LOG")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let nats = match lookup("NATS_URL") {
            Some(urls) => {
                let servers: Vec<String> = urls
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                if servers.is_empty() {
                    return Err(ProvisioningError::Configuration(
                        "NATS_URL contains no server addresses".to_string(),
                    ));
                }
                let mut nats = NatsConfig {
                    servers,
                    ..NatsConfig::default()
                };
                if let Some(subject) = lookup("NATS_AUDIT_SUBJECT") {
                    nats.audit_subject = subject;
                }
                Some(nats)
            }
            None => None,
        };

        Ok(Self {
            default_actor,
            audit_log_path,
            nats,
        })
    }
}
