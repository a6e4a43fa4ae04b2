// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for VM provisioning operations
//!
//! The Builder/Director core never fails. Everything here belongs to the
//! collaborators around it: provider selection, the resource factory, the
//! repository and the NATS-backed audit sink.

use thiserror::Error;

/// Errors that can occur while provisioning a virtual machine
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// Provider identifier outside the supported set, or not registered
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Resource factory rejected a configuration missing a required key
    #[error("Missing parameter '{key}' for provider {provider}")]
    MissingParameter { provider: String, key: String },

    /// VM record not found in the repository
    #[error("VM not found: {0}")]
    NotFound(String),

    /// Repository failure
    #[error("Repository error: {0}")]
    Repository(String),

    /// NATS connection error
    #[error("NATS connection error: {0}")]
    NatsConnection(String),

    /// NATS publish error
    #[error("NATS publish error: {0}")]
    NatsPublish(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for provisioning operations
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

impl From<async_nats::Error> for ProvisioningError {
    fn from(err: async_nats::Error) -> Self {
        ProvisioningError::NatsConnection(err.to_string())
    }
}

impl From<serde_json::Error> for ProvisioningError {
    fn from(err: serde_json::Error) -> Self {
        ProvisioningError::Serialization(err.to_string())
    }
}
