// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tier and Profile Rules
//!
//! A tier is a provider-independent size bucket; a profile is an intended
//! machine family. Every tier-dependent value in the crate comes from a
//! [`TierTable`]: an ordered list of `(tier, value)` entries whose first entry
//! doubles as the default for tiers the table does not know.
//!
//! # Default-on-miss
//!
//! ```rust
//! use cim_vm_builder::domain::TierComputeShape;
//!
//! assert_eq!(TierComputeShape::for_tier("large"), TierComputeShape::new(8, 16));
//! // Unknown tiers resolve to the first (smallest) entry
//! assert_eq!(TierComputeShape::for_tier("huge"), TierComputeShape::new(2, 4));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Tier parsing error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown tier: {0}")]
pub struct UnknownTier(pub String);

/// Abstract VM size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmTier {
    Small,
    Medium,
    Large,
    Xlarge,
}

impl VmTier {
    /// Get the canonical string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Xlarge => "xlarge",
        }
    }
}

impl fmt::Display for VmTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VmTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "xlarge" => Ok(Self::Xlarge),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

impl AsRef<str> for VmTier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Intended machine family
///
/// Carried through the pipeline but does not currently change sizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmProfile {
    /// General purpose
    #[default]
    General,
    /// Memory optimized
    Memory,
    /// Compute optimized
    Compute,
}

impl VmProfile {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Memory => "memory",
            Self::Compute => "compute",
        }
    }
}

impl fmt::Display for VmProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered tier lookup table with fallback to the first entry
///
/// # Invariants
/// - At least one entry (enforced at construction, including in const context)
/// - The first entry is the smallest tier and is returned for unknown tiers
#[derive(Debug)]
pub struct TierTable<T: 'static> {
    entries: &'static [(&'static str, T)],
}

impl<T: 'static> TierTable<T> {
    /// Create a table from static entries
    ///
    /// # Panics
    /// Panics (at compile time when used in a `const`/`static`) if `entries`
    /// is empty.
    pub const fn new(entries: &'static [(&'static str, T)]) -> Self {
        assert!(!entries.is_empty(), "tier table needs at least one entry");
        Self { entries }
    }

    /// Look up a tier, falling back to the first entry on a miss
    pub fn lookup(&self, tier: &str) -> &T {
        match self.get(tier) {
            Some(value) => value,
            None => {
                debug!(tier, fallback = self.entries[0].0, "tier not in table, using default");
                &self.entries[0].1
            }
        }
    }

    /// Exact lookup without fallback
    pub fn get(&self, tier: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(name, _)| *name == tier)
            .map(|(_, value)| value)
    }

    /// Tier names in table order
    pub fn tiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

/// Descriptive compute shape for a tier
///
/// Attached to provider configurations as metadata only; the provider-native
/// capacity identifier is what a provider actually bills for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierComputeShape {
    pub vcpus: u32,
    pub memory_gb: u32,
}

const COMPUTE_SHAPE_ENTRIES: &[(&str, TierComputeShape)] = &[
    ("small", TierComputeShape::new(2, 4)),
    ("medium", TierComputeShape::new(4, 8)),
    ("large", TierComputeShape::new(8, 16)),
    ("xlarge", TierComputeShape::new(16, 32)),
];

static COMPUTE_SHAPES: TierTable<TierComputeShape> = TierTable::new(COMPUTE_SHAPE_ENTRIES);

impl TierComputeShape {
    pub const fn new(vcpus: u32, memory_gb: u32) -> Self {
        Self { vcpus, memory_gb }
    }

    /// Compute shape for a tier name (unknown tiers resolve to `small`)
    pub fn for_tier(tier: &str) -> Self {
        *COMPUTE_SHAPES.lookup(tier)
    }
}
