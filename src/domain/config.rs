// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Configuration Values
//!
//! The builder pipeline speaks a deliberately flat vocabulary: every key maps
//! to a scalar or a list of strings, never a nested object. Downstream
//! serialization and the resource factories rely on that flatness.
//!
//! - [`ConfigValue`] - one scalar or string-list value
//! - [`ConfigMap`] - mutable builder state
//! - [`ProviderConfig`] - immutable snapshot handed to a resource factory

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single configuration value
///
/// Variant order matters for untagged deserialization: booleans and integers
/// must be tried before strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for ConfigValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Mutable attribute map owned by one builder for one construction
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// Insert `value` under `key` only if the key is absent
///
/// Returns `true` when the value was inserted.
pub fn set_default(config: &mut ConfigMap, key: &str, value: impl Into<ConfigValue>) -> bool {
    if config.contains_key(key) {
        return false;
    }
    config.insert(key.to_string(), value.into());
    true
}

/// Immutable provider configuration
///
/// An independent copy of a builder's state at the moment `build()` was
/// called. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderConfig(ConfigMap);

impl ProviderConfig {
    pub fn new(values: ConfigMap) -> Self {
        Self(values)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ConfigValue::as_int)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &ConfigMap {
        &self.0
    }

    /// Consume the snapshot, returning the underlying map
    pub fn into_inner(self) -> ConfigMap {
        self.0
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), config_value_to_json(v)))
                .collect(),
        )
    }
}

fn config_value_to_json(value: &ConfigValue) -> serde_json::Value {
    match value {
        ConfigValue::Bool(b) => serde_json::Value::Bool(*b),
        ConfigValue::Int(i) => serde_json::Value::from(*i),
        ConfigValue::Str(s) => serde_json::Value::String(s.clone()),
        ConfigValue::List(items) => serde_json::Value::Array(
            items.iter().cloned().map(serde_json::Value::String).collect(),
        ),
    }
}

impl From<ConfigMap> for ProviderConfig {
    fn from(values: ConfigMap) -> Self {
        Self(values)
    }
}
