use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata wrapper for extensible key-value storage
///
/// Stores arbitrary payload data as JSON values, allowing formats to carry
/// extras the canonical schema does not name. Backed by a `BTreeMap` so
/// iteration and serialization are deterministic, and serialized
/// transparently so the bag round-trips as a plain JSON object.
///
/// Equality is key-wise and ignores the order keys appeared in the source
/// text. A key mapped to JSON `null` is a present entry, distinct from the
/// key being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Metadata {
    data: BTreeMap<String, serde_json::Value>,
}

impl Metadata {
    /// Create a new empty Metadata instance
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Set a value by key
    pub fn set(&mut self, key: String, value: serde_json::Value) {
        self.data.insert(key, value);
    }

    /// Remove a value by key
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get all keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    /// Iterate entries in sorted key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.data.iter()
    }

    /// Get the number of metadata entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if metadata is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for Metadata {
    fn from(data: BTreeMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

impl From<Metadata> for BTreeMap<String, serde_json::Value> {
    fn from(metadata: Metadata) -> Self {
        metadata.data
    }
}
