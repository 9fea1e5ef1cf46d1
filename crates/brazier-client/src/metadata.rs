use std::collections::HashMap;

use parking_lot::RwLock;

/// A single typed value held in a bot's metadata store
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl MetadataValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetadataValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetadataValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            MetadataValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for MetadataValue {
    fn from(v: bool) -> Self {
        MetadataValue::Bool(v)
    }
}

impl From<i64> for MetadataValue {
    fn from(v: i64) -> Self {
        MetadataValue::Int(v)
    }
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        MetadataValue::Float(v)
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        MetadataValue::Text(v.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        MetadataValue::Text(v)
    }
}

/// Mutable key-value state for one bot session
///
/// The store is shared between host game logic (which writes tags, flags and
/// counters as the session progresses) and any number of read-through views.
/// Reads return the current value at call time; nothing is buffered.
pub struct MetadataStore {
    entries: RwLock<HashMap<String, MetadataValue>>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get the current value for a key, or None if not present
    pub fn get(&self, key: &str) -> Option<MetadataValue> {
        self.entries.read().get(key).cloned()
    }

    /// Set a value, replacing any previous value for the key
    pub fn set(&self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.entries.write().insert(key.into(), value.into());
    }

    /// Remove a key, returning the value it held
    pub fn remove(&self, key: &str) -> Option<MetadataValue> {
        self.entries.write().remove(key)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// All keys currently in the store
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Remove all entries
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for MetadataStore {
    fn default() -> Self {
        Self::new()
    }
}
