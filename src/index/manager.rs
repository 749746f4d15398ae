//! Manager for property indices
//!
//! Handles creation and maintenance of secondary indexes keyed by
//! (label, property). Index writes for undeclared indexes are silent no-ops,
//! so the store can publish every property change and only the declared
//! schema decides what gets indexed.

use super::property_index::PropertyIndex;
use crate::graph::NodeLabel;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Key identifying a property index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyIndexKey {
    pub label: NodeLabel,
    pub property: String,
}

/// Manager for all property indices.
#[derive(Debug, Default)]
pub struct IndexManager {
    indices: RwLock<HashMap<PropertyIndexKey, Arc<RwLock<PropertyIndex>>>>,
}

impl IndexManager {
    pub fn new() -> Self {
        Self {
            indices: RwLock::new(HashMap::new()),
        }
    }

    /// Declare an index for a label and property. Re-declaring an existing
    /// index keeps its contents.
    pub fn create_index(&self, label: NodeLabel, property: impl Into<String>) {
        let key = PropertyIndexKey {
            label,
            property: property.into(),
        };
        let mut indices = self.indices.write().unwrap();
        indices
            .entry(key)
            .or_insert_with(|| Arc::new(RwLock::new(PropertyIndex::new())));
    }

    /// Drop an index.
    pub fn drop_index(&self, label: NodeLabel, property: &str) {
        let key = PropertyIndexKey {
            label,
            property: property.to_string(),
        };
        let mut indices = self.indices.write().unwrap();
        indices.remove(&key);
    }

    /// Record a property value for a node. No-op if the index is undeclared.
    pub fn index_insert(&self, label: NodeLabel, property: &str, value: &str, node_key: &str) {
        if let Some(index) = self.lookup(label, property) {
            index.write().unwrap().insert(value, node_key);
        }
    }

    /// Remove a property value for a node. No-op if the index is undeclared.
    pub fn index_remove(&self, label: NodeLabel, property: &str, value: &str, node_key: &str) {
        if let Some(index) = self.lookup(label, property) {
            index.write().unwrap().remove(value, node_key);
        }
    }

    /// Node keys carrying this value, or `None` if the index is undeclared.
    pub fn index_get(&self, label: NodeLabel, property: &str, value: &str) -> Option<Vec<String>> {
        self.lookup(label, property)
            .map(|index| index.read().unwrap().get(value))
    }

    pub fn has_index(&self, label: NodeLabel, property: &str) -> bool {
        self.lookup(label, property).is_some()
    }

    /// All declared indexes.
    pub fn list_indices(&self) -> Vec<PropertyIndexKey> {
        self.indices.read().unwrap().keys().cloned().collect()
    }

    fn lookup(&self, label: NodeLabel, property: &str) -> Option<Arc<RwLock<PropertyIndex>>> {
        let key = PropertyIndexKey {
            label,
            property: property.to_string(),
        };
        self.indices.read().unwrap().get(&key).cloned()
    }
}
