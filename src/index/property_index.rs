//! B-Tree based secondary index over one node property

use std::collections::{BTreeMap, BTreeSet};

/// Index from a property value to the keys of the nodes carrying it.
///
/// Node keys are the entity's natural key (emp_id, demand id, name), so one
/// index structure serves every label.
#[derive(Debug, Clone, Default)]
pub struct PropertyIndex {
    index: BTreeMap<String, BTreeSet<String>>,
}

impl PropertyIndex {
    pub fn new() -> Self {
        Self {
            index: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, value: impl Into<String>, node_key: impl Into<String>) {
        self.index
            .entry(value.into())
            .or_default()
            .insert(node_key.into());
    }

    pub fn remove(&mut self, value: &str, node_key: &str) {
        if let Some(keys) = self.index.get_mut(value) {
            keys.remove(node_key);
            if keys.is_empty() {
                self.index.remove(value);
            }
        }
    }

    /// Node keys carrying exactly this value.
    pub fn get(&self, value: &str) -> Vec<String> {
        self.index
            .get(value)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of distinct indexed values.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
