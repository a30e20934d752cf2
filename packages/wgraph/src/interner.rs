//! Node interner mapping user-provided labels to dense `NodeId`s.

use crate::core::NodeId;
use indexmap::{Equivalent, IndexSet};
use std::hash::Hash;

/// IndexSet-backed interner. Keys are deduplicated and keep the order in which
/// they were first seen, so `NodeId(i)` is the i-th distinct key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeInterner<K>
where
    K: Eq + Hash,
{
    keys: IndexSet<K>,
}

impl<K> NodeInterner<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            keys: IndexSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: IndexSet::with_capacity(capacity),
        }
    }

    /// Intern `key`. If it already exists, returns the existing NodeId.
    pub fn intern(&mut self, key: K) -> NodeId {
        let (index, _) = self.keys.insert_full(key);
        NodeId(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key for an id issued by this interner.
    pub fn key(&self, id: NodeId) -> &K {
        &self.keys[id.0]
    }

    pub fn get_id<Q>(&self, key: &Q) -> Option<NodeId>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.keys.get_index_of(key).map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &K)> {
        self.keys.iter().enumerate().map(|(i, k)| (NodeId(i), k))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}

impl<K> Default for NodeInterner<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
