//! Capability traits used by algorithms.

use crate::core::{NodeId, Weight};
use crate::storage::Edge;
use std::{fmt::Debug, hash::Hash};

/// Minimal read-only graph trait: what Dijkstra needs to walk a graph.
///
/// Ids need not be dense, but every `Edge::to` returned by `out_edges` must be
/// one of the ids yielded by `node_ids`, and each key must belong to exactly one
/// id. Results list nodes in `node_ids` order.
pub trait GraphBase {
    type Key: Debug + Clone + Eq + Hash;
    type Weight: Weight;

    /// Number of nodes.
    fn order(&self) -> usize;
    /// Number of stored directed edges.
    fn size(&self) -> usize;

    fn node_id(&self, key: &Self::Key) -> Option<NodeId>;
    fn node_key(&self, id: NodeId) -> &Self::Key;
    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    fn out_edges(&self, v: NodeId) -> &[Edge<Self::Weight>];
}
