//! WeightedGraph: labelled nodes with ordered out-edge lists. Parallel edges and
//! self-loops are kept; an undirected edge is stored as two directed ones.

use crate::core::{NodeId, Weight};
use crate::interner::NodeInterner;
use crate::traits::GraphBase;
use indexmap::Equivalent;
use std::fmt::Debug;
use std::hash::Hash;

/// Out-edge record stored in the source node's list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<W> {
    pub to: NodeId,
    pub weight: W,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedGraph<K = String, W = u64>
where
    K: Debug + Clone + Eq + Hash,
    W: Weight,
{
    nodes: NodeInterner<K>,
    out_adj: Vec<Vec<Edge<W>>>,
    size: usize,
}

impl<K, W> WeightedGraph<K, W>
where
    K: Debug + Clone + Eq + Hash,
    W: Weight,
{
    pub fn new() -> Self {
        Self::with_node_capacity(0)
    }

    pub fn with_node_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeInterner::with_capacity(capacity),
            out_adj: Vec::with_capacity(capacity),
            size: 0,
        }
    }

    /// Build a graph from `(source, target, weight)` triples.
    pub fn from_edges<I, S>(edges: I, bidirectional: bool) -> Self
    where
        I: IntoIterator<Item = (S, S, W)>,
        S: Into<K>,
    {
        let mut graph = Self::new();
        for (source, target, weight) in edges {
            graph.add_edge(source.into(), target.into(), weight, bidirectional);
        }
        graph
    }

    /// Register a node without edges. Existing keys keep their id.
    pub fn add_node(&mut self, key: K) -> NodeId {
        let id = self.nodes.intern(key);
        if id.0 == self.out_adj.len() {
            self.out_adj.push(Vec::new());
        }
        id
    }

    /// Append `target` to `source`'s neighbor list, and the mirror edge when
    /// `bidirectional` is set. Weights are expected to be non-negative.
    pub fn add_edge(&mut self, source: K, target: K, weight: W, bidirectional: bool) {
        let from = self.add_node(source);
        let to = self.add_node(target);

        self.out_adj[from.0].push(Edge { to, weight });
        self.size += 1;

        if bidirectional {
            self.out_adj[to.0].push(Edge { to: from, weight });
            self.size += 1;
        }
    }

    /// Stored neighbors of `node` in insertion order. Unknown nodes and nodes
    /// without outgoing edges yield nothing.
    pub fn neighbors<Q>(&self, node: &Q) -> impl Iterator<Item = (&K, W)> + '_
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let edges = match self.nodes.get_id(node) {
            Some(id) => self.out_adj[id.0].as_slice(),
            None => &[],
        };
        edges.iter().map(|e| (self.nodes.key(e.to), e.weight))
    }

    pub fn contains_node<Q>(&self, node: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.nodes.get_id(node).is_some()
    }

    /// Node keys in first-appearance order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.nodes.keys()
    }

    /// All stored directed edges as `(source, target, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, W)> + '_ {
        self.out_adj.iter().enumerate().flat_map(move |(from, list)| {
            let source = self.nodes.key(NodeId(from));
            list.iter()
                .map(move |e| (source, self.nodes.key(e.to), e.weight))
        })
    }

    /// Weight of the cheapest stored edge `from -> to`.
    pub fn min_edge_weight<Q>(&self, from: &Q, to: &Q) -> Option<W>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let from = self.nodes.get_id(from)?;
        let to = self.nodes.get_id(to)?;
        self.out_adj[from.0]
            .iter()
            .filter(|e| e.to == to)
            .map(|e| e.weight)
            .min()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<K, W> Default for WeightedGraph<K, W>
where
    K: Debug + Clone + Eq + Hash,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> GraphBase for WeightedGraph<K, W>
where
    K: Debug + Clone + Eq + Hash,
    W: Weight,
{
    type Key = K;
    type Weight = W;

    fn order(&self) -> usize {
        self.nodes.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn node_id(&self, key: &K) -> Option<NodeId> {
        self.nodes.get_id(key)
    }

    fn node_key(&self, id: NodeId) -> &K {
        self.nodes.key(id)
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new((0..self.nodes.len()).map(NodeId))
    }

    fn out_edges(&self, v: NodeId) -> &[Edge<W>] {
        &self.out_adj[v.0]
    }
}
