use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};
use log::{debug, trace, warn};

use crate::algorithms::path::walk_predecessors;
use crate::{GraphBase, NodeId, NodeInterner, Weight};

/// Best known distance per node; `None` is infinity.
pub type DistanceTable<K, W> = IndexMap<K, Option<W>>;

/// Node each node was reached from; `None` for the source and unreached nodes.
pub type PredecessorTable<K> = IndexMap<K, Option<K>>;

/// Distances and predecessors of one Dijkstra run.
///
/// Covers every node of the graph plus the source, in the graph's node order.
/// A source that is unknown to the graph is appended as an isolated node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPaths<K, W>
where
    K: Eq + Hash,
{
    nodes: NodeInterner<K>,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<NodeId>>,
    source: NodeId,
}

impl<K, W> ShortestPaths<K, W>
where
    K: Clone + Eq + Hash,
    W: Weight,
{
    pub fn source(&self) -> &K {
        self.nodes.key(self.source)
    }

    /// Number of nodes covered by the tables.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Shortest distance from the source, `None` if `node` is unreachable or unknown.
    pub fn distance<Q>(&self, node: &Q) -> Option<W>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.nodes
            .get_id(node)
            .and_then(|id| self.distances[id.0])
    }

    pub fn predecessor<Q>(&self, node: &Q) -> Option<&K>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let id = self.nodes.get_id(node)?;
        self.predecessors[id.0].map(|p| self.nodes.key(p))
    }

    pub fn is_reachable<Q>(&self, node: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.distance(node).is_some()
    }

    /// `(node, distance, predecessor)` rows in node order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Option<W>, Option<&K>)> + '_ {
        self.nodes.iter().map(|(id, key)| {
            (
                key,
                self.distances[id.0],
                self.predecessors[id.0].map(|p| self.nodes.key(p)),
            )
        })
    }

    pub fn distances(&self) -> DistanceTable<K, W> {
        self.iter().map(|(k, d, _)| (k.clone(), d)).collect()
    }

    pub fn predecessors(&self) -> PredecessorTable<K> {
        self.iter()
            .map(|(k, _, p)| (k.clone(), p.cloned()))
            .collect()
    }

    pub fn into_tables(self) -> (DistanceTable<K, W>, PredecessorTable<K>) {
        (self.distances(), self.predecessors())
    }

    /// Nodes on a shortest path from the source to `end`, both inclusive.
    /// Empty when `end` is unreachable or unknown.
    pub fn path_to<Q>(&self, end: &Q) -> Vec<K>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let Some(end) = self.nodes.get_id(end) else {
            return Vec::new();
        };
        if self.distances[end.0].is_none() {
            return Vec::new();
        }

        walk_predecessors(&self.source, end, self.len(), |&id| {
            self.predecessors[id.0]
        })
        .into_iter()
        .map(|id| self.nodes.key(id).clone())
        .collect()
    }

    /// Distance and path to `target`, or `None` if it cannot be reached.
    pub fn lightest_path_to<Q>(&self, target: &Q) -> Option<(W, Vec<K>)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let weight = self.distance(target)?;
        Some((weight, self.path_to(target)))
    }
}

/// Single-source shortest paths with a lazy-deletion binary heap.
///
/// Improvements push a fresh frontier entry instead of decreasing a key; entries
/// for nodes that were already finalized are skipped when popped. Entries with
/// equal distance pop in node order. Weights must be non-negative, which is not
/// checked. A relaxation whose sum overflows `W` is skipped.
pub fn dijkstra<G>(graph: &G, start: G::Key) -> ShortestPaths<G::Key, G::Weight>
where
    G: GraphBase,
{
    // Result slots are dense and in `node_ids()` order; map the graph's own
    // ids onto them so implementors are free to use sparse ids.
    let mut nodes = NodeInterner::with_capacity(graph.order() + 1);
    let mut graph_ids = Vec::with_capacity(graph.order());
    let mut local = HashMap::with_capacity(graph.order());
    for id in graph.node_ids() {
        local.insert(id, nodes.intern(graph.node_key(id).clone()));
        graph_ids.push(id);
    }
    let source = nodes.intern(start);
    let in_graph = source.0 < graph_ids.len();

    debug!(
        "dijkstra: {} nodes, {} edges, source {:?}{}",
        graph.order(),
        graph.size(),
        nodes.key(source),
        if in_graph { "" } else { " (not in graph)" }
    );

    let order = nodes.len();
    let zero = <G::Weight as Weight>::zero();
    let mut distances = vec![None; order];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; order];
    let mut visited = vec![false; order];
    distances[source.0] = Some(zero);

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((zero, source)));
    let mut pushes = 1usize;
    let mut stale = 0usize;
    let mut finalized = 0usize;

    while let Some(Reverse((distance, current))) = frontier.pop() {
        if visited[current.0] {
            stale += 1;
            trace!("skipping stale entry ({}, {:?})", distance, nodes.key(current));
            continue;
        }
        visited[current.0] = true;
        finalized += 1;

        // A source the graph does not know has no out-edges.
        let Some(&graph_id) = graph_ids.get(current.0) else {
            continue;
        };

        for edge in graph.out_edges(graph_id) {
            let Some(&to) = local.get(&edge.to) else {
                warn!("edge to unlisted node {:?} ignored", edge.to);
                continue;
            };
            let Some(candidate) = distance.checked_add(edge.weight) else {
                warn!(
                    "distance overflow relaxing {:?} -> {:?}; edge ignored",
                    nodes.key(current),
                    nodes.key(to)
                );
                continue;
            };

            if distances[to.0].is_none_or(|known| candidate < known) {
                trace!(
                    "relax {:?} -> {:?}: {}",
                    nodes.key(current),
                    nodes.key(to),
                    candidate
                );
                distances[to.0] = Some(candidate);
                predecessors[to.0] = Some(current);
                frontier.push(Reverse((candidate, to)));
                pushes += 1;
            }
        }
    }

    debug!(
        "dijkstra: finalized {} of {} nodes, {} heap pushes, {} stale pops",
        finalized, order, pushes, stale
    );

    ShortestPaths {
        nodes,
        distances,
        predecessors,
        source,
    }
}
