use std::hash::Hash;

use indexmap::Equivalent;

use crate::algorithms::dijkstra::{DistanceTable, PredecessorTable, dijkstra};
use crate::{Weight, WeightedGraph};

/// Follow predecessor links back from `end` until `start` or a node without a
/// predecessor, then return the nodes in forward order. More than `limit`
/// nodes means the links form a cycle; the result is then empty.
pub(crate) fn walk_predecessors<T, F>(start: &T, end: T, limit: usize, mut predecessor: F) -> Vec<T>
where
    T: PartialEq,
    F: FnMut(&T) -> Option<T>,
{
    let mut path = vec![end];
    while let Some(current) = path.last() {
        if current == start {
            break;
        }
        let Some(previous) = predecessor(current) else {
            break;
        };
        if path.len() >= limit {
            return Vec::new();
        }
        path.push(previous);
    }
    path.reverse();
    path
}

/// Rebuild the path `start ..= end` from exported tables.
///
/// Returns an empty path when `end` has no finite distance, including when it
/// is missing from `distances` altogether.
pub fn reconstruct<K, W>(
    predecessors: &PredecessorTable<K>,
    distances: &DistanceTable<K, W>,
    start: &K,
    end: &K,
) -> Vec<K>
where
    K: Clone + Eq + Hash,
    W: Weight,
{
    if !matches!(distances.get(end), Some(Some(_))) {
        return Vec::new();
    }

    // The source may have no entry of its own, so a path can be one node longer
    // than either table.
    let limit = distances.len().max(predecessors.len()) + 1;
    walk_predecessors(start, end.clone(), limit, |node| {
        predecessors.get(node).cloned().flatten()
    })
}

/// Run Dijkstra from `start` and return a shortest path to `end`.
pub fn shortest_path<K, W>(graph: &WeightedGraph<K, W>, start: K, end: &K) -> Vec<K>
where
    K: std::fmt::Debug + Clone + Eq + Hash,
    W: Weight,
{
    dijkstra(graph, start).path_to(end)
}

/// Total weight of `path`, taking the cheapest edge for every hop.
///
/// `None` if some hop has no edge or the sum overflows.
pub fn path_weight<K, W, Q>(graph: &WeightedGraph<K, W>, path: &[&Q]) -> Option<W>
where
    K: std::fmt::Debug + Clone + Eq + Hash,
    W: Weight,
    Q: ?Sized + Hash + Equivalent<K>,
{
    path.windows(2).try_fold(W::zero(), |total, hop| {
        total.checked_add(graph.min_edge_weight(hop[0], hop[1])?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn walk_stops_at_start() {
        let links: IndexMap<u8, u8> = [(3, 2), (2, 1), (1, 0)].into_iter().collect();
        let path = walk_predecessors(&1, 3, 4, |n| links.get(n).copied());
        assert_eq!(path, [1, 2, 3]);
    }

    #[test]
    fn walk_detects_cycles() {
        let links: IndexMap<u8, u8> = [(1, 2), (2, 1)].into_iter().collect();
        assert!(walk_predecessors(&0, 1, 2, |n| links.get(n).copied()).is_empty());
    }

    #[test]
    fn reconstruct_from_tables() {
        let distances: DistanceTable<&str, u32> =
            [("a", Some(0)), ("b", Some(2)), ("c", None)].into_iter().collect();
        let predecessors: PredecessorTable<&str> =
            [("a", None), ("b", Some("a")), ("c", None)].into_iter().collect();

        assert_eq!(reconstruct(&predecessors, &distances, &"a", &"b"), ["a", "b"]);
        assert_eq!(reconstruct(&predecessors, &distances, &"a", &"a"), ["a"]);
        assert!(reconstruct(&predecessors, &distances, &"a", &"c").is_empty());
        assert!(reconstruct(&predecessors, &distances, &"a", &"zzz").is_empty());
    }

    #[test]
    fn reconstruct_accepts_source_without_entry() {
        let distances: DistanceTable<&str, u32> =
            [("a", Some(0)), ("b", Some(1)), ("c", Some(2))].into_iter().collect();
        let predecessors: PredecessorTable<&str> =
            [("b", Some("a")), ("c", Some("b"))].into_iter().collect();

        assert_eq!(reconstruct(&predecessors, &distances, &"a", &"c"), ["a", "b", "c"]);
    }

    #[test]
    fn reconstruct_rejects_cyclic_tables() {
        let distances: DistanceTable<&str, u32> =
            [("a", Some(0)), ("b", Some(1)), ("c", Some(2))].into_iter().collect();
        let predecessors: PredecessorTable<&str> =
            [("b", Some("c")), ("c", Some("b"))].into_iter().collect();

        assert!(reconstruct(&predecessors, &distances, &"a", &"c").is_empty());
    }

    #[test]
    fn path_weight_uses_cheapest_parallel_edge() {
        let graph = WeightedGraph::<&str, u32>::from_edges(
            [("a", "b", 5), ("a", "b", 2), ("b", "c", 1)],
            false,
        );
        assert_eq!(path_weight(&graph, &["a", "b", "c"]), Some(3));
        assert_eq!(path_weight(&graph, &["c", "a"]), None);
        assert_eq!(path_weight(&graph, &["a"]), Some(0));
        assert_eq!(path_weight::<_, _, str>(&graph, &[]), Some(0));
    }

    #[test]
    fn shortest_path_runs_dijkstra() {
        let graph = WeightedGraph::<&str, u32>::from_edges(
            [("a", "b", 5), ("a", "c", 1), ("c", "b", 1)],
            true,
        );
        assert_eq!(shortest_path(&graph, "b", &"a"), ["b", "c", "a"]);
    }
}
