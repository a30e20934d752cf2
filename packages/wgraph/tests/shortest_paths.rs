use wgraph::{GraphBase, WeightedGraph, dijkstra, path_weight, reconstruct, shortest_path};

fn demo_graph() -> WeightedGraph<String, u64> {
    WeightedGraph::from_edges(
        [
            ("A", "B", 4),
            ("A", "C", 2),
            ("B", "C", 5),
            ("B", "D", 10),
            ("C", "E", 3),
            ("E", "D", 4),
            ("D", "F", 11),
        ],
        true,
    )
}

#[test]
fn demo_graph_distances_from_a() {
    let graph = demo_graph();
    let result = dijkstra(&graph, "A".to_string());

    let expected = [("A", 0), ("B", 4), ("C", 2), ("D", 9), ("E", 5), ("F", 20)];
    for (node, distance) in expected {
        assert_eq!(result.distance(node), Some(distance), "distance to {node}");
    }
    assert_eq!(result.len(), graph.order());
}

#[test]
fn demo_graph_path_a_to_d() {
    let graph = demo_graph();
    let result = dijkstra(&graph, "A".to_string());
    assert_eq!(result.path_to("D"), ["A", "C", "E", "D"]);

    let (distances, predecessors) = result.into_tables();
    let path = reconstruct(&predecessors, &distances, &"A".to_string(), &"D".to_string());
    assert_eq!(path, ["A", "C", "E", "D"]);
}

#[test]
fn path_weight_matches_distance() {
    let graph = demo_graph();
    let result = dijkstra(&graph, "A".to_string());
    for node in graph.nodes() {
        let path = result.path_to(node);
        assert_eq!(path.first().map(String::as_str), Some("A"));
        assert_eq!(path.last(), Some(node));
        let hops: Vec<&str> = path.iter().map(String::as_str).collect();
        assert_eq!(path_weight(&graph, hops.as_slice()), result.distance(node));
    }
}

#[test]
fn source_has_zero_distance_and_no_predecessor() {
    let graph = demo_graph();
    for start in graph.nodes() {
        let result = dijkstra(&graph, start.clone());
        assert_eq!(result.distance(start), Some(0));
        assert_eq!(result.predecessor(start), None);
    }
}

#[test]
fn unknown_node_is_unreachable() {
    let graph = demo_graph();
    let result = dijkstra(&graph, "A".to_string());
    assert_eq!(result.distance("Z"), None);
    assert!(result.path_to("Z").is_empty());
    assert!(shortest_path(&graph, "A".to_string(), &"Z".to_string()).is_empty());

    let (distances, predecessors) = result.into_tables();
    assert!(!distances.contains_key("Z"));
    assert!(reconstruct(&predecessors, &distances, &"A".to_string(), &"Z".to_string()).is_empty());
}

#[test]
fn single_node_without_edges() {
    let mut graph: WeightedGraph<String, u64> = WeightedGraph::new();
    graph.add_node("A".to_string());

    let result = dijkstra(&graph, "A".to_string());
    let (distances, predecessors) = result.clone().into_tables();
    assert_eq!(distances.len(), 1);
    assert_eq!(distances["A"], Some(0));
    assert_eq!(result.path_to("A"), ["A"]);
    assert_eq!(
        reconstruct(&predecessors, &distances, &"A".to_string(), &"A".to_string()),
        ["A"]
    );
}

#[test]
fn compute_is_idempotent() {
    let graph = demo_graph();
    let first = dijkstra(&graph, "B".to_string());
    let second = dijkstra(&graph, "B".to_string());
    assert_eq!(first, second);
    assert_eq!(first.into_tables(), second.into_tables());
}

#[test]
fn target_only_nodes_are_reachable_but_have_no_neighbors() {
    let graph = WeightedGraph::<String, u64>::from_edges([("a", "b", 1), ("b", "c", 2)], false);
    assert_eq!(graph.neighbors("c").count(), 0);

    let result = dijkstra(&graph, "a".to_string());
    assert_eq!(result.distance("c"), Some(3));
    assert_eq!(result.distance("a"), Some(0));

    let from_c = dijkstra(&graph, "c".to_string());
    assert_eq!(from_c.distance("a"), None);
    assert_eq!(from_c.predecessor("a"), None);
}

#[test]
fn cheaper_parallel_edge_wins() {
    let graph = WeightedGraph::<String, u64>::from_edges(
        [("a", "b", 9), ("a", "b", 3), ("b", "c", 1), ("a", "c", 5)],
        false,
    );
    let result = dijkstra(&graph, "a".to_string());
    assert_eq!(result.distance("b"), Some(3));
    assert_eq!(result.distance("c"), Some(4));
    assert_eq!(result.predecessor("c").map(String::as_str), Some("b"));
}

#[test]
fn queries_on_shared_graph_run_in_parallel() {
    let graph = demo_graph();
    let starts = ["A", "D", "F"];
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = starts
            .iter()
            .map(|s| {
                let graph = &graph;
                scope.spawn(move || dijkstra(graph, s.to_string()))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (start, result) in starts.iter().zip(&results) {
        assert_eq!(result, &dijkstra(&graph, start.to_string()));
    }
    assert_eq!(results[2].distance("A"), Some(20));
}
