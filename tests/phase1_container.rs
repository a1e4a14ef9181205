//! Phase 1 tests: container mutation and structural queries.

use adjacency_graph::graph::{Graph, GraphBuilder};
use adjacency_graph::types::{Edge, GraphError};

fn triangle() -> Graph<u32, i64> {
    GraphBuilder::new()
        .edge(1, 2, 10)
        .edge(2, 3, 20)
        .edge(3, 1, 30)
        .build()
}

// ==================== Construction ====================

#[test]
fn test_empty_graph() {
    let graph: Graph<u32, i64> = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.len(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertices().count(), 0);
}

#[test]
fn test_add_vertex_idempotent() {
    let mut graph: Graph<u32, i64> = Graph::new();
    assert!(graph.add_vertex(7));
    assert!(!graph.add_vertex(7));
    assert_eq!(graph.len(), 1);
    assert!(graph.contains_vertex(&7));
    assert_eq!(graph.degree_out(&7).unwrap(), 0);
    assert!(graph.is_consistent());
}

#[test]
fn test_vertices_iterate_in_order() {
    let mut graph: Graph<&str, i64> = Graph::new();
    for v in ["delta", "alpha", "charlie", "bravo"] {
        graph.add_vertex(v);
    }
    let order: Vec<&str> = graph.vertices().copied().collect();
    assert_eq!(order, vec!["alpha", "bravo", "charlie", "delta"]);

    let via_into_iter: Vec<&str> = (&graph).into_iter().copied().collect();
    assert_eq!(via_into_iter, order);
}

// ==================== Edge insertion ====================

#[test]
fn test_insert_edge_then_get_weight() {
    let mut graph: Graph<u32, i64> = Graph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.insert_edge(1, 2, 42).unwrap();

    assert_eq!(*graph.get_weight(&1, &2).unwrap(), 42);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains_edge(&1, &2));
    assert!(!graph.contains_edge(&2, &1));
}

#[test]
fn test_insert_edge_unknown_target_is_atomic() {
    let mut graph: Graph<u32, i64> = Graph::new();
    graph.add_vertex(1);

    let result = graph.insert_edge(1, 99, 5);
    match result.unwrap_err() {
        GraphError::UnknownVertex(v) => assert_eq!(v, "99"),
        e => panic!("Expected UnknownVertex error, got {:?}", e),
    }
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.len(), 1);
    assert!(graph.is_consistent());
}

#[test]
fn test_insert_edge_unknown_source_is_atomic() {
    let mut graph: Graph<u32, i64> = Graph::new();
    graph.add_vertex(2);

    assert!(graph.insert_edge(99, 2, 5).is_err());
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains_vertex(&99));
}

#[test]
fn test_parallel_edges_are_kept() {
    let mut graph: Graph<char, i64> = Graph::new();
    for v in ['v', 'a', 'b'] {
        graph.add_vertex(v);
    }
    graph.insert_edge('v', 'a', 1).unwrap();
    graph.insert_edge('v', 'b', 2).unwrap();
    graph.insert_edge('v', 'a', 3).unwrap();

    assert_eq!(graph.degree_out(&'v').unwrap(), 3);
    assert_eq!(graph.degree_in(&'a').unwrap(), 2);
    // First recorded weight wins
    assert_eq!(*graph.get_weight(&'v', &'a').unwrap(), 1);

    let targets: Vec<char> = graph.adjacent_vertices(&'v').unwrap().copied().collect();
    assert_eq!(targets, vec!['a', 'b', 'a']);
}

#[test]
fn test_insert_or_assign_replaces_weight() {
    let mut graph: Graph<u32, i64> = Graph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);

    assert_eq!(graph.insert_or_assign_edge(1, 2, 5).unwrap(), None);
    assert_eq!(graph.insert_or_assign_edge(1, 2, 8).unwrap(), Some(5));
    assert_eq!(graph.degree_out(&1).unwrap(), 1);
    assert_eq!(*graph.get_weight(&1, &2).unwrap(), 8);
}

#[test]
fn test_insert_or_assign_only_touches_first_parallel_edge() {
    let mut graph: Graph<u32, i64> = Graph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.insert_edge(1, 2, 1).unwrap();
    graph.insert_edge(1, 2, 2).unwrap();

    assert_eq!(graph.insert_or_assign_edge(1, 2, 9).unwrap(), Some(1));
    let weights: Vec<i64> = graph.edges_from(&1).unwrap().iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![9, 2]);
}

#[test]
fn test_insert_or_assign_unknown_vertex() {
    let mut graph: Graph<u32, i64> = Graph::new();
    graph.add_vertex(1);

    assert!(matches!(
        graph.insert_or_assign_edge(1, 3, 1),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(
        graph.insert_or_assign_edge(3, 1, 1),
        Err(GraphError::UnknownVertex(_))
    ));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_connect_uses_default_weight() {
    let mut graph: Graph<u32, i64> = Graph::new();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.connect(1, 2).unwrap();
    assert_eq!(*graph.get_weight(&1, &2).unwrap(), 0);
    assert!(graph.connect(1, 5).is_err());
}

// ==================== Removal ====================

#[test]
fn test_remove_vertex_strips_incoming_edges() {
    let mut graph = triangle();
    graph.insert_edge(1, 3, 13).unwrap();

    assert!(graph.remove_vertex(&3));
    assert!(!graph.contains_vertex(&3));
    assert_eq!(graph.len(), 2);
    for (_, edge) in graph.edges() {
        assert_ne!(edge.target, 3);
    }
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_consistent());
}

#[test]
fn test_remove_unknown_vertex() {
    let mut graph = triangle();
    assert!(!graph.remove_vertex(&42));
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_remove_edge_removes_first_only() {
    let mut graph: Graph<u32, i64> = GraphBuilder::new()
        .edge(1, 2, 1)
        .edge(1, 2, 2)
        .edge(1, 3, 3)
        .build();

    assert_eq!(graph.remove_edge(&1, &2), Some(1));
    assert_eq!(graph.degree_out(&1).unwrap(), 2);
    assert_eq!(*graph.get_weight(&1, &2).unwrap(), 2);

    assert_eq!(graph.remove_edge(&1, &2), Some(2));
    assert_eq!(graph.remove_edge(&1, &2), None);
    assert_eq!(graph.remove_edge(&9, &2), None);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_erase_edges_go_from() {
    let mut graph = triangle();
    assert!(graph.erase_edges_go_from(&1));
    assert_eq!(graph.degree_out(&1).unwrap(), 0);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.len(), 3);

    assert!(!graph.erase_edges_go_from(&77));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_erase_edges_go_to() {
    let mut graph = triangle();
    graph.insert_edge(2, 1, 21).unwrap();

    assert!(graph.erase_edges_go_to(&1));
    assert_eq!(graph.degree_in(&1).unwrap(), 0);
    assert_eq!(graph.edge_count(), 2);

    assert!(!graph.erase_edges_go_to(&77));
}

#[test]
fn test_clear_edges_keeps_vertices() {
    let mut graph = triangle();
    graph.clear_edges();
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_consistent());
    // Vertices remain usable
    graph.insert_edge(3, 2, 1).unwrap();
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_clear() {
    let mut graph = triangle();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.insert_edge(1, 2, 1).is_err());
}

// ==================== Queries ====================

#[test]
fn test_degree_unknown_vertex() {
    let graph = triangle();
    assert!(matches!(
        graph.degree_out(&9),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(matches!(
        graph.degree_in(&9),
        Err(GraphError::UnknownVertex(_))
    ));
    assert!(graph.has_loop(&9).is_err());
    assert!(graph.adjacent_vertices(&9).is_err());
    assert!(graph.edges_from(&9).is_err());
}

#[test]
fn test_degree_in_skips_self_loops() {
    let mut graph = triangle();
    graph.insert_edge(2, 2, 0).unwrap();
    assert_eq!(graph.degree_in(&2).unwrap(), 1);
    assert_eq!(graph.degree_out(&2).unwrap(), 2);
}

#[test]
fn test_degree_in_lone_self_loop_is_zero() {
    let mut graph: Graph<u32, i64> = Graph::new();
    graph.add_vertex(1);
    graph.insert_edge(1, 1, 5).unwrap();
    assert_eq!(graph.degree_in(&1).unwrap(), 0);
    assert_eq!(graph.degree_out(&1).unwrap(), 1);
    assert!(graph.has_loop(&1).unwrap());
}

#[test]
fn test_degree_in_isolated_vertex_is_zero() {
    let mut graph = triangle();
    graph.add_vertex(4);
    assert_eq!(graph.degree_in(&4).unwrap(), 0);
}

#[test]
fn test_has_loop() {
    let mut graph = triangle();
    for v in [1, 2, 3] {
        assert!(!graph.has_loop(&v).unwrap());
    }
    graph.insert_edge(2, 2, 7).unwrap();
    assert!(graph.has_loop(&2).unwrap());
    assert!(!graph.has_loop(&1).unwrap());
}

#[test]
fn test_get_weight_missing_edge() {
    let graph = triangle();
    match graph.get_weight(&2, &1).unwrap_err() {
        GraphError::EdgeNotFound { from, to } => {
            assert_eq!(from, "2");
            assert_eq!(to, "1");
        }
        e => panic!("Expected EdgeNotFound error, got {:?}", e),
    }
    assert!(matches!(
        graph.get_weight(&1, &9),
        Err(GraphError::UnknownVertex(_))
    ));
}

#[test]
fn test_adjacent_vertices_empty_for_sink() {
    let mut graph = triangle();
    graph.add_vertex(4);
    assert_eq!(graph.adjacent_vertices(&4).unwrap().count(), 0);
}

#[test]
fn test_edges_iterates_sources_in_order() {
    let graph: Graph<u32, i64> = GraphBuilder::new()
        .edge(3, 1, 31)
        .edge(1, 2, 12)
        .edge(1, 3, 13)
        .build();
    let triples: Vec<(u32, u32, i64)> = graph
        .edges()
        .map(|(s, e)| (*s, e.target, e.weight))
        .collect();
    assert_eq!(triples, vec![(1, 2, 12), (1, 3, 13), (3, 1, 31)]);
}

#[test]
fn test_edges_from_is_read_only_view() {
    let graph = triangle();
    let edges: &[Edge<u32, i64>] = graph.edges_from(&1).unwrap();
    assert_eq!(edges, &[Edge::new(2, 10)]);
}

// ==================== Value semantics ====================

#[test]
fn test_clone_is_independent() {
    let original = triangle();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.remove_vertex(&1);
    copy.add_vertex(10);
    copy.insert_edge(10, 2, 5).unwrap();

    assert_eq!(original.len(), 3);
    assert_eq!(original.edge_count(), 3);
    assert!(original.contains_edge(&3, &1));
    assert!(!original.contains_vertex(&10));
}

#[test]
fn test_take_leaves_source_empty() {
    let mut source = triangle();
    let moved = source.take();

    assert!(source.is_empty());
    assert_eq!(source.edge_count(), 0);
    assert!(source.is_consistent());
    assert_eq!(moved.len(), 3);
    assert_eq!(moved.edge_count(), 3);
}

#[test]
fn test_swap() {
    let mut a = triangle();
    let mut b: Graph<u32, i64> = GraphBuilder::new().vertex(100).build();
    a.swap(&mut b);

    assert_eq!(a.len(), 1);
    assert!(a.contains_vertex(&100));
    assert_eq!(b.len(), 3);
    assert_eq!(b.edge_count(), 3);
}

#[test]
fn test_from_iterator_and_extend() {
    let mut graph: Graph<&str, f64> = vec![("a", "b", 1.5), ("b", "c", 2.5)]
        .into_iter()
        .collect();
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 2);

    graph.extend([("c", "a", 0.5), ("c", "a", 0.75)]);
    assert_eq!(graph.degree_out(&"c").unwrap(), 2);
    assert!(graph.is_consistent());
}

#[test]
fn test_builder_self_loop_and_isolated_vertices() {
    let graph: Graph<u32, i64> = GraphBuilder::new()
        .vertices([5, 6])
        .self_loop(5, 1)
        .build();
    assert_eq!(graph.len(), 2);
    assert!(graph.has_loop(&5).unwrap());
    assert_eq!(graph.degree_out(&6).unwrap(), 0);
}

#[test]
fn test_edge_display_and_parts() {
    let edge = Edge::new("b", 3);
    assert_eq!(edge.to_string(), "-> b (3)");
    assert!(edge.points_to(&"b"));
    assert_eq!(edge.into_parts(), ("b", 3));
    assert_eq!(Edge::from(("c", 4)), Edge::new("c", 4));
}
