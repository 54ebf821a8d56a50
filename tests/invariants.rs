// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the coursegraph core
//!
//! These tests verify the critical invariants:
//! 1. Identity - node ids and directed edge pairs stay unique
//! 2. Consistency - no edge ever dangles, deletes cascade
//! 3. Analysis - path queries are deterministic and report "no path"
//!    distinctly from zero-length paths
//! 4. Snapshot fidelity - data survives round-trips, malformed input
//!    changes nothing

use coursegraph::prelude::*;
use coursegraph::weight::{format_weight, parse_weight};
use proptest::prelude::*;

// =============================================================================
// Test Helpers
// =============================================================================

fn build_graph(nodes: &[(i64, &str)], edges: &[(i64, i64, &str)]) -> CourseGraph {
    let mut graph = CourseGraph::new();
    for &(id, name) in nodes {
        assert!(graph.add_node(id, name, 0.0, 0.0), "seed node {id} must insert");
    }
    for &(from, to, label) in edges {
        assert!(graph.add_edge(from, to, label), "seed edge {from}->{to} must insert");
    }
    graph
}

fn curriculum() -> CourseGraph {
    build_graph(
        &[(1, "Algebra"), (2, "Calculus"), (3, "Analysis"), (4, "Topology")],
        &[(1, 2, "C1"), (2, 3, "C1"), (1, 3, "C1"), (3, 4, "C1")],
    )
}

// =============================================================================
// Identity Invariants
// =============================================================================

#[test]
fn test_node_ids_stay_unique() {
    let mut graph = CourseGraph::new();
    assert!(graph.add_node(1, "Algebra", 0.0, 0.0));
    assert!(!graph.add_node(1, "Impostor", 5.0, 5.0));

    assert_eq!(graph.node_count(), 1);
    // The losing add left the existing node untouched
    let node = graph.node(1).unwrap();
    assert_eq!(node.name, "Algebra");
    assert_eq!(node.x, 0.0);
}

#[test]
fn test_directed_pairs_stay_unique() {
    let mut graph = build_graph(&[(1, "A"), (2, "B")], &[(1, 2, "C1")]);
    assert!(!graph.add_edge(1, 2, "C5"));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_between(1, 2).unwrap().label, "C1");

    // The reverse pair is a different edge and may coexist
    assert!(graph.add_edge(2, 1, "C5"));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_auto_ids_never_collide() {
    let mut graph = CourseGraph::new();
    graph.add_node(10, "Seeded", 0.0, 0.0);
    let a = graph.add_node_at(0.0, 0.0);
    let b = graph.add_node_at(0.0, 0.0);
    assert_eq!(a, 11);
    assert_eq!(b, 12);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_self_loops_are_permitted() {
    let mut graph = build_graph(&[(1, "A")], &[]);
    assert!(graph.add_edge(1, 1, "C2"));
    assert!(!graph.add_edge(1, 1, "C2"));
    assert_eq!(graph.predecessors(1), vec![1]);
    assert_eq!(graph.successors(1), vec![1]);
}

// =============================================================================
// Consistency Invariants
// =============================================================================

#[test]
fn test_delete_node_cascades_both_directions() {
    let mut graph = build_graph(
        &[(1, "A"), (2, "B"), (3, "C")],
        &[(1, 2, "C1"), (2, 3, "C1"), (3, 2, "C1")],
    );

    assert!(graph.delete_node(2));

    assert!(graph.predecessors(2).is_empty());
    assert!(graph.successors(2).is_empty());
    assert!(graph.edges().iter().all(|e| e.from != 2 && e.to != 2));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_mutations_fail_locally_not_fatally() {
    let mut graph = CourseGraph::new();
    assert!(!graph.rename_node(1, "ghost"));
    assert!(!graph.delete_node(1));
    assert!(!graph.add_edge(1, 2, "C1"));
    assert!(!graph.rename_edge(1, 2, "C1"));
    assert!(!graph.delete_edge(1, 2));
    assert!(!graph.delete_edge_by_id(1));
    assert!(graph.is_empty());
}

#[test]
fn test_queries_on_unknown_ids_are_empty() {
    let graph = curriculum();
    assert!(graph.predecessors(99).is_empty());
    assert!(graph.successors(99).is_empty());
}

// =============================================================================
// Weight Codec
// =============================================================================

#[test]
fn test_weight_defaults() {
    assert_eq!(parse_weight("garbage"), 1);
    assert_eq!(parse_weight(""), 1);
    assert_eq!(parse_weight("C7"), 7);
    assert_eq!(parse_weight("3"), 3);
}

// =============================================================================
// Path Analysis
// =============================================================================

#[test]
fn test_shortest_path_takes_cheaper_chain() {
    let graph = build_graph(
        &[(1, "A"), (2, "B"), (3, "C")],
        &[(1, 2, "C1"), (2, 3, "C2"), (1, 3, "C5")],
    );
    let result = graph.find_shortest_path(1, 3).unwrap();
    assert_eq!(result.path, vec![1, 2, 3]);
    assert_eq!(result.distance, 3);
}

#[test]
fn test_no_path_is_distinct_from_zero_length() {
    let graph = build_graph(&[(1, "A"), (2, "B")], &[]);

    assert!(graph.find_shortest_path(1, 2).is_none());

    let same = graph.find_shortest_path(1, 1).unwrap();
    assert_eq!(same.path, vec![1]);
    assert_eq!(same.distance, 0);
}

#[test]
fn test_longest_path_over_dag() {
    let result = curriculum().find_longest_path().unwrap();
    assert_eq!(result.path, vec![1, 2, 3, 4]);
    assert_eq!(result.distance, 3);
}

#[test]
fn test_longest_path_sentinel_on_edgeless_graph() {
    let graph = build_graph(&[(1, "A"), (2, "B")], &[]);
    assert!(graph.find_longest_path().is_none());
}

#[test]
fn test_all_paths_branch_isolation() {
    // Sibling branches must each reach the shared tail node
    let graph = build_graph(
        &[(1, "A"), (2, "B"), (3, "C"), (4, "D")],
        &[(1, 2, "C1"), (1, 3, "C1"), (2, 4, "C1"), (3, 4, "C1")],
    );
    let paths = graph.find_all_paths(1, 4);
    assert_eq!(paths.len(), 2);
}

#[test]
fn test_path_distance_ignores_missing_segments() {
    let graph = build_graph(&[(1, "A"), (2, "B"), (3, "C")], &[(1, 2, "C4")]);
    assert_eq!(graph.path_distance(&[1, 2, 3]), 4);
}

// =============================================================================
// Snapshot Fidelity
// =============================================================================

#[test]
fn test_snapshot_round_trip() {
    let mut graph = curriculum();
    graph.set_position(2, 120.0, -45.0);
    let payload = graph.export_graph();

    let mut restored = CourseGraph::new();
    restored.import_graph(&payload).unwrap();

    assert_eq!(restored.node_count(), graph.node_count());
    assert_eq!(restored.edge_count(), graph.edge_count());
    for node in graph.nodes() {
        let other = restored.node(node.id).expect("node should survive round-trip");
        assert_eq!(other.name, node.name);
        assert_eq!((other.x, other.y), (node.x, node.y));
    }
    for edge in graph.edges() {
        let other = restored
            .edge_between(edge.from, edge.to)
            .expect("edge should survive round-trip");
        assert_eq!(other.label, edge.label);
    }
}

#[test]
fn test_malformed_import_leaves_state_untouched() {
    let mut graph = curriculum();
    let nodes_before = graph.node_count();
    let edges_before = graph.edge_count();

    assert!(graph.import_graph("][ not json").is_err());
    assert!(graph.import_graph(r#"{"nodes": "wrong", "edges": []}"#).is_err());

    assert_eq!(graph.node_count(), nodes_before);
    assert_eq!(graph.edge_count(), edges_before);
}

#[test]
fn test_position_import_is_lenient() {
    let mut graph = curriculum();
    let payload = r#"[{"id": 1, "x": 9.0, "y": 9.0, "label": "1 - Algebra"},
                      {"id": 77, "x": 1.0, "y": 1.0, "label": "ghost"}]"#;
    graph.import_positions(payload).unwrap();
    assert_eq!(graph.node(1).unwrap().x, 9.0);
    assert!(!graph.contains_node(77));
}

#[test]
fn test_wire_shape_matches_contract() {
    let graph = build_graph(&[(1, "Algebra"), (2, "Calculus")], &[(1, 2, "C3")]);
    let value: serde_json::Value = serde_json::from_str(&graph.export_graph()).unwrap();

    let node = &value["nodes"][0];
    assert_eq!(node["id"], 1);
    assert_eq!(node["label"], "1 - Algebra");

    let edge = &value["edges"][0];
    assert_eq!(edge["from"], 1);
    assert_eq!(edge["to"], 2);
    assert_eq!(edge["label"], "C3");
    assert_eq!(edge["arrows"], "to");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_node_ids_unique_under_any_insert_sequence(ids in proptest::collection::vec(0i64..20, 0..40)) {
        let mut graph = CourseGraph::new();
        for id in &ids {
            graph.add_node(*id, "course", 0.0, 0.0);
        }
        let mut seen: Vec<i64> = graph.nodes().iter().map(|n| n.id).collect();
        seen.sort_unstable();
        let len = seen.len();
        seen.dedup();
        prop_assert_eq!(seen.len(), len);
    }

    #[test]
    fn prop_weight_round_trip(n in 1i64..100_000) {
        prop_assert_eq!(parse_weight(&format_weight(n)), n);
    }

    #[test]
    fn prop_parse_weight_total(label in ".*") {
        // Never panics, and malformed input always yields the default
        let w = parse_weight(&label);
        prop_assert!(w != 0);
    }

    #[test]
    fn prop_duplicate_pair_never_exceeds_one(pairs in proptest::collection::vec((1i64..5, 1i64..5), 0..30)) {
        let mut graph = CourseGraph::new();
        for id in 1..5 {
            graph.add_node(id, "course", 0.0, 0.0);
        }
        for (from, to) in &pairs {
            graph.add_edge(*from, *to, "C1");
        }
        for (from, to) in &pairs {
            let count = graph
                .edges()
                .iter()
                .filter(|e| e.from == *from && e.to == *to)
                .count();
            prop_assert!(count <= 1);
        }
    }
}
