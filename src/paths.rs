// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path analysis over the prerequisite graph
//!
//! Dijkstra shortest path, exhaustive simple-path enumeration, and the
//! global longest-path search. All traversals enumerate nodes and edges in
//! store insertion order, which fixes every tie-break deterministically.
//! The longest-path search is brute force and exponential in the worst
//! case; the target domain is small interactive curriculum graphs, where
//! correctness and simplicity win over asymptotics.

use crate::graph::CourseGraph;
use crate::types::{EdgeStyle, HighlightResult, LongestPath, NodeStyle, ShortestPath};
use crate::weight::parse_weight;
use std::collections::{HashMap, HashSet};

/// Edge color applied to the shortest path
pub const SHORTEST_EDGE_COLOR: &str = "#00aa00";
/// Node fill applied to the shortest path
pub const SHORTEST_NODE_COLOR: &str = "#aaffaa";
/// Edge color applied to the longest path
pub const LONGEST_EDGE_COLOR: &str = "#aa0000";
/// Node fill applied to the longest path
pub const LONGEST_NODE_COLOR: &str = "#ffaaaa";
/// Stroke width for highlighted edges
pub const HIGHLIGHT_WIDTH: f64 = 3.0;

impl CourseGraph {
    /// Dijkstra shortest path from `start` to `end`.
    ///
    /// Returns `None` when either node is absent or `end` is unreachable.
    /// `start == end` is a zero-length path, distinct from "no path".
    ///
    /// The unvisited min-scan walks nodes in insertion order with a
    /// strictly-smaller comparison, so among equal tentative distances the
    /// first-encountered node wins. O(V^2); fine at this scale.
    #[must_use]
    pub fn find_shortest_path(&self, start: i64, end: i64) -> Option<ShortestPath> {
        if !self.contains_node(start) || !self.contains_node(end) {
            return None;
        }

        let mut distances: HashMap<i64, i64> = HashMap::new();
        let mut previous: HashMap<i64, i64> = HashMap::new();
        let mut unvisited: HashSet<i64> = HashSet::new();
        for node in self.nodes() {
            unvisited.insert(node.id);
        }
        distances.insert(start, 0);

        while !unvisited.is_empty() {
            // Unvisited node with the smallest tentative distance
            let current = self
                .nodes()
                .iter()
                .filter(|n| unvisited.contains(&n.id))
                .filter_map(|n| distances.get(&n.id).map(|d| (n.id, *d)))
                .fold(None, |best: Option<(i64, i64)>, (id, d)| match best {
                    Some((_, bd)) if d >= bd => best,
                    _ => Some((id, d)),
                });

            // Nothing reachable remains, or the target has been settled
            let Some((current, current_dist)) = current else {
                break;
            };
            if current == end {
                break;
            }
            unvisited.remove(&current);

            for edge in self.edges_from(current) {
                let weight = parse_weight(&edge.label);
                let candidate = current_dist + weight;
                let better = distances.get(&edge.to).map_or(true, |d| candidate < *d);
                if better {
                    distances.insert(edge.to, candidate);
                    previous.insert(edge.to, current);
                }
            }
        }

        if !previous.contains_key(&end) && end != start {
            return None;
        }

        // Walk predecessors back from the end
        let mut path = vec![end];
        let mut current = end;
        while let Some(&prev) = previous.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();

        Some(ShortestPath {
            path,
            distance: distances.get(&end).copied().unwrap_or(0),
        })
    }

    /// Every simple directed path from `start` to `end`.
    ///
    /// Depth-first with backtracking: the visited set holds exactly the
    /// nodes on the current path, so a node consumed by one branch stays
    /// available to its siblings. Exponential in dense graphs by design.
    #[must_use]
    pub fn find_all_paths(&self, start: i64, end: i64) -> Vec<Vec<i64>> {
        let mut results = Vec::new();
        let mut path = Vec::new();
        let mut visited = HashSet::new();
        self.collect_paths(start, end, &mut path, &mut visited, &mut results);
        results
    }

    fn collect_paths(
        &self,
        current: i64,
        end: i64,
        path: &mut Vec<i64>,
        visited: &mut HashSet<i64>,
        results: &mut Vec<Vec<i64>>,
    ) {
        path.push(current);
        visited.insert(current);

        if current == end {
            results.push(path.clone());
        } else {
            for edge in self.edges_from(current) {
                if !visited.contains(&edge.to) {
                    self.collect_paths(edge.to, end, path, visited, results);
                }
            }
        }

        visited.remove(&current);
        path.pop();
    }

    /// Globally longest simple path across all ordered node pairs.
    ///
    /// Enumerates pairs `(i, j)`, `i != j`, in node insertion order and all
    /// simple paths between them; a strictly greater distance replaces the
    /// running maximum, so the first path found at the maximum wins.
    /// Returns `None` when no pair is connected.
    #[must_use]
    pub fn find_longest_path(&self) -> Option<LongestPath> {
        let ids: Vec<i64> = self.nodes().iter().map(|n| n.id).collect();
        let mut best: Option<LongestPath> = None;
        let mut max_distance = -1;

        for &i in &ids {
            for &j in &ids {
                if i == j {
                    continue;
                }
                for path in self.find_all_paths(i, j) {
                    let distance = self.path_distance(&path);
                    if distance > max_distance {
                        max_distance = distance;
                        best = Some(LongestPath {
                            path,
                            distance,
                            start: i,
                            end: j,
                        });
                    }
                }
            }
        }

        best
    }

    /// Total weight of a node sequence.
    ///
    /// Sums `parse_weight` over consecutive edges; a segment with no
    /// matching edge contributes 0 rather than failing.
    #[must_use]
    pub fn path_distance(&self, path: &[i64]) -> i64 {
        path.windows(2)
            .filter_map(|pair| self.edge_between(pair[0], pair[1]))
            .map(|edge| parse_weight(&edge.label))
            .sum()
    }

    // =========================================================================
    // Highlighting
    // =========================================================================

    /// Apply highlight colors along a path.
    ///
    /// Returns `false` for empty or single-node paths, which have nothing
    /// to color.
    pub fn color_path(&mut self, path: &[i64], edge_color: &str, node_color: &str) -> bool {
        if path.len() <= 1 {
            return false;
        }
        for &id in path {
            self.set_node_style(
                id,
                NodeStyle {
                    background: Some(node_color.to_string()),
                    border: Some("#000000".to_string()),
                },
            );
        }
        for pair in path.windows(2) {
            if let Some(edge_id) = self.edge_between(pair[0], pair[1]).map(|e| e.id) {
                self.set_edge_style(
                    edge_id,
                    EdgeStyle {
                        color: Some(edge_color.to_string()),
                        highlight: Some(edge_color.to_string()),
                        width: Some(HIGHLIGHT_WIDTH),
                    },
                );
            }
        }
        true
    }

    /// Reset all styling, then color the shortest path between the given
    /// pair green and the globally longest path red.
    ///
    /// The color values are presentation detail; the analysis obligation is
    /// only the two path sequences, which are returned to the caller.
    pub fn highlight_paths(&mut self, start: i64, end: i64) -> HighlightResult {
        self.reset_styles();

        let shortest = self.find_shortest_path(start, end);
        if let Some(ref result) = shortest {
            self.color_path(&result.path, SHORTEST_EDGE_COLOR, SHORTEST_NODE_COLOR);
        }

        let longest = self.find_longest_path();
        if let Some(ref result) = longest {
            self.color_path(&result.path, LONGEST_EDGE_COLOR, LONGEST_NODE_COLOR);
        }

        HighlightResult { shortest, longest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(nodes: &[i64], edges: &[(i64, i64, &str)]) -> CourseGraph {
        let mut graph = CourseGraph::new();
        for &id in nodes {
            graph.add_node(id, &format!("N{id}"), 0.0, 0.0);
        }
        for &(from, to, label) in edges {
            assert!(graph.add_edge(from, to, label));
        }
        graph
    }

    #[test]
    fn test_shortest_path_prefers_cheaper_detour() {
        let graph = graph_with(&[1, 2, 3], &[(1, 2, "C1"), (2, 3, "C2"), (1, 3, "C5")]);
        let result = graph.find_shortest_path(1, 3).unwrap();
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.distance, 3);
    }

    #[test]
    fn test_shortest_path_same_node() {
        let graph = graph_with(&[1, 2], &[]);
        let result = graph.find_shortest_path(1, 1).unwrap();
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let graph = graph_with(&[1, 2], &[]);
        assert!(graph.find_shortest_path(1, 2).is_none());
    }

    #[test]
    fn test_shortest_path_unknown_node() {
        let graph = graph_with(&[1], &[]);
        assert!(graph.find_shortest_path(1, 9).is_none());
        assert!(graph.find_shortest_path(9, 1).is_none());
    }

    #[test]
    fn test_shortest_path_respects_direction() {
        let graph = graph_with(&[1, 2], &[(1, 2, "C1")]);
        assert!(graph.find_shortest_path(1, 2).is_some());
        assert!(graph.find_shortest_path(2, 1).is_none());
    }

    #[test]
    fn test_shortest_path_malformed_labels_cost_one() {
        let graph = graph_with(&[1, 2, 3], &[(1, 2, "uh"), (2, 3, ""), (1, 3, "C3")]);
        let result = graph.find_shortest_path(1, 3).unwrap();
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.distance, 2);
    }

    #[test]
    fn test_shortest_path_equal_cost_ties_break_by_insertion_order() {
        // Diamond with equal arms: the min-scan visits node 2 before node 3,
        // and a later relaxation with an equal distance never replaces the
        // recorded predecessor
        let graph = graph_with(
            &[1, 2, 3, 4],
            &[(1, 2, "C1"), (1, 3, "C1"), (2, 4, "C1"), (3, 4, "C1")],
        );
        let result = graph.find_shortest_path(1, 4).unwrap();
        assert_eq!(result.path, vec![1, 2, 4]);
        assert_eq!(result.distance, 2);
    }

    #[test]
    fn test_all_paths_sibling_branches_independent() {
        // Diamond: both arms must be found even though they share node 4
        let graph = graph_with(
            &[1, 2, 3, 4],
            &[(1, 2, "C1"), (1, 3, "C1"), (2, 4, "C1"), (3, 4, "C1")],
        );
        let paths = graph.find_all_paths(1, 4);
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&vec![1, 2, 4]));
        assert!(paths.contains(&vec![1, 3, 4]));
    }

    #[test]
    fn test_all_paths_enumeration_order() {
        let graph = graph_with(
            &[1, 2, 3, 4],
            &[(1, 3, "C1"), (1, 2, "C1"), (2, 4, "C1"), (3, 4, "C1")],
        );
        // Expansion follows edge insertion order: the 1->3 arm first
        let paths = graph.find_all_paths(1, 4);
        assert_eq!(paths, vec![vec![1, 3, 4], vec![1, 2, 4]]);
    }

    #[test]
    fn test_all_paths_none() {
        let graph = graph_with(&[1, 2], &[(2, 1, "C1")]);
        assert!(graph.find_all_paths(1, 2).is_empty());
    }

    #[test]
    fn test_longest_path_over_dag() {
        let graph = graph_with(
            &[1, 2, 3, 4],
            &[(1, 2, "C1"), (2, 3, "C1"), (1, 3, "C1"), (3, 4, "C1")],
        );
        let result = graph.find_longest_path().unwrap();
        assert_eq!(result.path, vec![1, 2, 3, 4]);
        assert_eq!(result.distance, 3);
        assert_eq!(result.start, 1);
        assert_eq!(result.end, 4);
    }

    #[test]
    fn test_longest_path_empty_graph() {
        let graph = CourseGraph::new();
        assert!(graph.find_longest_path().is_none());
    }

    #[test]
    fn test_longest_path_first_found_wins_ties() {
        // Two disjoint equal-weight chains; the earlier-inserted pair wins
        let graph = graph_with(&[1, 2, 3, 4], &[(1, 2, "C2"), (3, 4, "C2")]);
        let result = graph.find_longest_path().unwrap();
        assert_eq!(result.path, vec![1, 2]);
        assert_eq!(result.distance, 2);
    }

    #[test]
    fn test_path_distance_skips_missing_segments() {
        let graph = graph_with(&[1, 2, 3], &[(1, 2, "C2")]);
        // No 2->3 edge: that segment contributes 0
        assert_eq!(graph.path_distance(&[1, 2, 3]), 2);
        assert_eq!(graph.path_distance(&[1]), 0);
        assert_eq!(graph.path_distance(&[]), 0);
    }

    #[test]
    fn test_self_loop_is_inert_in_paths() {
        let mut graph = graph_with(&[1, 2], &[(1, 2, "C1")]);
        assert!(graph.add_edge(1, 1, "C5"));
        let paths = graph.find_all_paths(1, 2);
        assert_eq!(paths, vec![vec![1, 2]]);
        let longest = graph.find_longest_path().unwrap();
        assert_eq!(longest.path, vec![1, 2]);
    }

    #[test]
    fn test_color_path_rejects_trivial_paths() {
        let mut graph = graph_with(&[1, 2], &[(1, 2, "C1")]);
        assert!(!graph.color_path(&[], "#00aa00", "#aaffaa"));
        assert!(!graph.color_path(&[1], "#00aa00", "#aaffaa"));
        assert!(graph.color_path(&[1, 2], "#00aa00", "#aaffaa"));
    }

    #[test]
    fn test_highlight_paths_styles_both_routes() {
        let mut graph = graph_with(
            &[1, 2, 3],
            &[(1, 2, "C1"), (2, 3, "C2"), (1, 3, "C5")],
        );
        let result = graph.highlight_paths(1, 3);

        let shortest = result.shortest.unwrap();
        assert_eq!(shortest.path, vec![1, 2, 3]);
        // Longest is the direct C5 edge
        let longest = result.longest.unwrap();
        assert_eq!(longest.distance, 5);

        // Longest coloring is applied after shortest, so shared nodes end red
        let style = graph.node_style(1).unwrap();
        assert_eq!(style.background.as_deref(), Some(LONGEST_NODE_COLOR));

        let direct = graph.edge_between(1, 3).unwrap().id;
        let styled = graph.edge_style(direct).unwrap();
        assert_eq!(styled.color.as_deref(), Some(LONGEST_EDGE_COLOR));
        assert_eq!(styled.width, Some(HIGHLIGHT_WIDTH));
    }

    #[test]
    fn test_reset_styles_clears_highlights() {
        let mut graph = graph_with(&[1, 2], &[(1, 2, "C1")]);
        graph.highlight_paths(1, 2);
        assert!(graph.node_style(1).is_some());
        graph.reset_styles();
        assert!(graph.node_style(1).is_none());
        assert!(graph.edge_style(graph.edge_between(1, 2).unwrap().id).is_none());
    }
}
