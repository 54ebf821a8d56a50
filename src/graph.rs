// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph store and queries for the prerequisite graph

use crate::types::{Edge, EdgeStyle, Node, NodeStyle};
use std::collections::HashMap;

/// The prerequisite graph: canonical nodes and directed edges.
///
/// Nodes and edges live in insertion-ordered lists; every query and
/// algorithm in the crate enumerates them in that order, which keeps
/// tie-breaks deterministic. Mutations report failure with `false` and
/// never panic - callers are expected to check the return.
pub struct CourseGraph {
    /// All nodes, in insertion order
    nodes: Vec<Node>,
    /// All edges, in insertion order
    edges: Vec<Edge>,
    /// Next edge id to hand out
    next_edge_id: i64,
    /// Set by every successful mutation, cleared by `acknowledge_changes`
    changed: bool,
    /// Highlight overlay for nodes, keyed by node id
    node_styles: HashMap<i64, NodeStyle>,
    /// Highlight overlay for edges, keyed by edge id
    edge_styles: HashMap<i64, EdgeStyle>,
}

impl Default for CourseGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            next_edge_id: 1,
            changed: false,
            node_styles: HashMap::new(),
            edge_styles: HashMap::new(),
        }
    }

    // =========================================================================
    // Node CRUD
    // =========================================================================

    /// Add a node with an explicit id.
    ///
    /// Returns `false` if the id is already taken; the store is unchanged.
    pub fn add_node(&mut self, id: i64, name: &str, x: f64, y: f64) -> bool {
        if self.contains_node(id) {
            return false;
        }
        self.nodes.push(Node {
            id,
            name: name.to_string(),
            x,
            y,
        });
        self.changed = true;
        true
    }

    /// Add a node at a position, assigning the next free id.
    ///
    /// The id is `max(existing ids) + 1`, or `1` for an empty graph, and the
    /// node gets a default name derived from it. Returns the assigned id.
    pub fn add_node_at(&mut self, x: f64, y: f64) -> i64 {
        let id = self.next_node_id();
        let name = format!("Node {id}");
        self.add_node(id, &name, x, y);
        id
    }

    /// The id the next auto-assigned node would receive
    #[must_use]
    pub fn next_node_id(&self) -> i64 {
        self.nodes.iter().map(|n| n.id).max().map_or(1, |m| m + 1)
    }

    /// Rename an existing node, preserving its position and style.
    ///
    /// Returns `false` if the id is absent.
    pub fn rename_node(&mut self, id: i64, name: &str) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.name = name.to_string();
                self.changed = true;
                true
            }
            None => false,
        }
    }

    /// Delete a node and every edge incident to it, in both directions.
    ///
    /// Returns `false` if the id is absent; a repeated delete is `false`.
    pub fn delete_node(&mut self, id: i64) -> bool {
        if !self.contains_node(id) {
            return false;
        }
        for edge in self.edges.iter().filter(|e| e.from == id || e.to == id) {
            self.edge_styles.remove(&edge.id);
        }
        self.edges.retain(|e| e.from != id && e.to != id);
        self.nodes.retain(|n| n.id != id);
        self.node_styles.remove(&id);
        self.changed = true;
        true
    }

    // =========================================================================
    // Edge CRUD
    // =========================================================================

    /// Add a directed edge with a weight-bearing label.
    ///
    /// Returns `false` if either endpoint is missing or the ordered pair
    /// already has an edge. `(a,b)` and `(b,a)` are distinct; self-loops
    /// are permitted.
    pub fn add_edge(&mut self, from: i64, to: i64, label: &str) -> bool {
        if !self.contains_node(from) || !self.contains_node(to) {
            return false;
        }
        if self.edge_between(from, to).is_some() {
            return false;
        }
        let id = self.next_edge_id;
        self.next_edge_id += 1;
        self.edges.push(Edge {
            id,
            from,
            to,
            label: label.to_string(),
        });
        self.changed = true;
        true
    }

    /// Update the label of the edge `(from, to)`.
    ///
    /// Returns `false` if no such edge exists.
    pub fn rename_edge(&mut self, from: i64, to: i64, label: &str) -> bool {
        match self.edges.iter_mut().find(|e| e.from == from && e.to == to) {
            Some(edge) => {
                edge.label = label.to_string();
                self.changed = true;
                true
            }
            None => false,
        }
    }

    /// Delete the edge `(from, to)`. Returns `false` if absent.
    pub fn delete_edge(&mut self, from: i64, to: i64) -> bool {
        match self.edge_between(from, to).map(|e| e.id) {
            Some(id) => self.delete_edge_by_id(id),
            None => false,
        }
    }

    /// Delete an edge by its id. Returns `false` if absent.
    pub fn delete_edge_by_id(&mut self, edge_id: i64) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != edge_id);
        if self.edges.len() == before {
            return false;
        }
        self.edge_styles.remove(&edge_id);
        self.changed = true;
        true
    }

    /// Remove all nodes, edges, and styles unconditionally.
    ///
    /// Only used as the first step of a snapshot import.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.node_styles.clear();
        self.edge_styles.clear();
        self.next_edge_id = 1;
    }

    // =========================================================================
    // Change Flag
    // =========================================================================

    /// Has the graph been mutated since the last acknowledgement?
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Clear the change flag after the caller has handled the change
    pub fn acknowledge_changes(&mut self) {
        self.changed = false;
    }

    pub(crate) fn mark_changed(&mut self) {
        self.changed = true;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get a node by id
    #[must_use]
    pub fn node(&self, id: i64) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Does a node with this id exist?
    #[must_use]
    pub fn contains_node(&self, id: i64) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// All nodes, in insertion order
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get an edge by its id
    #[must_use]
    pub fn edge(&self, edge_id: i64) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == edge_id)
    }

    /// The first edge `(from, to)`, if one exists
    #[must_use]
    pub fn edge_between(&self, from: i64, to: i64) -> Option<&Edge> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }

    /// Node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Is the graph empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Composite display label for a node, `"<id> - <name>"`
    #[must_use]
    pub fn node_label(&self, id: i64) -> Option<String> {
        self.node(id).map(Node::label)
    }

    /// Free-text name of a node
    #[must_use]
    pub fn node_name(&self, id: i64) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Prerequisites: `from` endpoints of edges pointing at this node,
    /// in edge insertion order. Empty for unknown ids.
    #[must_use]
    pub fn predecessors(&self, id: i64) -> Vec<i64> {
        self.edges
            .iter()
            .filter(|e| e.to == id)
            .map(|e| e.from)
            .collect()
    }

    /// Postrequisites: `to` endpoints of edges leaving this node,
    /// in edge insertion order. Empty for unknown ids.
    #[must_use]
    pub fn successors(&self, id: i64) -> Vec<i64> {
        self.edges
            .iter()
            .filter(|e| e.from == id)
            .map(|e| e.to)
            .collect()
    }

    /// Edges leaving a node, in insertion order
    #[must_use]
    pub fn edges_from(&self, id: i64) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.from == id).collect()
    }

    // =========================================================================
    // Presentation Overlay
    // =========================================================================

    /// Highlight style for a node, if set
    #[must_use]
    pub fn node_style(&self, id: i64) -> Option<&NodeStyle> {
        self.node_styles.get(&id)
    }

    /// Highlight style for an edge, if set
    #[must_use]
    pub fn edge_style(&self, edge_id: i64) -> Option<&EdgeStyle> {
        self.edge_styles.get(&edge_id)
    }

    /// Set the highlight style of an existing node. Returns `false` if the
    /// node is absent. Does not touch the change flag; styles are
    /// presentation state, not graph state.
    pub fn set_node_style(&mut self, id: i64, style: NodeStyle) -> bool {
        if !self.contains_node(id) {
            return false;
        }
        self.node_styles.insert(id, style);
        true
    }

    /// Set the highlight style of an existing edge. Returns `false` if the
    /// edge is absent.
    pub fn set_edge_style(&mut self, edge_id: i64, style: EdgeStyle) -> bool {
        if self.edge(edge_id).is_none() {
            return false;
        }
        self.edge_styles.insert(edge_id, style);
        true
    }

    /// Drop every highlight style on nodes and edges
    pub fn reset_styles(&mut self) {
        self.node_styles.clear();
        self.edge_styles.clear();
    }

    // =========================================================================
    // Snapshot Support
    // =========================================================================

    /// Insert an edge carrying an id taken from a snapshot.
    ///
    /// Same endpoint and duplicate-pair checks as `add_edge`, plus an
    /// edge-id uniqueness check; the edge-id counter is advanced past the
    /// imported id.
    pub(crate) fn insert_snapshot_edge(&mut self, edge: Edge) -> bool {
        if !self.contains_node(edge.from) || !self.contains_node(edge.to) {
            return false;
        }
        if self.edge_between(edge.from, edge.to).is_some() {
            return false;
        }
        if self.edge(edge.id).is_some() {
            return false;
        }
        if edge.id >= self.next_edge_id {
            self.next_edge_id = edge.id + 1;
        }
        self.edges.push(edge);
        true
    }

    /// Overwrite the position of an existing node. Returns `false` if absent.
    pub fn set_position(&mut self, id: i64, x: f64, y: f64) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.x = x;
                node.y = y;
                true
            }
            None => false,
        }
    }
}
