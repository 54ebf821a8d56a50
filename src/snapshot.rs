// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Snapshot export/import for the prerequisite graph
//!
//! Two portable JSON shapes: the full graph (`{ "nodes": [...], "edges":
//! [...] }`) and a position-only list. Both are opaque textual payloads at
//! the boundary; where they are stored is the caller's concern. Imports
//! parse before they touch the store, so malformed input never leaves a
//! half-cleared graph behind.

use crate::graph::CourseGraph;
use crate::types::{
    Edge, EdgeColorRecord, EdgeRecord, EdgeStyle, GraphSnapshot, Node, NodePosition, NodeRecord,
};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by snapshot import
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The payload is not valid JSON of the expected shape
    #[error("malformed snapshot payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl CourseGraph {
    /// Capture the full graph as a structured snapshot.
    ///
    /// Overlay styles are merged into the records here, so the wire format
    /// matches what renderers expect while the domain records stay clean.
    #[must_use]
    pub fn to_snapshot(&self) -> GraphSnapshot {
        let nodes = self
            .nodes()
            .iter()
            .map(|node| NodeRecord {
                id: node.id,
                label: node.label(),
                x: node.x,
                y: node.y,
                color: self.node_style(node.id).cloned(),
            })
            .collect();

        let edges = self
            .edges()
            .iter()
            .map(|edge| {
                let style = self.edge_style(edge.id);
                EdgeRecord {
                    id: edge.id,
                    from: edge.from,
                    to: edge.to,
                    label: edge.label.clone(),
                    arrows: Some("to".to_string()),
                    color: style.map(|s| EdgeColorRecord {
                        color: s.color.clone(),
                        highlight: s.highlight.clone(),
                    }),
                    width: style.and_then(|s| s.width),
                }
            })
            .collect();

        GraphSnapshot { nodes, edges }
    }

    /// Replace the whole graph with a snapshot's contents.
    ///
    /// Clears the store, bulk-inserts nodes then edges, and marks the store
    /// changed. Records that violate invariants (duplicate ids, dangling
    /// endpoints, duplicate pairs) are skipped with a debug log rather than
    /// aborting the import.
    pub fn apply_snapshot(&mut self, snapshot: &GraphSnapshot) {
        self.clear();

        for record in &snapshot.nodes {
            let name = Node::name_from_label(&record.label);
            if !self.add_node(record.id, &name, record.x, record.y) {
                debug!(id = record.id, "skipping duplicate node in snapshot");
                continue;
            }
            if let Some(style) = &record.color {
                self.set_node_style(record.id, style.clone());
            }
        }

        for record in &snapshot.edges {
            let edge = Edge {
                id: record.id,
                from: record.from,
                to: record.to,
                label: record.label.clone(),
            };
            if !self.insert_snapshot_edge(edge) {
                debug!(id = record.id, from = record.from, to = record.to,
                       "skipping invalid edge in snapshot");
                continue;
            }
            if record.color.is_some() || record.width.is_some() {
                let color = record.color.clone().unwrap_or_default();
                self.set_edge_style(
                    record.id,
                    EdgeStyle {
                        color: color.color,
                        highlight: color.highlight,
                        width: record.width,
                    },
                );
            }
        }

        self.mark_changed();
    }

    /// Serialize the full graph to its JSON wire form
    #[must_use]
    pub fn export_graph(&self) -> String {
        // GraphSnapshot serialization cannot fail: no maps with non-string
        // keys, no non-finite floats introduced by the store
        serde_json::to_string(&self.to_snapshot()).unwrap_or_else(|_| String::from("{}"))
    }

    /// Parse a JSON payload and replace the graph with it.
    ///
    /// On a parse error the store is left exactly as it was.
    pub fn import_graph(&mut self, payload: &str) -> Result<(), SnapshotError> {
        let snapshot: GraphSnapshot = serde_json::from_str(payload)?;
        self.apply_snapshot(&snapshot);
        Ok(())
    }

    /// Serialize only node positions, a lighter layout-only snapshot
    #[must_use]
    pub fn export_positions(&self) -> String {
        let positions: Vec<NodePosition> = self
            .nodes()
            .iter()
            .map(|node| NodePosition {
                id: node.id,
                x: node.x,
                y: node.y,
                label: node.label(),
            })
            .collect();
        serde_json::to_string(&positions).unwrap_or_else(|_| String::from("[]"))
    }

    /// Update node positions from a position-only payload.
    ///
    /// Ids not present in the graph are silently skipped; only a malformed
    /// payload is an error.
    pub fn import_positions(&mut self, payload: &str) -> Result<(), SnapshotError> {
        let positions: Vec<NodePosition> = serde_json::from_str(payload)?;
        for pos in &positions {
            if !self.set_position(pos.id, pos.x, pos.y) {
                debug!(id = pos.id, "position entry for unknown node skipped");
            }
        }
        Ok(())
    }
}
