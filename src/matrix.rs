// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Adjacency and incidence matrix views of the graph
//!
//! Pure data: label grids in store order, ready for whatever front end
//! wants to draw them. The CLI prints them as plain-text tables.

use crate::graph::CourseGraph;

/// A labelled matrix view: header row, row labels, and cell contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    /// Column headers, left to right
    pub columns: Vec<String>,
    /// Row headers, top to bottom
    pub rows: Vec<String>,
    /// Cell contents, `cells[row][col]`
    pub cells: Vec<Vec<String>>,
}

impl CourseGraph {
    /// Adjacency matrix: one row and column per node, cell holding the
    /// connecting edge's label or `"0"` when the pair has no edge.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Matrix {
        let labels: Vec<String> = self.nodes().iter().map(|n| n.label()).collect();
        let cells = self
            .nodes()
            .iter()
            .map(|from| {
                self.nodes()
                    .iter()
                    .map(|to| match self.edge_between(from.id, to.id) {
                        Some(edge) => edge.label.clone(),
                        None => "0".to_string(),
                    })
                    .collect()
            })
            .collect();

        Matrix {
            columns: labels.clone(),
            rows: labels,
            cells,
        }
    }

    /// Incidence matrix: one row per node, one column per edge
    /// (`"<from>→<to>"`), cell `1, <label>` when the node is the edge's
    /// source, `-1, <label>` when it is the target, `"0"` otherwise.
    #[must_use]
    pub fn incidence_matrix(&self) -> Matrix {
        let columns = self
            .edges()
            .iter()
            .map(|e| format!("{}→{}", e.from, e.to))
            .collect();
        let rows: Vec<String> = self.nodes().iter().map(|n| n.label()).collect();
        let cells = self
            .nodes()
            .iter()
            .map(|node| {
                self.edges()
                    .iter()
                    .map(|edge| {
                        if edge.from == node.id {
                            format!("1, {}", edge.label)
                        } else if edge.to == node.id {
                            format!("-1, {}", edge.label)
                        } else {
                            "0".to_string()
                        }
                    })
                    .collect()
            })
            .collect();

        Matrix { columns, rows, cells }
    }
}
