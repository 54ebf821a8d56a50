// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Coursegraph library - course prerequisite graph editor and path analyzer
//!
//! This crate provides the core functionality for building, editing, and
//! analyzing directed, weighted prerequisite graphs: CRUD over nodes and
//! edges, shortest/longest path search, and JSON snapshot export/import.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod graph;
pub mod matrix;
pub mod paths;
pub mod snapshot;
pub mod weight;

/// Core data types for the prerequisite graph
pub mod types {
    use serde::{Deserialize, Serialize};

    // =========================================================================
    // Domain Records
    // =========================================================================

    /// A course node in the prerequisite graph
    #[derive(Debug, Clone, PartialEq)]
    pub struct Node {
        /// Unique numeric identifier
        pub id: i64,
        /// Free-text course name, independent of the id
        pub name: String,
        /// X coordinate (opaque to the analysis engine)
        pub x: f64,
        /// Y coordinate (opaque to the analysis engine)
        pub y: f64,
    }

    impl Node {
        /// Composite display label: `"<id> - <name>"`
        #[must_use]
        pub fn label(&self) -> String {
            format!("{} - {}", self.id, self.name)
        }

        /// Split a composite display label back into its free-text name.
        ///
        /// Labels without the `" - "` separator are taken whole, so snapshots
        /// written by other tools still import.
        #[must_use]
        pub fn name_from_label(label: &str) -> String {
            match label.split_once(" - ") {
                Some((_, name)) => name.to_string(),
                None => label.to_string(),
            }
        }
    }

    /// A directed, weight-labelled edge between two existing nodes
    #[derive(Debug, Clone, PartialEq)]
    pub struct Edge {
        /// Store-assigned unique identifier
        pub id: i64,
        /// Source node id
        pub from: i64,
        /// Target node id
        pub to: i64,
        /// Weight-bearing display label, e.g. `"C3"`
        pub label: String,
    }

    // =========================================================================
    // Presentation Overlay
    // =========================================================================

    /// Highlight colors for a node, set only by path highlighting
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct NodeStyle {
        /// Fill color
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub background: Option<String>,
        /// Border color
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub border: Option<String>,
    }

    /// Highlight colors and width for an edge
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct EdgeStyle {
        /// Stroke color
        pub color: Option<String>,
        /// Color when selected
        pub highlight: Option<String>,
        /// Stroke width
        pub width: Option<f64>,
    }

    // =========================================================================
    // Path Results
    // =========================================================================

    /// Result of a shortest-path query
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ShortestPath {
        /// Node ids from start to end inclusive
        pub path: Vec<i64>,
        /// Total weight along the path
        pub distance: i64,
    }

    /// Result of the global longest-path search
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LongestPath {
        /// Node ids from start to end inclusive
        pub path: Vec<i64>,
        /// Total weight along the path
        pub distance: i64,
        /// Start node of the winning pair
        pub start: i64,
        /// End node of the winning pair
        pub end: i64,
    }

    /// Combined result of a highlight pass
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HighlightResult {
        /// Shortest path between the requested pair, if any
        pub shortest: Option<ShortestPath>,
        /// Globally longest simple path, if any
        pub longest: Option<LongestPath>,
    }

    // =========================================================================
    // Snapshot Wire Records
    // =========================================================================

    /// Edge color block in the snapshot wire format
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EdgeColorRecord {
        /// Stroke color
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub color: Option<String>,
        /// Color when selected
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub highlight: Option<String>,
    }

    /// One node as it appears in a full graph snapshot
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct NodeRecord {
        /// Node id
        pub id: i64,
        /// Composite display label, `"<id> - <name>"`
        pub label: String,
        /// X coordinate
        #[serde(default)]
        pub x: f64,
        /// Y coordinate
        #[serde(default)]
        pub y: f64,
        /// Highlight colors, if the node was styled at export time
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub color: Option<NodeStyle>,
    }

    /// One edge as it appears in a full graph snapshot
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct EdgeRecord {
        /// Edge id
        pub id: i64,
        /// Source node id
        pub from: i64,
        /// Target node id
        pub to: i64,
        /// Weight-bearing label
        #[serde(default)]
        pub label: String,
        /// Arrow hint, `"to"` for directed edges
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub arrows: Option<String>,
        /// Highlight colors, if the edge was styled at export time
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub color: Option<EdgeColorRecord>,
        /// Stroke width, if the edge was styled at export time
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub width: Option<f64>,
    }

    /// The full graph snapshot: ordered node and edge collections
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct GraphSnapshot {
        /// All nodes, in store order
        #[serde(default)]
        pub nodes: Vec<NodeRecord>,
        /// All edges, in store order
        #[serde(default)]
        pub edges: Vec<EdgeRecord>,
    }

    /// One entry of a position-only snapshot
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct NodePosition {
        /// Node id
        pub id: i64,
        /// X coordinate
        pub x: f64,
        /// Y coordinate
        pub y: f64,
        /// Composite display label at export time
        #[serde(default)]
        pub label: String,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::graph::CourseGraph;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
