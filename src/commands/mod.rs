// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations
//!
//! Every command follows the same flow: resolve the data directory, load
//! `graph.json` into a [`CourseGraph`], mutate or query it, and save when
//! the store reports a change. Persistence lives entirely in this layer;
//! the core only produces and accepts snapshot payloads.

pub mod completions;
pub mod edge;
pub mod export;
pub mod import;
pub mod info;
pub mod matrix;
pub mod node;
pub mod path;

use crate::config::Config;
use crate::graph::CourseGraph;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the persisted graph snapshot inside the data directory
pub const GRAPH_FILE: &str = "graph.json";

/// Resolve the data directory: CLI/env override first, then the
/// configured platform data dir.
pub fn resolve_data_dir(cli_override: Option<PathBuf>) -> PathBuf {
    match cli_override {
        Some(dir) => dir,
        None => Config::default().data_dir,
    }
}

/// Load the graph from `graph.json`, or start empty if none exists yet
pub fn load_graph(data_dir: &Path) -> Result<CourseGraph> {
    let graph_path = data_dir.join(GRAPH_FILE);
    let mut graph = CourseGraph::new();

    if graph_path.exists() {
        let payload = fs::read_to_string(&graph_path)
            .with_context(|| format!("Failed to read {}", graph_path.display()))?;
        graph
            .import_graph(&payload)
            .with_context(|| format!("Failed to parse {}", graph_path.display()))?;
        debug!(nodes = graph.node_count(), edges = graph.edge_count(), "graph loaded");
    }

    // Loading is not a user edit
    graph.acknowledge_changes();
    Ok(graph)
}

/// Persist the graph to `graph.json` if it has changed since loading
pub fn save_graph(data_dir: &Path, graph: &mut CourseGraph) -> Result<()> {
    if !graph.is_changed() {
        return Ok(());
    }
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create directory {}", data_dir.display()))?;
    let graph_path = data_dir.join(GRAPH_FILE);
    fs::write(&graph_path, graph.export_graph())
        .with_context(|| format!("Failed to write {}", graph_path.display()))?;
    graph.acknowledge_changes();
    debug!(path = %graph_path.display(), "graph saved");
    Ok(())
}
